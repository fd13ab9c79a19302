pub mod render;

use crate::checker::CheckResult;

pub const EXCELLENT_THRESHOLD: u32 = 90;
pub const GOOD_THRESHOLD: u32 = 70;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    EXCELLENT,
    GOOD,
    NEEDS_WORK,
}

impl Tier {
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= EXCELLENT_THRESHOLD {
            Tier::EXCELLENT
        } else if percentage >= GOOD_THRESHOLD {
            Tier::GOOD
        } else {
            Tier::NEEDS_WORK
        }
    }

    pub fn remark(&self) -> &'static str {
        match self {
            Tier::EXCELLENT => "🎉 Excellent! Your portfolio website looks great!",
            Tier::GOOD => "👍 Good job! Consider addressing the failed tests for improvement.",
            Tier::NEEDS_WORK => "🔧 Your website needs some work. Please address the failed tests.",
        }
    }
}

/// round(100 * passed / total), half-up; 0 when nothing ran.
pub fn success_percentage(passed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * passed + total) / (2 * total)) as u32
}

/// Derived view over a run's results. Holds nothing the results don't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub percentage: u32,
    pub tier: Tier,
    pub failures: Vec<CheckResult>,
}

impl Report {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a CheckResult>,
    {
        let mut passed = 0;
        let mut failures = Vec::new();
        for r in results {
            if r.passed {
                passed += 1;
            } else {
                failures.push(r.clone());
            }
        }
        let failed = failures.len();
        let total = passed + failed;
        let percentage = success_percentage(passed, total);
        Report {
            total,
            passed,
            failed,
            percentage,
            tier: Tier::for_percentage(percentage),
            failures,
        }
    }
}
