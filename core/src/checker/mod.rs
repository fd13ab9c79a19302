pub mod heuristics;
pub mod run;

use crate::assets::{load_assets, AssetSet, AssetSpec};
use crate::checklist::{checklist_v1, Category, Checklist, ChecklistCheck, Predicate};
use crate::error::CoreResult;
use heuristics::Heuristics;
use regex::Regex;
use std::path::Path;

pub use run::{CheckResult, CheckRun, Note, NoteLevel, RunEntry};

/// Outcome of evaluating one predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(Option<String>),
    Skip(NoteLevel, String),
}

struct CompiledCheck {
    check: ChecklistCheck,
    pattern: Option<Regex>,
}

struct CompiledCategory {
    category: Category,
    requires: Vec<String>,
    unavailable_description: String,
    checks: Vec<CompiledCheck>,
}

pub struct ConformanceChecker {
    checklist_version: String,
    assets: Vec<AssetSpec>,
    categories: Vec<CompiledCategory>,
    heuristics: Heuristics,
}

impl ConformanceChecker {
    pub fn new_v1() -> CoreResult<Self> {
        Self::from_checklist(checklist_v1()?)
    }

    pub fn from_checklist(checklist: Checklist) -> CoreResult<Self> {
        checklist.validate()?;
        let mut categories = Vec::with_capacity(checklist.categories.len());
        for cat in checklist.categories {
            let mut checks = Vec::with_capacity(cat.checks.len());
            for check in cat.checks {
                let pattern = match &check.predicate {
                    Predicate::Matches { pattern, .. } => Some(Regex::new(pattern)?),
                    _ => None,
                };
                checks.push(CompiledCheck { check, pattern });
            }
            categories.push(CompiledCategory {
                category: cat.category,
                requires: cat.requires,
                unavailable_description: cat.unavailable_description,
                checks,
            });
        }
        Ok(Self {
            checklist_version: checklist.checklist_version,
            assets: checklist.assets,
            categories,
            heuristics: Heuristics::new()?,
        })
    }

    pub fn checklist_version(&self) -> &str {
        &self.checklist_version
    }

    /// Load every declared asset under `root`, then run all categories.
    pub fn run(&self, root: &Path) -> CheckRun {
        tracing::info!(root = %root.display(), checklist = %self.checklist_version, "starting checklist run");
        let assets = load_assets(root, &self.assets);
        self.evaluate(&assets)
    }

    /// Runs every category in order against already-loaded assets. Never fails.
    pub fn evaluate(&self, assets: &AssetSet) -> CheckRun {
        let mut entries = Vec::new();

        for cat in &self.categories {
            tracing::debug!(category = cat.category.as_str(), "category started");
            entries.push(RunEntry::CategoryStarted(cat.category));

            if let Some(err) = assets.first_unavailable(&cat.requires) {
                tracing::debug!(category = cat.category.as_str(), error = %err, "category assets unavailable");
                entries.push(RunEntry::Checked(CheckResult {
                    check_id: format!("{}.ASSETS_AVAILABLE", cat.category.as_str()),
                    category: cat.category,
                    description: cat.unavailable_description.clone(),
                    passed: false,
                    error_detail: Some(err.to_string()),
                }));
                continue;
            }

            for compiled in &cat.checks {
                let check = &compiled.check;
                match self.evaluate_check(compiled, assets) {
                    Verdict::Pass => entries.push(RunEntry::Checked(CheckResult {
                        check_id: check.check_id.clone(),
                        category: cat.category,
                        description: check.description.clone(),
                        passed: true,
                        error_detail: None,
                    })),
                    Verdict::Fail(detail) => {
                        tracing::debug!(check_id = %check.check_id, detail = ?detail, "check failed");
                        entries.push(RunEntry::Checked(CheckResult {
                            check_id: check.check_id.clone(),
                            category: cat.category,
                            description: check.description.clone(),
                            passed: false,
                            error_detail: detail,
                        }));
                    }
                    Verdict::Skip(level, message) => entries.push(RunEntry::Noted(Note {
                        check_id: check.check_id.clone(),
                        level,
                        message,
                    })),
                }
            }
        }

        let run = CheckRun {
            checklist_version: self.checklist_version.clone(),
            entries,
        };
        let report = run.report();
        tracing::info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            percentage = report.percentage,
            "checklist run complete"
        );
        run
    }

    fn evaluate_check(&self, compiled: &CompiledCheck, assets: &AssetSet) -> Verdict {
        let predicate = &compiled.check.predicate;
        let name = predicate.asset();

        match (predicate, assets.get(name)) {
            (Predicate::AssetExists { .. } | Predicate::RecommendedExists { .. }, Some(a))
                if a.exists =>
            {
                return Verdict::Pass
            }
            (Predicate::RecommendedExists { .. }, Some(a)) => {
                return Verdict::Skip(
                    NoteLevel::WARNING,
                    format!("Recommended file missing: {}", a.path),
                )
            }
            _ => {}
        }

        let text = match assets.text(name) {
            Ok(t) => t,
            Err(e) => return Verdict::Fail(Some(e.to_string())),
        };

        match predicate {
            Predicate::StartsWith {
                prefix,
                ignore_case,
                ..
            } => {
                let trimmed = text.trim();
                verdict(if *ignore_case {
                    trimmed.to_lowercase().starts_with(&prefix.to_lowercase())
                } else {
                    trimmed.starts_with(prefix.as_str())
                })
            }
            Predicate::Contains {
                needle,
                ignore_case,
                ..
            } => verdict(contains(text, needle, *ignore_case)),
            Predicate::ContainsAll {
                needles,
                ignore_case,
                ..
            } => {
                let missing: Vec<&str> = needles
                    .iter()
                    .filter(|n| !contains(text, n, *ignore_case))
                    .map(|n| n.as_str())
                    .collect();
                if missing.is_empty() {
                    Verdict::Pass
                } else {
                    Verdict::Fail(Some(format!("missing: {}", missing.join(", "))))
                }
            }
            Predicate::ContainsAny {
                needles,
                ignore_case,
                ..
            } => verdict(needles.iter().any(|n| contains(text, n, *ignore_case))),
            Predicate::NotBlank { .. } => verdict(!text.trim().is_empty()),
            Predicate::Matches { .. } => match &compiled.pattern {
                Some(re) => verdict(re.is_match(text)),
                None => Verdict::Fail(Some("pattern not compiled".to_string())),
            },
            Predicate::TagBalance { .. } => {
                let counts = self.heuristics.tag_counts(text);
                if counts.balanced() {
                    Verdict::Pass
                } else {
                    Verdict::Fail(Some(format!(
                        "{} open tags, {} close tags",
                        counts.open, counts.close
                    )))
                }
            }
            Predicate::ImagesHaveAlt { .. } => match self.heuristics.image_alt_coverage(text) {
                None => Verdict::Skip(
                    NoteLevel::INFO,
                    "No images found to test for alt attributes".to_string(),
                ),
                Some(cov) if cov.complete() => Verdict::Pass,
                Some(cov) => Verdict::Fail(Some(format!(
                    "{} of {} images missing alt",
                    cov.total - cov.matching,
                    cov.total
                ))),
            },
            Predicate::LinksDescriptive { .. } => match self.heuristics.link_text_coverage(text) {
                None => Verdict::Skip(
                    NoteLevel::INFO,
                    "No links found to test for descriptive text".to_string(),
                ),
                Some(cov) if cov.complete() => Verdict::Pass,
                Some(cov) => Verdict::Fail(Some(format!(
                    "{} of {} links lack descriptive text",
                    cov.total - cov.matching,
                    cov.total
                ))),
            },
            // present assets were accepted above
            Predicate::AssetExists { .. } | Predicate::RecommendedExists { .. } => Verdict::Pass,
        }
    }
}

fn verdict(ok: bool) -> Verdict {
    if ok {
        Verdict::Pass
    } else {
        Verdict::Fail(None)
    }
}

fn contains(text: &str, needle: &str, ignore_case: bool) -> bool {
    if ignore_case {
        text.to_lowercase().contains(&needle.to_lowercase())
    } else {
        text.contains(needle)
    }
}
