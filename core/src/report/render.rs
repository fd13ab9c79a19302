use crate::checker::{CheckRun, NoteLevel, RunEntry};

use super::Report;

pub const BANNER: &str = "🚀 Starting Portfolio Website Test Suite";

pub const TIPS: [&str; 6] = [
    "Ensure all files are properly linked",
    "Add responsive design with media queries",
    "Include proper meta tags for SEO",
    "Use semantic HTML elements",
    "Add alt attributes to images",
    "Test your website on different devices",
];

fn rule() -> String {
    "=".repeat(50)
}

/// Per-check lines grouped under category headings, in run order.
pub fn render_progress(run: &CheckRun) -> Vec<String> {
    let mut out = Vec::new();
    for entry in &run.entries {
        match entry {
            RunEntry::CategoryStarted(category) => {
                out.push("".to_string());
                out.push(category.heading().to_string());
            }
            RunEntry::Checked(r) => {
                let status = if r.passed { "✅ PASS" } else { "❌ FAIL" };
                out.push(format!("   {}: {}", status, r.description));
                if let (false, Some(detail)) = (r.passed, &r.error_detail) {
                    out.push(format!("      Error: {}", detail));
                }
            }
            RunEntry::Noted(note) => {
                let glyph = match note.level {
                    NoteLevel::WARNING => "⚠️ ",
                    NoteLevel::INFO => "ℹ️ ",
                };
                out.push(format!("   {} {}", glyph, note.message));
            }
        }
    }
    out
}

pub fn render_summary(report: &Report) -> Vec<String> {
    let mut out = Vec::new();
    out.push("".to_string());
    out.push(rule());
    out.push("📊 TEST SUMMARY".to_string());
    out.push(rule());
    out.push(format!("Total Tests: {}", report.total));
    out.push(format!("Passed: {}", report.passed));
    out.push(format!("Failed: {}", report.failed));
    out.push(format!("Success Rate: {}%", report.percentage));
    out.push("".to_string());
    out.push(report.tier.remark().to_string());

    if report.failed > 0 {
        out.push("".to_string());
        out.push("❌ Failed Tests:".to_string());
        for f in &report.failures {
            out.push(format!("   • {}", f.description));
            if let Some(detail) = &f.error_detail {
                out.push(format!("     Error: {}", detail));
            }
        }
    }

    out.push("".to_string());
    out.push("💡 Tips for improvement:".to_string());
    for tip in TIPS {
        out.push(format!("   • {}", tip));
    }
    out
}

pub fn render_text(run: &CheckRun) -> String {
    let mut out = vec![BANNER.to_string(), rule()];
    out.extend(render_progress(run));
    out.extend(render_summary(&run.report()));
    out.push("".to_string());
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{CheckResult, Note};
    use crate::checklist::Category;

    fn sample_run() -> CheckRun {
        CheckRun {
            checklist_version: "t".to_string(),
            entries: vec![
                RunEntry::CategoryStarted(Category::FILE_STRUCTURE),
                RunEntry::Checked(CheckResult {
                    check_id: "F.1".to_string(),
                    category: Category::FILE_STRUCTURE,
                    description: "File exists: index.html".to_string(),
                    passed: true,
                    error_detail: None,
                }),
                RunEntry::Noted(Note {
                    check_id: "F.2".to_string(),
                    level: NoteLevel::WARNING,
                    message: "Recommended file missing: README.md".to_string(),
                }),
                RunEntry::CategoryStarted(Category::STYLESHEET_CONTENT),
                RunEntry::Checked(CheckResult {
                    check_id: "STYLESHEET_CONTENT.ASSETS_AVAILABLE".to_string(),
                    category: Category::STYLESHEET_CONTENT,
                    description: "CSS file readable".to_string(),
                    passed: false,
                    error_detail: Some("no such file: css/styles.css".to_string()),
                }),
            ],
        }
    }

    #[test]
    fn progress_lines_follow_run_order() {
        let lines = render_progress(&sample_run());
        assert_eq!(
            lines,
            vec![
                "".to_string(),
                "📁 Testing File Structure...".to_string(),
                "   ✅ PASS: File exists: index.html".to_string(),
                "   ⚠️  Recommended file missing: README.md".to_string(),
                "".to_string(),
                "🎨 Testing CSS File...".to_string(),
                "   ❌ FAIL: CSS file readable".to_string(),
                "      Error: no such file: css/styles.css".to_string(),
            ]
        );
    }

    #[test]
    fn summary_lists_failures_and_tips() {
        let text = render_text(&sample_run());
        assert!(text.starts_with(BANNER));
        assert!(text.contains("Total Tests: 2\nPassed: 1\nFailed: 1\nSuccess Rate: 50%"));
        assert!(text.contains("🔧 Your website needs some work."));
        assert!(text.contains("❌ Failed Tests:\n   • CSS file readable\n     Error: no such file: css/styles.css"));
        assert!(text.contains("💡 Tips for improvement:"));
        assert!(text.contains("   • Test your website on different devices"));
    }

    #[test]
    fn no_failed_block_when_everything_passes() {
        let mut run = sample_run();
        run.entries.truncate(3);
        let text = render_text(&run);
        assert!(text.contains("Success Rate: 100%"));
        assert!(text.contains("🎉 Excellent!"));
        assert!(!text.contains("Failed Tests:"));
    }
}
