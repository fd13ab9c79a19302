use crate::checklist::Category;
use crate::report::Report;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub check_id: String,
    pub category: Category,
    pub description: String,
    pub passed: bool,
    pub error_detail: Option<String>,
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteLevel {
    WARNING,
    INFO,
}

/// Informational line. Counted neither as passed nor failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub check_id: String,
    pub level: NoteLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEntry {
    CategoryStarted(Category),
    Checked(CheckResult),
    Noted(Note),
}

/// Append-only log of one checker run, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRun {
    pub checklist_version: String,
    pub entries: Vec<RunEntry>,
}

impl CheckRun {
    pub fn results(&self) -> impl Iterator<Item = &CheckResult> {
        self.entries.iter().filter_map(|e| match e {
            RunEntry::Checked(r) => Some(r),
            _ => None,
        })
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.entries.iter().filter_map(|e| match e {
            RunEntry::Noted(n) => Some(n),
            _ => None,
        })
    }

    pub fn result_for_check(&self, check_id: &str) -> Option<&CheckResult> {
        self.results().find(|r| r.check_id == check_id)
    }

    pub fn report(&self) -> Report {
        Report::from_results(self.results())
    }
}
