pub mod assets;
pub mod checker;
pub mod checklist;
pub mod report;

pub mod error;
