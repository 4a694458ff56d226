//! Core template operations

pub mod git;
pub mod source;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use source::{EntryKind, PlanEntry, TemplateSource};
