pub mod notes;
pub mod summarize;
