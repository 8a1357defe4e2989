pub mod client;
pub mod config;
pub mod notes;
pub mod prompts;
pub mod state;
