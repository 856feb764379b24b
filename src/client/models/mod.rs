pub mod app_state;
pub mod code_snippet;
pub mod messages;
pub mod prediction;
