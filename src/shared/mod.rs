pub mod errors;
pub mod constants;

// Structured tracing helpers
pub mod logging;

// Dioxus hooks
pub mod hooks;
