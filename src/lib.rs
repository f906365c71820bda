// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus UI (sidebar, icons, routes)
pub mod app;
