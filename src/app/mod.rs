pub mod components;
pub mod layouts;
pub mod routes;

pub use routes::{App, Route};
