pub mod error;
pub mod htmx;
pub mod logging;
pub mod template;
