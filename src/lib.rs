pub mod a11y;
pub mod analytics;
pub mod animation;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod form;
pub mod hover;
pub mod logging;
pub mod navigation;
pub mod perf;
pub mod state;
pub mod theme;
pub mod timing;
pub mod viewport;
