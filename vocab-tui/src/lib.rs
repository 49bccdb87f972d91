//! vocab-tui library
//!
//! Exports types and modules for testing and potential reuse.

pub mod app;
pub mod cli;
pub mod error;
pub mod services;
pub mod terminal;
pub mod ui;
pub mod view;

// Re-export commonly used types
pub use app::{dispatch, reduce, Action, AppState, Effect, PageState};
pub use error::{Result, TuiError};
