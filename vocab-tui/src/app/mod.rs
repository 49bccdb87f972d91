//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: (State, Action) -> (State, Effect)
//! - Dispatch: Runs the reducer and hands effects to the outside world

pub mod actions;
pub mod dispatch;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Effect, RequestId};
pub use dispatch::{dispatch, EffectRunner};
pub use reducer::reduce;
pub use state::{
    AppState, PageState, Remote, RequestTracker, ResultPageState, StatusBarState, UiConfig,
    WordPageState,
};
