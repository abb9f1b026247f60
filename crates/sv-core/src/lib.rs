//! Core functionality for the step visualization gallery
//!
//! This crate provides the bounded step navigator, the shared navigation
//! engine with its subscribers, and the autoplay timer that drives it.

pub mod config;
pub mod error;
pub mod navigation;
pub mod playback;

// Re-export commonly used types
pub use config::{PlaybackSettings, PlayerConfig};
pub use error::{ConfigError, NavigatorError};
pub use navigation::{
    NavigationChange, NavigationContext, NavigationEngine, NavigationSubscriber,
    NavigatorId, NavigatorState, PlaybackPhase, Sequence, StepPosition,
};
pub use playback::{AutoplayPolicy, DEFAULT_AUTOPLAY_INTERVAL};
