use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod engine;
mod position;
mod sequence;
mod state;
mod subscriber;

pub use engine::NavigationEngine;
pub use position::StepPosition;
pub use sequence::Sequence;
pub use state::NavigatorState;
pub use subscriber::NavigationSubscriber;

/// Navigator instance identifier
pub type NavigatorId = Uuid;

/// Playback phases a navigator can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// Cursor only moves on manual navigation
    Idle,
    /// The autoplay timer advances the cursor
    Playing,
}

/// What caused a navigation update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationChange {
    Advanced,
    Retreated,
    Reset,
    Seeked,
    SequenceReplaced,
    PlaybackStarted,
    PlaybackStopped,
    /// Autoplay moved the cursor by one frame
    Ticked,
}

/// Context passed to subscribers on every navigation update
#[derive(Debug, Clone)]
pub struct NavigationContext<T> {
    pub navigator: NavigatorId,
    pub change: NavigationChange,
    pub state: NavigatorState<T>,
    /// Increases with every committed change of one engine
    pub version: u64,
}

impl<T> NavigationContext<T> {
    /// Frame the renderer should show
    pub fn current(&self) -> &T {
        self.state.current()
    }

    pub fn position(&self) -> StepPosition {
        self.state.position()
    }
}
