//! Navigation subscriber trait

use super::NavigationContext;

/// Trait for components that re-render when the navigator state changes
pub trait NavigationSubscriber<T>: Send + Sync {
    /// Called after every state change, never for boundary no-ops
    fn on_navigation_change(&self, context: &NavigationContext<T>);
}

impl<T, F> NavigationSubscriber<T> for F
where
    F: Fn(&NavigationContext<T>) + Send + Sync,
{
    fn on_navigation_change(&self, context: &NavigationContext<T>) {
        self(context)
    }
}
