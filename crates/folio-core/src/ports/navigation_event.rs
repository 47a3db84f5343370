use crate::navigation::NavigationState;

/// Receives every navigation state change so the view layer can re-render.
pub trait NavigationEventPort: Send + Sync {
    fn on_navigated(&self, state: &NavigationState);
}
