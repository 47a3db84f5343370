use std::sync::Arc;

use tracing::{debug, info_span};

use folio_core::ports::NavigationEventPort;
use folio_core::{
    Catalog, EntryId, NavigationEvent, NavigationState, NavigationStateMachine, View,
    ViewDescriptor, ViewDispatcher,
};

/// Sole owner of [`NavigationState`].
///
/// The view layer reads snapshots through [`state`](Self::state) /
/// [`resolve`](Self::resolve) and changes them only through the transition
/// methods. Every transition is published to the [`NavigationEventPort`].
pub struct NavigationController {
    catalog: Arc<Catalog>,
    state: NavigationState,
    events: Arc<dyn NavigationEventPort>,
}

impl NavigationController {
    /// Starts on Home with nothing selected.
    pub fn new(catalog: Arc<Catalog>, events: Arc<dyn NavigationEventPort>) -> Self {
        Self {
            catalog,
            state: NavigationState::new(),
            events,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// What to render for the current state.
    pub fn resolve(&self) -> ViewDescriptor {
        ViewDispatcher::resolve(&self.state, &self.catalog)
    }

    pub fn go_to(&mut self, view: View) -> &NavigationState {
        self.dispatch(NavigationEvent::GoTo(view))
    }

    /// Unknown ids land on CaseStudy with no selection, which resolves to Home.
    pub fn open_case_study(&mut self, entry_id: impl Into<EntryId>) -> &NavigationState {
        self.dispatch(NavigationEvent::OpenCaseStudy {
            entry_id: entry_id.into(),
        })
    }

    /// "Next Project": the entry after `current_id` in catalog order, wrapping.
    pub fn go_to_next_entry(&mut self, current_id: impl Into<EntryId>) -> &NavigationState {
        self.dispatch(NavigationEvent::NextEntry {
            current: current_id.into(),
        })
    }

    /// "Back to Projects".
    pub fn back(&mut self) -> &NavigationState {
        self.dispatch(NavigationEvent::Back)
    }

    pub fn dispatch(&mut self, event: NavigationEvent) -> &NavigationState {
        let span = info_span!("usecase.navigation.dispatch", event = ?event);
        let _guard = span.enter();

        let previous = std::mem::take(&mut self.state);
        let from = previous.current_view;
        self.state = NavigationStateMachine::transition(previous, event, &self.catalog);

        debug!(
            from = %from,
            to = %self.state.current_view,
            selected = ?self.state.selected_entry_id,
            "Navigation transition"
        );

        self.events.on_navigated(&self.state);
        &self.state
    }
}
