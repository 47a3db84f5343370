//! View dispatch: navigation state in, view descriptor out.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry};
use crate::navigation::{NavigationState, View};

/// What the view layer should render, with its props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "entry", rename_all = "kebab-case")]
pub enum ViewDescriptor {
    Home,
    #[serde(rename = "projects")]
    ProjectList,
    About,
    Contact,
    CaseStudy(CatalogEntry),
}

impl ViewDescriptor {
    pub fn view(&self) -> View {
        match self {
            ViewDescriptor::Home => View::Home,
            ViewDescriptor::ProjectList => View::ProjectList,
            ViewDescriptor::About => View::About,
            ViewDescriptor::Contact => View::Contact,
            ViewDescriptor::CaseStudy(_) => View::CaseStudy,
        }
    }
}

/// Stateless resolver from [`NavigationState`] to [`ViewDescriptor`].
pub struct ViewDispatcher;

impl ViewDispatcher {
    /// A case study whose selection is missing or unknown resolves to Home.
    pub fn resolve(state: &NavigationState, catalog: &Catalog) -> ViewDescriptor {
        match state.current_view {
            View::Home => ViewDescriptor::Home,
            View::ProjectList => ViewDescriptor::ProjectList,
            View::About => ViewDescriptor::About,
            View::Contact => ViewDescriptor::Contact,
            View::CaseStudy => state
                .selected_entry_id
                .as_ref()
                .and_then(|id| catalog.get_by_id(id.as_str()))
                .cloned()
                .map_or(ViewDescriptor::Home, ViewDescriptor::CaseStudy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::fixtures::sample_catalog;
    use crate::ids::EntryId;

    fn state(view: View, selected: Option<&str>) -> NavigationState {
        NavigationState {
            current_view: view,
            selected_entry_id: selected.map(EntryId::new),
        }
    }

    #[test]
    fn test_resolve_plain_views() {
        let catalog = sample_catalog();
        assert_eq!(ViewDispatcher::resolve(&state(View::Home, None), &catalog), ViewDescriptor::Home);
        assert_eq!(
            ViewDispatcher::resolve(&state(View::ProjectList, None), &catalog),
            ViewDescriptor::ProjectList
        );
        assert_eq!(ViewDispatcher::resolve(&state(View::About, None), &catalog), ViewDescriptor::About);
        assert_eq!(
            ViewDispatcher::resolve(&state(View::Contact, None), &catalog),
            ViewDescriptor::Contact
        );
    }

    #[test]
    fn test_resolve_case_study_carries_entry() {
        let catalog = sample_catalog();
        let descriptor = ViewDispatcher::resolve(&state(View::CaseStudy, Some("2")), &catalog);
        match descriptor {
            ViewDescriptor::CaseStudy(entry) => assert_eq!(entry.id.as_str(), "2"),
            other => panic!("expected case study, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_case_study_without_selection_falls_back_to_home() {
        let catalog = sample_catalog();
        assert_eq!(
            ViewDispatcher::resolve(&state(View::CaseStudy, None), &catalog),
            ViewDescriptor::Home
        );
    }

    #[test]
    fn test_resolve_case_study_with_stale_selection_falls_back_to_home() {
        let catalog = sample_catalog();
        assert_eq!(
            ViewDispatcher::resolve(&state(View::CaseStudy, Some("999")), &catalog),
            ViewDescriptor::Home
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let catalog = sample_catalog();
        let s = state(View::CaseStudy, Some("3"));
        assert_eq!(ViewDispatcher::resolve(&s, &catalog), ViewDispatcher::resolve(&s, &catalog));
    }

    #[test]
    fn test_descriptor_serializes_with_view_tag() {
        let json = serde_json::to_value(ViewDescriptor::ProjectList).unwrap();
        assert_eq!(json, serde_json::json!({ "view": "projects" }));
    }
}
