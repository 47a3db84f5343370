//! Navigation state machine.
//!
//! Defines a pure state transition function for the page router.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::ids::EntryId;

/// A named screen the visitor can be on.
///
/// 访客所在的页面。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    #[serde(rename = "projects")]
    ProjectList,
    About,
    Contact,
    CaseStudy,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::ProjectList,
        View::About,
        View::Contact,
        View::CaseStudy,
    ];

    /// Route segment, e.g. `projects` or `case-study`.
    pub fn slug(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::ProjectList => "projects",
            View::About => "about",
            View::Contact => "contact",
            View::CaseStudy => "case-study",
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        View::ALL
            .into_iter()
            .find(|v| v.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Where the visitor currently is.
///
/// 当前所在位置。
///
/// `selected_entry_id` is only ever set together with [`View::CaseStudy`]
/// and always names an entry of the catalog it was validated against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_view: View,
    pub selected_entry_id: Option<EntryId>,
}

impl NavigationState {
    /// Initial state: Home, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events that drive navigation.
///
/// 驱动导航的事件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    /// Switch page. Clears the selection unless the target is the case study.
    ///
    /// 切换页面。
    GoTo(View),
    /// Open a project's case study.
    ///
    /// 打开案例。
    OpenCaseStudy { entry_id: EntryId },
    /// "Next Project" from the case study of `current`.
    ///
    /// 下一个项目。
    NextEntry { current: EntryId },
    /// "Back to Projects".
    ///
    /// 返回项目列表。
    Back,
}

/// Pure navigation state machine.
///
/// 纯状态机：不包含副作用。
pub struct NavigationStateMachine;

impl NavigationStateMachine {
    pub fn transition(
        state: NavigationState,
        event: NavigationEvent,
        catalog: &Catalog,
    ) -> NavigationState {
        match event {
            NavigationEvent::GoTo(View::CaseStudy) => NavigationState {
                current_view: View::CaseStudy,
                selected_entry_id: state.selected_entry_id,
            },
            NavigationEvent::GoTo(view) => NavigationState {
                current_view: view,
                selected_entry_id: None,
            },
            NavigationEvent::OpenCaseStudy { entry_id } => {
                let selected = catalog.contains(entry_id.as_str()).then_some(entry_id);
                Self::case_study(selected)
            }
            NavigationEvent::NextEntry { current } => {
                let selected = catalog
                    .next_after(current.as_str())
                    .map(|entry| entry.id.clone());
                Self::case_study(selected)
            }
            NavigationEvent::Back => NavigationState {
                current_view: View::ProjectList,
                selected_entry_id: None,
            },
        }
    }

    fn case_study(selected: Option<EntryId>) -> NavigationState {
        #[cfg(feature = "tracing")]
        if selected.is_none() {
            tracing::warn!("case study requested for unknown entry, falling back");
        }

        NavigationState {
            current_view: View::CaseStudy,
            selected_entry_id: selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NavigationEvent, NavigationState, NavigationStateMachine, View};
    use crate::catalog::tests::fixtures::sample_catalog;
    use crate::ids::EntryId;

    fn case_study_of(id: &str) -> NavigationState {
        NavigationState {
            current_view: View::CaseStudy,
            selected_entry_id: Some(EntryId::new(id)),
        }
    }

    #[test]
    fn navigation_initial_state_is_home_without_selection() {
        let state = NavigationState::new();
        assert_eq!(state.current_view, View::Home);
        assert!(state.selected_entry_id.is_none());
    }

    #[test]
    fn navigation_open_known_entry_selects_it() {
        let catalog = sample_catalog();
        let next = NavigationStateMachine::transition(
            NavigationState::new(),
            NavigationEvent::OpenCaseStudy {
                entry_id: EntryId::new("2"),
            },
            &catalog,
        );
        assert_eq!(next, case_study_of("2"));
    }

    #[test]
    fn navigation_open_unknown_entry_leaves_selection_empty() {
        let catalog = sample_catalog();
        let next = NavigationStateMachine::transition(
            case_study_of("1"),
            NavigationEvent::OpenCaseStudy {
                entry_id: EntryId::new("999"),
            },
            &catalog,
        );
        assert_eq!(next.current_view, View::CaseStudy);
        assert!(next.selected_entry_id.is_none());
    }

    #[test]
    fn navigation_go_to_clears_selection_for_non_case_study_views() {
        let catalog = sample_catalog();
        for view in View::ALL.into_iter().filter(|v| *v != View::CaseStudy) {
            let next =
                NavigationStateMachine::transition(case_study_of("3"), NavigationEvent::GoTo(view), &catalog);
            assert_eq!(next.current_view, view);
            assert!(next.selected_entry_id.is_none(), "{view} kept a selection");
        }
    }

    #[test]
    fn navigation_go_to_case_study_keeps_selection() {
        let catalog = sample_catalog();
        let next = NavigationStateMachine::transition(
            case_study_of("3"),
            NavigationEvent::GoTo(View::CaseStudy),
            &catalog,
        );
        assert_eq!(next, case_study_of("3"));
    }

    #[test]
    fn navigation_next_entry_advances_in_catalog_order() {
        let catalog = sample_catalog();
        let next = NavigationStateMachine::transition(
            case_study_of("2"),
            NavigationEvent::NextEntry {
                current: EntryId::new("2"),
            },
            &catalog,
        );
        assert_eq!(next, case_study_of("3"));
    }

    #[test]
    fn navigation_next_entry_wraps_from_last_to_first() {
        let catalog = sample_catalog();
        let next = NavigationStateMachine::transition(
            case_study_of("4"),
            NavigationEvent::NextEntry {
                current: EntryId::new("4"),
            },
            &catalog,
        );
        assert_eq!(next, case_study_of("1"));
    }

    #[test]
    fn navigation_next_entry_from_unknown_id_has_no_selection() {
        let catalog = sample_catalog();
        let next = NavigationStateMachine::transition(
            NavigationState::new(),
            NavigationEvent::NextEntry {
                current: EntryId::new("nope"),
            },
            &catalog,
        );
        assert_eq!(next.current_view, View::CaseStudy);
        assert!(next.selected_entry_id.is_none());
    }

    #[test]
    fn navigation_back_returns_to_project_list() {
        let catalog = sample_catalog();
        let next = NavigationStateMachine::transition(case_study_of("1"), NavigationEvent::Back, &catalog);
        assert_eq!(next.current_view, View::ProjectList);
        assert!(next.selected_entry_id.is_none());
    }

    #[test]
    fn navigation_view_parses_route_slugs() {
        assert_eq!("projects".parse::<View>().unwrap(), View::ProjectList);
        assert_eq!("case-study".parse::<View>().unwrap(), View::CaseStudy);
        assert!("blog".parse::<View>().is_err());
    }
}
