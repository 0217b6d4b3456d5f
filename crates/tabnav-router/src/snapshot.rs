use serde::Serialize;
use tabnav_core::{Location, View, ViewId};

/// Owned description of one view, for tab bars and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewSummary {
    pub id: ViewId,
    pub title: String,
    pub location: Option<Location>,
}

impl ViewSummary {
    pub fn of(view: &dyn View) -> Self {
        Self {
            id: view.id(),
            title: view.title().to_string(),
            location: view.location().cloned(),
        }
    }
}

/// Point-in-time picture of the navigation state. Stacks are listed top
/// first.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NavSnapshot {
    pub current_tab: Option<usize>,
    pub tabs: Vec<Vec<ViewSummary>>,
    pub modals: Vec<ViewSummary>,
}

impl NavSnapshot {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".into())
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".into())
    }
}
