use std::any::Any;
use std::fmt::Display;

use crate::{Location, Params, ViewId};

/// A navigation request.
///
/// `Intent::default()` has a zero target; submitting it only repaints.
#[derive(Clone, Debug, Default)]
pub struct Intent {
    pub target: ViewId,
    pub params: Params,
    /// Location of the view that spawned this navigation. When it matches the
    /// current tab's top view, the target is pushed onto that same tab.
    pub referer: Option<Location>,
    pub show_as_modal: bool,
    /// Open a fresh instance in a new tab even if an equal location is open.
    pub require_new: bool,
}

impl Intent {
    pub fn new(target: ViewId) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    pub fn with_param<T: Display + Any + Send + Sync>(
        mut self,
        key: impl Into<String>,
        value: T,
    ) -> Self {
        self.params.insert(key, value);
        self
    }

    pub fn with_opaque_param<T: Any + Send + Sync>(
        mut self,
        key: impl Into<String>,
        value: T,
    ) -> Self {
        self.params.insert_opaque(key, value);
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_referer(mut self, referer: Location) -> Self {
        self.referer = Some(referer);
        self
    }

    pub fn modal(mut self) -> Self {
        self.show_as_modal = true;
        self
    }

    pub fn in_new_tab(mut self) -> Self {
        self.require_new = true;
        self
    }

    pub fn is_refresh(&self) -> bool {
        self.target.is_zero()
    }

    pub fn location(&self) -> Location {
        Location::build(&self.target, &self.params)
    }
}
