use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::{Location, Params};

/// Identity of a screen: a caller-chosen `name` inside a `path` namespace.
///
/// Two views registered under the same name by different modules do not
/// collide as long as their namespaces differ. Use [`view_id!`] to take the
/// namespace from the calling module.
///
/// The `Default` value is the zero id. It is never registrable, and an
/// [`Intent`](crate::Intent) targeting it only asks the host to repaint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId {
    path: Cow<'static, str>,
    name: Cow<'static, str>,
}

impl ViewId {
    pub const fn new(namespace: &'static str, name: &'static str) -> Self {
        Self {
            path: Cow::Borrowed(namespace),
            name: Cow::Borrowed(name),
        }
    }

    /// Builds an id from runtime strings, e.g. ids read from a plugin manifest.
    pub fn owned(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: Cow::Owned(namespace.into()),
            name: Cow::Owned(name.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.path
    }

    pub fn is_zero(&self) -> bool {
        self.path.is_empty() && self.name.is_empty()
    }

    /// Location of this view without parameters.
    pub fn location(&self) -> Location {
        Location::build(self, &Params::new())
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.path, self.name)
    }
}

impl Serialize for ViewId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Declares a [`ViewId`] namespaced by the module that expands the macro.
///
/// ```
/// use tabnav_core::{ViewId, view_id};
///
/// const HOME: ViewId = view_id!("home");
/// assert_eq!(HOME.name(), "home");
/// assert_eq!(HOME.namespace(), module_path!());
/// ```
#[macro_export]
macro_rules! view_id {
    ($name:expr) => {
        $crate::ViewId::new(module_path!(), $name)
    };
}
