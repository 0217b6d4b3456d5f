use thiserror::Error;

use crate::{Location, ViewId};

#[derive(Error, Debug)]
pub enum NavError {
    #[error("cannot register empty view id")]
    EmptyViewId,

    #[error("no target view found: {0}")]
    UnregisteredTarget(ViewId),

    /// The view accepted the navigation slot but rejected the intent.
    /// The view stays where it was pushed.
    #[error("error handling intent for {location}")]
    Intent {
        location: Location,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("invalid link url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl NavError {
    pub fn intent(location: Location, err: anyhow::Error) -> Self {
        Self::Intent {
            location,
            source: err.into(),
        }
    }
}
