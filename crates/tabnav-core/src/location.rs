use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;
use url::Url;

use crate::{Params, ViewId};

pub const SCHEME: &str = "tabnav";

static ROOT: LazyLock<Url> =
    LazyLock::new(|| Url::parse("tabnav://view/").expect("literal root url is valid"));

/// Canonical address of a view: `tabnav://view/<namespace>/<name>?<params>`.
///
/// Built deterministically from a [`ViewId`] and [`Params`]; keys are
/// encoded in sorted order, so equal ids with equal parameters always give
/// equal locations. Routing uses this equality to dedup tabs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Location(Url);

impl Location {
    pub fn build(id: &ViewId, params: &Params) -> Self {
        let mut url = ROOT.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(id.namespace())
                .push(id.name());
        }
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.encoded())));
        }
        Self(url)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Decoded query pairs, in encoded order.
    pub fn query_pairs(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.0
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Location> for Url {
    fn from(location: Location) -> Self {
        location.0
    }
}
