use tabnav_core::{Intent, Location, NavError, Params, ViewId};
use url::Url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    View(ViewId),
    /// An address outside the application, opened by the host.
    Web(String),
}

#[derive(Debug)]
pub enum LinkAction {
    Navigate(Intent),
    Open(Url),
}

/// A clickable jump between views, or out to a web address, like an HTML
/// anchor.
#[derive(Clone, Debug)]
pub struct Link {
    pub title: String,
    pub target: LinkTarget,
    pub params: Params,
    pub referer: Option<Location>,
    /// Only meaningful for view targets.
    pub open_in_new_tab: bool,
    clicked: bool,
}

impl Link {
    pub fn to_view(title: impl Into<String>, id: ViewId) -> Self {
        Self::with_target(title, LinkTarget::View(id))
    }

    pub fn to_web(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self::with_target(title, LinkTarget::Web(href.into()))
    }

    fn with_target(title: impl Into<String>, target: LinkTarget) -> Self {
        Self {
            title: title.into(),
            target,
            params: Params::new(),
            referer: None,
            open_in_new_tab: false,
            clicked: false,
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_referer(mut self, referer: Location) -> Self {
        self.referer = Some(referer);
        self
    }

    pub fn in_new_tab(mut self) -> Self {
        self.open_in_new_tab = true;
        self
    }

    /// Whether the link has ever been clicked.
    pub fn clicked(&self) -> bool {
        self.clicked
    }

    /// Marks the link clicked and works out where it leads. Web targets get
    /// the link params appended as query pairs.
    pub fn on_click(&mut self) -> Result<LinkAction, NavError> {
        self.clicked = true;
        match &self.target {
            LinkTarget::View(id) => Ok(LinkAction::Navigate(Intent {
                target: id.clone(),
                params: self.params.clone(),
                referer: self.referer.clone(),
                show_as_modal: false,
                require_new: self.open_in_new_tab,
            })),
            LinkTarget::Web(href) => {
                let mut url = Url::parse(href)?;
                if !self.params.is_empty() {
                    url.query_pairs_mut().extend_pairs(
                        self.params.iter().map(|(k, v)| (k.as_str(), v.encoded())),
                    );
                }
                Ok(LinkAction::Open(url))
            }
        }
    }
}
