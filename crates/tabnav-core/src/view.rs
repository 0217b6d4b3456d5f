use std::fmt;
use std::sync::Arc;

use crate::{Intent, Location, ViewId, view_id};

/// A screen that can be routed to.
///
/// Lifecycle: a provider constructs the view, [`View::on_nav_to`] is called
/// once per navigation that lands on it (possibly many times on the same live
/// instance), and [`View::on_finish`] is called when the view is discarded.
/// `on_finish` must be idempotent.
pub trait View: Send {
    fn id(&self) -> ViewId;

    fn title(&self) -> &str;

    fn actions(&self) -> Vec<ViewAction> {
        Vec::new()
    }

    fn on_nav_to(&mut self, intent: &Intent) -> anyhow::Result<()>;

    fn on_finish(&mut self);

    fn finished(&self) -> bool;

    /// Where this view currently is. `None` before the first navigation and
    /// after `on_finish`; such a view never matches a routing lookup.
    fn location(&self) -> Option<&Location>;
}

impl fmt::Debug for dyn View + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("id", &self.id())
            .field("title", &self.title())
            .field("location", &self.location().map(Location::as_str))
            .field("finished", &self.finished())
            .finish()
    }
}

/// Constructs fresh instances of one registered view.
pub type ViewProvider = Arc<dyn Fn() -> Box<dyn View> + Send + Sync>;

/// A command a view exposes to the host's action bar.
#[derive(Clone)]
pub struct ViewAction {
    pub name: String,
    pub on_clicked: Arc<dyn Fn() + Send + Sync>,
}

impl ViewAction {
    pub fn new(name: impl Into<String>, on_clicked: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            on_clicked: Arc::new(on_clicked),
        }
    }

    pub fn trigger(&self) {
        (self.on_clicked)()
    }
}

impl fmt::Debug for ViewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewAction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Location and finish bookkeeping shared by most views.
///
/// Embed it and forward `on_nav_to`, `on_finish`, `finished` and `location`.
#[derive(Debug, Default)]
pub struct BaseView {
    location: Option<Location>,
    finished: bool,
}

impl BaseView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_nav_to(&mut self, intent: &Intent) {
        self.location = Some(intent.location());
    }

    pub fn on_finish(&mut self) {
        self.location = None;
        self.finished = true;
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

type IntentHandler = Box<dyn FnMut(&Intent) -> anyhow::Result<()> + Send>;

/// A view built from an id, a title and an intent handler.
pub struct SimpleView {
    base: BaseView,
    id: ViewId,
    title: String,
    handler: IntentHandler,
}

impl SimpleView {
    pub fn new(
        id: ViewId,
        title: impl Into<String>,
        handler: impl FnMut(&Intent) -> anyhow::Result<()> + Send + 'static,
    ) -> Self {
        Self {
            base: BaseView::new(),
            id,
            title: title.into(),
            handler: Box::new(handler),
        }
    }
}

impl View for SimpleView {
    fn id(&self) -> ViewId {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn on_nav_to(&mut self, intent: &Intent) -> anyhow::Result<()> {
        self.base.on_nav_to(intent);
        (self.handler)(intent)
    }

    fn on_finish(&mut self) {
        self.base.on_finish();
    }

    fn finished(&self) -> bool {
        self.base.finished()
    }

    fn location(&self) -> Option<&Location> {
        self.base.location()
    }
}

/// Boxed [`SimpleView`], ready to be returned from a provider.
pub fn simple(
    id: ViewId,
    title: impl Into<String>,
    handler: impl FnMut(&Intent) -> anyhow::Result<()> + Send + 'static,
) -> Box<dyn View> {
    Box::new(SimpleView::new(id, title, handler))
}

pub const BLANK: ViewId = view_id!("blank");

/// Placeholder shown where no real view exists yet.
#[derive(Debug)]
pub struct EmptyView {
    location: Location,
    finished: bool,
}

impl EmptyView {
    pub fn new() -> Self {
        Self {
            location: BLANK.location(),
            finished: false,
        }
    }
}

impl Default for EmptyView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for EmptyView {
    fn id(&self) -> ViewId {
        BLANK
    }

    fn title(&self) -> &str {
        "Blank"
    }

    fn on_nav_to(&mut self, _intent: &Intent) -> anyhow::Result<()> {
        Ok(())
    }

    fn on_finish(&mut self) {
        self.finished = true;
    }

    fn finished(&self) -> bool {
        self.finished
    }

    fn location(&self) -> Option<&Location> {
        (!self.finished).then_some(&self.location)
    }
}
