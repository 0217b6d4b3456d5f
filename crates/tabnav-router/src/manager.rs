use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use tabnav_core::{
    Intent, Location, NavError, View, ViewId, ViewProvider, ViewStack, Views,
};
use url::Url;

use crate::host::{NoopHost, RenderHost, Repaint};
use crate::link::{Link, LinkAction};
use crate::options::ManagerOptions;
use crate::snapshot::{NavSnapshot, ViewSummary};

/// A view borrowed out of the manager. Holds the manager's lock: drop it
/// before navigating from the same thread.
pub type ViewRef<'a> = MappedMutexGuard<'a, dyn View + 'static>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Destination {
    Tab(usize),
    Modal,
}

#[derive(Default)]
pub(crate) struct NavState {
    tabs: Vec<ViewStack>,
    /// Meaningless while `tabs` is empty.
    current: usize,
    modal: ViewStack,
    providers: HashMap<ViewId, ViewProvider>,
}

impl NavState {
    fn current_stack(&self) -> Option<&ViewStack> {
        self.tabs.get(self.current)
    }

    fn current_view(&self) -> Option<&dyn View> {
        self.current_stack()?.peek()
    }

    fn current_view_mut(&mut self) -> Option<&mut (dyn View + 'static)> {
        self.tabs.get_mut(self.current)?.peek_mut()
    }

    fn current_location(&self) -> Option<&Location> {
        self.current_stack()?.top_location()
    }

    fn current_index(&self) -> Option<usize> {
        (!self.tabs.is_empty()).then_some(self.current)
    }

    fn open_tab(&mut self) -> usize {
        self.tabs.push(ViewStack::new());
        self.current = self.tabs.len() - 1;
        log::debug!("opened tab {}", self.current);
        self.current
    }

    fn stack_mut(&mut self, dest: Destination) -> &mut ViewStack {
        match dest {
            Destination::Tab(idx) => &mut self.tabs[idx],
            Destination::Modal => &mut self.modal,
        }
    }

    fn request_switch(&mut self, mut intent: Intent) -> Result<(), NavError> {
        if intent.is_refresh() {
            return Ok(());
        }

        let provider = self
            .providers
            .get(&intent.target)
            .cloned()
            .ok_or_else(|| NavError::UnregisteredTarget(intent.target.clone()))?;

        let location = intent.location();
        let dest = if intent.show_as_modal {
            log::debug!("routing {location} to modal stack");
            Destination::Modal
        } else {
            Destination::Tab(self.route_view(&mut intent, &location))
        };

        let stack = self.stack_mut(dest);
        // Modals are never reused: each modal intent is its own overlay.
        let reuse = dest != Destination::Modal && stack.top_location() == Some(&location);
        if !reuse {
            stack.push(provider())?;
        }

        if let Some(view) = stack.peek_mut() {
            view.on_nav_to(&intent)
                .map_err(|err| NavError::intent(location.clone(), err))?;
        }

        log::debug!("switching to {location}");
        Ok(())
    }

    /// Picks the tab an intent lands in, opening one when nothing fits.
    fn route_view(&mut self, intent: &mut Intent, location: &Location) -> usize {
        // An explicit new-tab request always gets a fresh tab and instance.
        if self.tabs.is_empty() || intent.require_new {
            return self.open_tab();
        }

        // Otherwise never two tabs showing the same location on top.
        if let Some(idx) = self
            .tabs
            .iter()
            .position(|stack| stack.top_location() == Some(location))
        {
            log::debug!("{location} already open in tab {idx}");
            self.current = idx;
            return idx;
        }

        if let Some(referer) = &intent.referer
            && self.current_location() == Some(referer)
        {
            log::debug!("drilling down from {referer}");
            return self.current;
        }

        if let Some(idx) = self
            .tabs
            .iter()
            .position(|stack| stack.peek().is_some_and(|v| v.id() == intent.target))
        {
            log::debug!("re-selecting tab {idx} for {}", intent.target);
            self.current = idx;
            if intent.referer.is_none() {
                intent.referer = self.tabs[idx].top_location().cloned();
            }
            return idx;
        }

        self.open_tab()
    }

    fn nav_back(&mut self) {
        let Some(stack) = self.tabs.get_mut(self.current) else {
            return;
        };
        if stack.depth() <= 1 {
            return;
        }
        if let Some(mut view) = stack.pop() {
            view.on_finish();
        }
    }

    fn close_tab(&mut self, idx: usize) {
        if self.tabs.len() <= 1 {
            log::debug!("keeping the last tab open");
            return;
        }
        if idx >= self.tabs.len() {
            log::warn!("close_tab: index {idx} out of range ({} tabs)", self.tabs.len());
            return;
        }

        let mut stack = self.tabs.remove(idx);
        stack.clear();
        if self.current >= idx && self.current > 0 {
            self.current -= 1;
        }
    }

    fn switch_tab(&mut self, idx: usize) {
        if idx >= self.tabs.len() {
            log::warn!("switch_tab: index {idx} out of range ({} tabs)", self.tabs.len());
            return;
        }
        self.current = idx;
    }

    fn finish_modal_view(&mut self) {
        if let Some(mut view) = self.modal.pop() {
            view.on_finish();
        }
    }

    fn reset(&mut self) {
        self.modal.clear();
        for stack in self.tabs.iter_mut() {
            stack.clear();
        }
        self.tabs.clear();
        self.current = 0;
    }
}

/// Owns every tab's back-history plus the modal stack, and routes
/// [`Intent`]s to them.
///
/// `register` and `request_switch` may be called from any thread. The other
/// operations are meant for the render thread, though the lock keeps them
/// sound regardless.
///
/// ```
/// use tabnav_router::*;
///
/// const HOME: ViewId = view_id!("home");
///
/// let vm = ViewManager::headless();
/// vm.register(HOME, || simple(HOME, "Home", |_| Ok(()))).unwrap();
/// vm.request_switch(Intent::new(HOME)).unwrap();
///
/// assert_eq!(vm.tab_count(), 1);
/// assert_eq!(vm.current_view().map(|v| v.title().to_string()).as_deref(), Some("Home"));
/// ```
pub struct ViewManager {
    state: Mutex<NavState>,
    host: Arc<dyn RenderHost>,
    options: ManagerOptions,
}

impl ViewManager {
    pub fn new(host: Arc<dyn RenderHost>) -> Self {
        Self::with_options(host, ManagerOptions::default())
    }

    pub fn with_options(host: Arc<dyn RenderHost>, options: ManagerOptions) -> Self {
        Self {
            state: Mutex::new(NavState::default()),
            host,
            options,
        }
    }

    pub fn headless() -> Self {
        Self::new(Arc::new(NoopHost))
    }

    pub fn options(&self) -> &ManagerOptions {
        &self.options
    }

    /// Registers the provider for `id`, replacing any earlier one.
    pub fn register(
        &self,
        id: ViewId,
        provider: impl Fn() -> Box<dyn View> + Send + Sync + 'static,
    ) -> Result<(), NavError> {
        self.register_provider(id, Arc::new(provider))
    }

    pub fn register_provider(&self, id: ViewId, provider: ViewProvider) -> Result<(), NavError> {
        let mut state = self.state.lock();
        if id.is_zero() {
            return Err(NavError::EmptyViewId);
        }
        if state.providers.insert(id.clone(), provider).is_some() {
            log::debug!("replaced provider for {id}");
        }
        log::info!("registered view: {id}");
        Ok(())
    }

    pub fn is_registered(&self, id: &ViewId) -> bool {
        self.state.lock().providers.contains_key(id)
    }

    /// Routes `intent` to a tab or the modal stack, constructing the target
    /// view if the destination does not already show its location, then
    /// hands the intent to the view.
    ///
    /// A zero-target intent only repaints. When the view rejects the intent
    /// the error is returned but the view stays where it was placed. The host
    /// is asked to repaint in every case.
    pub fn request_switch(&self, intent: Intent) -> Result<(), NavError> {
        let _repaint = Repaint(self.host.as_ref());
        self.state.lock().request_switch(intent)
    }

    /// Clicks `link`. Returns the address for the host to open when the link
    /// points outside the application.
    pub fn follow(&self, link: &mut Link) -> Result<Option<Url>, NavError> {
        match link.on_click()? {
            LinkAction::Navigate(intent) => self.request_switch(intent).map(|()| None),
            LinkAction::Open(url) => Ok(Some(url)),
        }
    }

    /// Top view of the current tab.
    pub fn current_view(&self) -> Option<ViewRef<'_>> {
        if self.options.sync_window_title {
            let title = self.state.lock().current_view().map(|v| v.title().to_string());
            if let Some(title) = title {
                self.host.set_title(&title);
            }
        }
        MutexGuard::try_map(self.state.lock(), NavState::current_view_mut).ok()
    }

    /// `None` while no tab is open.
    pub fn current_view_index(&self) -> Option<usize> {
        self.state.lock().current_index()
    }

    pub fn tab_count(&self) -> usize {
        self.state.lock().tabs.len()
    }

    /// Depth of the current tab's back-history, 0 with no tabs.
    pub fn current_depth(&self) -> usize {
        self.state.lock().current_stack().map_or(0, ViewStack::depth)
    }

    /// Whether the current tab has anything below its top view.
    pub fn has_prev(&self) -> bool {
        self.current_depth() > 1
    }

    /// Pops and finishes the current tab's top view, unless it is the only
    /// one left. Returns the view now on top.
    pub fn nav_back(&self) -> Option<ViewRef<'_>> {
        let mut state = self.state.lock();
        state.nav_back();
        MutexGuard::try_map(state, NavState::current_view_mut).ok()
    }

    /// The top view of every tab, in tab order.
    pub fn opened_views(&self) -> Vec<ViewSummary> {
        self.read().opened_views().map(ViewSummary::of).collect()
    }

    /// Finishes every view of tab `idx` and removes the tab. The last
    /// remaining tab is never closed.
    pub fn close_tab(&self, idx: usize) {
        self.state.lock().close_tab(idx);
    }

    pub fn switch_tab(&self, idx: usize) {
        self.state.lock().switch_tab(idx);
    }

    /// Frontmost modal view.
    pub fn next_modal_view(&self) -> Option<ViewRef<'_>> {
        MutexGuard::try_map(self.state.lock(), |s| s.modal.peek_mut()).ok()
    }

    pub fn modal_depth(&self) -> usize {
        self.state.lock().modal.depth()
    }

    /// Pops and finishes exactly one modal view, the frontmost.
    pub fn finish_modal_view(&self) {
        self.state.lock().finish_modal_view();
    }

    pub fn invalidate(&self) {
        self.host.invalidate();
    }

    /// Finishes every modal and tab view and forgets all tabs. Providers stay
    /// registered.
    pub fn reset(&self) {
        self.state.lock().reset();
        self.invalidate();
    }

    /// Locks the manager for a frame's worth of reads.
    pub fn read(&self) -> NavGuard<'_> {
        NavGuard {
            state: self.state.lock(),
        }
    }

    pub fn snapshot(&self) -> NavSnapshot {
        self.read().snapshot()
    }
}

impl Default for ViewManager {
    fn default() -> Self {
        Self::headless()
    }
}

/// Borrowed, read-only access to the navigation state for rendering.
pub struct NavGuard<'a> {
    state: MutexGuard<'a, NavState>,
}

impl NavGuard<'_> {
    pub fn tab_count(&self) -> usize {
        self.state.tabs.len()
    }

    pub fn current_view_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    pub fn current_view(&self) -> Option<&dyn View> {
        self.state.current_view()
    }

    pub fn tab(&self, idx: usize) -> Option<&ViewStack> {
        self.state.tabs.get(idx)
    }

    pub fn tabs(&self) -> impl ExactSizeIterator<Item = &ViewStack> {
        self.state.tabs.iter()
    }

    /// Top view of each tab, in tab order.
    pub fn opened_views(&self) -> impl Iterator<Item = &dyn View> {
        self.state.tabs.iter().filter_map(ViewStack::peek)
    }

    /// Modal views from back to front, the order overlays are layered in.
    pub fn modal_views(&self) -> Views<'_> {
        self.state.modal.all(true)
    }

    pub fn next_modal_view(&self) -> Option<&dyn View> {
        self.state.modal.peek()
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            current_tab: self.current_view_index(),
            tabs: self
                .tabs()
                .map(|stack| stack.all(false).map(ViewSummary::of).collect())
                .collect(),
            modals: self.state.modal.all(false).map(ViewSummary::of).collect(),
        }
    }
}
