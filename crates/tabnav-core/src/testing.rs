//! Recording test doubles.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{BaseView, Intent, Location, View, ViewId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Created(String),
    NavTo(String, Location),
    Finished(String),
}

/// Shared, ordered record of lifecycle calls across probes.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<Event>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: Event) {
        self.0.lock().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().clone()
    }

    pub fn finished(&self) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .filter_map(|e| match e {
                Event::Finished(label) => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.0.lock().iter().filter(|e| pred(e)).count()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

/// A view that journals its lifecycle and can be told to reject intents.
pub struct Probe {
    base: BaseView,
    id: ViewId,
    label: String,
    journal: Journal,
    fail_with: Option<String>,
}

impl Probe {
    pub fn new(id: ViewId, label: impl Into<String>, journal: &Journal) -> Self {
        let label = label.into();
        journal.record(Event::Created(label.clone()));
        Self {
            base: BaseView::new(),
            id,
            label,
            journal: journal.clone(),
            fail_with: None,
        }
    }

    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    /// Probe that is already on screen at `id`'s parameterless location.
    pub fn navigated(id: ViewId, label: impl Into<String>, journal: &Journal) -> Box<dyn View> {
        let mut probe = Self::new(id.clone(), label, journal);
        probe.base.on_nav_to(&Intent::new(id));
        Box::new(probe)
    }
}

impl View for Probe {
    fn id(&self) -> ViewId {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.label
    }

    fn on_nav_to(&mut self, intent: &Intent) -> anyhow::Result<()> {
        self.base.on_nav_to(intent);
        self.journal
            .record(Event::NavTo(self.label.clone(), intent.location()));
        match &self.fail_with {
            Some(message) => Err(anyhow::anyhow!("{message}")),
            None => Ok(()),
        }
    }

    fn on_finish(&mut self) {
        if self.base.finished() {
            return;
        }
        self.base.on_finish();
        self.journal.record(Event::Finished(self.label.clone()));
    }

    fn finished(&self) -> bool {
        self.base.finished()
    }

    fn location(&self) -> Option<&Location> {
        self.base.location()
    }
}
