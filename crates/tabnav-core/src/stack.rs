use std::collections::VecDeque;
use std::collections::vec_deque;
use std::iter::FusedIterator;

use crate::{Location, NavError, View};

/// Back-history of one tab (or of the modal layer).
///
/// The front is the top: the most recently pushed view, the one on screen.
/// The stack owns its views; a view leaves it through [`ViewStack::pop`]
/// (caller finishes it) or [`ViewStack::clear`] (finished here).
#[derive(Default)]
pub struct ViewStack {
    views: VecDeque<Box<dyn View>>,
}

impl ViewStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `view` on top. Duplicates are allowed; dedup happens in routing.
    pub fn push(&mut self, view: Box<dyn View>) -> Result<(), NavError> {
        self.views.push_front(view);
        Ok(())
    }

    /// Removes the top view without finishing it.
    pub fn pop(&mut self) -> Option<Box<dyn View>> {
        self.views.pop_front()
    }

    pub fn peek(&self) -> Option<&dyn View> {
        self.views.front().map(|v| &**v)
    }

    pub fn peek_mut(&mut self) -> Option<&mut (dyn View + 'static)> {
        self.views.front_mut().map(|v| &mut **v)
    }

    pub fn top_location(&self) -> Option<&Location> {
        self.peek()?.location()
    }

    pub fn depth(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Finishes every view, top first, then empties the stack.
    pub fn clear(&mut self) {
        if !self.views.is_empty() {
            log::trace!("finishing {} views", self.views.len());
        }
        for view in self.views.iter_mut() {
            view.on_finish();
        }
        self.views.clear();
    }

    /// Walks the stack top to bottom, or bottom to top when `backward`.
    pub fn all(&self, backward: bool) -> Views<'_> {
        Views {
            inner: self.views.iter(),
            backward,
        }
    }
}

impl std::fmt::Debug for ViewStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.all(false)).finish()
    }
}

pub struct Views<'a> {
    inner: vec_deque::Iter<'a, Box<dyn View>>,
    backward: bool,
}

impl<'a> Iterator for Views<'a> {
    type Item = &'a dyn View;

    fn next(&mut self) -> Option<Self::Item> {
        let next = if self.backward {
            self.inner.next_back()
        } else {
            self.inner.next()
        };
        next.map(|v| &**v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Views<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let next = if self.backward {
            self.inner.next()
        } else {
            self.inner.next_back()
        };
        next.map(|v| &**v)
    }
}

impl ExactSizeIterator for Views<'_> {}

impl FusedIterator for Views<'_> {}
