//! # Views, Locations and Intents
//!
//! tabnav routes navigation requests to lazily constructed screens. This
//! crate holds the vocabulary shared by the router and by applications:
//!
//! - [`ViewId`] names a screen inside a namespace.
//! - [`Location`] is the comparable address of a screen with parameters.
//! - [`Intent`] is a request to navigate somewhere.
//! - [`View`] is what a screen implements to take part in navigation.
//! - [`ViewStack`] is the back-history of one tab.
//!
//! ## Declaring a view
//!
//! ```rust
//! use tabnav_core::*;
//!
//! const NOTE: ViewId = view_id!("note");
//!
//! let mut view = SimpleView::new(NOTE, "Note", |intent| {
//!     log::info!("opening note {:?}", intent.params.get_str("id"));
//!     Ok(())
//! });
//!
//! let intent = Intent::new(NOTE).with_param("id", 7);
//! view.on_nav_to(&intent).unwrap();
//! assert_eq!(view.location(), Some(&intent.location()));
//! ```
//!
//! ## Stacks
//!
//! A [`ViewStack`] keeps the top view at the front. `pop` hands the view back
//! without finishing it; `clear` finishes every view, top first.
//!
//! ```rust
//! use tabnav_core::*;
//!
//! let mut stack = ViewStack::new();
//! stack.push(Box::new(EmptyView::new())).unwrap();
//! assert_eq!(stack.depth(), 1);
//! stack.clear();
//! assert!(stack.is_empty());
//! ```

pub mod error;
pub mod id;
pub mod intent;
pub mod location;
pub mod params;
pub mod stack;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod view;

pub use error::*;
pub use id::*;
pub use intent::*;
pub use location::*;
pub use params::*;
pub use stack::*;
pub use view::*;
