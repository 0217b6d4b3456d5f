//! # Tabs, back-stacks and modals
//!
//! [`ViewManager`] turns [`Intent`]s into view-stack changes, the way a mobile
//! activity manager or a browser's tab strip does:
//!
//! - each tab is a [`ViewStack`] with its own back-history;
//! - one extra stack holds modal overlays;
//! - views are built on demand by providers registered per [`ViewId`].
//!
//! ## Routing
//!
//! A non-modal intent lands, in order of preference:
//!
//! 1. in a new tab when no tab exists yet, or when the intent asks for one
//!    (`require_new`);
//! 2. in the tab whose top view already shows the intent's [`Location`];
//! 3. on top of the current tab when the intent's referer is the current
//!    view (drill-down, e.g. list → detail);
//! 4. in the tab whose top view has the target id;
//! 5. otherwise in a new tab.
//!
//! The destination's top view is reused if its location is identical;
//! otherwise the provider builds a fresh view which is pushed. Either way the
//! view then receives `on_nav_to`.
//!
//! ```rust
//! use tabnav_router::*;
//!
//! const LIST: ViewId = view_id!("list");
//! const ITEM: ViewId = view_id!("item");
//!
//! let vm = ViewManager::headless();
//! vm.register(LIST, || simple(LIST, "List", |_| Ok(()))).unwrap();
//! vm.register(ITEM, || simple(ITEM, "Item", |_| Ok(()))).unwrap();
//!
//! vm.request_switch(Intent::new(LIST)).unwrap();
//! vm.request_switch(Intent::new(ITEM).with_param("id", 3).with_referer(LIST.location()))
//!     .unwrap();
//!
//! assert_eq!(vm.tab_count(), 1);
//! assert_eq!(vm.current_depth(), 2);
//! ```
//!
//! ## Threads
//!
//! The manager is `Send + Sync`. Background work (a file dialog finishing, a
//! download completing) can call `request_switch` directly; the render host is
//! asked to repaint from that thread.

pub mod host;
pub mod link;
pub mod manager;
pub mod options;
pub mod snapshot;

pub use host::{NoopHost, RenderHost};
pub use link::*;
pub use manager::*;
pub use options::*;
pub use snapshot::*;
pub use tabnav_core::*;
