//! # Animation engine, host seam, and view model
//!
//! Furl widgets own their state machines but defer everything else to a
//! host environment. This crate holds the three pieces that make that
//! split work:
//!
//! - [`host::Host`] — what the environment must provide: next-frame
//!   callback scheduling, rendered-bounds measurement of a mounted subtree
//!   (one frame of latency), and a monotonic clock. [`host::ManualHost`]
//!   is a deterministic implementation you can pump by hand; tests and
//!   headless runs are built on it.
//! - [`animation::AnimatedValue`] — a shared value driven toward a target
//!   by timed, eased runs stepped on host frames. Each run delivers one
//!   [`animation::Completion`]; starting a new run supersedes the old one,
//!   which completes with `finished: false`.
//! - [`view::View`] / [`modifier::Modifier`] — the minimal render-tree
//!   contract widgets hand back to the host: clipping containers,
//!   measurable content nodes, opacity/position/pointer gating, and
//!   layout-change observation.
//!
//! Driving a value by hand:
//!
//! ```rust
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use furl_core::prelude::*;
//!
//! let host = Rc::new(ManualHost::new());
//! let driver: Rc<dyn Host> = host.clone();
//!
//! let height = AnimatedValue::new(0.0f32);
//! height.animate_to(&driver, 120.0, AnimationSpec::default(), |_| {});
//!
//! host.run_until_idle(Duration::from_millis(16));
//! assert_eq!(height.get(), 120.0);
//! ```
//!
//! Everything here is single-threaded and callback-driven; handles are
//! `Rc`-shared and cheap to clone.

pub mod animation;
pub mod geometry;
pub mod host;
pub mod modifier;
pub mod prelude;
pub mod tests;
pub mod view;

pub use geometry::*;
pub use modifier::*;
pub use prelude::*;
pub use view::*;
