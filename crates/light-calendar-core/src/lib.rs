//! Toolkit primitives for light-calendar.
//!
//! This crate holds the pieces the calendar widgets are built on:
//!
//! - **Signal/Slot System**: Synchronous observer notifications ([`Signal`])
//! - **Property System**: Change-detecting value cells ([`Property`])
//! - **Geometry**: Points, sizes, rectangles and measurement specs
//! - **Colors**: Plain colors and state-dependent colors ([`StateColor`])
//! - **Painting**: The [`Painter`] trait and a recording [`DisplayList`]
//! - **Widgets**: The [`Widget`] trait and [`ViewId`] identities
//!
//! # Example
//!
//! A style record that tells its observers whenever a setter runs:
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use light_calendar_core::{Property, Signal};
//!
//! struct HeaderStyle {
//!     text_size: Property<f32>,
//!     changed: Signal<()>,
//! }
//!
//! let style = HeaderStyle {
//!     text_size: Property::new(12.0),
//!     changed: Signal::new(),
//! };
//!
//! let dirty = Arc::new(AtomicBool::new(false));
//! let flag = dirty.clone();
//! let id = style.changed.connect(move |_| flag.store(true, Ordering::SeqCst));
//!
//! if style.text_size.set(16.0) {
//!     style.changed.emit(());
//! }
//! assert!(dirty.load(Ordering::SeqCst));
//! style.changed.disconnect(id);
//! ```

pub mod color;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod property;
pub mod signal;
pub mod widget;

pub use color::{Color, StateColor, ViewState};
pub use geometry::{MeasureSpec, Point, Rect, Size, SizeHint};
pub use paint::{DisplayList, DrawCommand, Painter, TextAlign};
pub use property::Property;
pub use signal::{ConnectionId, Signal};
pub use widget::{ViewId, Widget};
