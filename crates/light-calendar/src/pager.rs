//! Pager: a horizontally paged container.
//!
//! The pager shows one page at a time and keeps a small window of pages
//! around the current one materialized. It never creates page content
//! itself; a [`PagerAdapter`] builds and destroys pages on request and owns
//! them. The pager only remembers which positions are live and the opaque
//! [`ViewId`] token the adapter returned for each.
//!
//! Pages are materialized lazily: nothing is instantiated until the first
//! [`Pager::measure`] call (the first layout pass). Before that,
//! [`Pager::set_current_item`] only records the requested page.
//!
//! # Example
//!
//! ```ignore
//! let mut pager = Pager::new();
//! pager.set_current_item(&mut adapter, 3);
//! let size = pager.measure(&mut adapter, MeasureSpec::Exactly(360.0), MeasureSpec::Unspecified);
//!
//! pager.begin_drag();
//! pager.drag_by(-250.0);
//! if let Some(settled) = pager.end_drag(&mut adapter, 0.0) {
//!     println!("now showing page {settled}");
//! }
//! ```

use std::collections::BTreeMap;

use light_calendar_core::logging::targets;
use light_calendar_core::paint::{Painter, Translated};
use light_calendar_core::{MeasureSpec, Point, Rect, Signal, Size, ViewId, Widget};

/// Default number of pages kept on each side of the current page.
pub const DEFAULT_OFFSCREEN_PAGE_LIMIT: usize = 1;

/// Fling speed (pixels per second) above which a drag always changes page.
pub const MIN_FLING_VELOCITY: f32 = 400.0;

/// Fraction of the page width a slow drag must cover to change page.
pub const PAGE_CHANGE_THRESHOLD: f32 = 0.5;

/// Page lifecycle contract between a [`Pager`] and its content.
pub trait PagerAdapter {
    /// Number of pages.
    fn count(&self) -> usize;

    /// Build the page at `position` and return its token.
    fn instantiate_item(&mut self, position: usize) -> ViewId;

    /// Discard the page at `position` previously returned as `token`.
    fn destroy_item(&mut self, position: usize, token: ViewId);

    /// Whether `token` identifies the page currently stored for `position`.
    fn is_view_from_object(&self, position: usize, token: ViewId) -> bool;

    /// The live page at `position`, if any.
    fn item_widget(&self, position: usize) -> Option<&dyn Widget>;

    /// Lay out the page at `position` at `width` pixels.
    fn resize_item(&mut self, _position: usize, _width: f32) {}
}

/// Drag state of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// No drag in progress; the current page is settled.
    #[default]
    Idle,
    /// The user is dragging.
    Dragging,
    /// A released drag is snapping to a page.
    Settling,
}

/// A horizontally paged container.
///
/// # Signals
///
/// - `scroll_state_changed(ScrollState)`: Emitted when the drag state changes
pub struct Pager {
    /// Index of the settled page.
    current_item: usize,

    /// Pages kept materialized on each side of the current page.
    offscreen_page_limit: usize,

    /// Materialized pages and their adapter tokens.
    items: BTreeMap<usize, ViewId>,

    /// Whether the first layout pass has happened.
    laid_out: bool,

    /// Size from the last measure pass.
    size: Size,

    /// Horizontal drag offset; positive reveals the previous page.
    scroll_offset: f32,

    scroll_state: ScrollState,

    /// Signal emitted when the drag state changes.
    pub scroll_state_changed: Signal<ScrollState>,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    /// Create an empty pager.
    pub fn new() -> Self {
        Self {
            current_item: 0,
            offscreen_page_limit: DEFAULT_OFFSCREEN_PAGE_LIMIT,
            items: BTreeMap::new(),
            laid_out: false,
            size: Size::ZERO,
            scroll_offset: 0.0,
            scroll_state: ScrollState::Idle,
            scroll_state_changed: Signal::new(),
        }
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// Index of the settled page.
    pub fn current_item(&self) -> usize {
        self.current_item
    }

    /// Pages kept on each side of the current page.
    pub fn offscreen_page_limit(&self) -> usize {
        self.offscreen_page_limit
    }

    /// Whether the first layout pass has happened.
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Size from the last measure pass.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current drag state.
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    /// Current drag offset in pixels.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Positions of all materialized pages in ascending order.
    pub fn materialized(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.keys().copied()
    }

    /// Token of the page at `position`, if materialized.
    pub fn token_for(&self, position: usize) -> Option<ViewId> {
        self.items.get(&position).copied()
    }

    /// Position of the materialized page identified by `token`.
    pub fn position_of<A: PagerAdapter + ?Sized>(
        &self,
        adapter: &A,
        token: ViewId,
    ) -> Option<usize> {
        self.items
            .iter()
            .find(|&(&position, &stored)| {
                stored == token && adapter.is_view_from_object(position, token)
            })
            .map(|(&position, _)| position)
    }

    // =========================================================================
    // Page Management
    // =========================================================================

    /// Set how many pages stay materialized on each side of the current one.
    ///
    /// Values below one are raised to one.
    pub fn set_offscreen_page_limit<A: PagerAdapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        limit: usize,
    ) {
        let limit = limit.max(1);
        if limit != self.offscreen_page_limit {
            self.offscreen_page_limit = limit;
            if self.laid_out {
                self.populate(adapter);
            }
        }
    }

    /// Materialize the window around the current page and destroy pages that
    /// fell out of it.
    pub fn populate<A: PagerAdapter + ?Sized>(&mut self, adapter: &mut A) {
        let count = adapter.count();
        if count == 0 {
            self.destroy_all(adapter);
            return;
        }

        let current = self.current_item.min(count - 1);
        let start = current.saturating_sub(self.offscreen_page_limit);
        let end = current.saturating_add(self.offscreen_page_limit).min(count - 1);

        let stale: Vec<usize> = self
            .items
            .keys()
            .copied()
            .filter(|position| *position < start || *position > end)
            .collect();
        for position in stale {
            self.destroy_item(adapter, position);
        }

        // The current page first, so it is ready before its neighbours.
        let order = std::iter::once(current).chain((start..=end).filter(|p| *p != current));
        for position in order {
            if self.items.contains_key(&position) {
                continue;
            }
            let token = adapter.instantiate_item(position);
            debug_assert!(adapter.is_view_from_object(position, token));
            tracing::debug!(target: targets::PAGER, position, ?token, "page instantiated");
            self.items.insert(position, token);
            if self.size.width > 0.0 {
                adapter.resize_item(position, self.size.width);
            }
        }
    }

    fn destroy_item<A: PagerAdapter + ?Sized>(&mut self, adapter: &mut A, position: usize) {
        if let Some(token) = self.items.remove(&position) {
            tracing::debug!(target: targets::PAGER, position, ?token, "page destroyed");
            adapter.destroy_item(position, token);
        }
    }

    fn destroy_all<A: PagerAdapter + ?Sized>(&mut self, adapter: &mut A) {
        let positions: Vec<usize> = self.items.keys().copied().collect();
        for position in positions {
            self.destroy_item(adapter, position);
        }
    }

    /// Jump to `item`.
    ///
    /// The index is clamped to `[0, count - 1]`; with no pages the call is
    /// ignored. After the first layout the window is repopulated before the
    /// new page is reported. Returns the newly settled index if it changed.
    pub fn set_current_item<A: PagerAdapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        item: i64,
    ) -> Option<usize> {
        let count = adapter.count();
        if count == 0 {
            tracing::debug!(target: targets::PAGER, item, "no pages, ignoring current item");
            return None;
        }

        let last = (count - 1) as i64;
        let clamped = item.clamp(0, last) as usize;
        if clamped as i64 != item {
            tracing::debug!(target: targets::PAGER, item, clamped, "current item clamped to page range");
        }

        let previous = self.current_item;
        self.current_item = clamped;
        self.scroll_offset = 0.0;
        if self.laid_out {
            self.populate(adapter);
        }

        (previous != clamped).then_some(clamped)
    }

    /// Discard every page because the adapter's data changed.
    ///
    /// The current index is clamped to the new page count and, once laid
    /// out, the window is rebuilt. Returns the current index if clamping
    /// changed it.
    pub fn data_set_changed<A: PagerAdapter + ?Sized>(&mut self, adapter: &mut A) -> Option<usize> {
        self.destroy_all(adapter);
        self.scroll_offset = 0.0;

        let count = adapter.count();
        let previous = self.current_item;
        self.current_item = self.current_item.min(count.saturating_sub(1));
        tracing::debug!(target: targets::PAGER, count, current = self.current_item, "data set changed");

        if self.laid_out {
            self.populate(adapter);
        }

        (previous != self.current_item).then_some(self.current_item)
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Measure the pager and its materialized pages.
    ///
    /// The first call is the first layout pass and materializes pages. When
    /// the height spec lets the pager choose, its height is the tallest
    /// materialized page, so months with more weeks make the pager taller.
    pub fn measure<A: PagerAdapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> Size {
        if !self.laid_out {
            self.laid_out = true;
            self.populate(adapter);
        }

        let preferred_width = self
            .items
            .keys()
            .filter_map(|position| adapter.item_widget(*position))
            .map(|widget| widget.size_hint().preferred.width)
            .fold(0.0f32, f32::max);
        let width = width_spec.resolve(preferred_width);

        let positions: Vec<usize> = self.items.keys().copied().collect();
        for position in &positions {
            adapter.resize_item(*position, width);
        }

        let height = if height_spec.wraps_content() {
            let tallest = positions
                .iter()
                .filter_map(|position| adapter.item_widget(*position))
                .map(|widget| widget.measure(MeasureSpec::Exactly(width), height_spec).height)
                .fold(0.0f32, f32::max);
            height_spec.resolve(tallest)
        } else {
            height_spec.resolve(0.0)
        };

        self.size = Size::new(width, height);
        self.size
    }

    // =========================================================================
    // Dragging
    // =========================================================================

    fn set_scroll_state(&mut self, state: ScrollState) {
        if self.scroll_state != state {
            self.scroll_state = state;
            self.scroll_state_changed.emit(state);
        }
    }

    /// Start a drag gesture.
    pub fn begin_drag(&mut self) {
        self.set_scroll_state(ScrollState::Dragging);
    }

    /// Move the drag by `dx` pixels (positive moves content right).
    ///
    /// The offset cannot reveal pages before the first or after the last,
    /// and never exceeds one page width.
    pub fn drag_by<A: PagerAdapter + ?Sized>(&mut self, adapter: &A, dx: f32) {
        if self.scroll_state != ScrollState::Dragging {
            return;
        }
        let count = adapter.count();
        let width = self.size.width;
        let max = if self.current_item == 0 { 0.0 } else { width };
        let min = if self.current_item + 1 >= count { 0.0 } else { -width };
        self.scroll_offset = (self.scroll_offset + dx).clamp(min, max);
    }

    /// Release the drag with a horizontal `velocity` in pixels per second.
    ///
    /// A fast fling moves one page in its direction; a slow release changes
    /// page only when dragged past half the page width. Returns the newly
    /// settled index if it changed.
    pub fn end_drag<A: PagerAdapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        velocity: f32,
    ) -> Option<usize> {
        if self.scroll_state != ScrollState::Dragging {
            return None;
        }
        self.set_scroll_state(ScrollState::Settling);

        let width = self.size.width;
        let direction = if velocity.abs() >= MIN_FLING_VELOCITY {
            -velocity.signum()
        } else if width > 0.0 && self.scroll_offset.abs() > width * PAGE_CHANGE_THRESHOLD {
            -self.scroll_offset.signum()
        } else {
            0.0
        };

        let target = self.current_item as i64 + direction as i64;
        let settled = self.set_current_item(adapter, target);
        self.scroll_offset = 0.0;
        self.set_scroll_state(ScrollState::Idle);
        settled
    }

    // =========================================================================
    // Hit Testing and Painting
    // =========================================================================

    /// Horizontal offset of the page at `position` relative to the viewport.
    pub fn page_offset(&self, position: usize) -> f32 {
        (position as f32 - self.current_item as f32) * self.size.width + self.scroll_offset
    }

    /// Materialized pages that intersect the viewport.
    pub fn visible_items(&self) -> Vec<usize> {
        let width = self.size.width;
        self.items
            .keys()
            .copied()
            .filter(|position| {
                let x = self.page_offset(*position);
                x < width && x + width > 0.0
            })
            .collect()
    }

    /// The page under `point` and the point in that page's coordinates.
    pub fn item_at(&self, point: Point) -> Option<(usize, Point)> {
        self.visible_items().into_iter().find_map(|position| {
            let x = self.page_offset(position);
            Rect::new(x, 0.0, self.size.width, self.size.height)
                .contains(point)
                .then(|| (position, point.offset(-x, 0.0)))
        })
    }

    /// Paint every visible page at its offset.
    pub fn paint<A: PagerAdapter + ?Sized>(&self, adapter: &A, painter: &mut dyn Painter) {
        for position in self.visible_items() {
            if let Some(widget) = adapter.item_widget(position) {
                let mut translated =
                    Translated::new(&mut *painter, self.page_offset(position), 0.0);
                widget.paint(&mut translated);
            }
        }
    }
}

impl std::fmt::Debug for Pager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("current_item", &self.current_item)
            .field("offscreen_page_limit", &self.offscreen_page_limit)
            .field("items", &self.items)
            .field("scroll_state", &self.scroll_state)
            .finish()
    }
}
