//! CalendarCarousel: a horizontally paged month calendar.
//!
//! The carousel shows one month at a time between `month_from` and
//! `month_to` (both inclusive). Swiping settles on a neighbouring month;
//! tapping a day selects it. Both events reach the host through a single
//! [`OnStateUpdatedListener`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use light_calendar::{CalendarCarousel, MonthView, OnStateUpdatedListener};
//! use light_calendar_core::MeasureSpec;
//!
//! struct Host;
//!
//! impl OnStateUpdatedListener for Host {
//!     fn on_month_selected(&self, date: NaiveDate, _view: &MonthView) {
//!         println!("showing {}", date.format("%B %Y"));
//!     }
//!
//!     fn on_date_selected(&self, date: NaiveDate) {
//!         println!("picked {date}");
//!     }
//! }
//!
//! let today = NaiveDate::from_ymd_opt(2016, 8, 18).unwrap();
//! let mut carousel = CalendarCarousel::for_today(today);
//! let host: Arc<dyn OnStateUpdatedListener> = Arc::new(Host);
//! carousel.set_on_state_updated_listener(&host);
//!
//! carousel.measure(MeasureSpec::Exactly(360.0), MeasureSpec::Unspecified);
//! assert_eq!(carousel.month_current(), NaiveDate::from_ymd_opt(2016, 8, 1).unwrap());
//! ```

use std::sync::Arc;

use chrono::{Local, NaiveDate, Weekday};
use light_calendar_core::logging::targets;
use light_calendar_core::paint::Painter;
use light_calendar_core::{Color, MeasureSpec, Point, Size, SizeHint, StateColor, ViewId, Widget};
use parking_lot::RwLock;

use crate::adapter::{ListenerSlot, MonthPagerAdapter};
use crate::attributes::CarouselAttributes;
use crate::date::{CalendarDateExt, default_range};
use crate::dimension::{Dimension, DisplayMetrics};
use crate::error::{Error, Result};
use crate::month_view::MonthView;
use crate::pager::{Pager, PagerAdapter, ScrollState};
use crate::settings::CalendarSettings;

/// Host callbacks for a [`CalendarCarousel`].
pub trait OnStateUpdatedListener: Send + Sync {
    /// A month became the settled page, or the settled page's view was
    /// built for the first time.
    fn on_month_selected(&self, date: NaiveDate, view: &MonthView);

    /// The user tapped a day.
    fn on_date_selected(&self, date: NaiveDate);
}

/// A paged month calendar.
///
/// The carousel keeps only a weak reference to its listener; the host
/// owns it.
pub struct CalendarCarousel {
    id: ViewId,
    settings: Arc<CalendarSettings>,
    pager: Pager,
    adapter: MonthPagerAdapter,
    listener: ListenerSlot,
    metrics: DisplayMetrics,
}

impl Default for CalendarCarousel {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarCarousel {
    /// Create a carousel over the current fiscal year, showing this month.
    pub fn new() -> Self {
        Self::for_today(Local::now().date_naive())
    }

    /// Create a carousel over the fiscal year containing `today`, showing
    /// `today`'s month and highlighting `today`.
    pub fn for_today(today: NaiveDate) -> Self {
        let settings = Arc::new(CalendarSettings::new());
        let listener: ListenerSlot = Arc::new(RwLock::new(None));
        let (month_from, month_to) = default_range(today);

        let mut adapter =
            MonthPagerAdapter::new(settings.clone(), month_from, month_to, listener.clone());
        adapter.set_today(Some(today));

        let mut carousel = Self {
            id: ViewId::next(),
            settings,
            pager: Pager::new(),
            adapter,
            listener,
            metrics: DisplayMetrics::default(),
        };
        carousel.set_month_current(today);
        carousel
    }

    /// Create a carousel styled by host-declared attributes.
    pub fn from_attributes(attributes: &CarouselAttributes, metrics: DisplayMetrics) -> Self {
        let mut carousel = Self::new();
        carousel.metrics = metrics;
        carousel.apply_attributes(attributes);
        carousel
    }

    /// Apply every attribute that is set; unset ones keep their current value.
    pub fn apply_attributes(&mut self, attributes: &CarouselAttributes) {
        if let Some(size) = attributes.week_day_text_size {
            self.set_week_day_text_size(size);
        }
        if let Some(size) = attributes.day_text_size {
            self.set_day_text_size(size);
        }
        if let Some(color) = attributes.text_color {
            self.set_text_state_color(color);
        }
        if let Some(color) = attributes.selection_color {
            self.set_selection_color(color);
        }
        if let Some(color) = attributes.accent_color {
            self.set_accent_color(color);
        }
        if let Some(day) = attributes.first_day_of_week {
            self.set_first_day_of_week(day);
        }
        if let Some(limit) = attributes.offscreen_page_limit {
            self.set_offscreen_page_limit(limit);
        }
    }

    // =========================================================================
    // Month Range
    // =========================================================================

    /// The month of the settled page.
    pub fn month_current(&self) -> NaiveDate {
        self.adapter.date_for_position(self.pager.current_item() as i64)
    }

    /// Show the month containing `date`.
    ///
    /// Dates outside the range are clamped to the first or last month.
    pub fn set_month_current(&mut self, date: NaiveDate) {
        let position = self.adapter.position_for_date(date);
        self.set_current_position(position);
    }

    /// First month of the range.
    pub fn month_from(&self) -> NaiveDate {
        self.adapter.month_from()
    }

    /// Set the first month and rebuild every page.
    ///
    /// Not validated against `month_to`; a reversed range has no pages.
    pub fn set_month_from(&mut self, date: NaiveDate) {
        let month_to = self.adapter.month_to();
        self.adapter.set_range(date, month_to);
        self.invalidate();
    }

    /// Last month of the range.
    pub fn month_to(&self) -> NaiveDate {
        self.adapter.month_to()
    }

    /// Set the last month and rebuild every page.
    ///
    /// Not validated against `month_from`; a reversed range has no pages.
    pub fn set_month_to(&mut self, date: NaiveDate) {
        let month_from = self.adapter.month_from();
        self.adapter.set_range(month_from, date);
        self.invalidate();
    }

    /// Set both ends of the range at once, rejecting a reversed range.
    pub fn set_month_range(&mut self, month_from: NaiveDate, month_to: NaiveDate) -> Result<()> {
        let (from, to) = (month_from.first_of_month(), month_to.first_of_month());
        if to < from {
            return Err(Error::InvalidRange { from, to });
        }
        self.adapter.set_range(from, to);
        self.invalidate();
        Ok(())
    }

    /// Number of months in the range.
    pub fn count(&self) -> usize {
        self.adapter.count()
    }

    fn invalidate(&mut self) {
        if let Some(settled) = self.pager.data_set_changed(&mut self.adapter) {
            self.adapter.select_page(settled);
        }
    }

    fn set_current_position(&mut self, position: i64) -> bool {
        match self.pager.set_current_item(&mut self.adapter, position) {
            Some(settled) => {
                self.on_page_settled(settled);
                true
            }
            None => false,
        }
    }

    fn on_page_settled(&mut self, position: usize) {
        tracing::debug!(target: targets::CAROUSEL, position, "page settled");
        self.adapter.select_page(position);
    }

    // =========================================================================
    // Listener and Lookup
    // =========================================================================

    /// Register the host listener, replacing any previous one.
    pub fn set_on_state_updated_listener(&mut self, listener: &Arc<dyn OnStateUpdatedListener>) {
        *self.listener.write() = Some(Arc::downgrade(listener));
    }

    /// The month shown at `position`.
    pub fn date_for_position(&self, position: i64) -> NaiveDate {
        self.adapter.date_for_position(position)
    }

    /// The page of the month containing `date`. May lie outside `0..count()`.
    pub fn position_for_date(&self, date: NaiveDate) -> i64 {
        self.adapter.position_for_date(date)
    }

    /// The live month view at `position`, or `None` if that page is not
    /// materialized.
    pub fn month_view_for_position(&self, position: i64) -> Option<&MonthView> {
        usize::try_from(position)
            .ok()
            .and_then(|position| self.adapter.view(position))
    }

    /// Select `date` in its month view. Does nothing if that month is not
    /// materialized.
    pub fn set_selected_date(&mut self, date: NaiveDate) {
        let position = self.adapter.position_for_date(date);
        let view = usize::try_from(position)
            .ok()
            .and_then(|position| self.adapter.view_mut(position));
        match view {
            Some(view) => {
                view.set_selected_date(date);
            }
            None => {
                tracing::debug!(target: targets::CAROUSEL, %date, "month not materialized, selection dropped");
            }
        }
    }

    /// The page adapter.
    pub fn adapter(&self) -> &MonthPagerAdapter {
        &self.adapter
    }

    /// The paging container.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Last settled page.
    pub fn selected_page(&self) -> usize {
        self.adapter.selected_page()
    }

    // =========================================================================
    // Style
    // =========================================================================

    /// The shared style settings.
    pub fn settings(&self) -> &Arc<CalendarSettings> {
        &self.settings
    }

    /// Metrics used to convert dimensions.
    pub fn display_metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    /// Metrics for later dimension setters. Sizes already set are not
    /// converted again.
    pub fn set_display_metrics(&mut self, metrics: DisplayMetrics) {
        self.metrics = metrics;
    }

    pub fn set_week_day_text_size(&mut self, size: Dimension) {
        self.set_week_day_raw_text_size(size.to_px(&self.metrics));
    }

    pub fn set_day_text_size(&mut self, size: Dimension) {
        self.set_day_raw_text_size(size.to_px(&self.metrics));
    }

    /// Week-day header text size in pixels. Non-finite or negative sizes
    /// are ignored.
    pub fn set_week_day_raw_text_size(&mut self, size: f32) {
        self.settings.week_day_view.set_text_size(size);
    }

    /// Day text size in pixels. Non-finite or negative sizes are ignored.
    pub fn set_day_raw_text_size(&mut self, size: f32) {
        self.settings.day_view.set_text_size(size);
    }

    /// One text color for the header and days in every state.
    pub fn set_text_color(&mut self, color: Color) {
        self.set_text_state_color(StateColor::single(color));
    }

    pub fn set_text_state_color(&mut self, color: StateColor) {
        self.settings.week_day_view.set_text_state_color(color);
        self.settings.day_view.set_text_state_color(color);
    }

    /// Background circle of the selected day.
    pub fn set_selection_color(&mut self, color: StateColor) {
        self.settings.day_view.set_circle_color(color);
    }

    /// Text color of today's date.
    pub fn set_accent_color(&mut self, color: StateColor) {
        self.settings.day_view.set_accent_color(color);
    }

    pub fn set_first_day_of_week(&mut self, day: Weekday) {
        self.settings.set_first_day_of_week(day);
    }

    /// Months kept materialized on each side of the settled one.
    pub fn set_offscreen_page_limit(&mut self, limit: usize) {
        self.pager.set_offscreen_page_limit(&mut self.adapter, limit);
    }

    /// Whether any live month needs repainting.
    pub fn needs_repaint(&self) -> bool {
        self.adapter.views().any(|(_, view)| view.needs_repaint())
    }

    // =========================================================================
    // Layout and Input
    // =========================================================================

    /// Measure the carousel.
    ///
    /// Unless the height is fixed by `height_spec`, the carousel is as tall
    /// as its tallest materialized month. The first call materializes pages.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let size = self.pager.measure(&mut self.adapter, width_spec, height_spec);
        tracing::trace!(target: targets::CAROUSEL, width = size.width, height = size.height, "measured");
        size
    }

    /// Current drag state.
    pub fn scroll_state(&self) -> ScrollState {
        self.pager.scroll_state()
    }

    pub fn begin_drag(&mut self) {
        self.pager.begin_drag();
    }

    pub fn drag_by(&mut self, dx: f32) {
        self.pager.drag_by(&self.adapter, dx);
    }

    /// Release a drag. Returns the newly settled month, if the page changed.
    pub fn end_drag(&mut self, velocity: f32) -> Option<NaiveDate> {
        let settled = self.pager.end_drag(&mut self.adapter, velocity)?;
        self.on_page_settled(settled);
        Some(self.month_current())
    }

    /// Settle on the following month. Returns whether the page changed.
    pub fn show_next_month(&mut self) -> bool {
        self.set_current_position(self.pager.current_item() as i64 + 1)
    }

    /// Settle on the preceding month. Returns whether the page changed.
    pub fn show_previous_month(&mut self) -> bool {
        self.set_current_position(self.pager.current_item() as i64 - 1)
    }

    /// Tap at `point` in carousel coordinates. Returns whether a day was
    /// selected.
    pub fn handle_tap(&mut self, point: Point) -> bool {
        if self.pager.scroll_state() != ScrollState::Idle {
            return false;
        }
        let Some((position, local)) = self.pager.item_at(point) else {
            return false;
        };
        self.adapter
            .view_mut(position)
            .is_some_and(|view| view.handle_tap(local))
    }

    // =========================================================================
    // Painting
    // =========================================================================

    pub fn view_id(&self) -> ViewId {
        self.id
    }

    /// The last measured size, or the current month's preferred size before
    /// the first layout.
    pub fn size_hint(&self) -> SizeHint {
        if self.pager.is_laid_out() {
            return SizeHint::new(self.pager.size());
        }
        self.adapter
            .view(self.pager.current_item())
            .map(|view| view.size_hint())
            .unwrap_or_default()
    }

    /// Paint the settled month, plus the neighbour a drag is revealing.
    pub fn paint(&self, painter: &mut dyn Painter) {
        self.pager.paint(&self.adapter, painter);
    }
}

impl std::fmt::Debug for CalendarCarousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarCarousel")
            .field("id", &self.id)
            .field("month_from", &self.adapter.month_from())
            .field("month_to", &self.adapter.month_to())
            .field("current_item", &self.pager.current_item())
            .finish()
    }
}

static_assertions::assert_impl_all!(CalendarCarousel: Send, Sync);
