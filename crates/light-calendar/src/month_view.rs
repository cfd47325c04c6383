//! MonthView: the day grid of a single month.
//!
//! A month view paints a week-day header row followed by one row per
//! calendar week. Only days of its own month are shown; leading and trailing
//! cells are left empty. All sizes and colors are read from the shared
//! [`CalendarSettings`] at paint time.
//!
//! # Signals
//!
//! - `date_selected(NaiveDate)`: Emitted when the user taps a day

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{Datelike, Local, NaiveDate, Weekday};
use light_calendar_core::logging::targets;
use light_calendar_core::paint::Painter;
use light_calendar_core::{
    ConnectionId, Point, Rect, Signal, SizeHint, TextAlign, ViewId, ViewState, Widget,
};

use crate::date::CalendarDateExt;
use crate::settings::CalendarSettings;

/// Week-day header row height as a multiple of its text size.
const WEEK_DAY_ROW_FACTOR: f32 = 2.0;
/// Day row height (and preferred cell width) as a multiple of the day text size.
const DAY_ROW_FACTOR: f32 = 3.0;
/// Gap between a cell edge and its selection circle.
const CIRCLE_INSET: f32 = 2.0;

const WEEK_DAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A grid of the days of one month.
pub struct MonthView {
    id: ViewId,

    /// First day of the displayed month.
    month: NaiveDate,

    /// Date rendered in the accent color.
    today: Option<NaiveDate>,

    /// Shared style.
    settings: Arc<CalendarSettings>,

    /// Currently selected day, always inside `month`.
    selected_date: Option<NaiveDate>,

    /// Day under an active press.
    pressed_date: Option<NaiveDate>,

    /// Width assigned by the last layout pass, if any.
    width: Option<f32>,

    /// Set by settings notifications and state changes, cleared by `paint`.
    dirty: Arc<AtomicBool>,

    week_day_connection: ConnectionId,
    day_connection: ConnectionId,

    /// Signal emitted when the user selects a day.
    pub date_selected: Signal<NaiveDate>,
}

impl MonthView {
    /// Create a view for the month containing `month`.
    pub fn new(settings: Arc<CalendarSettings>, month: NaiveDate) -> Self {
        let dirty = Arc::new(AtomicBool::new(true));

        let flag = dirty.clone();
        let week_day_connection = settings.week_day_view.settings_changed.connect(move |_| {
            flag.store(true, Ordering::SeqCst);
        });
        let flag = dirty.clone();
        let day_connection = settings.day_view.settings_changed.connect(move |_| {
            flag.store(true, Ordering::SeqCst);
        });

        Self {
            id: ViewId::next(),
            month: month.first_of_month(),
            today: Some(Local::now().date_naive()),
            settings,
            selected_date: None,
            pressed_date: None,
            width: None,
            dirty,
            week_day_connection,
            day_connection,
            date_selected: Signal::new(),
        }
    }

    /// Set the date drawn in the accent color, or `None` for no highlight.
    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.today = today;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// First day of the displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// The shared settings this view paints with.
    pub fn settings(&self) -> &Arc<CalendarSettings> {
        &self.settings
    }

    /// Currently selected day.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Whether the view has changed since it was last painted.
    pub fn needs_repaint(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Select `date` without emitting `date_selected`.
    ///
    /// Dates outside this view's month are ignored. Returns whether the
    /// selection was applied.
    pub fn set_selected_date(&mut self, date: NaiveDate) -> bool {
        if !date.is_same_month(self.month) {
            return false;
        }
        if self.selected_date != Some(date) {
            self.selected_date = Some(date);
            self.update();
        }
        true
    }

    /// Remove the selection.
    pub fn clear_selection(&mut self) {
        if self.selected_date.take().is_some() {
            self.update();
        }
    }

    fn update(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Assign the width this view is laid out at.
    pub fn resize(&mut self, width: f32) {
        if self.width != Some(width) {
            self.width = Some(width);
            self.update();
        }
    }

    fn first_day_of_week(&self) -> Weekday {
        self.settings.first_day_of_week()
    }

    fn week_day_row_height(&self) -> f32 {
        self.settings.week_day_view.text_size() * WEEK_DAY_ROW_FACTOR
    }

    fn day_row_height(&self) -> f32 {
        self.settings.day_view.text_size() * DAY_ROW_FACTOR
    }

    fn preferred_width(&self) -> f32 {
        7.0 * self.day_row_height()
    }

    fn cell_width(&self) -> f32 {
        self.width.unwrap_or_else(|| self.preferred_width()) / 7.0
    }

    /// Number of week rows in the grid.
    pub fn week_count(&self) -> u32 {
        self.month.weeks_in_month(self.first_day_of_week())
    }

    /// Total height of the header and all week rows.
    pub fn content_height(&self) -> f32 {
        self.week_day_row_height() + self.week_count() as f32 * self.day_row_height()
    }

    fn lead_cells(&self) -> u32 {
        self.month.weekday_column(self.first_day_of_week())
    }

    /// Rectangle of the cell showing `date`, if it belongs to this month.
    pub fn day_rect(&self, date: NaiveDate) -> Option<Rect> {
        if !date.is_same_month(self.month) {
            return None;
        }
        let index = self.lead_cells() + date.day0();
        let (row, col) = (index / 7, index % 7);
        let cell_width = self.cell_width();
        let row_height = self.day_row_height();
        Some(Rect::new(
            col as f32 * cell_width,
            self.week_day_row_height() + row as f32 * row_height,
            cell_width,
            row_height,
        ))
    }

    /// The day under a point in local coordinates.
    pub fn day_at(&self, pos: Point) -> Option<NaiveDate> {
        let top = self.week_day_row_height();
        if pos.x < 0.0 || pos.y < top {
            return None;
        }
        let col = (pos.x / self.cell_width()) as u32;
        let row = ((pos.y - top) / self.day_row_height()) as u32;
        if col >= 7 || row >= self.week_count() {
            return None;
        }

        let index = row * 7 + col;
        let lead = self.lead_cells();
        if index < lead {
            return None;
        }
        let day = index - lead + 1;
        if day > self.month.days_in_month() {
            return None;
        }
        self.month.with_day(day)
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Begin a press at `pos`. Returns whether a day was hit.
    pub fn handle_press(&mut self, pos: Point) -> bool {
        let hit = self.day_at(pos);
        if self.pressed_date != hit {
            self.pressed_date = hit;
            self.update();
        }
        hit.is_some()
    }

    /// End a press at `pos`. Selects the day if the press started on it.
    pub fn handle_release(&mut self, pos: Point) -> bool {
        let Some(pressed) = self.pressed_date.take() else {
            return false;
        };
        self.update();

        if self.day_at(pos) != Some(pressed) {
            return false;
        }

        self.selected_date = Some(pressed);
        tracing::debug!(target: targets::MONTH_VIEW, date = %pressed, "day selected");
        self.date_selected.emit(pressed);
        true
    }

    /// Abort an active press without selecting.
    pub fn cancel_press(&mut self) {
        if self.pressed_date.take().is_some() {
            self.update();
        }
    }

    /// A press and release at the same point.
    pub fn handle_tap(&mut self, pos: Point) -> bool {
        self.handle_press(pos) && self.handle_release(pos)
    }

    // =========================================================================
    // Painting
    // =========================================================================

    fn day_state(&self, date: NaiveDate) -> ViewState {
        ViewState::normal()
            .with_selected(self.selected_date == Some(date))
            .with_pressed(self.pressed_date == Some(date))
    }

    fn paint_week_day_header(&self, painter: &mut dyn Painter) {
        let style = &self.settings.week_day_view;
        let size = style.text_size();
        let color = style.text_color().resolve(ViewState::normal());
        let first = self.first_day_of_week().num_days_from_sunday() as usize;
        let cell_width = self.cell_width();
        let height = self.week_day_row_height();

        for col in 0..7 {
            let label = WEEK_DAY_LABELS[(first + col) % 7];
            let rect = Rect::new(col as f32 * cell_width, 0.0, cell_width, height);
            painter.draw_text(label, rect, size, color, TextAlign::Center);
        }
    }

    fn paint_days(&self, painter: &mut dyn Painter) {
        let style = &self.settings.day_view;
        let size = style.text_size();
        let text_color = style.text_color();
        let circle_color = style.circle_color();
        let accent_color = style.accent_color();

        for day in 1..=self.month.days_in_month() {
            let Some(date) = self.month.with_day(day) else {
                continue;
            };
            let Some(rect) = self.day_rect(date) else {
                continue;
            };
            let state = self.day_state(date);

            let circle = circle_color.resolve(state);
            if !circle.is_transparent() {
                let radius = (rect.width().min(rect.height()) / 2.0 - CIRCLE_INSET).max(0.0);
                painter.fill_circle(rect.center(), radius, circle);
            }

            let color = if self.today == Some(date) {
                accent_color.resolve(state)
            } else {
                text_color.resolve(state)
            };
            painter.draw_text(&day.to_string(), rect, size, color, TextAlign::Center);
        }
    }
}

impl Widget for MonthView {
    fn view_id(&self) -> ViewId {
        self.id
    }

    fn size_hint(&self) -> SizeHint {
        let height = self.content_height();
        SizeHint::from_dimensions(self.preferred_width(), height)
            .with_minimum_dimensions(0.0, height)
    }

    fn paint(&self, painter: &mut dyn Painter) {
        self.paint_week_day_header(painter);
        self.paint_days(painter);
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Drop for MonthView {
    fn drop(&mut self) {
        self.settings
            .week_day_view
            .settings_changed
            .disconnect(self.week_day_connection);
        self.settings
            .day_view
            .settings_changed
            .disconnect(self.day_connection);
    }
}

impl std::fmt::Debug for MonthView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonthView")
            .field("id", &self.id)
            .field("month", &self.month)
            .field("selected_date", &self.selected_date)
            .finish()
    }
}

static_assertions::assert_impl_all!(MonthView: Send, Sync);
