//! Shared style settings for month views.
//!
//! A [`CalendarSettings`] is created once per carousel and shared by `Arc`
//! with every month view it builds. Month views read it at paint time and
//! subscribe to the `settings_changed` signal of each record, so a setter
//! call is visible to every live view on its next paint without rebuilding
//! anything.
//!
//! Every setter emits `settings_changed` synchronously, even when the new
//! value equals the old one. Text sizes must be finite and non-negative;
//! other values are ignored with a warning and emit nothing.

use chrono::Weekday;
use light_calendar_core::logging::targets;
use light_calendar_core::{Color, Property, Signal, StateColor};

/// Whether `size` can be used as a text size in pixels.
pub fn is_valid_text_size(size: f32) -> bool {
    size.is_finite() && size >= 0.0
}

/// Default week-day header text size in pixels.
pub const DEFAULT_WEEK_DAY_TEXT_SIZE: f32 = 12.0;
/// Default day cell text size in pixels.
pub const DEFAULT_DAY_TEXT_SIZE: f32 = 14.0;

/// Default text color: dark text, white when selected.
pub fn default_text_color() -> StateColor {
    StateColor::single(Color::from_rgb8(0x21, 0x21, 0x21)).with_selected(Color::WHITE)
}

/// Default circle color: indigo behind the selected day, gray while pressed.
pub fn default_circle_color() -> StateColor {
    StateColor::single(Color::TRANSPARENT)
        .with_selected(Color::from_rgb8(0x3F, 0x51, 0xB5))
        .with_pressed(Color::LIGHT_GRAY)
}

/// Default accent color (today's date).
pub fn default_accent_color() -> StateColor {
    StateColor::single(Color::from_rgb8(0xFF, 0x40, 0x81)).with_selected(Color::WHITE)
}

/// Style of the week-day header row.
#[derive(Debug)]
pub struct WeekDayViewSettings {
    text_size: Property<f32>,
    text_color: Property<StateColor>,

    /// Emitted after every mutation.
    pub settings_changed: Signal<()>,
}

impl Default for WeekDayViewSettings {
    fn default() -> Self {
        Self {
            text_size: Property::new(DEFAULT_WEEK_DAY_TEXT_SIZE),
            text_color: Property::new(default_text_color()),
            settings_changed: Signal::new(),
        }
    }
}

impl WeekDayViewSettings {
    /// Text size in pixels.
    pub fn text_size(&self) -> f32 {
        self.text_size.get()
    }

    /// Set the text size in pixels.
    pub fn set_text_size(&self, size: f32) {
        if !is_valid_text_size(size) {
            tracing::warn!(target: targets::SETTINGS, size, "invalid text size ignored");
            return;
        }
        let changed = self.text_size.set(size);
        tracing::trace!(target: targets::SETTINGS, size, changed, "text size set");
        self.notify_settings_changed();
    }

    /// Text color.
    pub fn text_color(&self) -> StateColor {
        self.text_color.get()
    }

    /// Set a single text color for every state.
    pub fn set_text_color(&self, color: Color) {
        self.set_text_state_color(StateColor::single(color));
    }

    /// Set a state-dependent text color.
    pub fn set_text_state_color(&self, color: StateColor) {
        let changed = self.text_color.set(color);
        tracing::trace!(target: targets::SETTINGS, changed, "text color set");
        self.notify_settings_changed();
    }

    /// Emit `settings_changed`.
    pub fn notify_settings_changed(&self) {
        tracing::trace!(target: targets::SETTINGS, "week-day settings changed");
        self.settings_changed.emit(());
    }
}

/// Style of the day cells.
#[derive(Debug)]
pub struct DayViewSettings {
    text_size: Property<f32>,
    text_color: Property<StateColor>,
    circle_color: Property<StateColor>,
    accent_color: Property<StateColor>,

    /// Emitted after every mutation.
    pub settings_changed: Signal<()>,
}

impl Default for DayViewSettings {
    fn default() -> Self {
        Self {
            text_size: Property::new(DEFAULT_DAY_TEXT_SIZE),
            text_color: Property::new(default_text_color()),
            circle_color: Property::new(default_circle_color()),
            accent_color: Property::new(default_accent_color()),
            settings_changed: Signal::new(),
        }
    }
}

impl DayViewSettings {
    /// Text size in pixels.
    pub fn text_size(&self) -> f32 {
        self.text_size.get()
    }

    /// Set the text size in pixels.
    pub fn set_text_size(&self, size: f32) {
        if !is_valid_text_size(size) {
            tracing::warn!(target: targets::SETTINGS, size, "invalid text size ignored");
            return;
        }
        let changed = self.text_size.set(size);
        tracing::trace!(target: targets::SETTINGS, size, changed, "text size set");
        self.notify_settings_changed();
    }

    /// Text color.
    pub fn text_color(&self) -> StateColor {
        self.text_color.get()
    }

    /// Set a single text color for every state.
    pub fn set_text_color(&self, color: Color) {
        self.set_text_state_color(StateColor::single(color));
    }

    /// Set a state-dependent text color.
    pub fn set_text_state_color(&self, color: StateColor) {
        let changed = self.text_color.set(color);
        tracing::trace!(target: targets::SETTINGS, changed, "text color set");
        self.notify_settings_changed();
    }

    /// Background circle color behind a day, usually only set for the
    /// selected state.
    pub fn circle_color(&self) -> StateColor {
        self.circle_color.get()
    }

    pub fn set_circle_color(&self, color: StateColor) {
        let changed = self.circle_color.set(color);
        tracing::trace!(target: targets::SETTINGS, changed, "circle color set");
        self.notify_settings_changed();
    }

    /// Text color of today's date.
    pub fn accent_color(&self) -> StateColor {
        self.accent_color.get()
    }

    pub fn set_accent_color(&self, color: StateColor) {
        let changed = self.accent_color.set(color);
        tracing::trace!(target: targets::SETTINGS, changed, "accent color set");
        self.notify_settings_changed();
    }

    /// Emit `settings_changed`.
    pub fn notify_settings_changed(&self) {
        tracing::trace!(target: targets::SETTINGS, "day settings changed");
        self.settings_changed.emit(());
    }
}

/// All style settings shared by a carousel's month views.
#[derive(Debug)]
pub struct CalendarSettings {
    pub week_day_view: WeekDayViewSettings,
    pub day_view: DayViewSettings,
    first_day_of_week: Property<Weekday>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            week_day_view: WeekDayViewSettings::default(),
            day_view: DayViewSettings::default(),
            first_day_of_week: Property::new(Weekday::Sun),
        }
    }
}

impl CalendarSettings {
    /// Settings with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The weekday shown in the first grid column.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week.get()
    }

    /// Change the first weekday. This reshapes every month grid, so both
    /// records notify.
    pub fn set_first_day_of_week(&self, day: Weekday) {
        let changed = self.first_day_of_week.set(day);
        tracing::debug!(target: targets::SETTINGS, ?day, changed, "first day of week set");
        self.week_day_view.notify_settings_changed();
        self.day_view.notify_settings_changed();
    }
}

static_assertions::assert_impl_all!(CalendarSettings: Send, Sync);
