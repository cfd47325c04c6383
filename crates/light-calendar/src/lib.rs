//! A paged month-calendar carousel.
//!
//! `light-calendar` shows a range of months as horizontally swipeable
//! pages, one [`MonthView`] per month. The host configures styling once and
//! listens for two events: a month becoming the settled page, and a day
//! being tapped.
//!
//! # Overview
//!
//! - [`CalendarCarousel`]: the top-level widget
//! - [`Pager`] and [`PagerAdapter`]: a paging container and its page protocol
//! - [`MonthPagerAdapter`]: maps the month range onto pages
//! - [`MonthView`]: one month's day grid
//! - [`CalendarSettings`]: shared style with change notification
//! - [`CarouselAttributes`]: styling loaded from TOML
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use light_calendar::{CalendarCarousel, Dimension};
//! use light_calendar_core::{Color, MeasureSpec};
//!
//! let mut carousel = CalendarCarousel::for_today(NaiveDate::from_ymd_opt(2016, 8, 18).unwrap());
//! carousel.set_day_text_size(Dimension::sp(16.0));
//! carousel.set_text_color(Color::BLACK);
//!
//! assert_eq!(carousel.count(), 12);
//! assert_eq!(carousel.position_for_date(carousel.month_from()), 0);
//!
//! let size = carousel.measure(MeasureSpec::Exactly(350.0), MeasureSpec::Unspecified);
//! assert!(size.height > 0.0);
//! ```

pub mod adapter;
pub mod attributes;
pub mod carousel;
pub mod date;
pub mod dimension;
pub mod error;
pub mod month_view;
pub mod pager;
pub mod settings;

pub use adapter::MonthPagerAdapter;
pub use attributes::CarouselAttributes;
pub use carousel::{CalendarCarousel, OnStateUpdatedListener};
pub use date::{CalendarDateExt, default_range};
pub use dimension::{Dimension, DimensionUnit, DisplayMetrics};
pub use error::{Error, Result};
pub use month_view::MonthView;
pub use pager::{Pager, PagerAdapter, ScrollState};
pub use settings::{CalendarSettings, DayViewSettings, WeekDayViewSettings};
