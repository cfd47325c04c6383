//! End-to-end carousel behavior through the public API.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;

use light_calendar::{
    CalendarCarousel, CarouselAttributes, DisplayMetrics, MonthView, OnStateUpdatedListener,
};
use light_calendar_core::{Color, DisplayList, MeasureSpec, StateColor, Widget};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[derive(Default)]
struct Host {
    months: Mutex<Vec<NaiveDate>>,
    dates: Mutex<Vec<NaiveDate>>,
}

impl OnStateUpdatedListener for Host {
    fn on_month_selected(&self, date: NaiveDate, view: &MonthView) {
        assert_eq!(view.month(), date);
        self.months.lock().push(date);
    }

    fn on_date_selected(&self, date: NaiveDate) {
        self.dates.lock().push(date);
    }
}

fn carousel_with_host(
    today: NaiveDate,
) -> (CalendarCarousel, Arc<Host>, Arc<dyn OnStateUpdatedListener>) {
    let mut carousel = CalendarCarousel::for_today(today);
    let host = Arc::new(Host::default());
    let listener: Arc<dyn OnStateUpdatedListener> = host.clone();
    carousel.set_on_state_updated_listener(&listener);
    (carousel, host, listener)
}

#[test]
fn test_fiscal_year_range_has_twelve_pages() {
    let mut carousel = CalendarCarousel::for_today(ymd(2016, 8, 18));
    carousel.set_month_from(ymd(2016, 4, 1));
    carousel.set_month_to(ymd(2017, 3, 1));

    assert_eq!(carousel.count(), 12);
    assert_eq!(carousel.date_for_position(0), ymd(2016, 4, 1));
    assert_eq!(carousel.date_for_position(11), ymd(2017, 3, 1));
}

#[test]
fn test_position_mapping_is_consistent() {
    let mut carousel = CalendarCarousel::for_today(ymd(2016, 8, 18));
    carousel
        .set_month_range(ymd(2014, 11, 1), ymd(2019, 2, 1))
        .unwrap();

    assert_eq!(carousel.position_for_date(carousel.month_from()), 0);
    for k in 0..carousel.count() as i64 {
        let date = carousel.date_for_position(k);
        assert_eq!(carousel.position_for_date(date), k);
        assert_eq!(carousel.date_for_position(carousel.position_for_date(date)), date);
    }

    // Any day inside a month maps to that month's page.
    assert_eq!(carousel.position_for_date(ymd(2016, 2, 29)), 15);
    assert_eq!(carousel.position_for_date(ymd(2016, 3, 1)), 16);
}

#[test]
fn test_reversed_range_is_empty() {
    let mut carousel = CalendarCarousel::for_today(ymd(2016, 8, 18));
    carousel.set_month_to(ymd(2016, 1, 1));
    assert_eq!(carousel.count(), 0);

    let size = carousel.measure(MeasureSpec::Exactly(350.0), MeasureSpec::Unspecified);
    assert_eq!(size.height, 0.0);
    assert!(carousel.month_view_for_position(0).is_none());
}

#[test]
fn test_initial_month_is_reported_exactly_once() {
    let (mut carousel, host, _listener) = carousel_with_host(ymd(2016, 11, 3));

    carousel.measure(MeasureSpec::Exactly(350.0), MeasureSpec::Unspecified);
    carousel.measure(MeasureSpec::Exactly(350.0), MeasureSpec::AtMost(900.0));

    assert_eq!(*host.months.lock(), vec![ymd(2016, 11, 1)]);
}

#[test]
fn test_style_change_reaches_every_live_month() {
    let mut carousel = CalendarCarousel::for_today(ymd(2016, 8, 18));
    carousel.measure(MeasureSpec::Exactly(350.0), MeasureSpec::Unspecified);

    let live: Vec<usize> = carousel.pager().materialized().collect();
    assert_eq!(live, vec![3, 4, 5]);
    let ids: Vec<_> = live
        .iter()
        .map(|p| carousel.month_view_for_position(*p as i64).unwrap().view_id())
        .collect();

    carousel.set_text_color(Color::from_rgb8(0x10, 0x20, 0x30));
    carousel.set_day_raw_text_size(30.0);

    for (position, id) in live.iter().zip(ids) {
        let view = carousel.month_view_for_position(*position as i64).unwrap();
        assert_eq!(view.view_id(), id);

        let mut list = DisplayList::new();
        view.paint(&mut list);
        assert!(list.texts().any(|(text, size, color)| {
            text == "15" && size == 30.0 && color == Color::from_rgb8(0x10, 0x20, 0x30)
        }));
    }
}

#[test]
fn test_selecting_an_off_screen_date_does_nothing() {
    let mut carousel = CalendarCarousel::for_today(ymd(2016, 8, 18));
    carousel.measure(MeasureSpec::Exactly(350.0), MeasureSpec::Unspecified);

    carousel.set_selected_date(ymd(2017, 1, 10));
    carousel.set_selected_date(ymd(2030, 1, 10));

    for (_, view) in carousel.adapter().views() {
        assert_eq!(view.selected_date(), None);
    }
}

#[test]
fn test_height_follows_tallest_live_month() {
    let mut carousel = CalendarCarousel::for_today(ymd(2016, 8, 18));
    let size = carousel.measure(MeasureSpec::Exactly(350.0), MeasureSpec::Unspecified);

    let tallest = carousel
        .adapter()
        .views()
        .map(|(_, view)| view.size_hint().preferred.height)
        .fold(0.0f32, f32::max);
    assert_eq!(size.height, tallest);

    let fixed = carousel.measure(MeasureSpec::Exactly(350.0), MeasureSpec::Exactly(123.0));
    assert_eq!(fixed.height, 123.0);
}

#[test]
fn test_swipe_and_tap() {
    let (mut carousel, host, _listener) = carousel_with_host(ymd(2016, 8, 18));
    carousel.measure(MeasureSpec::Exactly(350.0), MeasureSpec::Unspecified);

    carousel.begin_drag();
    carousel.drag_by(-20.0);
    assert_eq!(carousel.end_drag(-2000.0), Some(ymd(2016, 9, 1)));

    let center = carousel
        .month_view_for_position(5)
        .and_then(|view| view.day_rect(ymd(2016, 9, 21)))
        .map(|rect| rect.center())
        .unwrap();
    assert!(carousel.handle_tap(center));

    assert_eq!(*host.months.lock(), vec![ymd(2016, 8, 1), ymd(2016, 9, 1)]);
    assert_eq!(*host.dates.lock(), vec![ymd(2016, 9, 21)]);
}

#[test]
fn test_listener_is_not_kept_alive() {
    let (mut carousel, host, listener) = carousel_with_host(ymd(2016, 8, 18));
    drop(listener);
    let weak = Arc::downgrade(&host);
    drop(host);
    assert!(weak.upgrade().is_none());

    // Events after the host is gone are dropped quietly.
    carousel.measure(MeasureSpec::Exactly(350.0), MeasureSpec::Unspecified);
    assert!(carousel.show_next_month());
}

#[test]
fn test_from_attributes() {
    let attributes = CarouselAttributes::from_toml_str(
        r##"
        day_text_size = "10dp"
        accent_color = { default = "#FF4081", selected = "#FFFFFF" }
        first_day_of_week = "Mon"
        offscreen_page_limit = 2
        "##,
    )
    .unwrap();

    let mut carousel =
        CalendarCarousel::from_attributes(&attributes, DisplayMetrics::with_density(3.0));
    assert_eq!(carousel.settings().day_view.text_size(), 30.0);
    assert_eq!(
        carousel.settings().day_view.accent_color(),
        StateColor::single(Color::from_rgb8(0xFF, 0x40, 0x81)).with_selected(Color::WHITE)
    );
    assert_eq!(carousel.settings().first_day_of_week(), chrono::Weekday::Mon);

    carousel.measure(MeasureSpec::Exactly(350.0), MeasureSpec::Unspecified);
    assert_eq!(carousel.pager().offscreen_page_limit(), 2);
}
