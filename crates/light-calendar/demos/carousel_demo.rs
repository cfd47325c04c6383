//! Drives a carousel headlessly and prints what the host sees.
//!
//! Run with:
//! ```sh
//! RUST_LOG=light_calendar=debug cargo run -p light-calendar --example carousel_demo
//! ```

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use light_calendar::{
    CalendarCarousel, CarouselAttributes, DisplayMetrics, MonthView, OnStateUpdatedListener,
};
use light_calendar_core::{DisplayList, MeasureSpec};
use tracing_subscriber::EnvFilter;

const ATTRIBUTES: &str = r##"
week_day_text_size = "12sp"
day_text_size = "14sp"
first_day_of_week = "Mon"

[selection_color]
default = "#00000000"
selected = "#3F51B5"
"##;

struct PrintingHost;

impl OnStateUpdatedListener for PrintingHost {
    fn on_month_selected(&self, date: NaiveDate, view: &MonthView) {
        println!(
            "month selected: {} ({} weeks)",
            date.format("%B %Y"),
            view.week_count()
        );
    }

    fn on_date_selected(&self, date: NaiveDate) {
        println!("date selected: {date}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let attributes = CarouselAttributes::from_toml_str(ATTRIBUTES)?;
    let mut carousel =
        CalendarCarousel::from_attributes(&attributes, DisplayMetrics::with_density(2.0));
    let host: Arc<dyn OnStateUpdatedListener> = Arc::new(PrintingHost);
    carousel.set_on_state_updated_listener(&host);

    println!(
        "range: {} to {} ({} months)",
        carousel.month_from(),
        carousel.month_to(),
        carousel.count()
    );

    let size = carousel.measure(MeasureSpec::Exactly(720.0), MeasureSpec::Unspecified);
    println!("measured: {}x{}", size.width, size.height);

    // Swipe left past the halfway point.
    carousel.begin_drag();
    carousel.drag_by(-400.0);
    carousel.end_drag(0.0);

    let month = carousel.month_current();
    let tap = carousel
        .month_view_for_position(carousel.position_for_date(month))
        .and_then(|view| view.day_rect(month.with_day(15).unwrap_or(month)))
        .map(|rect| rect.center());
    if let Some(point) = tap {
        carousel.handle_tap(point);
    }

    let mut list = DisplayList::new();
    carousel.paint(&mut list);
    println!("painted {} draw commands", list.len());

    Ok(())
}
