//! MonthPagerAdapter: maps a month range onto pager pages.
//!
//! Page `0` is `month_from`, page `count - 1` is `month_to`. The adapter
//! owns every live [`MonthView`] in a position-keyed map, so looking a page
//! up never goes through the pager.

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use chrono::{Local, NaiveDate};
use light_calendar_core::logging::targets;
use light_calendar_core::{ViewId, Widget};
use parking_lot::RwLock;

use crate::carousel::OnStateUpdatedListener;
use crate::date::CalendarDateExt;
use crate::month_view::MonthView;
use crate::pager::PagerAdapter;
use crate::settings::CalendarSettings;

/// Shared, replaceable registration of the host listener.
pub(crate) type ListenerSlot = Arc<RwLock<Option<Weak<dyn OnStateUpdatedListener>>>>;

/// Upgrade the registered listener, releasing the lock before returning.
pub(crate) fn current_listener(slot: &ListenerSlot) -> Option<Arc<dyn OnStateUpdatedListener>> {
    let weak = slot.read().clone();
    weak.and_then(|listener| listener.upgrade())
}

/// Page adapter that builds one [`MonthView`] per month in a range.
pub struct MonthPagerAdapter {
    month_from: NaiveDate,
    month_to: NaiveDate,
    settings: Arc<CalendarSettings>,

    /// Date highlighted with the accent color in new views.
    today: Option<NaiveDate>,

    /// Live month views by page position.
    views: BTreeMap<usize, MonthView>,

    /// Last settled page.
    selected_page: usize,

    listener: ListenerSlot,
}

impl MonthPagerAdapter {
    /// Create an adapter over `month_from..=month_to`.
    pub(crate) fn new(
        settings: Arc<CalendarSettings>,
        month_from: NaiveDate,
        month_to: NaiveDate,
        listener: ListenerSlot,
    ) -> Self {
        Self {
            month_from: month_from.first_of_month(),
            month_to: month_to.first_of_month(),
            settings,
            today: Some(Local::now().date_naive()),
            views: BTreeMap::new(),
            selected_page: 0,
            listener,
        }
    }

    // =========================================================================
    // Range
    // =========================================================================

    /// First month of the range.
    pub fn month_from(&self) -> NaiveDate {
        self.month_from
    }

    /// Last month of the range.
    pub fn month_to(&self) -> NaiveDate {
        self.month_to
    }

    /// Replace the range. The caller must invalidate the pager afterwards.
    pub(crate) fn set_range(&mut self, month_from: NaiveDate, month_to: NaiveDate) {
        self.month_from = month_from.first_of_month();
        self.month_to = month_to.first_of_month();
        if self.month_to < self.month_from {
            tracing::warn!(
                target: targets::ADAPTER,
                from = %self.month_from,
                to = %self.month_to,
                "month range is reversed, no pages",
            );
        } else {
            tracing::debug!(
                target: targets::ADAPTER,
                from = %self.month_from,
                to = %self.month_to,
                count = self.count(),
                "month range changed",
            );
        }
    }

    /// The month shown at `position`.
    pub fn date_for_position(&self, position: i64) -> NaiveDate {
        self.month_from.plus_months(position)
    }

    /// The position of the month containing `date`, possibly out of range.
    pub fn position_for_date(&self, date: NaiveDate) -> i64 {
        date.months_after(self.month_from)
    }

    pub(crate) fn set_today(&mut self, today: Option<NaiveDate>) {
        self.today = today;
    }

    pub fn today(&self) -> Option<NaiveDate> {
        self.today
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// The live month view at `position`.
    pub fn view(&self, position: usize) -> Option<&MonthView> {
        self.views.get(&position)
    }

    pub(crate) fn view_mut(&mut self, position: usize) -> Option<&mut MonthView> {
        self.views.get_mut(&position)
    }

    /// All live month views in position order.
    pub fn views(&self) -> impl Iterator<Item = (usize, &MonthView)> {
        self.views.iter().map(|(position, view)| (*position, view))
    }

    /// Last settled page.
    pub fn selected_page(&self) -> usize {
        self.selected_page
    }

    /// Record the settled page and tell the host, if its view exists.
    pub(crate) fn select_page(&mut self, position: usize) {
        self.selected_page = position;
        self.notify_month_selected(position);
    }

    fn notify_month_selected(&self, position: usize) {
        let Some(view) = self.views.get(&position) else {
            return;
        };
        if let Some(listener) = current_listener(&self.listener) {
            tracing::debug!(target: targets::ADAPTER, position, month = %view.month(), "month selected");
            listener.on_month_selected(view.month(), view);
        }
    }
}

impl PagerAdapter for MonthPagerAdapter {
    fn count(&self) -> usize {
        let months = self.month_to.months_after(self.month_from);
        usize::try_from(months.saturating_add(1)).unwrap_or(0)
    }

    fn instantiate_item(&mut self, position: usize) -> ViewId {
        let month = self.date_for_position(position as i64);
        let view = MonthView::new(self.settings.clone(), month).with_today(self.today);

        let slot = self.listener.clone();
        view.date_selected.connect(move |date| {
            if let Some(listener) = current_listener(&slot) {
                listener.on_date_selected(*date);
            }
        });

        let id = view.view_id();
        self.views.insert(position, view);

        if position == self.selected_page {
            self.notify_month_selected(position);
        }
        id
    }

    fn destroy_item(&mut self, position: usize, token: ViewId) {
        if self.is_view_from_object(position, token) {
            self.views.remove(&position);
        } else {
            tracing::warn!(target: targets::ADAPTER, position, ?token, "destroy for unknown page");
        }
    }

    fn is_view_from_object(&self, position: usize, token: ViewId) -> bool {
        self.views
            .get(&position)
            .is_some_and(|view| view.view_id() == token)
    }

    fn item_widget(&self, position: usize) -> Option<&dyn Widget> {
        self.views.get(&position).map(|view| view as &dyn Widget)
    }

    fn resize_item(&mut self, position: usize, width: f32) {
        if let Some(view) = self.views.get_mut(&position) {
            view.resize(width);
        }
    }
}

impl std::fmt::Debug for MonthPagerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonthPagerAdapter")
            .field("month_from", &self.month_from)
            .field("month_to", &self.month_to)
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .field("selected_page", &self.selected_page)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        months: Mutex<Vec<NaiveDate>>,
        dates: Mutex<Vec<NaiveDate>>,
    }

    impl OnStateUpdatedListener for Recorder {
        fn on_month_selected(&self, date: NaiveDate, view: &MonthView) {
            assert_eq!(date, view.month());
            self.months.lock().push(date);
        }

        fn on_date_selected(&self, date: NaiveDate) {
            self.dates.lock().push(date);
        }
    }

    fn adapter(from: NaiveDate, to: NaiveDate) -> (MonthPagerAdapter, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let listener: Arc<dyn OnStateUpdatedListener> = recorder.clone();
        let slot: ListenerSlot = Arc::new(RwLock::new(Some(Arc::downgrade(&listener))));
        (
            MonthPagerAdapter::new(Arc::new(CalendarSettings::new()), from, to, slot),
            recorder,
        )
    }

    #[test]
    fn test_count_covers_range_inclusively() {
        let (adapter, _) = adapter(ymd(2016, 4, 1), ymd(2017, 3, 1));
        assert_eq!(adapter.count(), 12);
        assert_eq!(adapter.date_for_position(0), ymd(2016, 4, 1));
        assert_eq!(adapter.date_for_position(11), ymd(2017, 3, 1));
    }

    #[test]
    fn test_reversed_range_has_no_pages() {
        let (mut adapter, _) = adapter(ymd(2016, 4, 1), ymd(2017, 3, 1));
        adapter.set_range(ymd(2017, 3, 1), ymd(2016, 4, 1));
        assert_eq!(adapter.count(), 0);
    }

    #[test]
    fn test_range_is_normalized_to_months() {
        let (adapter, _) = adapter(ymd(2016, 4, 20), ymd(2016, 4, 3));
        assert_eq!(adapter.month_from(), ymd(2016, 4, 1));
        assert_eq!(adapter.count(), 1);
        assert_eq!(adapter.position_for_date(ymd(2016, 6, 30)), 2);
    }

    #[test]
    fn test_instantiate_selected_page_notifies() {
        let (mut adapter, recorder) = adapter(ymd(2016, 4, 1), ymd(2017, 3, 1));
        adapter.selected_page = 2;

        let token = adapter.instantiate_item(1);
        assert!(adapter.is_view_from_object(1, token));
        assert!(recorder.months.lock().is_empty());

        adapter.instantiate_item(2);
        assert_eq!(*recorder.months.lock(), vec![ymd(2016, 6, 1)]);
    }

    #[test]
    fn test_select_page_without_view_is_silent() {
        let (mut adapter, recorder) = adapter(ymd(2016, 4, 1), ymd(2017, 3, 1));
        adapter.select_page(5);
        assert_eq!(adapter.selected_page(), 5);
        assert!(recorder.months.lock().is_empty());
    }

    #[test]
    fn test_destroy_discards_view() {
        let (mut adapter, _) = adapter(ymd(2016, 4, 1), ymd(2017, 3, 1));
        let token = adapter.instantiate_item(3);
        adapter.view_mut(3).unwrap().set_selected_date(ymd(2016, 7, 4));

        adapter.destroy_item(3, ViewId::next());
        assert!(adapter.view(3).is_some());

        adapter.destroy_item(3, token);
        assert!(adapter.view(3).is_none());

        adapter.instantiate_item(3);
        assert_eq!(adapter.view(3).unwrap().selected_date(), None);
    }

    #[test]
    fn test_day_selection_is_relayed() {
        let (mut adapter, recorder) = adapter(ymd(2016, 4, 1), ymd(2017, 3, 1));
        adapter.instantiate_item(0);
        adapter.view(0).unwrap().date_selected.emit(ymd(2016, 4, 15));
        assert_eq!(*recorder.dates.lock(), vec![ymd(2016, 4, 15)]);
    }

    #[test]
    fn test_dropped_listener_is_ignored() {
        let slot: ListenerSlot = Arc::new(RwLock::new(None));
        {
            let listener: Arc<dyn OnStateUpdatedListener> = Arc::new(Recorder::default());
            *slot.write() = Some(Arc::downgrade(&listener));
        }
        let mut adapter = MonthPagerAdapter::new(
            Arc::new(CalendarSettings::new()),
            ymd(2016, 4, 1),
            ymd(2017, 3, 1),
            slot,
        );
        adapter.instantiate_item(0);
        adapter.view(0).unwrap().date_selected.emit(ymd(2016, 4, 2));
    }
}
