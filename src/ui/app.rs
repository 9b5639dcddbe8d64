use crate::fetch::{FetchManager, FetchState, Settled};
use crate::trips::{Region, Trip};
use crate::ui::mvi::Reducer;
use crate::ui::trip_list::{TripListIntent, TripListReducer, TripListState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Everything the renderer needs for one frame.
pub struct TripListView<'a> {
    pub region: Region,
    pub url: &'a str,
    pub trips: &'a FetchState<Vec<Trip>>,
    pub selected: usize,
    pub tick: u64,
}

pub struct App {
    should_quit: bool,
    base_url: String,
    url: String,
    tick: u64,
    /// Filter and selection (MVI pattern).
    list: TripListState,
    /// Trips for the current URL. Owns the in-flight request.
    trips: FetchManager<Vec<Trip>>,
}

impl App {
    pub fn new(
        base_url: impl Into<String>,
        region: Region,
        trips: FetchManager<Vec<Trip>>,
    ) -> Self {
        let base_url = base_url.into();
        let url = region.endpoint(&base_url);
        Self {
            should_quit: false,
            base_url,
            url,
            tick: 0,
            list: TripListState::new(region),
            trips,
        }
    }

    /// Start observing the current URL. Must run inside a tokio runtime.
    pub fn mount(&mut self) {
        self.trips.subscribe(self.url.clone());
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Quit and tear down the subscription; no state changes afterwards.
    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.trips.teardown();
    }

    pub fn region(&self) -> Region {
        self.list.region
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn selected(&self) -> usize {
        self.list.selected
    }

    pub fn trips(&self) -> &FetchState<Vec<Trip>> {
        self.trips.state()
    }

    pub fn view(&self) -> TripListView<'_> {
        TripListView {
            region: self.list.region,
            url: &self.url,
            trips: self.trips.state(),
            selected: self.list.selected,
            tick: self.tick,
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn select_region(&mut self, region: Region) {
        self.dispatch_list(TripListIntent::SelectRegion(region));
    }

    pub fn cycle_region(&mut self) {
        self.dispatch_list(TripListIntent::CycleRegion);
    }

    pub fn move_up(&mut self) {
        let rows = self.row_count();
        self.dispatch_list(TripListIntent::MoveUp { rows });
    }

    pub fn move_down(&mut self) {
        let rows = self.row_count();
        self.dispatch_list(TripListIntent::MoveDown { rows });
    }

    pub fn reload(&mut self) {
        if !self.should_quit {
            tracing::info!(url = %self.url, "Reloading trips");
            self.trips.reload();
        }
    }

    /// Feed a settled request back in. Stale outcomes are dropped by the
    /// fetch manager.
    pub fn on_fetch_settled(&mut self, settled: Settled<Vec<Trip>>) {
        if self.trips.apply(settled) {
            let rows = self.row_count();
            self.dispatch_list(TripListIntent::Clamp { rows });
        }
    }

    fn row_count(&self) -> usize {
        self.trips.state().visible_data().map_or(0, Vec::len)
    }

    fn dispatch_list(&mut self, intent: TripListIntent) {
        if self.should_quit {
            return;
        }
        let before = self.list.region;
        dispatch_mvi!(self, list, TripListReducer, intent);
        if self.list.region != before {
            self.url = self.list.region.endpoint(&self.base_url);
            tracing::info!(region = %self.list.region, url = %self.url, "Filter changed");
            self.trips.subscribe(self.url.clone());
        }
    }
}
