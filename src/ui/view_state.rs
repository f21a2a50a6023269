use chrono::{DateTime, Local};
use tracing::debug;

use crate::data_fetcher::models::Fetched;

/// What a view currently has to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready {
        data: T,
        last_updated: DateTime<Local>,
        /// Set when the data comes from an older season than the current one.
        notice: Option<String>,
    },
    /// A refresh is in flight; `previous` stays on screen until it lands.
    Refreshing { previous: Box<ViewState<T>> },
    Unavailable { message: String },
}

impl<T> ViewState<T> {
    /// Turns a fetch outcome into a displayable state.
    pub fn from_fetched(fetched: Fetched<T>, current_season: i32, now: DateTime<Local>) -> Self {
        match fetched {
            Fetched::Data { season, value, .. } => ViewState::Ready {
                data: value,
                last_updated: now,
                notice: (season < current_season)
                    .then(|| format!("Showing data from {season} season")),
            },
            Fetched::NoData { requested } => ViewState::Unavailable {
                message: format!("Data unavailable for the {requested} season"),
            },
        }
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self, ViewState::Refreshing { .. })
    }

    /// The state to draw, looking through `Refreshing` to what it wraps.
    pub fn displayed(&self) -> &ViewState<T> {
        match self {
            ViewState::Refreshing { previous } => previous.displayed(),
            other => other,
        }
    }
}

/// A view's state plus the generation guard for refreshes.
///
/// Every refresh takes a generation number from `begin_refresh`; a completion
/// carrying an older generation than the most recently started one is
/// dropped, so a slow response can never overwrite a newer one.
#[derive(Debug)]
pub struct ViewSlot<T> {
    state: ViewState<T>,
    latest_generation: u64,
}

impl<T> Default for ViewSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewSlot<T> {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            latest_generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    /// Marks a refresh as started and returns its generation.
    pub fn begin_refresh(&mut self) -> u64 {
        self.latest_generation += 1;
        let current = std::mem::replace(&mut self.state, ViewState::Loading);
        self.state = match current {
            ViewState::Loading => ViewState::Loading,
            refreshing @ ViewState::Refreshing { .. } => refreshing,
            settled => ViewState::Refreshing {
                previous: Box::new(settled),
            },
        };
        self.latest_generation
    }

    /// Applies a finished fetch. Returns `false` when the completion was stale.
    pub fn complete(
        &mut self,
        generation: u64,
        fetched: Fetched<T>,
        current_season: i32,
        now: DateTime<Local>,
    ) -> bool {
        if generation < self.latest_generation {
            debug!(
                "Discarding stale completion (generation {generation}, latest {})",
                self.latest_generation
            );
            return false;
        }

        self.state = ViewState::from_fetched(fetched, current_season, now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(requested: i32, season: i32, value: u32) -> Fetched<u32> {
        Fetched::Data {
            requested,
            season,
            value,
        }
    }

    #[test]
    fn test_from_fetched_sets_notice_for_older_season() {
        let now = Local::now();
        let state = ViewState::from_fetched(data(2025, 2024, 7), 2025, now);
        assert_eq!(
            state,
            ViewState::Ready {
                data: 7,
                last_updated: now,
                notice: Some("Showing data from 2024 season".to_string()),
            }
        );

        let current = ViewState::from_fetched(data(2025, 2025, 7), 2025, now);
        assert!(matches!(current, ViewState::Ready { notice: None, .. }));
    }

    #[test]
    fn test_from_fetched_no_data_is_unavailable() {
        let state: ViewState<u32> =
            ViewState::from_fetched(Fetched::NoData { requested: 2025 }, 2025, Local::now());
        match state {
            ViewState::Unavailable { message } => assert!(message.contains("Data unavailable")),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_refresh_keeps_previous_data_visible() {
        let mut slot = ViewSlot::new();
        let first = slot.begin_refresh();
        assert_eq!(slot.state(), &ViewState::Loading);
        assert!(slot.complete(first, data(2025, 2025, 1), 2025, Local::now()));

        slot.begin_refresh();
        assert!(slot.state().is_refreshing());
        assert!(matches!(slot.state().displayed(), ViewState::Ready { data: 1, .. }));
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut slot = ViewSlot::new();
        let older = slot.begin_refresh();
        let newer = slot.begin_refresh();

        assert!(slot.complete(newer, data(2025, 2025, 2), 2025, Local::now()));
        assert!(!slot.complete(older, data(2025, 2025, 1), 2025, Local::now()));

        assert!(matches!(slot.state(), ViewState::Ready { data: 2, .. }));
        assert_eq!(slot.latest_generation(), 2);
    }
}
