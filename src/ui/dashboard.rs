//! The three dashboard views and their refresh cycle.
//!
//! A `Dashboard` owns one `ViewSlot` per view. A refresh starts a generation
//! on every selected slot, runs the fetches concurrently and applies each
//! completion through the slot's generation guard.

use chrono::Local;
use clap::ValueEnum;
use std::io::Write;
use tracing::info;

use super::page::RenderOptions;
use super::results_view::render_results;
use super::schedule_view::render_schedule;
use super::standings_view::render_standings;
use super::view_state::ViewSlot;
use crate::data_fetcher::F1Client;
use crate::data_fetcher::models::{DriverStanding, RaceEvent, RaceResult};
use crate::error::AppError;

/// Which views to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DashboardView {
    Standings,
    Schedule,
    Results,
    #[default]
    All,
}

impl DashboardView {
    fn shows_standings(self) -> bool {
        matches!(self, DashboardView::Standings | DashboardView::All)
    }

    fn shows_schedule(self) -> bool {
        matches!(self, DashboardView::Schedule | DashboardView::All)
    }

    fn shows_results(self) -> bool {
        matches!(self, DashboardView::Results | DashboardView::All)
    }
}

#[derive(Debug)]
pub struct Dashboard {
    view: DashboardView,
    season: Option<i32>,
    standings: ViewSlot<Vec<DriverStanding>>,
    schedule: ViewSlot<Vec<RaceEvent>>,
    results: ViewSlot<RaceResult>,
}

impl Dashboard {
    /// `season` of `None` means the current season with fallback.
    pub fn new(view: DashboardView, season: Option<i32>) -> Self {
        Self {
            view,
            season,
            standings: ViewSlot::new(),
            schedule: ViewSlot::new(),
            results: ViewSlot::new(),
        }
    }

    pub fn standings(&self) -> &ViewSlot<Vec<DriverStanding>> {
        &self.standings
    }

    pub fn schedule(&self) -> &ViewSlot<Vec<RaceEvent>> {
        &self.schedule
    }

    pub fn results(&self) -> &ViewSlot<RaceResult> {
        &self.results
    }

    /// Marks the selected views as refreshing and returns their generations.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        RefreshTicket {
            standings: self
                .view
                .shows_standings()
                .then(|| self.standings.begin_refresh()),
            schedule: self
                .view
                .shows_schedule()
                .then(|| self.schedule.begin_refresh()),
            results: self
                .view
                .shows_results()
                .then(|| self.results.begin_refresh()),
        }
    }

    /// Fetches every view named by `ticket` concurrently and applies the results.
    pub async fn complete_refresh(&mut self, client: &F1Client, ticket: RefreshTicket) {
        let season = self.season;
        let (standings, schedule, results) = futures::join!(
            async {
                match ticket.standings {
                    Some(_) => Some(client.driver_standings(season).await),
                    None => None,
                }
            },
            async {
                match ticket.schedule {
                    Some(_) => Some(client.race_schedule(season).await),
                    None => None,
                }
            },
            async {
                match ticket.results {
                    Some(_) => Some(client.last_race_results(season).await),
                    None => None,
                }
            },
        );

        let current_season = client.current_season();
        let now = Local::now();

        if let (Some(generation), Some(fetched)) = (ticket.standings, standings) {
            self.standings
                .complete(generation, fetched, current_season, now);
        }
        if let (Some(generation), Some(fetched)) = (ticket.schedule, schedule) {
            self.schedule.complete(generation, fetched, current_season, now);
        }
        if let (Some(generation), Some(fetched)) = (ticket.results, results) {
            self.results.complete(generation, fetched, current_season, now);
        }

        info!("Dashboard refresh finished for {:?}", self.view);
    }

    /// One full refresh cycle.
    pub async fn refresh(&mut self, client: &F1Client) {
        let ticket = self.begin_refresh();
        self.complete_refresh(client, ticket).await;
    }

    /// Draws the selected views in a fixed order.
    pub fn render<W: Write>(&self, out: &mut W, options: &RenderOptions) -> Result<(), AppError> {
        if self.view.shows_standings() {
            render_standings(out, self.standings.state(), options)?;
        }
        if self.view.shows_results() {
            render_results(out, self.results.state(), options)?;
        }
        if self.view.shows_schedule() {
            render_schedule(out, self.schedule.state(), options)?;
        }
        Ok(())
    }
}

/// Generations handed out by `Dashboard::begin_refresh`; `None` for views
/// that are not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub standings: Option<u64>,
    pub schedule: Option<u64>,
    pub results: Option<u64>,
}
