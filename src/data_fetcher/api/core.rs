use chrono::{Datelike, Local, Utc};
use reqwest::Client;
use tracing::{debug, info, instrument};

use super::fetch_utils::fetch_with_fallback_transport;
use super::http_client::create_http_client_with_timeout;
use super::season_fallback::{run_with_season_fallback, season_plan};
use super::urls::{driver_standings_path, race_results_path, season_schedule_path};
use crate::config::Config;
use crate::data_fetcher::models::{
    DriverStanding, Fetched, RaceEnvelope, RaceEvent, RaceResult, StandingsEnvelope,
};
use crate::data_fetcher::processors::{
    latest_round, process_driver_standings, process_race_result, process_race_schedule,
};
use crate::error::AppError;

/// Season-aware client for the Ergast-compatible API.
///
/// Holds one pooled HTTP client and the configuration resolved at startup.
/// Every operation returns a `Fetched` value: errors are logged and folded
/// into the season fallback, never returned to the caller.
#[derive(Debug, Clone)]
pub struct F1Client {
    client: Client,
    config: Config,
    current_season: i32,
}

impl F1Client {
    /// Builds a client for `config`, using the local calendar year as the current season.
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self {
            client,
            config,
            current_season: Local::now().year(),
        })
    }

    /// Overrides the season treated as "current" by the fallback policy.
    pub fn with_current_season(mut self, season: i32) -> Self {
        self.current_season = season;
        self
    }

    pub fn current_season(&self) -> i32 {
        self.current_season
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn plan_for(&self, requested: i32) -> Vec<i32> {
        season_plan(
            requested,
            self.current_season,
            self.config.max_fallback_seasons,
            self.config.min_season,
        )
    }

    /// Drivers' championship standings, falling back to earlier seasons when
    /// the current one has no table yet.
    #[instrument(skip(self))]
    pub async fn driver_standings(&self, season: Option<i32>) -> Fetched<Vec<DriverStanding>> {
        let requested = season.unwrap_or(self.current_season);
        let plan = self.plan_for(requested);
        run_with_season_fallback("driver standings", requested, &plan, |season| {
            self.fetch_driver_standings_for(season)
        })
        .await
    }

    /// Race calendar for a season.
    #[instrument(skip(self))]
    pub async fn race_schedule(&self, season: Option<i32>) -> Fetched<Vec<RaceEvent>> {
        let requested = season.unwrap_or(self.current_season);
        let plan = self.plan_for(requested);
        run_with_season_fallback("race schedule", requested, &plan, |season| {
            self.fetch_race_schedule_for(season)
        })
        .await
    }

    /// Classification of the highest scheduled round of a season.
    ///
    /// A current season whose final round has not been run yet has no
    /// results for that round, so the previous season is shown instead.
    #[instrument(skip(self))]
    pub async fn last_race_results(&self, season: Option<i32>) -> Fetched<RaceResult> {
        let requested = season.unwrap_or(self.current_season);
        let plan = self.plan_for(requested);
        run_with_season_fallback("last race results", requested, &plan, |season| {
            self.fetch_last_race_results_for(season)
        })
        .await
    }

    async fn fetch_driver_standings_for(
        &self,
        season: i32,
    ) -> Result<Option<Vec<DriverStanding>>, AppError> {
        let path = driver_standings_path(season);
        let (envelope, url) = fetch_with_fallback_transport::<StandingsEnvelope>(
            &self.client,
            &self.config.base_urls(),
            &path,
        )
        .await?;
        process_driver_standings(envelope, season, Utc::now(), &url)
    }

    async fn fetch_race_schedule_for(
        &self,
        season: i32,
    ) -> Result<Option<Vec<RaceEvent>>, AppError> {
        let path = season_schedule_path(season);
        let (envelope, url) = fetch_with_fallback_transport::<RaceEnvelope>(
            &self.client,
            &self.config.base_urls(),
            &path,
        )
        .await?;
        process_race_schedule(envelope, Utc::now(), &url)
    }

    async fn fetch_last_race_results_for(
        &self,
        season: i32,
    ) -> Result<Option<RaceResult>, AppError> {
        let base_urls = self.config.base_urls();

        let (schedule, schedule_url) = fetch_with_fallback_transport::<RaceEnvelope>(
            &self.client,
            &base_urls,
            &season_schedule_path(season),
        )
        .await?;

        let Some(round) = latest_round(&schedule, &schedule_url)? else {
            debug!("Season {season} has no scheduled races");
            return Ok(None);
        };
        info!("Last scheduled round for season {season} is {round}");

        let (results, results_url) = fetch_with_fallback_transport::<RaceEnvelope>(
            &self.client,
            &base_urls,
            &race_results_path(season, round),
        )
        .await?;
        process_race_result(results, Utc::now(), &results_url)
    }
}
