//! Backward season fallback shared by every fetch operation.
//!
//! When the current season has no data yet (pre-season, or before the first
//! race has been classified) the dashboard shows the previous season instead.
//! The walk is an explicit, bounded loop: it never goes past
//! `max_fallback_seasons` steps or below `min_season`.

use std::future::Future;
use tracing::{info, warn};

use crate::data_fetcher::models::Fetched;
use crate::error::AppError;

/// Seasons to try, in order, for a request.
///
/// Only a request for the current season falls back; an explicit older (or
/// future) season is tried exactly once.
///
/// # Example
/// ```
/// use f1_dashboard::data_fetcher::api::season_plan;
///
/// assert_eq!(season_plan(2025, 2025, 2, 1950), vec![2025, 2024, 2023]);
/// assert_eq!(season_plan(2019, 2025, 2, 1950), vec![2019]);
/// ```
pub fn season_plan(
    requested: i32,
    current_season: i32,
    max_fallback_seasons: u32,
    min_season: i32,
) -> Vec<i32> {
    if requested < min_season {
        return Vec::new();
    }

    let fallback_steps = if requested == current_season {
        i32::try_from(max_fallback_seasons).unwrap_or(i32::MAX)
    } else {
        0
    };

    (0..=fallback_steps)
        .map_while(|step| requested.checked_sub(step))
        .take_while(|season| *season >= min_season)
        .collect()
}

/// Runs `attempt` for each season of `plan` until one yields data.
///
/// `attempt` returns `Ok(Some(_))` for usable data, `Ok(None)` for a
/// well-formed empty answer and `Err(_)` for transport or payload failures.
/// Anything but usable data advances to the next season; the cases differ
/// only in what is logged. Exhausting the plan returns `Fetched::NoData`.
pub(crate) async fn run_with_season_fallback<T, F, Fut>(
    operation: &str,
    requested: i32,
    plan: &[i32],
    mut attempt: F,
) -> Fetched<T>
where
    F: FnMut(i32) -> Fut,
    Fut: Future<Output = Result<Option<T>, AppError>>,
{
    for (index, &season) in plan.iter().enumerate() {
        if index > 0 {
            info!("Falling back to season {season} for {operation}");
        }

        match attempt(season).await {
            Ok(Some(value)) => {
                info!("Serving {operation} for season {season} (requested {requested})");
                return Fetched::Data {
                    requested,
                    season,
                    value,
                };
            }
            Ok(None) => {
                info!("No {operation} data for season {season}");
            }
            Err(e) if e.is_not_found() => {
                info!("No {operation} data for season {season}: {e}");
            }
            Err(e) if e.is_transport_error() => {
                warn!("Transport failure fetching {operation} for season {season}: {e}");
            }
            Err(e) if e.is_payload_error() => {
                warn!("Unusable {operation} payload for season {season}: {e}");
            }
            Err(e) => {
                warn!("Failed to fetch {operation} for season {season}: {e}");
            }
        }
    }

    info!(
        "No {operation} data available for requested season {requested} after trying {:?}",
        plan
    );
    Fetched::NoData { requested }
}
