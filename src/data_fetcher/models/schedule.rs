use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub id: String,
    pub name: String,
    pub locality: String,
    pub country: String,
}

/// A scheduled Grand Prix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceEvent {
    pub season: i32,
    pub round: u32,
    pub name: String,
    pub date: NaiveDate,
    /// Race start in UTC; older seasons have no start time upstream.
    pub time: Option<NaiveTime>,
    pub circuit: Circuit,
    pub fetched_at: DateTime<Utc>,
}

impl RaceEvent {
    /// Race start as a UTC instant, midnight when the start time is unknown.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.date
            .and_time(self.time.unwrap_or(NaiveTime::MIN))
            .and_utc()
    }

    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    /// Whole days from `today` until the race, zero on race day.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }
}

/// The first race dated strictly after `today`.
pub fn next_race(races: &[RaceEvent], today: NaiveDate) -> Option<&RaceEvent> {
    races.iter().find(|race| race.date > today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn race(round: u32, date: &str, time: Option<&str>) -> RaceEvent {
        RaceEvent {
            season: 2024,
            round,
            name: format!("Round {round} Grand Prix"),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: time.map(|t| NaiveTime::parse_from_str(t, "%H:%M:%S").unwrap()),
            circuit: Circuit {
                id: "monza".to_string(),
                name: "Autodromo Nazionale di Monza".to_string(),
                locality: "Monza".to_string(),
                country: "Italy".to_string(),
            },
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_starts_at_with_and_without_time() {
        let timed = race(1, "2024-09-01", Some("13:00:00"));
        assert_eq!(timed.starts_at().to_rfc3339(), "2024-09-01T13:00:00+00:00");

        let untimed = race(1, "1950-05-13", None);
        assert_eq!(untimed.starts_at().to_rfc3339(), "1950-05-13T00:00:00+00:00");
    }

    #[test]
    fn test_next_race_and_countdown() {
        let races = vec![
            race(1, "2024-03-02", None),
            race(2, "2024-03-09", None),
            race(3, "2024-03-24", None),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        let next = next_race(&races, today).unwrap();
        assert_eq!(next.round, 3);
        assert_eq!(next.days_until(today), 15);
        assert!(races[0].is_past(today));
        assert!(!races[1].is_past(today));

        let after_season = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert!(next_race(&races, after_season).is_none());
    }
}
