/// Outcome of a season-keyed fetch.
///
/// `Data` always carries the season that was actually served, which differs
/// from `requested` when the season fallback kicked in. `NoData` is the single
/// "nothing to show" value left once every candidate season has been tried.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Data { requested: i32, season: i32, value: T },
    NoData { requested: i32 },
}

impl<T> Fetched<T> {
    pub fn requested_season(&self) -> i32 {
        match self {
            Fetched::Data { requested, .. } | Fetched::NoData { requested } => *requested,
        }
    }

    /// Season the payload belongs to, `None` for `NoData`.
    pub fn served_season(&self) -> Option<i32> {
        match self {
            Fetched::Data { season, .. } => Some(*season),
            Fetched::NoData { .. } => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Fetched::NoData { .. })
    }

    /// True when the payload comes from a different season than requested.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Fetched::Data { requested, season, .. } if requested != season)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Fetched::Data { value, .. } => Some(value),
            Fetched::NoData { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Fetched::Data { value, .. } => Some(value),
            Fetched::NoData { .. } => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Data {
                requested,
                season,
                value,
            } => Fetched::Data {
                requested,
                season,
                value: f(value),
            },
            Fetched::NoData { requested } => Fetched::NoData { requested },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_accessors() {
        let fetched = Fetched::Data {
            requested: 2025,
            season: 2024,
            value: vec![1, 2, 3],
        };

        assert_eq!(fetched.requested_season(), 2025);
        assert_eq!(fetched.served_season(), Some(2024));
        assert!(fetched.is_fallback());
        assert!(!fetched.is_no_data());
        assert_eq!(fetched.data().map(Vec::len), Some(3));
        assert_eq!(fetched.map(|v| v.len()).into_data(), Some(3));
    }

    #[test]
    fn test_no_data_accessors() {
        let fetched: Fetched<Vec<u32>> = Fetched::NoData { requested: 2025 };

        assert_eq!(fetched.requested_season(), 2025);
        assert_eq!(fetched.served_season(), None);
        assert!(fetched.is_no_data());
        assert!(!fetched.is_fallback());
        assert!(fetched.data().is_none());
    }

    #[test]
    fn test_same_season_is_not_fallback() {
        let fetched = Fetched::Data {
            requested: 2023,
            season: 2023,
            value: (),
        };
        assert!(!fetched.is_fallback());
    }
}
