//! Listing sort orders and their name/label tables.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Time window qualifying a "top" sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopPeriod {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TopPeriod {
    /// Lowercase value used in the `t` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            TopPeriod::Hour => "hour",
            TopPeriod::Day => "day",
            TopPeriod::Week => "week",
            TopPeriod::Month => "month",
            TopPeriod::Year => "year",
            TopPeriod::All => "all",
        }
    }

    /// Decodes a `t` value. Missing or unrecognized values mean all-time.
    pub fn from_param(t: Option<&str>) -> TopPeriod {
        match t {
            Some(t) if t.eq_ignore_ascii_case("hour") => TopPeriod::Hour,
            Some(t) if t.eq_ignore_ascii_case("day") => TopPeriod::Day,
            Some(t) if t.eq_ignore_ascii_case("week") => TopPeriod::Week,
            Some(t) if t.eq_ignore_ascii_case("month") => TopPeriod::Month,
            Some(t) if t.eq_ignore_ascii_case("year") => TopPeriod::Year,
            _ => TopPeriod::All,
        }
    }
}

/// Ranking applied to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sort {
    Hot,
    New,
    Rising,
    Controversial,
    Top(TopPeriod),
}

impl Sort {
    /// Every sort order, in menu order.
    pub const ALL: [Sort; 10] = [
        Sort::Hot,
        Sort::New,
        Sort::Rising,
        Sort::Controversial,
        Sort::Top(TopPeriod::Hour),
        Sort::Top(TopPeriod::Day),
        Sort::Top(TopPeriod::Week),
        Sort::Top(TopPeriod::Month),
        Sort::Top(TopPeriod::Year),
        Sort::Top(TopPeriod::All),
    ];

    /// Stable lowercase name, e.g. `"hot"` or `"top_week"`.
    pub fn name(self) -> &'static str {
        match self {
            Sort::Hot => "hot",
            Sort::New => "new",
            Sort::Rising => "rising",
            Sort::Controversial => "controversial",
            Sort::Top(TopPeriod::Hour) => "top_hour",
            Sort::Top(TopPeriod::Day) => "top_day",
            Sort::Top(TopPeriod::Week) => "top_week",
            Sort::Top(TopPeriod::Month) => "top_month",
            Sort::Top(TopPeriod::Year) => "top_year",
            Sort::Top(TopPeriod::All) => "top_all",
        }
    }

    /// Menu label, e.g. `"Top (This Week)"`.
    pub fn label(self) -> &'static str {
        match self {
            Sort::Hot => "Hot",
            Sort::New => "New",
            Sort::Rising => "Rising",
            Sort::Controversial => "Controversial",
            Sort::Top(TopPeriod::Hour) => "Top (This Hour)",
            Sort::Top(TopPeriod::Day) => "Top (Today)",
            Sort::Top(TopPeriod::Week) => "Top (This Week)",
            Sort::Top(TopPeriod::Month) => "Top (This Month)",
            Sort::Top(TopPeriod::Year) => "Top (This Year)",
            Sort::Top(TopPeriod::All) => "Top (All Time)",
        }
    }

    /// Reverse lookup by menu label (exact match).
    pub fn from_label(label: &str) -> Option<Sort> {
        Sort::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Path segment the listing endpoint expects for this sort.
    pub fn path_segment(self) -> &'static str {
        match self {
            Sort::Top(_) => "top",
            other => other.name(),
        }
    }

    /// Value of the `t` query parameter, for top sorts only.
    pub fn period_param(self) -> Option<&'static str> {
        match self {
            Sort::Top(period) => Some(period.as_str()),
            _ => None,
        }
    }

    /// Decodes a sort from a path token and the optional `t` parameter.
    ///
    /// Returns `None` when `token` is not a sort name at all; that is not an
    /// error, the segment may be something else entirely.
    pub fn decode(token: &str, t: Option<&str>) -> Option<Sort> {
        let token = token.to_ascii_lowercase();
        match token.as_str() {
            "hot" => Some(Sort::Hot),
            "new" => Some(Sort::New),
            "controversial" => Some(Sort::Controversial),
            "rising" => Some(Sort::Rising),
            "top" => Some(Sort::Top(TopPeriod::from_param(t))),
            _ => None,
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `Sort::from_str` for names outside the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0:?}")]
pub struct UnknownSort(pub String);

impl FromStr for Sort {
    type Err = UnknownSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sort::ALL
            .into_iter()
            .find(|sort| sort.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSort(s.to_string()))
    }
}

impl Serialize for Sort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Sort {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(Sort::decode("HOT", None), Some(Sort::Hot));
        assert_eq!(Sort::decode("New", None), Some(Sort::New));
        assert_eq!(Sort::decode("rIsInG", None), Some(Sort::Rising));
        assert_eq!(
            Sort::decode("Controversial", None),
            Some(Sort::Controversial)
        );
    }

    #[test]
    fn decode_top_periods() {
        assert_eq!(
            Sort::decode("top", Some("WEEK")),
            Some(Sort::Top(TopPeriod::Week))
        );
        assert_eq!(
            Sort::decode("top", Some("hour")),
            Some(Sort::Top(TopPeriod::Hour))
        );
        assert_eq!(
            Sort::decode("TOP", Some("year")),
            Some(Sort::Top(TopPeriod::Year))
        );
    }

    #[test]
    fn decode_top_defaults_to_all_time() {
        assert_eq!(Sort::decode("top", None), Some(Sort::Top(TopPeriod::All)));
        assert_eq!(
            Sort::decode("top", Some("fortnight")),
            Some(Sort::Top(TopPeriod::All))
        );
    }

    #[test]
    fn decode_other_tokens() {
        assert_eq!(Sort::decode("pics", None), None);
        assert_eq!(Sort::decode("", Some("week")), None);
        assert_eq!(Sort::decode("best", None), None);
    }

    #[test]
    fn names_and_labels_are_bidirectional() {
        for sort in Sort::ALL {
            assert_eq!(sort.name().parse::<Sort>(), Ok(sort));
            assert_eq!(Sort::from_label(sort.label()), Some(sort));
        }
        assert_eq!("TOP_MONTH".parse::<Sort>(), Ok(Sort::Top(TopPeriod::Month)));
        assert!("top".parse::<Sort>().is_err());
        assert_eq!(Sort::from_label("Sideways"), None);
    }

    #[test]
    fn generator_tokens() {
        assert_eq!(Sort::Controversial.path_segment(), "controversial");
        assert_eq!(Sort::Controversial.period_param(), None);
        assert_eq!(Sort::Top(TopPeriod::Day).path_segment(), "top");
        assert_eq!(Sort::Top(TopPeriod::Day).period_param(), Some("day"));
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&Sort::Top(TopPeriod::Week)).unwrap();
        assert_eq!(json, "\"top_week\"");
        let back: Sort = serde_json::from_str("\"rising\"").unwrap();
        assert_eq!(back, Sort::Rising);
        assert!(serde_json::from_str::<Sort>("\"sideways\"").is_err());
    }
}
