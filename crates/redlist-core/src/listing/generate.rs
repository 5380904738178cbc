//! [`ListingAddress`] → canonical `.json` URL.

use std::fmt;
use url::Url;

use super::{ListingAddress, Target};
use crate::config::{self, Endpoint};

impl ListingAddress {
    /// Path segments before the format suffix, e.g. `["r", "pics", "top"]`.
    pub(super) fn path_segments(&self) -> Vec<&str> {
        let mut segments = Vec::with_capacity(3);
        match &self.target {
            Target::FrontPage => {}
            Target::All => segments.extend(["r", "all"]),
            Target::Subreddit(token)
            | Target::Combination(token)
            | Target::AllSubtraction(token) => segments.extend(["r", token.as_str()]),
        }
        if let Some(sort) = self.sort {
            segments.push(sort.path_segment());
        }
        segments
    }

    /// Canonical URL for fetching this listing as JSON.
    ///
    /// Query parameters are always emitted in the order `t`, `before`,
    /// `after`, `limit`, so equal addresses produce byte-identical URLs.
    ///
    /// - front page → `https://reddit.com/.json`
    /// - `/r/pics` sorted top of the week → `https://reddit.com/r/pics/top.json?t=week`
    pub fn json_url(&self, endpoint: &Endpoint) -> Url {
        let mut url = endpoint.base().clone();

        let mut segments = self.path_segments();
        let last = format!("{}.json", segments.pop().unwrap_or_default());
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(segments).push(&last);
        }

        let limit = self.limit.map(|l| l.to_string());
        let pairs: Vec<(&str, &str)> = [
            ("t", self.sort.and_then(|s| s.period_param())),
            ("before", self.before.as_deref()),
            ("after", self.after.as_deref()),
            ("limit", limit.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect();

        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}

impl fmt::Display for ListingAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_url(config::endpoint()).as_str())
    }
}
