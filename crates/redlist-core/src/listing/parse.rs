//! URL → [`ListingAddress`].

use std::str::FromStr;
use url::Url;

use super::path::listing_segments;
use super::query::QueryParams;
use super::{ListingAddress, Target};
use crate::config;
use crate::sort::Sort;

/// Query parameters the listing grammar reads.
const KNOWN_PARAMS: [&str; 4] = ["t", "before", "after", "limit"];

/// Returned by `ListingAddress::from_str`.
#[derive(Debug, thiserror::Error)]
pub enum ParseListingError {
    #[error("invalid address {input:?}: {source}")]
    Url {
        input: String,
        source: url::ParseError,
    },
    #[error("not a subreddit listing address: {0:?}")]
    NoMatch(String),
}

impl ListingAddress {
    /// Parses a listing URL, or returns `None` if it is not one.
    ///
    /// Scheme and host are not inspected; the caller has already decided the
    /// URL belongs to the site.
    pub fn parse(url: &Url) -> Option<ListingAddress> {
        match parse_listing(url) {
            Ok(address) => Some(address),
            Err(reason) => {
                tracing::trace!(url = %url, reason, "not a subreddit listing");
                None
            }
        }
    }

    /// Like [`ListingAddress::parse`] but accepts a bare path such as
    /// `/r/pics/top?t=week`, resolved against the process-wide endpoint.
    pub fn parse_str(address: &str) -> Result<ListingAddress, ParseListingError> {
        let url = match Url::parse(address) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => config::endpoint()
                .base()
                .join(address)
                .map_err(|source| ParseListingError::Url {
                    input: address.to_string(),
                    source,
                })?,
            Err(source) => {
                return Err(ParseListingError::Url {
                    input: address.to_string(),
                    source,
                })
            }
        };
        Self::parse(&url).ok_or_else(|| ParseListingError::NoMatch(address.to_string()))
    }
}

impl FromStr for ListingAddress {
    type Err = ParseListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

fn parse_listing(url: &Url) -> Result<ListingAddress, &'static str> {
    let query = QueryParams::from_url(url);
    for name in query.names() {
        if !KNOWN_PARAMS.iter().any(|k| k.eq_ignore_ascii_case(name)) {
            tracing::trace!(param = name, "ignoring query parameter");
        }
    }

    let segments = listing_segments(url);
    let sort = segments
        .last()
        .and_then(|last| Sort::decode(last, query.get("t")));

    let (target, sort) = match segments.as_slice() {
        [] => (Target::FrontPage, None),
        [_] => (Target::FrontPage, Some(sort.ok_or("single segment is not a sort")?)),
        [r, token] => (subreddit_target(r, token)?, None),
        [r, token, _] => (
            subreddit_target(r, token)?,
            Some(sort.ok_or("trailing segment is not a sort")?),
        ),
        _ => return Err("too many path segments"),
    };

    Ok(ListingAddress {
        target,
        sort,
        limit: query.get("limit").and_then(|v| v.parse().ok()),
        before: query.get("before").map(str::to_string),
        after: query.get("after").map(str::to_string),
    })
}

fn subreddit_target(r: &str, token: &str) -> Result<Target, &'static str> {
    if r != "r" {
        return Err("path does not start with /r/");
    }
    Target::from_token(token).ok_or("unrecognized subreddit token")
}
