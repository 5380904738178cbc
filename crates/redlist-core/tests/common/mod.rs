//! Shared helpers for listing-address integration tests.

#![allow(dead_code)]

use redlist_core::config::Endpoint;
use redlist_core::ListingAddress;
use url::Url;

pub const BASE: &str = "https://reddit.com";

/// Parses `path_and_query` under the default endpoint.
pub fn parse(path_and_query: &str) -> Option<ListingAddress> {
    let url = Url::parse(&format!("{}{}", BASE, path_and_query)).expect("test url");
    ListingAddress::parse(&url)
}

/// Canonical URL under the default endpoint.
pub fn generate(addr: &ListingAddress) -> String {
    addr.json_url(&Endpoint::default()).to_string()
}

/// Addresses the grammar accepts, covering every kind and sort shape.
pub const ACCEPTED: &[&str] = &[
    "/",
    "/.json",
    "/hot",
    "/NEW.json",
    "/top?t=hour",
    "/top.xml?t=decade",
    "/r/all",
    "/r/all/rising",
    "/r/all/top?t=year&limit=10",
    "/r/pics",
    "/r/pics.json?after=t3_abc",
    "/r/pics/controversial?before=t3_b&after=t3_a&limit=50",
    "/r/pics/top?t=week",
    "/r/Ask.Science/new",
    "/r/news+world",
    "/r/news+world/top?t=month",
    "/r/all-spam-bots",
    "/r/all-spam/hot?limit=5",
];

/// Addresses the grammar rejects.
pub const REJECTED: &[&str] = &[
    "/pics",
    "/r",
    "/r/pics/bogus",
    "/r/pics/top/extra",
    "/u/someone/submitted",
    "/R/pics",
    "/r/pics-more",
    "/r/all-",
    "/r/+pics",
    "/r/pics/comments/abc/title",
];
