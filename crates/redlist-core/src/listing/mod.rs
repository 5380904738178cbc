//! Subreddit post-listing addresses.
//!
//! A [`ListingAddress`] is the typed form of URLs such as `/`, `/top?t=day`,
//! `/r/all`, `/r/pics/new`, `/r/news+world` or `/r/all-spam-bots`. Parse one
//! with [`ListingAddress::parse`], derive variants with the `with_*` methods,
//! and turn it back into a fetchable `.json` URL with
//! [`ListingAddress::json_url`].

mod classify;
mod generate;
mod parse;
mod path;
mod present;
pub mod query;

pub use classify::{classify, TokenShape};
pub use parse::ParseListingError;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use url::Url;

use crate::config;
use crate::sort::Sort;
use crate::subreddit::{self, InvalidSubredditName};

/// Which listing an address names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    FrontPage,
    All,
    Subreddit,
    SubredditCombination,
    AllSubtraction,
}

/// Listing target; token-carrying variants only ever hold a token whose
/// shape matches the variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Target {
    FrontPage,
    All,
    Subreddit(String),
    Combination(String),
    AllSubtraction(String),
}

impl Target {
    fn from_token(token: &str) -> Option<Target> {
        Some(match classify(token)? {
            TokenShape::All => Target::All,
            TokenShape::AllSubtraction => Target::AllSubtraction(token.to_string()),
            TokenShape::Combination => Target::Combination(token.to_string()),
            TokenShape::Single => Target::Subreddit(token.to_string()),
        })
    }

    fn kind(&self) -> ListingKind {
        match self {
            Target::FrontPage => ListingKind::FrontPage,
            Target::All => ListingKind::All,
            Target::Subreddit(_) => ListingKind::Subreddit,
            Target::Combination(_) => ListingKind::SubredditCombination,
            Target::AllSubtraction(_) => ListingKind::AllSubtraction,
        }
    }

    fn token(&self) -> Option<&str> {
        match self {
            Target::FrontPage | Target::All => None,
            Target::Subreddit(t) | Target::Combination(t) | Target::AllSubtraction(t) => Some(t),
        }
    }
}

/// Immutable subreddit post-listing address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingAddress {
    target: Target,
    sort: Option<Sort>,
    limit: Option<u32>,
    before: Option<String>,
    after: Option<String>,
}

impl ListingAddress {
    fn new(target: Target) -> Self {
        Self {
            target,
            sort: None,
            limit: None,
            before: None,
            after: None,
        }
    }

    /// The front page with the site's default sort.
    pub fn front_page() -> Self {
        Self::new(Target::FrontPage)
    }

    /// `/r/all` with the site's default sort.
    pub fn all() -> Self {
        Self::new(Target::All)
    }

    /// Address for a subreddit given by bare or `/r/`-prefixed name.
    ///
    /// The name goes through the same grammar as any parsed URL, so `"all"`
    /// yields [`ListingKind::All`] and `"a+b"` a combination.
    pub fn from_subreddit_name(name: &str) -> Result<Self, InvalidSubredditName> {
        let bare = subreddit::strip_r_prefix(name)?;

        let mut url = config::endpoint().base().clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().push("r").push(bare);
        }

        Self::parse(&url).ok_or_else(|| InvalidSubredditName {
            name: name.to_string(),
        })
    }

    pub fn kind(&self) -> ListingKind {
        self.target.kind()
    }

    /// Subreddit token for subreddit, combination and subtraction listings.
    pub fn subreddit_token(&self) -> Option<&str> {
        self.target.token()
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn before(&self) -> Option<&str> {
        self.before.as_deref()
    }

    pub fn after(&self) -> Option<&str> {
        self.after.as_deref()
    }

    pub fn with_sort(&self, sort: Option<Sort>) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_limit(&self, limit: Option<u32>) -> Self {
        Self {
            limit,
            ..self.clone()
        }
    }

    pub fn with_before(&self, before: Option<String>) -> Self {
        Self {
            before,
            ..self.clone()
        }
    }

    pub fn with_after(&self, after: Option<String>) -> Self {
        Self {
            after,
            ..self.clone()
        }
    }

    /// Canonical `.json` URL under the process-wide endpoint.
    pub fn json_url_default(&self) -> Url {
        self.json_url(config::endpoint())
    }
}

impl Serialize for ListingAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ListingAddress", 6)?;
        s.serialize_field("kind", &self.kind())?;
        s.serialize_field("subreddit", &self.subreddit_token())?;
        s.serialize_field("sort", &self.sort)?;
        s.serialize_field("limit", &self.limit)?;
        s.serialize_field("before", &self.before)?;
        s.serialize_field("after", &self.after)?;
        s.end()
    }
}
