//! Parser and generator for subreddit post-listing addresses.
//!
//! ```
//! use redlist_core::{ListingAddress, ListingKind, Sort, TopPeriod};
//!
//! let addr = ListingAddress::parse_str("/r/pics/top?t=week").unwrap();
//! assert_eq!(addr.kind(), ListingKind::Subreddit);
//! assert_eq!(addr.sort(), Some(Sort::Top(TopPeriod::Week)));
//! assert_eq!(
//!     addr.json_url_default().as_str(),
//!     "https://reddit.com/r/pics/top.json?t=week"
//! );
//! ```

pub mod config;
pub mod labels;
pub mod listing;
pub mod logging;
pub mod sort;
pub mod subreddit;

pub use labels::{DefaultLabels, Labels};
pub use listing::{ListingAddress, ListingKind, ParseListingError};
pub use sort::{Sort, TopPeriod};
pub use subreddit::InvalidSubredditName;
