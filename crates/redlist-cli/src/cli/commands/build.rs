//! `redlist subreddit` and `redlist front-page` – build an address from options.

use anyhow::Result;
use redlist_core::ListingAddress;

use crate::cli::ListingOptions;

fn apply(addr: ListingAddress, options: &ListingOptions) -> ListingAddress {
    addr.with_sort(options.sort)
        .with_limit(options.limit)
        .with_before(options.before.clone())
        .with_after(options.after.clone())
}

pub fn run_subreddit(out: &super::Output, name: &str, options: &ListingOptions) -> Result<()> {
    let addr = ListingAddress::from_subreddit_name(name)?;
    out.listing(&apply(addr, options))
}

pub fn run_front_page(out: &super::Output, options: &ListingOptions) -> Result<()> {
    out.listing(&apply(ListingAddress::front_page(), options))
}
