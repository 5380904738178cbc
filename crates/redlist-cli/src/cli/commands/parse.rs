//! `redlist parse` – parse a listing URL or path.

use anyhow::{Context, Result};
use redlist_core::ListingAddress;

pub fn run_parse(out: &super::Output, address: &str) -> Result<()> {
    let addr = ListingAddress::parse_str(address)
        .with_context(|| format!("cannot parse {:?}", address))?;
    tracing::info!(address, kind = ?addr.kind(), "parsed listing address");
    out.listing(&addr)
}
