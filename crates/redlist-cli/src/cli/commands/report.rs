//! Shared output for commands that end with a listing address.

use anyhow::Result;
use redlist_core::labels::LabelConfig;
use redlist_core::ListingAddress;

/// How results are printed.
#[derive(Debug, Clone)]
pub struct Output {
    pub json: bool,
    pub labels: LabelConfig,
}

impl Output {
    /// Print `addr` as JSON or as an aligned key/value table.
    pub fn listing(&self, addr: &ListingAddress) -> Result<()> {
        if self.json {
            let mut value = serde_json::to_value(addr)?;
            value["url"] = addr.json_url_default().as_str().into();
            value["path"] = addr.human_readable_path().into();
            value["name"] = addr.human_readable_name(&self.labels, false).into();
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        let rows = [
            ("kind", format!("{:?}", addr.kind())),
            ("subreddit", addr.subreddit_token().unwrap_or("-").to_string()),
            ("sort", addr.sort().map_or("-".to_string(), |s| s.to_string())),
            ("limit", addr.limit().map_or("-".to_string(), |l| l.to_string())),
            ("before", addr.before().unwrap_or("-").to_string()),
            ("after", addr.after().unwrap_or("-").to_string()),
            ("url", addr.json_url_default().to_string()),
            ("path", addr.human_readable_path()),
            ("name", addr.human_readable_name(&self.labels, false)),
        ];
        for (key, value) in rows {
            println!("{:<10} {}", key, value);
        }
        Ok(())
    }
}
