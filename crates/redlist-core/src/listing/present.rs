//! UI text for a [`ListingAddress`].

use super::{ListingAddress, Target};
use crate::labels::Labels;
use crate::subreddit;

impl ListingAddress {
    /// Path as shown to users: no host, no `.json`, and only the `t`
    /// parameter of top sorts, e.g. `/r/pics/top?t=week`.
    pub fn human_readable_path(&self) -> String {
        let mut path = String::from("/");
        path.push_str(&self.path_segments().join("/"));

        if let Some(period) = self.sort.and_then(|s| s.period_param()) {
            path.push_str("?t=");
            path.push_str(period);
        }
        path
    }

    /// Short title for the listing.
    ///
    /// Subreddits show as `/r/<name>`, or just `<name>` when `shorter` is set.
    /// Combinations and subtractions already read well and are shown as-is.
    pub fn human_readable_name(&self, labels: &dyn Labels, shorter: bool) -> String {
        match &self.target {
            Target::FrontPage => labels.front_page().to_string(),
            Target::All => labels.all().to_string(),
            Target::Subreddit(token) => {
                let name = if shorter {
                    subreddit::strip_r_prefix(token).map(str::to_string)
                } else {
                    subreddit::canonical_name(token)
                };
                name.unwrap_or_else(|_| token.clone())
            }
            Target::Combination(token) | Target::AllSubtraction(token) => token.clone(),
        }
    }
}
