//! Fixed UI labels for the listings that have no subreddit name.

use serde::{Deserialize, Serialize};

/// Lookup for the localized "front page" and "all" labels.
pub trait Labels {
    fn front_page(&self) -> &str;
    fn all(&self) -> &str;
}

/// Built-in English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabels;

impl Labels for DefaultLabels {
    fn front_page(&self) -> &str {
        "Front Page"
    }

    fn all(&self) -> &str {
        "All"
    }
}

/// Label overrides from the `[labels]` section of config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    pub front_page: String,
    pub all: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            front_page: DefaultLabels.front_page().to_string(),
            all: DefaultLabels.all().to_string(),
        }
    }
}

impl Labels for LabelConfig {
    fn front_page(&self) -> &str {
        &self.front_page
    }

    fn all(&self) -> &str {
        &self.all
    }
}
