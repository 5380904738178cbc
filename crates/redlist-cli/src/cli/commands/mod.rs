//! CLI command handlers, one file per command.

mod build;
mod parse;
mod report;
mod sorts;

pub use build::{run_front_page, run_subreddit};
pub use parse::run_parse;
pub use report::Output;
pub use sorts::run_sorts;
