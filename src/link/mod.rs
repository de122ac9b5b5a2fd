//! URL plumbing — reading share parameters and building share links

mod query;
mod share;

pub use query::{parse_flag, QueryParams};
pub use share::ShareLink;
