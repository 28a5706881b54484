//! Console pages

mod analytics;
mod inbox;
mod review_detail;

pub use analytics::*;
pub use inbox::*;
pub use review_detail::*;
