//! Reusable UI components

mod bar_chart;
mod layout;
mod loading;
mod pagination;
mod review_table;
mod suggest_reply;

pub use bar_chart::*;
pub use layout::*;
pub use loading::*;
pub use pagination::*;
pub use review_table::*;
pub use suggest_reply::*;
