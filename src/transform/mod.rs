//! Pure data transforms applied to API payloads before display.
//!
//! Both transforms are synchronous functions of their inputs with no shared
//! state, so they can be called from any thread or task.

pub mod rank;
pub mod series;

pub use rank::{rank, rank_by};
pub use series::build_series;
