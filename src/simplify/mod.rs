//! Area-preserving polygon simplification by vertex merging.
//!
//! Adjacent vertex pairs are collapsed to their midpoint when doing so
//! changes the enclosed area by less than a threshold. See
//! [`compute_merge_costs`] for the cost model and [`simplify`] for the
//! iteration scheme.

mod merge;
mod merge_cost;

pub use merge::{
    merge_pass, simplify, simplify_with, SimplifyConfig, SimplifyOutcome, DEFAULT_MAX_ITERATIONS,
    DEFAULT_MIN_SIZE_DELTA,
};
pub use merge_cost::{compute_merge_costs, delete_costs};
