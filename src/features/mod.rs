//! Column-name utilities for CellProfiler-style feature tables.

mod compartment;
mod denylist;
mod infer;

pub use compartment::{label_compartment, title_case, AVAILABLE_COMPARTMENTS};
pub use denylist::{get_denylist_features, DenylistSource};
pub use infer::{infer_cp_features, CP_FEATURE_PREFIXES};
