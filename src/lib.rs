//! Column-level feature utilities for image-based cell profiling tables.
//!
//! CellProfiler-style pipelines emit wide tables whose columns mix
//! measurement features (`Cells_*`, `Nuclei_*`, `Cytoplasm_*`) with
//! metadata. This crate provides the small, pure transformations needed to
//! manage those column names:
//!
//! - **data**: the [`Profile`](data::Profile) named-column table
//! - **features**: denylist filtering, compartment labeling, and feature
//!   inference over column names
//!
//! # Example
//!
//! ```no_run
//! use cyto_features::prelude::*;
//!
//! let profile = Profile::from_csv("profiles.csv").unwrap();
//!
//! // Measurement columns, by prefix
//! let features = infer_cp_features(&profile);
//!
//! // Columns to exclude, from the bundled denylist
//! let excluded =
//!     get_denylist_features(&DenylistSource::Bundled, Some(&profile)).unwrap();
//! ```

pub mod data;
pub mod error;
pub mod features;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::data::Profile;
    pub use crate::error::{FeatureError, Result};
    pub use crate::features::{
        get_denylist_features, infer_cp_features, label_compartment, title_case,
        DenylistSource, AVAILABLE_COMPARTMENTS, CP_FEATURE_PREFIXES,
    };
}
