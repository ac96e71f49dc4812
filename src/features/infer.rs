//! Inference of measurement feature columns from a profile.

use crate::data::Profile;

/// Prefixes that mark a column as a cell painting measurement feature.
pub const CP_FEATURE_PREFIXES: &[&str] = &["Cells_", "Nuclei_", "Cytoplasm_"];

/// Given a profile, output the columns expected to be cell painting
/// features.
///
/// A column qualifies iff its name starts with one of `Cells_`, `Nuclei_`
/// or `Cytoplasm_` (exact, case-sensitive). Column order is preserved.
pub fn infer_cp_features(profile: &Profile) -> Vec<String> {
    profile
        .column_names()
        .iter()
        .filter(|name| CP_FEATURE_PREFIXES.iter().any(|p| name.starts_with(p)))
        .cloned()
        .collect()
}
