//! Compartment labeling of feature columns.

use crate::error::{FeatureError, Result};
use std::collections::HashSet;

/// Compartments a feature column may be measured in.
///
/// "Nuceli" is carried verbatim from the upstream pipeline definition; see
/// the known-quirk tests before changing it.
pub const AVAILABLE_COMPARTMENTS: &[&str] = &["Cells", "Cytoplasm", "Nuceli", "Image", "Barcode"];

/// Title-case a string: the first letter of each whitespace-separated word
/// is uppercased, the remaining letters lowercased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Assign a compartment label to each feature name as a prefix.
///
/// Metadata columns are prefixed with `Metadata_`; all other names get the
/// title-cased compartment as prefix. Output order and length match the
/// input.
///
/// # Arguments
/// * `features` - Feature names being used
/// * `compartment` - The measured compartment (case-insensitive)
/// * `metadata_cols` - Column names to be treated as metadata
///
/// # Returns
/// Recoded column names with metadata and compartment labels.
pub fn label_compartment(
    features: &[String],
    compartment: &str,
    metadata_cols: &HashSet<String>,
) -> Result<Vec<String>> {
    let compartment = title_case(compartment);
    if !AVAILABLE_COMPARTMENTS.contains(&compartment.as_str()) {
        return Err(FeatureError::InvalidCompartment {
            given: compartment,
            valid: AVAILABLE_COMPARTMENTS,
        });
    }

    Ok(features
        .iter()
        .map(|x| {
            if metadata_cols.contains(x) {
                format!("Metadata_{}", x)
            } else {
                format!("{}_{}", compartment, x)
            }
        })
        .collect())
}
