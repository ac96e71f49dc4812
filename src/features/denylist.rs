//! Denylist filtering of feature columns.

use crate::data::Profile;
use crate::error::{FeatureError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default denylist shipped with the crate, embedded so resolution does not
/// depend on the caller's working directory.
const BUNDLED_DENYLIST: &str = include_str!("../../data/blacklist_features.txt");

/// Where to read the denylist table from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DenylistSource {
    /// The denylist bundled with the crate.
    Bundled,
    /// A caller-supplied CSV file.
    Path(PathBuf),
    /// An already-loaded table.
    Table(Profile),
}

impl Default for DenylistSource {
    fn default() -> Self {
        DenylistSource::Bundled
    }
}

/// Get the list of denylisted feature names.
///
/// The denylist table must contain a column named exactly `blacklist`; its
/// values are returned in order, duplicates included. When `profile` is
/// given, the result keeps only names that are also columns of `profile`,
/// still in denylist order.
///
/// # Arguments
/// * `source` - Where to read the denylist table from
/// * `profile` - Optional profile used to subset the denylist
///
/// # Returns
/// Feature names to exclude from downstream analysis.
pub fn get_denylist_features(
    source: &DenylistSource,
    profile: Option<&Profile>,
) -> Result<Vec<String>> {
    let loaded;
    let denylist = match source {
        DenylistSource::Bundled => {
            loaded = Profile::from_csv_reader(BUNDLED_DENYLIST.as_bytes())?;
            &loaded
        }
        DenylistSource::Path(path) => {
            loaded = Profile::from_csv(path)?;
            &loaded
        }
        DenylistSource::Table(table) => table,
    };

    if !denylist.has_column("blacklist") {
        return Err(FeatureError::MissingBlacklistColumn);
    }

    let candidates = denylist.column("blacklist")?;
    let features: Vec<String> = match profile {
        Some(profile) => candidates
            .into_iter()
            .filter(|name| profile.has_column(name))
            .map(String::from)
            .collect(),
        None => candidates.into_iter().map(String::from).collect(),
    };

    Ok(features)
}
