//! Named-column tables of profiling measurements.

use crate::error::{FeatureError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A table of named columns holding string-typed values.
///
/// Columns keep their file order. The feature utilities in this crate only
/// inspect column names; values are carried so auxiliary tables (such as a
/// denylist) can be read through the same type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Column names in order.
    column_names: Vec<String>,
    /// Row-major values, each row padded to the header width.
    rows: Vec<Vec<String>>,
}

impl Profile {
    /// Create a profile with the given columns and no rows.
    pub fn new<I, S>(column_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            column_names: column_names.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Load a profile from a CSV file.
    ///
    /// The first row is the header with column names. Rows shorter than the
    /// header are padded with empty strings; extra fields are dropped.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Load a profile from any CSV reader.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let header = csv_reader.headers()?;
        if header.is_empty() {
            return Err(FeatureError::EmptyData(
                "Profile must have a header row".to_string(),
            ));
        }
        let column_names: Vec<String> = header.iter().map(|s| s.to_string()).collect();
        let n_columns = column_names.len();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let mut row: Vec<String> = record
                .iter()
                .take(n_columns)
                .map(|s| s.to_string())
                .collect();
            row.resize(n_columns, String::new());
            rows.push(row);
        }

        Ok(Self { column_names, rows })
    }

    /// Append a row, padded or truncated to the column count.
    pub fn push_row<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = values
            .into_iter()
            .take(self.column_names.len())
            .map(Into::into)
            .collect();
        row.resize(self.column_names.len(), String::new());
        self.rows.push(row);
    }

    /// Column names in order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.column_names.len()
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Check if a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }

    /// Get all values for a column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self
            .column_names
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| FeatureError::MissingColumn(name.to_string()))?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Metadata_Plate,Cells_AreaShape_Area,Nuclei_Intensity_DNA").unwrap();
        writeln!(file, "plate1,102.5,0.91").unwrap();
        writeln!(file, "plate2,98.0,0.87").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_profile() {
        let file = create_test_csv();
        let profile = Profile::from_csv(file.path()).unwrap();

        assert_eq!(profile.n_columns(), 3);
        assert_eq!(profile.n_rows(), 2);
        assert_eq!(
            profile.column_names(),
            &[
                "Metadata_Plate",
                "Cells_AreaShape_Area",
                "Nuclei_Intensity_DNA"
            ]
        );
    }

    #[test]
    fn test_has_column() {
        let file = create_test_csv();
        let profile = Profile::from_csv(file.path()).unwrap();

        assert!(profile.has_column("Cells_AreaShape_Area"));
        assert!(!profile.has_column("Cytoplasm_Texture"));
    }

    #[test]
    fn test_column_values() {
        let file = create_test_csv();
        let profile = Profile::from_csv(file.path()).unwrap();

        let values = profile.column("Metadata_Plate").unwrap();
        assert_eq!(values, vec!["plate1", "plate2"]);
    }

    #[test]
    fn test_missing_column() {
        let file = create_test_csv();
        let profile = Profile::from_csv(file.path()).unwrap();

        let err = profile.column("no_such_column").unwrap_err();
        assert!(matches!(err, FeatureError::MissingColumn(_)));
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let err = Profile::from_csv(file.path()).unwrap_err();
        assert!(matches!(err, FeatureError::EmptyData(_)));
    }

    #[test]
    fn test_ragged_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a,b,c").unwrap();
        writeln!(file, "1,2").unwrap();
        writeln!(file, "1,2,3,4").unwrap();
        file.flush().unwrap();

        let profile = Profile::from_csv(file.path()).unwrap();
        assert_eq!(profile.column("c").unwrap(), vec!["", "3"]);
        assert_eq!(profile.column("a").unwrap(), vec!["1", "1"]);
    }

    #[test]
    fn test_push_row() {
        let mut profile = Profile::new(["x", "y"]);
        profile.push_row(["1"]);
        profile.push_row(["2", "3", "4"]);

        assert_eq!(profile.n_rows(), 2);
        assert_eq!(profile.column("y").unwrap(), vec!["", "3"]);
    }
}
