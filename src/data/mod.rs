//! Data structures for profiling tables.

mod profile;

pub use profile::Profile;
