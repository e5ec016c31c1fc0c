pub mod config;
pub mod reset;
pub mod serve;

use escola::{DirectoryOptions, EnrollmentDirectory, SchoolConfig, SqliteStore};
use std::sync::Arc;

/// Open the configured database and wrap it in a directory
pub(crate) fn open_directory(config: &SchoolConfig) -> anyhow::Result<EnrollmentDirectory> {
    let store = SqliteStore::open_in_dir(&config.data_dir)?;
    let options = DirectoryOptions {
        legacy_unenrolled_sentinel: config.legacy_unenrolled_sentinel,
    };
    Ok(EnrollmentDirectory::with_options(Arc::new(store), options))
}
