//! Settings that survive restarts, kept in a file-backed cookie store.
//!
//! Run it twice: the visit counter climbs.

use std::sync::Arc;

use cookiestash::base::error::StorageError;
use cookiestash::storage::file::FileBackend;
use cookiestash::storage::store::CookieStorage;

fn main() -> Result<(), StorageError> {
    let path = std::env::temp_dir().join("cookiestash-settings.json");
    let backend = Arc::new(FileBackend::new(&path));

    let mut settings = CookieStorage::new("settings", backend)?;
    let visits = settings.get_as::<u64>("visits").unwrap_or(0) + 1;
    settings
        .set("visits", visits)
        .set("last_demo", "settings_file");
    settings.save()?;

    println!("visit #{visits} recorded in {}", path.display());
    Ok(())
}
