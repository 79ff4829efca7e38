//! Cookie-backed object store walkthrough.
//!
//! Shows the in-memory host store, chained mutation, option changes, and
//! the divergence between local state and the saved cookie.

use std::sync::Arc;

use serde_json::json;

use cookiestash::base::error::StorageError;
use cookiestash::cookies::attributes::Lifetime;
use cookiestash::storage::backend::MemoryBackend;
use cookiestash::storage::options::{OptionValue, StorageOptions};
use cookiestash::storage::store::CookieStorage;

fn main() -> Result<(), StorageError> {
    let backend = Arc::new(MemoryBackend::new());

    let options = StorageOptions::new()
        .path("/")
        .lifetime(Lifetime::Seconds(3600));
    let mut storage = CookieStorage::with_options("prefs", options, backend.clone())?;

    storage
        .set("theme", "dark")
        .set("volume", 11)
        .set("user", json!({"name": "mach", "admin": true}));
    println!(
        "before save: {} keys in memory, {} cookies in the host store",
        storage.len(),
        backend.len()
    );

    storage.save()?;
    println!("saved cookie: {:?}", backend.get("prefs"));

    // A second instance over the same host store sees the saved state.
    let other = CookieStorage::new("prefs", backend.clone())?;
    println!("second instance reads theme = {:?}", other.get("theme"));

    // Flip an option on the fly, then persist the cleared mapping.
    storage.set_option(OptionValue::Secure(true)).clear().save()?;
    println!("after clear().save(): {:?}", backend.get("prefs"));

    Ok(())
}
