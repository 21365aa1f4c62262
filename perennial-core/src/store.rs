//! The persisted token slot.
//!
//! One named slot holds the transport-encoded form of the full event
//! collection, with a rolling expiration reset on every write. Writes are
//! idempotent and fire-and-forget; clearing the slot is the explicit
//! "new calendar" reset.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PerennialError, PerennialResult};

/// Days before an untouched slot expires.
pub const SLOT_TTL_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
struct Slot {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Default slot path: `{data_dir}/perennial/events.json`
pub fn default_path() -> PerennialResult<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| PerennialError::Store("Could not determine data directory".to_string()))?
        .join("perennial");
    Ok(dir.join("events.json"))
}

/// Write `token` to the slot, resetting the expiration window.
///
/// Re-saving the same token is safe; the only observable difference is
/// the moved expiry.
pub fn save(path: &Path, token: &str) -> PerennialResult<()> {
    let slot = Slot {
        token: token.to_string(),
        expires_at: Utc::now() + Duration::days(SLOT_TTL_DAYS),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&slot)
        .map_err(|e| PerennialError::Serialization(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read the stored token, if the slot exists and has not expired.
///
/// An expired or unreadable slot is removed so the next load starts
/// clean.
pub fn load(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;

    let slot: Slot = match serde_json::from_str(&content) {
        Ok(slot) => slot,
        Err(_) => {
            let _ = std::fs::remove_file(path);
            return None;
        }
    };

    if slot.expires_at < Utc::now() {
        let _ = std::fs::remove_file(path);
        return None;
    }

    Some(slot.token)
}

/// Delete the slot ("new calendar"). Missing slots are fine.
pub fn clear(path: &Path) -> PerennialResult<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
