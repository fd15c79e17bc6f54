//! Pack purchase state: one globally active pack and a purchase cooldown.
//!
//! Only one pack can be "in reveal" at a time, and a fresh purchase starts a
//! cooldown that gates every other pack. Both facts survive restarts. All
//! time-dependent operations take an explicit `now` in milliseconds so the
//! logic is testable without a wall clock.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AlbumResult;
use crate::storage::Storage;
use crate::types::PackId;

/// Cooldown between pack purchases
pub const COOLDOWN_MS: i64 = 60_000;

/// Persisted pack purchase state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackState {
    /// The pack currently being revealed, if any
    pub active_pack_id: Option<PackId>,
    /// Millisecond timestamp until which purchases are locked
    pub cooldown_until: Option<i64>,
}

impl PackState {
    /// Drop an expired cooldown.
    pub fn sanitized(&self, now_ms: i64) -> Self {
        Self {
            active_pack_id: self.active_pack_id,
            cooldown_until: sanitize_cooldown(self.cooldown_until, now_ms),
        }
    }
}

fn sanitize_cooldown(cooldown_until: Option<i64>, now_ms: i64) -> Option<i64> {
    cooldown_until.filter(|&until| until > now_ms)
}

/// Seconds (rounded up) until the cooldown expires; 0 when it already has.
pub fn remaining_seconds(cooldown_until: Option<i64>, now_ms: i64) -> u64 {
    match cooldown_until {
        Some(until) if until > now_ms => ((until - now_ms) as u64).div_ceil(1000),
        _ => 0,
    }
}

/// Whether a specific pack is locked for purchase.
///
/// The active pack itself is never locked; everything else is locked while
/// the cooldown runs.
pub fn is_pack_locked(pack_id: PackId, active: Option<PackId>, cooldown_seconds: u64) -> bool {
    if active == Some(pack_id) {
        return false;
    }
    cooldown_seconds > 0
}

/// Render a cooldown as `MM:SS`.
pub fn format_cooldown(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Storage-backed pack state tracker
#[derive(Clone)]
pub struct PackTracker {
    storage: Storage,
}

impl PackTracker {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Current state with expired cooldowns dropped.
    pub fn state(&self, now_ms: i64) -> AlbumResult<PackState> {
        Ok(self
            .storage
            .load_pack_state()?
            .unwrap_or_default()
            .sanitized(now_ms))
    }

    /// Try to open a pack.
    ///
    /// Returns `true` when the purchase may proceed. Re-opening the already
    /// active pack succeeds; any other pack fails while one is active or the
    /// cooldown runs. Opening records the active pack and starts the
    /// cooldown.
    pub fn open_pack(&self, pack_id: PackId, now_ms: i64) -> AlbumResult<bool> {
        let state = self.state(now_ms)?;

        if let Some(active) = state.active_pack_id {
            return Ok(active == pack_id);
        }

        if state.cooldown_until.is_some() {
            return Ok(false);
        }

        let next = PackState {
            active_pack_id: Some(pack_id),
            cooldown_until: Some(now_ms + COOLDOWN_MS),
        };
        self.storage.save_pack_state(&next)?;
        debug!(pack = %pack_id, "pack opened, cooldown started");
        Ok(true)
    }

    /// Finish the active pack; a still-running cooldown stays in place.
    pub fn finish_pack(&self, now_ms: i64) -> AlbumResult<()> {
        let state = self.state(now_ms)?;
        let next = PackState {
            active_pack_id: None,
            cooldown_until: state.cooldown_until,
        };
        self.storage.save_pack_state(&next)?;
        debug!("pack finished");
        Ok(())
    }

    /// Drop the cooldown without touching the active pack.
    pub fn clear_cooldown(&self, now_ms: i64) -> AlbumResult<()> {
        let state = self.state(now_ms)?;
        let next = PackState {
            active_pack_id: state.active_pack_id,
            cooldown_until: None,
        };
        self.storage.save_pack_state(&next)?;
        Ok(())
    }

    /// Seconds left on the cooldown.
    pub fn cooldown_seconds(&self, now_ms: i64) -> AlbumResult<u64> {
        let state = self.state(now_ms)?;
        Ok(remaining_seconds(state.cooldown_until, now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NOW: i64 = 1_700_000_000_000;

    fn create_tracker() -> (PackTracker, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.redb")).unwrap();
        (PackTracker::new(storage), temp_dir)
    }

    #[test]
    fn test_open_pack_starts_cooldown() {
        let (tracker, _temp) = create_tracker();

        assert!(tracker.open_pack(PackId(1), NOW).unwrap());

        let state = tracker.state(NOW).unwrap();
        assert_eq!(state.active_pack_id, Some(PackId(1)));
        assert_eq!(state.cooldown_until, Some(NOW + COOLDOWN_MS));
        assert_eq!(tracker.cooldown_seconds(NOW).unwrap(), 60);
    }

    #[test]
    fn test_reopening_active_pack_succeeds() {
        let (tracker, _temp) = create_tracker();

        assert!(tracker.open_pack(PackId(2), NOW).unwrap());
        assert!(tracker.open_pack(PackId(2), NOW + 1_000).unwrap());
    }

    #[test]
    fn test_other_pack_blocked_while_one_is_active() {
        let (tracker, _temp) = create_tracker();

        assert!(tracker.open_pack(PackId(1), NOW).unwrap());
        assert!(!tracker.open_pack(PackId(3), NOW + 1_000).unwrap());
        // Even after the cooldown window, the active pack still blocks others
        assert!(!tracker.open_pack(PackId(3), NOW + COOLDOWN_MS + 1_000).unwrap());
    }

    #[test]
    fn test_cooldown_blocks_after_finish() {
        let (tracker, _temp) = create_tracker();

        assert!(tracker.open_pack(PackId(1), NOW).unwrap());
        tracker.finish_pack(NOW + 5_000).unwrap();

        // Cooldown still running
        assert!(!tracker.open_pack(PackId(2), NOW + 30_000).unwrap());

        // Cooldown elapsed
        assert!(tracker.open_pack(PackId(2), NOW + COOLDOWN_MS + 1).unwrap());
    }

    #[test]
    fn test_finish_keeps_running_cooldown_only() {
        let (tracker, _temp) = create_tracker();

        tracker.open_pack(PackId(4), NOW).unwrap();
        tracker.finish_pack(NOW + COOLDOWN_MS + 5_000).unwrap();

        let state = tracker.state(NOW + COOLDOWN_MS + 5_000).unwrap();
        assert_eq!(state.active_pack_id, None);
        assert_eq!(state.cooldown_until, None);
    }

    #[test]
    fn test_clear_cooldown() {
        let (tracker, _temp) = create_tracker();

        tracker.open_pack(PackId(1), NOW).unwrap();
        tracker.finish_pack(NOW).unwrap();
        tracker.clear_cooldown(NOW).unwrap();

        assert!(tracker.open_pack(PackId(2), NOW + 1).unwrap());
    }

    #[test]
    fn test_expired_cooldown_sanitized_on_read() {
        let state = PackState {
            active_pack_id: None,
            cooldown_until: Some(NOW - 1),
        };
        assert_eq!(state.sanitized(NOW).cooldown_until, None);

        let running = PackState {
            active_pack_id: None,
            cooldown_until: Some(NOW + 1),
        };
        assert_eq!(running.sanitized(NOW).cooldown_until, Some(NOW + 1));
    }

    #[test]
    fn test_remaining_seconds_rounds_up() {
        assert_eq!(remaining_seconds(Some(NOW + 1), NOW), 1);
        assert_eq!(remaining_seconds(Some(NOW + 1_000), NOW), 1);
        assert_eq!(remaining_seconds(Some(NOW + 1_001), NOW), 2);
        assert_eq!(remaining_seconds(Some(NOW - 5), NOW), 0);
        assert_eq!(remaining_seconds(None, NOW), 0);
    }

    #[test]
    fn test_is_pack_locked() {
        // Active pack is never locked for itself
        assert!(!is_pack_locked(PackId(1), Some(PackId(1)), 30));
        // Others are locked while the cooldown runs
        assert!(is_pack_locked(PackId(2), Some(PackId(1)), 30));
        assert!(is_pack_locked(PackId(2), None, 30));
        // Nothing locked without cooldown
        assert!(!is_pack_locked(PackId(2), None, 0));
    }

    #[test]
    fn test_format_cooldown() {
        assert_eq!(format_cooldown(0), "00:00");
        assert_eq!(format_cooldown(59), "00:59");
        assert_eq!(format_cooldown(60), "01:00");
        assert_eq!(format_cooldown(605), "10:05");
    }

    #[test]
    fn test_state_survives_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.redb");

        {
            let tracker = PackTracker::new(Storage::new(&path).unwrap());
            tracker.open_pack(PackId(3), NOW).unwrap();
        }

        {
            let tracker = PackTracker::new(Storage::new(&path).unwrap());
            let state = tracker.state(NOW + 1_000).unwrap();
            assert_eq!(state.active_pack_id, Some(PackId(3)));
        }
    }
}
