//! Persistence seam for calibration bounds.
//!
//! The store is an opaque key-value byte region (EEPROM, flash page, file -
//! the core does not care). It moves fixed-size records; the bounds
//! encoding lives in [`crate::calibration`]. Saving is a synchronous write
//! with non-negligible latency, so callers should confine it to an explicit
//! commit event, never the per-tick hot path.

use crate::calibration::{CalibrationBounds, BOUNDS_RECORD_LEN};

/// Opaque byte-record store the calibration engine persists into.
///
/// Implementations back this with whatever the platform has (EEPROM driver,
/// flash sector, host file). `load` returns `None` when the slot was never
/// written, which tells the caller a calibration session must be run first.
pub trait CalibrationStore {
    /// Read the record at `slot`, or `None` if nothing was ever saved there.
    fn load(&mut self, slot: u8) -> Option<[u8; BOUNDS_RECORD_LEN]>;

    /// Write the record at `slot`.
    fn save(&mut self, slot: u8, record: &[u8; BOUNDS_RECORD_LEN]);
}

/// Store that persists nothing and never has anything to load.
///
/// Use this on setups without persistent memory; the remote then requires a
/// fresh calibration sweep on every power-up.
pub struct NullStore;

impl CalibrationStore for NullStore {
    fn load(&mut self, _slot: u8) -> Option<[u8; BOUNDS_RECORD_LEN]> {
        None
    }

    fn save(&mut self, _slot: u8, _record: &[u8; BOUNDS_RECORD_LEN]) {}
}

/// Load calibration bounds from `slot`, if any were ever saved.
pub fn load_bounds<S: CalibrationStore>(store: &mut S, slot: u8) -> Option<CalibrationBounds> {
    store
        .load(slot)
        .map(|record| CalibrationBounds::from_record(&record))
}

/// Persist calibration bounds to `slot`.
pub fn save_bounds<S: CalibrationStore>(store: &mut S, slot: u8, bounds: &CalibrationBounds) {
    store.save(slot, &bounds.to_record());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawAxes;

    /// In-memory store with a handful of slots, mimicking an EEPROM region.
    struct MemoryStore {
        slots: [Option<[u8; BOUNDS_RECORD_LEN]>; 4],
    }

    impl MemoryStore {
        fn new() -> Self {
            Self { slots: [None; 4] }
        }
    }

    impl CalibrationStore for MemoryStore {
        fn load(&mut self, slot: u8) -> Option<[u8; BOUNDS_RECORD_LEN]> {
            self.slots[slot as usize]
        }

        fn save(&mut self, slot: u8, record: &[u8; BOUNDS_RECORD_LEN]) {
            self.slots[slot as usize] = Some(*record);
        }
    }

    #[test]
    fn test_load_empty_slot_yields_none() {
        let mut store = MemoryStore::new();
        assert!(load_bounds(&mut store, 0).is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut store = MemoryStore::new();
        let mut bounds = CalibrationBounds::from_sample(&RawAxes::new(100, 512, 500, 520));
        bounds.expand(&RawAxes::new(0, 1023, 1023, 0));

        save_bounds(&mut store, 1, &bounds);
        assert_eq!(load_bounds(&mut store, 1), Some(bounds));
        // Other slots stay empty.
        assert!(load_bounds(&mut store, 0).is_none());
    }

    #[test]
    fn test_null_store_never_loads() {
        let mut store = NullStore;
        let bounds = CalibrationBounds::from_sample(&RawAxes::default());
        save_bounds(&mut store, 0, &bounds);
        assert!(load_bounds(&mut store, 0).is_none());
    }
}
