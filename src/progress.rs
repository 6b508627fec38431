//! Progress persistence - level index and booster charges
//!
//! Persisted state is deliberately tiny: one level index and two counts
//! under stable keys, no versioning. Malformed or missing values recover
//! locally to the caller's defaults and are never surfaced as errors.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::boosters::BoosterCharges;

pub trait ProgressStore {
    /// Load the persisted charges, clamped to >= 0; `defaults` cover missing
    /// or invalid entries.
    fn load_booster_counts(&mut self, defaults: BoosterCharges) -> BoosterCharges;

    fn save_booster_counts(&mut self, charges: BoosterCharges);

    fn load_level_index(&mut self) -> usize;

    fn save_level_index(&mut self, index: usize);
}

#[derive(Serialize)]
struct ProgressDoc {
    level: u64,
    swap_left: u32,
    bomb_left: u32,
}

/// JSON-file-backed store used by the binary.
pub struct FileProgressStore {
    path: PathBuf,
}

impl FileProgressStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_value(&self) -> Option<Value> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn write_doc(&self, doc: &ProgressDoc) {
        // Persistence failure has no recovery path worth surfacing here;
        // the session simply continues with in-memory state.
        if let Ok(raw) = serde_json::to_string_pretty(doc) {
            let _ = fs::write(&self.path, raw);
        }
    }

    fn current_doc(&self) -> ProgressDoc {
        let value = self.read_value();
        ProgressDoc {
            level: read_count(value.as_ref(), "level", 0),
            swap_left: read_count(value.as_ref(), "swap_left", 0) as u32,
            bomb_left: read_count(value.as_ref(), "bomb_left", 0) as u32,
        }
    }
}

/// Extract `key` as a non-negative integer, falling back on anything that is
/// missing, non-numeric or fractional.
fn read_count(value: Option<&Value>, key: &str, fallback: u64) -> u64 {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_i64)
        .map(|n| n.max(0) as u64)
        .unwrap_or(fallback)
}

impl ProgressStore for FileProgressStore {
    fn load_booster_counts(&mut self, defaults: BoosterCharges) -> BoosterCharges {
        let value = self.read_value();
        BoosterCharges {
            swap_left: read_count(value.as_ref(), "swap_left", defaults.swap_left as u64) as u32,
            bomb_left: read_count(value.as_ref(), "bomb_left", defaults.bomb_left as u64) as u32,
        }
    }

    fn save_booster_counts(&mut self, charges: BoosterCharges) {
        let mut doc = self.current_doc();
        doc.swap_left = charges.swap_left;
        doc.bomb_left = charges.bomb_left;
        self.write_doc(&doc);
    }

    fn load_level_index(&mut self) -> usize {
        read_count(self.read_value().as_ref(), "level", 0) as usize
    }

    fn save_level_index(&mut self, index: usize) {
        let mut doc = self.current_doc();
        doc.level = index as u64;
        self.write_doc(&doc);
    }
}

/// In-memory store for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryProgressStore {
    level: usize,
    charges: Option<BoosterCharges>,
    pub saves: u32,
}

impl ProgressStore for MemoryProgressStore {
    fn load_booster_counts(&mut self, defaults: BoosterCharges) -> BoosterCharges {
        self.charges.unwrap_or(defaults)
    }

    fn save_booster_counts(&mut self, charges: BoosterCharges) {
        self.charges = Some(charges);
        self.saves += 1;
    }

    fn load_level_index(&mut self) -> usize {
        self.level
    }

    fn save_level_index(&mut self, index: usize) {
        self.level = index;
    }
}
