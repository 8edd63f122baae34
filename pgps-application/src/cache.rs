use crate::*;
use parking_lot::Mutex;
use pgps_core::usecases::BatchResolution;
use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

pub const DEFAULT_CACHE_CAPACITY: usize = 16;

#[derive(Debug, Default)]
struct Entries {
    resolutions: HashMap<Arc<Table>, BatchResolution>,
    // least recently used first
    usage: VecDeque<Arc<Table>>,
}

impl Entries {
    fn mark_as_used(&mut self, table: &Table) {
        if let Some(idx) = self.usage.iter().position(|t| t.as_ref() == table) {
            if let Some(key) = self.usage.remove(idx) {
                self.usage.push_back(key);
            }
        }
    }
}

/// Resolved tables keyed by their input table.
///
/// Holds at most `capacity` entries and evicts the least recently used one.
#[derive(Debug)]
pub struct BatchCache {
    capacity: usize,
    entries: Mutex<Entries>,
}

impl BatchCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Entries::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().resolutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, table: &Table) -> Option<BatchResolution> {
        let mut entries = self.entries.lock();
        let resolution = entries.resolutions.get(table).cloned()?;
        entries.mark_as_used(table);
        Some(resolution)
    }

    pub fn insert(&self, table: Table, resolution: BatchResolution) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock();
        if let Some(existing) = entries.resolutions.get_mut(&table) {
            *existing = resolution;
            entries.mark_as_used(&table);
            return;
        }
        let key = Arc::new(table);
        entries.resolutions.insert(Arc::clone(&key), resolution);
        entries.usage.push_back(key);
        while entries.resolutions.len() > self.capacity {
            let Some(evicted) = entries.usage.pop_front() else {
                break;
            };
            debug!("Evict cached resolution of {} rows", evicted.len());
            entries.resolutions.remove(&evicted);
        }
    }
}

impl Default for BatchCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgps_entities::builders::*;

    fn table(name: &str) -> Table {
        PharmacyTableBuild::new()
            .pharmacy([name, "1 RUE X", "06400", "CANNES", "T1"])
            .finish()
    }

    fn resolution(t: &Table) -> BatchResolution {
        BatchResolution {
            table: ResolvedTable::new(t.columns().to_vec()),
            diagnostics: vec![],
        }
    }

    #[test]
    fn get_inserted_resolution() {
        let cache = BatchCache::new(2);
        let a = table("a");
        assert!(cache.get(&a).is_none());
        cache.insert(a.clone(), resolution(&a));
        assert_eq!(Some(resolution(&a)), cache.get(&a));
        assert!(cache.get(&table("b")).is_none());
    }

    #[test]
    fn evict_least_recently_used() {
        let cache = BatchCache::new(2);
        let (a, b, c) = (table("a"), table("b"), table("c"));
        cache.insert(a.clone(), resolution(&a));
        cache.insert(b.clone(), resolution(&b));
        // a is now more recently used than b
        assert!(cache.get(&a).is_some());
        cache.insert(c.clone(), resolution(&c));
        assert_eq!(2, cache.len());
        assert!(cache.get(&a).is_some());
        assert!(cache.get(&b).is_none());
        assert!(cache.get(&c).is_some());
    }

    #[test]
    fn replace_existing_entry() {
        let cache = BatchCache::new(2);
        let a = table("a");
        cache.insert(a.clone(), resolution(&a));
        cache.insert(a.clone(), resolution(&a));
        assert_eq!(1, cache.len());
    }

    #[test]
    fn zero_capacity_disables_caching() {
        let cache = BatchCache::new(0);
        let a = table("a");
        cache.insert(a.clone(), resolution(&a));
        assert!(cache.is_empty());
        assert!(cache.get(&a).is_none());
    }
}
