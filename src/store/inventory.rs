use serde::{Serialize, Deserialize};

use super::record::CdRecord;

/// Ordered in-memory CD collection. Insertion order is the display order;
/// load replaces the whole collection, save serializes the whole collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    records: Vec<CdRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<CdRecord>) -> Self {
        Self { records }
    }

    /// Appends at the end. Duplicate ids are not checked here.
    pub fn add(&mut self, record: CdRecord) {
        self.records.push(record);
    }

    /// Removes the first record whose id matches, in current order.
    /// Returns false without mutating when no record matches.
    pub fn delete(&mut self, id: u64) -> bool {
        if let Some(pos) = self.records.iter().position(|rec| rec.id == id) {
            self.records.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn get(&self, id: u64) -> Option<&CdRecord> {
        self.records.iter().find(|rec| rec.id == id)
    }

    /// Read-only view over the records in insertion order.
    pub fn records(&self) -> &[CdRecord] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_in_order() {
        let mut inventory = Inventory::new();
        inventory.add(CdRecord::new(3, "Abbey Road", "Beatles"));
        inventory.add(CdRecord::new(1, "Thriller", "Jackson"));
        inventory.add(CdRecord::new(2, "Kind of Blue", "Davis"));

        assert_eq!(inventory.count(), 3);
        let ids: Vec<u64> = inventory.records().iter().map(|rec| rec.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(inventory.records()[2].title, "Kind of Blue");
    }

    #[test]
    fn test_add_allows_duplicate_ids() {
        let mut inventory = Inventory::new();
        inventory.add(CdRecord::new(1, "Abbey Road", "Beatles"));
        inventory.add(CdRecord::new(1, "Let It Be", "Beatles"));

        assert_eq!(inventory.count(), 2);
    }

    #[test]
    fn test_delete_removes_single_match() {
        let mut inventory = Inventory::new();
        inventory.add(CdRecord::new(1, "Abbey Road", "Beatles"));
        inventory.add(CdRecord::new(2, "Thriller", "Jackson"));

        let deleted = inventory.delete(1);
        assert!(deleted);
        assert!(inventory.get(1).is_none());
        assert_eq!(inventory.count(), 1);
        assert_eq!(inventory.records()[0].id, 2);
    }

    #[test]
    fn test_delete_removes_first_of_duplicates() {
        let mut inventory = Inventory::new();
        inventory.add(CdRecord::new(1, "Abbey Road", "Beatles"));
        inventory.add(CdRecord::new(7, "Thriller", "Jackson"));
        inventory.add(CdRecord::new(1, "Let It Be", "Beatles"));

        let deleted = inventory.delete(1);
        assert!(deleted);
        assert_eq!(inventory.count(), 2);
        // The later duplicate survives and relative order is unchanged.
        assert_eq!(inventory.records()[0].title, "Thriller");
        assert_eq!(inventory.records()[1].title, "Let It Be");
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut inventory = Inventory::new();
        inventory.add(CdRecord::new(1, "Abbey Road", "Beatles"));
        inventory.add(CdRecord::new(2, "Thriller", "Jackson"));
        let before = inventory.clone();

        let deleted = inventory.delete(9);
        assert!(!deleted);
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_get() {
        let mut inventory = Inventory::new();
        inventory.add(CdRecord::new(5, "Abbey Road", "Beatles"));

        assert_eq!(inventory.get(5).unwrap().artist, "Beatles");
        assert!(inventory.get(6).is_none());
    }

    #[test]
    fn test_clear_empty() {
        let mut inventory = Inventory::new();
        inventory.add(CdRecord::new(1, "Abbey Road", "Beatles"));
        inventory.add(CdRecord::new(2, "Thriller", "Jackson"));
        assert_eq!(inventory.count(), 2);

        inventory.clear();

        assert_eq!(inventory.count(), 0);
        assert!(inventory.get(1).is_none());
        assert!(inventory.is_empty())
    }
}
