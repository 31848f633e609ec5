//! Id -> record map with a monotonic id counter

use std::collections::BTreeMap;

use rental_types::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table<R> {
    next_id: u64,
    records: BTreeMap<u64, R>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: BTreeMap::new(),
        }
    }
}

impl<R> Table<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next id. Ids are never handed out twice.
    pub fn allocate_id(&mut self) -> Result<u64, Error> {
        let id = self.next_id;
        self.next_id = successor(id)?;
        Ok(id)
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn insert(&mut self, id: u64, record: R) -> Result<(), Error> {
        if id >= self.next_id {
            self.next_id = successor(id)?;
        }
        self.records.insert(id, record);
        Ok(())
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut R> {
        self.records.get_mut(&id)
    }

    pub fn remove(&mut self, id: u64) -> Option<R> {
        self.records.remove(&id)
    }

    /// Records in id order
    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Repair a counter that fell behind the stored ids (hand-edited files)
    pub fn normalized(mut self) -> Result<Self, Error> {
        if let Some(&max) = self.records.keys().next_back() {
            self.next_id = self.next_id.max(successor(max)?);
        }
        self.next_id = self.next_id.max(1);
        Ok(self)
    }
}

fn successor(id: u64) -> Result<u64, Error> {
    id.checked_add(1)
        .ok_or_else(|| Error::MalformedRecord(format!("record id {} leaves no room for new ids", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic_across_removals() {
        let mut table: Table<&str> = Table::new();
        let a = table.allocate_id().unwrap();
        table.insert(a, "a").unwrap();
        let b = table.allocate_id().unwrap();
        table.insert(b, "b").unwrap();
        table.remove(b);
        let c = table.allocate_id().unwrap();
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn test_insert_advances_counter() {
        let mut table: Table<&str> = Table::new();
        table.insert(10, "x").unwrap();
        assert_eq!(table.allocate_id().unwrap(), 11);
    }

    #[test]
    fn test_json_round_trip_keeps_counter() {
        let mut table: Table<String> = Table::new();
        let id = table.allocate_id().unwrap();
        table.insert(id, "one".to_string()).unwrap();
        table.allocate_id().unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let restored: Table<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.next_id(), 3);
        assert_eq!(restored.get(1).map(String::as_str), Some("one"));
    }

    #[test]
    fn test_normalized_repairs_counter() {
        let json = r#"{"next_id": 1, "records": {"5": "five"}}"#;
        let table: Table<String> = serde_json::from_str(json).unwrap();
        assert_eq!(table.normalized().unwrap().next_id(), 6);
    }

    #[test]
    fn test_max_id_is_rejected_not_overflowed() {
        let json = r#"{"next_id": 1, "records": {"18446744073709551615": "last"}}"#;
        let table: Table<String> = serde_json::from_str(json).unwrap();
        assert!(matches!(table.normalized(), Err(Error::MalformedRecord(_))));

        let mut table: Table<&str> = Table::new();
        assert!(matches!(table.insert(u64::MAX, "last"), Err(Error::MalformedRecord(_))));
        assert!(table.is_empty());
    }

    #[test]
    fn test_exhausted_counter_errors() {
        let json = r#"{"next_id": 18446744073709551615, "records": {}}"#;
        let mut table: Table<String> = serde_json::from_str(json).unwrap();
        assert!(matches!(table.allocate_id(), Err(Error::MalformedRecord(_))));
    }
}
