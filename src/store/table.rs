//! The in-memory payroll table.

use serde::{Deserialize, Serialize};

use crate::models::EmployeeRecord;

/// What an upsert did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// A new row was appended.
    Inserted,
    /// An existing row was replaced in place.
    Updated,
}

/// All employee records, in file order.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeRecord;
/// use payroll_engine::store::{RecordTable, UpsertOutcome};
///
/// let mut table = RecordTable::new();
/// let record = EmployeeRecord {
///     employee_code: "E1".to_string(),
///     name: "A".to_string(),
///     ..Default::default()
/// };
///
/// assert_eq!(table.upsert(record.clone()), UpsertOutcome::Inserted);
/// assert_eq!(table.upsert(record), UpsertOutcome::Updated);
/// assert_eq!(table.len(), 1);
/// assert!(table.find_by_code("E1").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordTable {
    records: Vec<EmployeeRecord>,
}

impl RecordTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding `records` in the given order.
    pub fn from_records(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }

    /// Returns the records in file order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds the first record whose code equals `code` after trimming.
    ///
    /// Codes are expected to be unique; if an older file holds duplicates
    /// the first occurrence wins.
    pub fn find_by_code(&self, code: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.has_code(code))
    }

    /// Replaces the record with the same code in place, or appends it.
    pub fn upsert(&mut self, record: EmployeeRecord) -> UpsertOutcome {
        match self
            .records
            .iter()
            .position(|r| r.has_code(&record.employee_code))
        {
            Some(index) => {
                self.records[index] = record;
                UpsertOutcome::Updated
            }
            None => {
                self.records.push(record);
                UpsertOutcome::Inserted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayComponents;
    use proptest::prelude::*;

    fn record(code: &str, basic: i64) -> EmployeeRecord {
        EmployeeRecord {
            employee_code: code.to_string(),
            name: format!("Employee {}", code),
            pay: PayComponents {
                basic,
                ..Default::default()
            },
            net_salary: basic,
            ..Default::default()
        }
    }

    fn create_test_table() -> RecordTable {
        RecordTable::from_records(vec![record("E1", 100), record("E2", 200), record("E3", 300)])
    }

    #[test]
    fn test_find_by_code_trims_query() {
        let table = create_test_table();
        assert_eq!(table.find_by_code(" E2 ").unwrap().pay.basic, 200);
    }

    #[test]
    fn test_find_by_code_missing_returns_none() {
        let table = create_test_table();
        assert!(table.find_by_code("E4").is_none());
        assert!(table.find_by_code("").is_none());
    }

    #[test]
    fn test_find_by_code_first_duplicate_wins() {
        let table = RecordTable::from_records(vec![record("E1", 1), record("E1", 2)]);
        assert_eq!(table.find_by_code("E1").unwrap().pay.basic, 1);
    }

    #[test]
    fn test_upsert_new_code_appends() {
        let mut table = create_test_table();
        let outcome = table.upsert(record("E4", 400));

        assert_eq!(outcome, UpsertOutcome::Inserted);
        assert_eq!(table.len(), 4);
        assert_eq!(table.records()[3].employee_code, "E4");
    }

    #[test]
    fn test_upsert_existing_code_replaces_in_place() {
        let mut table = create_test_table();
        let before = table.clone();
        let outcome = table.upsert(record("E2", 250));

        assert_eq!(outcome, UpsertOutcome::Updated);
        assert_eq!(table.len(), 3);
        assert_eq!(table.records()[1].pay.basic, 250);
        assert_eq!(table.records()[0], before.records()[0]);
        assert_eq!(table.records()[2], before.records()[2]);
    }

    #[test]
    fn test_upsert_empty_table() {
        let mut table = RecordTable::new();
        assert!(table.is_empty());
        assert_eq!(table.upsert(record("E1", 1)), UpsertOutcome::Inserted);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_value(create_test_table()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[1]["employee_code"], "E2");
    }

    proptest! {
        #[test]
        fn prop_repeated_upsert_keeps_one_row_with_last_values(
            codes in prop::collection::vec("E[0-9]{1,2}", 0..8),
            values in prop::collection::vec(0i64..1_000_000, 1..5),
        ) {
            let mut table =
                RecordTable::from_records(codes.iter().map(|c| record(c, 1)).collect());
            let others: Vec<EmployeeRecord> = table.records().to_vec();

            for value in &values {
                table.upsert(record("X1", *value));
            }

            let matching: Vec<&EmployeeRecord> =
                table.records().iter().filter(|r| r.has_code("X1")).collect();
            prop_assert_eq!(matching.len(), 1);
            prop_assert_eq!(matching[0].pay.basic, *values.last().unwrap());
            prop_assert_eq!(&table.records()[..others.len()], &others[..]);
        }
    }
}
