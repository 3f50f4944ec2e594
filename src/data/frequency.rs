//! Frequency tables over categorical columns.
//!
//! A table counts the values of one column per label, in first encounter
//! order over the rows. Report sections reorder the table before rendering.

use std::collections::HashMap;

use polars::prelude::*;

/// Label under which missing values are counted.
pub const MISSING_LABEL: &str = "Unknown";

/// Ordered label and count pairs derived from one dataset column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    rows: Vec<(String, u64)>,
}

impl FrequencyTable {
    /// Count the values of `column`, missing cells under [`MISSING_LABEL`].
    pub fn from_column(df: &DataFrame, column: &str) -> PolarsResult<Self> {
        let col = df.column(column)?;

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<(String, u64)> = Vec::new();

        for i in 0..df.height() {
            let value = col.get(i)?;
            let label = if value.is_null() {
                MISSING_LABEL.to_string()
            } else {
                value.to_string().trim_matches('"').to_string()
            };

            match index.get(&label) {
                Some(&slot) => rows[slot].1 += 1,
                None => {
                    index.insert(label.clone(), rows.len());
                    rows.push((label, 1));
                }
            }
        }

        Ok(Self { rows })
    }

    /// Rows in their current order.
    pub fn rows(&self) -> &[(String, u64)] {
        &self.rows
    }

    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|(_, count)| count).sum()
    }

    /// Largest single count, zero for an empty table.
    pub fn max_count(&self) -> u64 {
        self.rows.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    /// Reorder lexicographically ascending by label.
    pub fn sorted_by_label(mut self) -> Self {
        self.rows.sort_by(|a, b| a.0.cmp(&b.0));
        self
    }

    /// Stable ascending sort by count, then reversed. The result descends
    /// by count with ties in reverse encounter order.
    pub fn sorted_by_count_reversed(mut self) -> Self {
        self.rows.sort_by_key(|&(_, count)| count);
        self.rows.reverse();
        self
    }

    /// Stable descending sort by count, ties keep encounter order.
    pub fn ranked_by_count(mut self) -> Self {
        self.rows.sort_by(|a, b| b.1.cmp(&a.1));
        self
    }

    /// Restrict and reorder to `order`. Labels absent from the data and
    /// data labels absent from `order` are both dropped.
    pub fn reindexed(self, order: &[&str]) -> Self {
        let rows = order
            .iter()
            .filter_map(|wanted| {
                self.rows
                    .iter()
                    .find(|(label, _)| label.as_str() == *wanted)
                    .cloned()
            })
            .collect();
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn table(column: &str, values: &[Option<&str>]) -> FrequencyTable {
        let df = df!(column => values).unwrap();
        FrequencyTable::from_column(&df, column).unwrap()
    }

    #[test]
    fn missing_values_count_under_unknown() {
        let t = table("AgeRange", &[Some("25-34"), None, None]);
        assert_eq!(
            t.rows(),
            &[("25-34".to_string(), 1), (MISSING_LABEL.to_string(), 2)]
        );
        assert_eq!(t.total(), 3);
    }

    #[test]
    fn counts_keep_first_encounter_order() {
        let t = table("PayPlan", &[Some("GS"), Some("WG"), Some("GS"), Some("ES")]);
        assert_eq!(
            t.rows(),
            &[
                ("GS".to_string(), 2),
                ("WG".to_string(), 1),
                ("ES".to_string(), 1),
            ]
        );
    }

    #[test]
    fn sorted_by_label_is_lexicographic() {
        let t = table("AgeRange", &[Some("B"), None, Some("A")]).sorted_by_label();
        assert_eq!(t.labels(), vec!["A", "B", "Unknown"]);
    }

    #[test]
    fn count_reversed_breaks_ties_in_reverse_encounter_order() {
        let t = table("PayPlan", &[Some("A"), Some("B"), Some("B"), Some("C")])
            .sorted_by_count_reversed();
        assert_eq!(t.labels(), vec!["B", "C", "A"]);
    }

    #[test]
    fn ranked_by_count_keeps_encounter_order_for_ties() {
        let t =
            table("Component", &[Some("A"), Some("B"), Some("B"), Some("C")]).ranked_by_count();
        assert_eq!(t.labels(), vec!["B", "A", "C"]);
    }

    #[test]
    fn reindexed_keeps_only_listed_labels_in_list_order() {
        let mut values = vec![Some("< 1"); 4];
        values.extend(vec![Some("99-100"); 7]);
        values.extend(vec![Some("UNSP"); 2]);

        let df = df!("ServiceRange" => &values).unwrap();
        let t = FrequencyTable::from_column(&df, "ServiceRange")
            .unwrap()
            .reindexed(&["UNSP", "< 1", "1-2"]);

        assert_eq!(t.rows(), &[("UNSP".to_string(), 2), ("< 1".to_string(), 4)]);
        assert_eq!(t.total(), 6);
    }

    #[test]
    fn empty_column_gives_empty_table() {
        let values: Vec<Option<&str>> = Vec::new();
        let df = df!("AgeRange" => &values).unwrap();
        let t = FrequencyTable::from_column(&df, "AgeRange").unwrap();
        assert!(t.is_empty());
        assert_eq!(t.total(), 0);
        assert_eq!(t.max_count(), 0);
    }

    #[test]
    fn identical_input_gives_identical_tables() {
        let values = [Some("x"), None, Some("y"), Some("x")];
        assert_eq!(table("c", &values), table("c", &values));
    }

    #[test]
    fn missing_column_is_an_error() {
        let df = df!("AgeRange" => &[Some("25-34")]).unwrap();
        assert!(FrequencyTable::from_column(&df, "PayPlan").is_err());
    }
}
