use std::collections::HashMap;

use super::ColumnDescriptor;

/// Columns of one table in catalog ordinal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGroup {
    pub table_name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableGroup {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            columns: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Partitions catalog rows by table in a single pass.
///
/// Groups come out in order of first appearance and columns keep the order
/// they were read in; nothing is re-sorted.
pub fn group_by_table(columns: Vec<ColumnDescriptor>) -> Vec<TableGroup> {
    let mut groups: Vec<TableGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for column in columns {
        let slot = match index.get(&column.table_name) {
            Some(&slot) => slot,
            None => {
                index.insert(column.table_name.clone(), groups.len());
                groups.push(TableGroup::new(column.table_name.clone()));
                groups.len() - 1
            }
        };
        groups[slot].columns.push(column);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::group_by_table;
    use crate::schema::ColumnDescriptor;

    fn col(table: &str, column: &str) -> ColumnDescriptor {
        ColumnDescriptor::new(table, column, "int", false)
    }

    #[test]
    fn keeps_catalog_column_order_within_a_table() {
        let groups = group_by_table(vec![
            col("Orders", "Zeta"),
            col("Orders", "Alpha"),
            col("Orders", "Mid"),
        ]);

        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0]
            .columns
            .iter()
            .map(|c| c.column_name.as_str())
            .collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn one_group_per_distinct_table_in_first_seen_order() {
        let groups = group_by_table(vec![
            col("Customer", "Id"),
            col("Customer", "Name"),
            col("Order", "Id"),
            col("Shipper", "Id"),
        ]);

        let tables: Vec<&str> = groups.iter().map(|g| g.table_name.as_str()).collect();
        assert_eq!(tables, ["Customer", "Order", "Shipper"]);
        assert!(
            groups
                .iter()
                .all(|g| g.columns.iter().all(|c| c.table_name == g.table_name))
        );
    }

    #[test]
    fn interleaved_rows_are_appended_to_the_existing_group() {
        let groups = group_by_table(vec![col("A", "x"), col("B", "y"), col("A", "z")]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].columns.len(), 2);
        assert_eq!(groups[0].columns[1].column_name, "z");
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_table(Vec::new()).is_empty());
    }

    #[test]
    fn grouping_is_deterministic() {
        let input = vec![col("B", "1"), col("A", "2"), col("B", "3")];
        assert_eq!(group_by_table(input.clone()), group_by_table(input));
    }
}
