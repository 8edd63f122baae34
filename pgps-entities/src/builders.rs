pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{pharmacy_table_builder::*, table_builder::*};

pub mod table_builder {

    use super::*;
    use crate::table::*;

    #[derive(Debug)]
    pub struct TableBuild {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    }

    impl TableBuild {
        pub fn columns(mut self, columns: &[&str]) -> Self {
            self.columns = columns.iter().map(|c| c.to_string()).collect();
            self
        }
        pub fn row(mut self, cells: &[&str]) -> Self {
            self.rows.push(cells.iter().map(|c| c.to_string()).collect());
            self
        }
        pub fn finish(self) -> Table {
            Table::with_rows(self.columns, self.rows)
        }
    }

    impl Builder for Table {
        type Build = TableBuild;
        fn build() -> Self::Build {
            TableBuild {
                columns: vec![],
                rows: vec![],
            }
        }
    }
}

pub mod pharmacy_table_builder {

    use crate::{pharmacy::*, table::*};
    use strum::IntoEnumIterator;

    /// Builds a table with exactly the required pharmacy columns.
    #[derive(Debug, Default)]
    pub struct PharmacyTableBuild {
        rows: Vec<Vec<String>>,
    }

    impl PharmacyTableBuild {
        pub fn new() -> Self {
            Self::default()
        }
        /// Name, address, postal code, city, type
        pub fn pharmacy(mut self, fields: [&str; 5]) -> Self {
            self.rows.push(fields.iter().map(|c| c.to_string()).collect());
            self
        }
        pub fn finish(self) -> Table {
            let columns = Column::iter().map(|c| c.as_str().to_string()).collect();
            Table::with_rows(columns, self.rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    #[test]
    fn build_table() {
        let t = Table::build()
            .columns(&["A", "B"])
            .row(&["1", "2"])
            .row(&["3"])
            .finish();
        assert_eq!(2, t.len());
        assert_eq!(Some("3"), t.value(1, 0));
    }

    #[test]
    fn build_pharmacy_table() {
        let t = PharmacyTableBuild::new()
            .pharmacy(["P", "1 RUE X", "06400", "CANNES", "T1"])
            .finish();
        assert_eq!(Some(2), t.column_index("Postal Code"));
        assert_eq!(Some("06400"), t.value(0, 2));
    }
}
