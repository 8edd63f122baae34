use super::prelude::*;

/// Positions of the required columns within a table
/// that passed the schema check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PharmacyColumns {
    name: usize,
    street: usize,
    zip: usize,
    city: usize,
    kind: usize,
}

impl PharmacyColumns {
    /// Reads the pharmacy of the given row.
    pub fn pharmacy(&self, table: &Table, row: usize) -> Pharmacy {
        let value = |column| table.value(row, column).map(ToString::to_string);
        Pharmacy {
            name: value(self.name),
            address: Address {
                street: value(self.street),
                zip: value(self.zip),
                city: value(self.city),
                country: None,
            },
            kind: value(self.kind),
        }
    }
}

pub fn missing_columns(table: &Table) -> Vec<Column> {
    Column::ALL
        .into_iter()
        .filter(|c| !table.has_column(c.as_str()))
        .collect()
}

/// Checks that all required columns exist.
///
/// This is a check of the table as a whole: single rows
/// with missing values are not considered.
pub fn check_schema(table: &Table) -> Result<PharmacyColumns> {
    let index = |column: Column| table.column_index(column.as_str());
    match (
        index(Column::Name),
        index(Column::Address),
        index(Column::PostalCode),
        index(Column::City),
        index(Column::Type),
    ) {
        (Some(name), Some(street), Some(zip), Some(city), Some(kind)) => Ok(PharmacyColumns {
            name,
            street,
            zip,
            city,
            kind,
        }),
        _ => Err(Error::MissingColumns(missing_columns(table))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgps_entities::builders::*;

    #[test]
    fn accept_required_columns_in_any_order() {
        let table = Table::build()
            .columns(&["Type", "City", "Extra", "Postal Code", "Address", "Name"])
            .row(&["T1", "CANNES", "x", "06400", "21 RUE FELIX FAURE", "PHIE"])
            .finish();
        let columns = check_schema(&table).unwrap();
        let pharmacy = columns.pharmacy(&table, 0);
        assert_eq!(Some("PHIE"), pharmacy.name.as_deref());
        assert_eq!(Some("21 RUE FELIX FAURE"), pharmacy.address.street.as_deref());
        assert_eq!(Some("06400"), pharmacy.address.zip.as_deref());
        assert_eq!(Some("CANNES"), pharmacy.address.city.as_deref());
        assert_eq!(Some("T1"), pharmacy.kind.as_deref());
    }

    #[test]
    fn reject_missing_postal_code() {
        let table = Table::build()
            .columns(&["Name", "Address", "City", "Type"])
            .finish();
        assert_eq!(
            Err(Error::MissingColumns(vec![Column::PostalCode])),
            check_schema(&table)
        );
    }

    #[test]
    fn name_all_missing_columns() {
        let table = Table::build().columns(&["Name", "Zip"]).finish();
        let err = check_schema(&table).unwrap_err();
        assert_eq!(
            "Missing required columns: Address, Postal Code, City, Type",
            err.to_string()
        );
    }

    #[test]
    fn column_names_are_case_sensitive() {
        let table = Table::build()
            .columns(&["name", "Address", "Postal Code", "City", "Type"])
            .finish();
        assert_eq!(vec![Column::Name], missing_columns(&table));
    }

    #[test]
    fn blank_values_are_missing() {
        let table = PharmacyTableBuild::new()
            .pharmacy(["PHIE", "", "06400", " ", "T1"])
            .finish();
        let pharmacy = check_schema(&table).unwrap().pharmacy(&table, 0);
        assert!(pharmacy.address.street.is_none());
        assert!(pharmacy.address.city.is_none());
    }
}
