use crate::address::*;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The named columns every pharmacy table must provide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum Column {
    Name,
    Address,
    #[strum(serialize = "Postal Code")]
    PostalCode,
    City,
    Type,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Name,
        Column::Address,
        Column::PostalCode,
        Column::City,
        Column::Type,
    ];

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A single pharmacy record as found in a row of the input table.
///
/// Blank values are represented as `None`.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pharmacy {
    pub name    : Option<String>,
    pub address : Address,
    pub kind    : Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn column_names() {
        let names: Vec<_> = Column::iter().map(Column::as_str).collect();
        assert_eq!(names, ["Name", "Address", "Postal Code", "City", "Type"]);
        assert!(Column::iter().eq(Column::ALL));
        assert_eq!(Ok(Column::PostalCode), "Postal Code".parse());
        assert!("PostalCode".parse::<Column>().is_err());
        assert_eq!("Postal Code", Column::PostalCode.to_string());
    }
}
