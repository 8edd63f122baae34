use super::prelude::*;

/// A value that is required to build a geocoding query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(pub Column);

/// Builds the free-form query `street, zip city, country`.
///
/// The country is optional, all other parts are required.
pub fn forward_query_string(addr: &Address) -> std::result::Result<String, MissingField> {
    let street = addr
        .street
        .as_deref()
        .ok_or(MissingField(Column::Address))?;
    let zip = addr
        .zip
        .as_deref()
        .ok_or(MissingField(Column::PostalCode))?;
    let city = addr.city.as_deref().ok_or(MissingField(Column::City))?;
    let mut query = format!("{street}, {zip} {city}");
    if let Some(country) = &addr.country {
        query.push_str(", ");
        query.push_str(country);
    }
    Ok(query)
}
