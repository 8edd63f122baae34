use super::{check_schema, forward_query_string, prelude::*, MissingField};

/// The resolved table and all problems that occurred on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResolution {
    pub table: ResolvedTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves the position of every pharmacy of the table.
///
/// Fails without doing anything if a required column is missing.
/// Otherwise the returned table contains every input row exactly once,
/// in the same order. Rows that could not be resolved have no position
/// and are reported in the diagnostics.
pub fn resolve_batch<G>(
    geocoder: &RateLimitedGeocoder<G>,
    country: &str,
    table: &Table,
) -> Result<BatchResolution>
where
    G: GeoCodingGateway,
{
    let columns = check_schema(table)?;
    log::info!("Resolving the location of {} pharmacies", table.len());

    let mut resolved = ResolvedTable::new(table.columns().to_vec());
    let mut diagnostics = vec![];

    for (row, cells) in table.rows().iter().enumerate() {
        let mut pharmacy = columns.pharmacy(table, row);
        pharmacy.address.country = Some(country.to_string());
        let pos = match forward_query_string(&pharmacy.address) {
            Ok(query) => {
                let lookup = geocoder.resolve(&query);
                let pos = lookup.pos();
                let cause = match lookup {
                    Lookup::Found(_) => None,
                    Lookup::NotFound => Some(WarningCause::NoMatch),
                    Lookup::Failed(err) => Some(WarningCause::Failed(err.to_string())),
                };
                if let Some(cause) = cause {
                    diagnostics.push(Diagnostic::GeocodeWarning { row, query, cause });
                }
                pos
            }
            Err(MissingField(field)) => {
                let diagnostic = Diagnostic::FieldError {
                    row,
                    name: pharmacy.name,
                    field,
                };
                log::warn!("{diagnostic}");
                diagnostics.push(diagnostic);
                None
            }
        };
        resolved.push(ResolvedRow {
            cells: cells.clone(),
            pos,
        });
    }
    debug_assert_eq!(table.len(), resolved.len());

    log::info!(
        "Resolved {} of {} pharmacy locations",
        resolved.len() - resolved.count_unresolved(),
        resolved.len()
    );
    Ok(BatchResolution {
        table: resolved,
        diagnostics,
    })
}
