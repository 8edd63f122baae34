//! Import and export of pharmacy tables as CSV.

use crate::*;
use ::csv::{ReaderBuilder, Writer};
use std::io;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "pharmacy_gps_locations.csv";

/// Reads a CSV file with a header row.
///
/// All cells are kept as they are, e.g. postal codes keep leading zeros.
/// Rows with a different number of cells than the header are accepted.
pub fn read_table<R: io::Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = rdr.headers()?.iter().map(ToString::to_string).collect();
    let mut table = Table::new(columns);
    for record in rdr.records() {
        let record = record?;
        table.push_row(record.iter().map(ToString::to_string).collect());
    }
    debug!(
        "Read {} rows with {} columns",
        table.len(),
        table.columns().len()
    );
    Ok(table)
}

fn coordinate_cells(pos: Option<MapPoint>) -> [String; 2] {
    match pos {
        Some(pos) => [pos.lat().to_string(), pos.lng().to_string()],
        None => [String::new(), String::new()],
    }
}

/// Writes the input columns followed by latitude and longitude.
///
/// Existing latitude and longitude columns of the input are overwritten.
/// Missing coordinates are written as empty cells.
/// Short rows are padded and surplus cells are dropped
/// to keep the coordinates in their columns.
pub fn write_resolved_table<W: io::Write>(table: &ResolvedTable, wtr: &mut Writer<W>) -> Result<()> {
    let column_count = table.columns().len();
    let header = table.header();
    let header_len = header.len();
    let (lat_idx, lng_idx) = table.coordinate_indices();
    wtr.write_record(header)?;
    for (idx, row) in table.rows().iter().enumerate() {
        if row.cells.len() > column_count {
            warn!(
                "Dropping {} surplus cells of row {}",
                row.cells.len() - column_count,
                idx + 1
            );
        }
        let mut cells: Vec<_> = (0..column_count)
            .map(|i| row.cells.get(i).cloned().unwrap_or_default())
            .collect();
        cells.resize(header_len, String::new());
        let [lat, lng] = coordinate_cells(row.pos);
        cells[lat_idx] = lat;
        cells[lng_idx] = lng;
        wtr.write_record(&cells)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn resolved_table_to_csv(table: &ResolvedTable) -> Result<String> {
    let buf: Vec<u8> = vec![];
    let mut wtr = Writer::from_writer(buf);
    write_resolved_table(table, &mut wtr)?;
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// The positions that can be shown on a map.
pub fn map_points_to_csv(table: &ResolvedTable) -> Result<String> {
    let buf: Vec<u8> = vec![];
    let mut wtr = Writer::from_writer(buf);
    wtr.write_record([LATITUDE_COLUMN, LONGITUDE_COLUMN])?;
    for pos in table.map_points() {
        wtr.write_record([pos.lat().to_string(), pos.lng().to_string()])?;
    }
    wtr.flush()?;
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
