use crate::geo::*;

pub const LATITUDE_COLUMN: &str = "Latitude";
pub const LONGITUDE_COLUMN: &str = "Longitude";

/// An input row together with its resolved position.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRow {
    /// The cells of the input row (untouched).
    pub cells: Vec<String>,
    pub pos: Option<MapPoint>,
}

/// The input table augmented by latitude and longitude.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedTable {
    columns: Vec<String>,
    rows: Vec<ResolvedRow>,
}

impl ResolvedTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: vec![],
        }
    }

    pub fn push(&mut self, row: ResolvedRow) {
        self.rows.push(row);
    }

    /// The columns of the input table.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All output columns including latitude and longitude.
    ///
    /// Coordinate columns that already exist in the input are reused,
    /// missing ones are appended.
    pub fn header(&self) -> Vec<&str> {
        let mut header: Vec<_> = self.columns.iter().map(String::as_str).collect();
        for column in [LATITUDE_COLUMN, LONGITUDE_COLUMN] {
            if !self.columns.iter().any(|c| c == column) {
                header.push(column);
            }
        }
        header
    }

    /// Positions of latitude and longitude within the [`header`](Self::header).
    pub fn coordinate_indices(&self) -> (usize, usize) {
        let index = |name: &str| self.columns.iter().position(|c| c == name);
        let appended = self.columns.len();
        match (index(LATITUDE_COLUMN), index(LONGITUDE_COLUMN)) {
            (Some(lat), Some(lng)) => (lat, lng),
            (Some(lat), None) => (lat, appended),
            (None, Some(lng)) => (appended, lng),
            (None, None) => (appended, appended + 1),
        }
    }

    pub fn rows(&self) -> &[ResolvedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Positions of all resolved rows in table order.
    pub fn map_points(&self) -> impl Iterator<Item = MapPoint> + '_ {
        self.rows.iter().filter_map(|r| r.pos)
    }

    pub fn count_unresolved(&self) -> usize {
        self.rows.iter().filter(|r| r.pos.is_none()).count()
    }
}
