use crate::entities::Column;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Missing required columns: {}", join_column_names(.0))]
    MissingColumns(Vec<Column>),
}

fn join_column_names(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
