use pgps_core::usecases::Error as UsecaseError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] UsecaseError),
    #[error(transparent)]
    Csv(#[from] ::csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    String(#[from] ::std::string::FromUtf8Error),
}

impl<W: io::Write> From<::csv::IntoInnerError<::csv::Writer<W>>> for AppError {
    fn from(err: ::csv::IntoInnerError<::csv::Writer<W>>) -> Self {
        Self::Io(err.into_error())
    }
}
