#[macro_use]
extern crate log;

mod cache;
mod locate_pharmacies;

pub mod csv;
pub mod error;
pub mod sample;

pub mod prelude {
    pub use super::{cache::*, locate_pharmacies::*};
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use pgps_core::{entities::*, gateways::geocode::GeoCodingGateway, geocoder::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
