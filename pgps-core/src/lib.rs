pub mod geocoder;
pub mod usecases;

pub mod gateways {
    pub mod geocode;
}

pub mod entities {
    pub use pgps_entities::{
        address::*, diagnostic::*, geo::*, pharmacy::*, resolved::*, table::*,
    };
}

#[cfg(test)]
pub(crate) mod tests;
