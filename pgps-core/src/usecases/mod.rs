mod check_schema;
mod error;
mod geocode_query;
mod resolve_batch;

pub use self::{check_schema::*, error::Error, geocode_query::*, resolve_batch::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::geocode::GeoCodingGateway,
        geocoder::{Lookup, RateLimitedGeocoder},
    };
}
