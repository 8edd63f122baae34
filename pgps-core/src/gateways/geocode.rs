use pgps_entities::geo::MapPoint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Geocoding service unavailable: {0}")]
    Unavailable(String),
    #[error("Geocoding quota exceeded")]
    QuotaExceeded,
    #[error("Malformed geocoding response: {0}")]
    MalformedResponse(String),
}

pub trait GeoCodingGateway {
    /// Resolves a free-form address.
    ///
    /// Returns `Ok(None)` if the address could not be found.
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, Error>;
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, Error> {
        (**self).resolve_address_lat_lng(query)
    }
}

impl<G> GeoCodingGateway for &G
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, Error> {
        (**self).resolve_address_lat_lng(query)
    }
}
