use super::*;
use crate::cache::BatchCache;
use pgps_core::usecases::BatchResolution;

/// Resolves pharmacy tables and remembers the results.
///
/// Resolving a table that is identical to a previously resolved table
/// returns the previous result without asking the geocoding gateway again.
#[derive(Debug)]
pub struct PharmacyLocator<G> {
    geocoder: RateLimitedGeocoder<G>,
    country: String,
    cache: BatchCache,
}

impl<G> PharmacyLocator<G> {
    pub fn new(geocoder: RateLimitedGeocoder<G>, country: String, cache: BatchCache) -> Self {
        Self {
            geocoder,
            country,
            cache,
        }
    }

    pub fn geocoder(&self) -> &RateLimitedGeocoder<G> {
        &self.geocoder
    }

    pub fn cache(&self) -> &BatchCache {
        &self.cache
    }
}

impl<G> PharmacyLocator<G>
where
    G: GeoCodingGateway,
{
    pub fn locate(&self, table: &Table) -> Result<BatchResolution> {
        if let Some(resolution) = self.cache.get(table) {
            info!("Use cached locations of {} pharmacies", table.len());
            return Ok(resolution);
        }
        let resolution = usecases::resolve_batch(&self.geocoder, &self.country, table)?;
        self.cache.insert(table.clone(), resolution.clone());
        Ok(resolution)
    }
}
