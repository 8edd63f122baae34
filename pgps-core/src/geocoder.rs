use crate::{
    entities::MapPoint,
    gateways::geocode::{self, GeoCodingGateway},
};
use parking_lot::Mutex;
use std::{
    thread,
    time::{Duration, Instant},
};

pub const DEFAULT_MIN_DELAY: Duration = Duration::from_secs(1);

/// The outcome of a single lookup.
#[derive(Debug)]
pub enum Lookup {
    Found(MapPoint),
    NotFound,
    Failed(geocode::Error),
}

impl Lookup {
    /// The resolved position.
    ///
    /// A failed lookup is treated exactly like a lookup without a match.
    pub fn pos(&self) -> Option<MapPoint> {
        match self {
            Self::Found(pos) => Some(*pos),
            Self::NotFound | Self::Failed(_) => None,
        }
    }
}

/// Wraps a [`GeoCodingGateway`] and guarantees a minimum delay
/// between the start of two consecutive requests.
///
/// The timestamp of the last request is shared by all callers of
/// the same instance and is updated as soon as a request has finished,
/// no matter if it succeeded or not. Concurrent callers are serialized.
#[derive(Debug)]
pub struct RateLimitedGeocoder<G> {
    gateway: G,
    min_delay: Duration,
    last_call: Mutex<Instant>,
}

impl<G> RateLimitedGeocoder<G> {
    pub fn new(gateway: G, min_delay: Duration) -> Self {
        Self {
            gateway,
            min_delay,
            last_call: Mutex::new(Instant::now()),
        }
    }

    pub fn min_delay(&self) -> Duration {
        self.min_delay
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn pause_until_next_call(&self, last_call: Instant) {
        let elapsed = last_call.elapsed();
        if elapsed < self.min_delay {
            let pause = self.min_delay - elapsed;
            log::trace!("Wait {} ms before next geocoding request", pause.as_millis());
            thread::sleep(pause);
        }
    }
}

impl<G> RateLimitedGeocoder<G>
where
    G: GeoCodingGateway,
{
    /// Asks the gateway exactly once, never retries.
    pub fn resolve(&self, query: &str) -> Lookup {
        let result = {
            let mut last_call = self.last_call.lock();
            self.pause_until_next_call(*last_call);
            let result = self.gateway.resolve_address_lat_lng(query);
            *last_call = Instant::now();
            result
        };
        match result {
            Ok(Some(pos)) => {
                log::debug!("Resolved address location '{}': {}", query, pos);
                Lookup::Found(pos)
            }
            Ok(None) => {
                log::info!("No location found for address '{}'", query);
                Lookup::NotFound
            }
            Err(err) => {
                log::warn!("Failed to resolve address location '{}': {}", query, err);
                Lookup::Failed(err)
            }
        }
    }
}
