use crate::config;
use anyhow::Result;
use pgps_core::{
    entities::MapPoint,
    gateways::geocode::{self, GeoCodingGateway},
};
use pgps_gateways::{nominatim::Nominatim, opencage::OpenCage};

pub type GeoCodingGw = Box<dyn GeoCodingGateway + Send + Sync + 'static>;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<GeoCodingGw> {
    let gw: GeoCodingGw = match &cfg.gateway {
        Some(config::GeocodingGateway::Nominatim {
            api_base_url,
            user_agent,
        }) => Box::new(Nominatim::new(api_base_url.clone(), user_agent)?),
        Some(config::GeocodingGateway::OpenCage { api_key }) => {
            Box::new(OpenCage::new(api_key.clone()))
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            Box::new(DummyGeoGw)
        }
    };
    Ok(gw)
}

struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, geocode::Error> {
        log::debug!("Cannot resolve '{query}' because no geocoding gateway was configured");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn dummy_gateway_without_configuration() {
        let cfg = config::Geocoding {
            gateway: None,
            country: "France".into(),
            min_delay: Duration::ZERO,
        };
        let gw = geocoding_gateway(&cfg).unwrap();
        assert_eq!(
            None,
            gw.resolve_address_lat_lng("21 RUE FELIX FAURE, 06400 CANNES, France")
                .unwrap()
        );
    }
}
