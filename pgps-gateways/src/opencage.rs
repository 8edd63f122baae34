use geocoding::{Forward, Opencage, Point};
use pgps_core::gateways::geocode::{self, GeoCodingGateway};
use pgps_entities::geo::MapPoint;

/// Geocoding based on opencagedata.com.
#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: String,
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

fn first_pos(points: &[Point<f64>]) -> Option<MapPoint> {
    points
        .first()
        .map(|point| MapPoint::from_lat_lng_deg(point.y(), point.x()))
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, geocode::Error> {
        let oc_req = Opencage::new(self.api_key.clone());
        let points: Vec<Point<f64>> = oc_req
            .forward(query)
            .map_err(|err| geocode::Error::Unavailable(err.to_string()))?;
        log::debug!("OpenCage returned {} results for '{}'", points.len(), query);
        Ok(first_pos(&points))
    }
}
