use anyhow::Result;
use pgps_core::gateways::geocode::{self, GeoCodingGateway};
use pgps_entities::geo::MapPoint;
use reqwest::StatusCode;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Geocoding based on the OpenStreetMap Nominatim API.
///
/// The usage policy of the public instance requires an identifying
/// user agent and at most one request per second.
#[derive(Debug, Clone)]
pub struct Nominatim {
    api_base_url: String,
    #[cfg_attr(test, allow(dead_code))]
    client: reqwest::blocking::Client,
}

impl Nominatim {
    pub fn new(api_base_url: String, user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            api_base_url,
            client,
        })
    }

    #[cfg(not(test))]
    fn send_search(&self, query: &str) -> Result<(StatusCode, String), geocode::Error> {
        let url = format!("{}/search", self.api_base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(url)
            .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .map_err(|err| geocode::Error::Unavailable(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|err| geocode::Error::Unavailable(err.to_string()))?;
        Ok((status, body))
    }

    /// Don't actually send requests while running the tests.
    #[cfg(test)]
    fn send_search(&self, query: &str) -> Result<(StatusCode, String), geocode::Error> {
        log::debug!("Would search '{}' at {}", query, self.api_base_url);
        let answer = match query {
            "unavailable" => {
                return Err(geocode::Error::Unavailable("connection refused".into()))
            }
            "nowhere" => (StatusCode::OK, "[]".into()),
            "busy" => (StatusCode::TOO_MANY_REQUESTS, String::new()),
            _ => (
                StatusCode::OK,
                r#"[{"lat":"43.5527","lon":"7.0174"}]"#.into(),
            ),
        };
        Ok(answer)
    }

    fn search_raw(&self, query: &str) -> Result<Vec<Place>, geocode::Error> {
        let (status, body) = self.send_search(query)?;
        places_from_response(status, &body)
    }
}

fn places_from_response(status: StatusCode, body: &str) -> Result<Vec<Place>, geocode::Error> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(geocode::Error::QuotaExceeded);
    }
    if !status.is_success() {
        return Err(geocode::Error::Unavailable(format!(
            "Unexpected response status {status}"
        )));
    }
    serde_json::from_str(body).map_err(|err| geocode::Error::MalformedResponse(err.to_string()))
}

/// A single search result.
///
/// Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl Place {
    fn pos(&self) -> Result<MapPoint, geocode::Error> {
        let parse = |value: &str| {
            value.trim().parse::<f64>().map_err(|_| {
                geocode::Error::MalformedResponse(format!("Invalid coordinate '{value}'"))
            })
        };
        Ok(MapPoint::from_lat_lng_deg(parse(&self.lat)?, parse(&self.lon)?))
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, query: &str) -> Result<Option<MapPoint>, geocode::Error> {
        let places = self.search_raw(query)?;
        log::debug!("Nominatim returned {} results for '{}'", places.len(), query);
        places.first().map(Place::pos).transpose()
    }
}
