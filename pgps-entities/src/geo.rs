use std::fmt;

/// A position on the map in decimal degrees.
///
/// Values are stored exactly as reported by the geocoding service,
/// i.e. without rounding or range checks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }
}

impl From<(f64, f64)> for MapPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::from_lat_lng_deg(lat, lng)
    }
}

impl From<MapPoint> for (f64, f64) {
    fn from(from: MapPoint) -> Self {
        (from.lat, from.lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_values_verbatim() {
        let pos = MapPoint::from_lat_lng_deg(43.599_832_1, 7.005_123_456_789);
        assert_eq!(pos.lat(), 43.599_832_1);
        assert_eq!(pos.lng(), 7.005_123_456_789);
        // out of range values are not rejected
        let (lat, lng): (f64, f64) = MapPoint::from((123.0, -500.0)).into();
        assert_eq!(123.0, lat);
        assert_eq!(-500.0, lng);
    }

    #[test]
    fn display_lat_lng() {
        let pos = MapPoint::from_lat_lng_deg(43.5, 7.25);
        assert_eq!("43.5,7.25", pos.to_string());
    }
}
