pub mod prelude {

    pub use crate::{
        entities::*,
        gateways::geocode::{self, GeoCodingGateway},
        geocoder::*,
    };
    pub use pgps_entities::builders::*;

    use parking_lot::Mutex;
    use std::{collections::HashMap, time::Instant};

    #[derive(Debug, Clone)]
    enum Answer {
        Found(MapPoint),
        NotFound,
        Fail(String),
    }

    /// Resolves every query to a position unless configured otherwise.
    #[derive(Debug, Default)]
    pub struct MockGeoGw {
        answers: HashMap<String, Answer>,
        calls: Mutex<Vec<(String, Instant)>>,
    }

    impl MockGeoGw {
        pub fn found(mut self, query: &str, lat: f64, lng: f64) -> Self {
            self.answers.insert(
                query.into(),
                Answer::Found(MapPoint::from_lat_lng_deg(lat, lng)),
            );
            self
        }
        pub fn no_match(mut self, query: &str) -> Self {
            self.answers.insert(query.into(), Answer::NotFound);
            self
        }
        pub fn failing(mut self, query: &str, reason: &str) -> Self {
            self.answers
                .insert(query.into(), Answer::Fail(reason.into()));
            self
        }
        pub fn call_count(&self) -> usize {
            self.calls.lock().len()
        }
        pub fn queries(&self) -> Vec<String> {
            self.calls.lock().iter().map(|(q, _)| q.clone()).collect()
        }
        pub fn call_instants(&self) -> Vec<Instant> {
            self.calls.lock().iter().map(|(_, t)| *t).collect()
        }
    }

    /// A stable fake position derived from the query.
    pub fn default_pos(query: &str) -> MapPoint {
        MapPoint::from_lat_lng_deg(43.0 + query.len() as f64 / 1000.0, 7.0)
    }

    impl GeoCodingGateway for MockGeoGw {
        fn resolve_address_lat_lng(
            &self,
            query: &str,
        ) -> Result<Option<MapPoint>, geocode::Error> {
            self.calls.lock().push((query.to_string(), Instant::now()));
            match self.answers.get(query).cloned() {
                Some(Answer::Found(pos)) => Ok(Some(pos)),
                Some(Answer::NotFound) => Ok(None),
                Some(Answer::Fail(reason)) => Err(geocode::Error::Unavailable(reason)),
                None => Ok(Some(default_pos(query))),
            }
        }
    }

    pub fn sample_pharmacies() -> Table {
        PharmacyTableBuild::new()
            .pharmacy(["PHIE PLANTIER", "2310 AVENUE MARECHAL JUIN", "06250", "MOUGINS", "T2"])
            .pharmacy(["PHIE SAINT MARTINS SELAS", "1009 AV ST MARTIN", "06250", "MOUGINS", "T3"])
            .pharmacy(["PHIE CHANAY ET LAUZE SELARL", "21 RUE FELIX FAURE", "06400", "CANNES", "T2"])
            .pharmacy(["CARREFOUR NICE FRA076", "RN 202 ROUTE DE DIGNE", "06200", "NICE", "PARA ENSEIGNE"])
            .pharmacy(["PHIE DU MARCHE SELARL", "11 RUE DOCTEUR BALOUX", "06150", "CANNES", "T1"])
            .finish()
    }
}
