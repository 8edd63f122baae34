pub mod prelude {

    pub use std::time::Duration;

    use crate::{GeoCodingGateway, MapPoint};
    use pgps_core::gateways::geocode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Resolves every address and counts the requests.
    #[derive(Debug, Default)]
    pub struct CountingGeoGw {
        calls: AtomicUsize,
    }

    impl CountingGeoGw {
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl GeoCodingGateway for CountingGeoGw {
        fn resolve_address_lat_lng(
            &self,
            query: &str,
        ) -> Result<Option<MapPoint>, geocode::Error> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            log::debug!("Request #{} for '{}'", n + 1, query);
            Ok(Some(MapPoint::from_lat_lng_deg(43.5 + n as f64 / 100.0, 7.0)))
        }
    }
}
