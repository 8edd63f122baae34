use anyhow::{anyhow, Result};
use pgps_application::csv::DEFAULT_EXPORT_FILE_NAME;
use pgps_core::geocoder::DEFAULT_MIN_DELAY;
use pgps_gateways::nominatim;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "pharmagps.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub geocoding: Geocoding,
    pub cache: Cache,
    pub export: Export,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
            if let Some(GeocodingGateway::OpenCage { api_key: key }) = &mut cfg.geocoding.gateway {
                log::debug!("Use OpenCage API key from {ENV_NAME_OPENCAGE_API_KEY}");
                *key = api_key;
            }
        }
        Ok(cfg)
    }
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    /// Appended to every address query.
    pub country: String,
    pub min_delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    Nominatim {
        api_base_url: String,
        user_agent: String,
    },
    OpenCage {
        api_key: String,
    },
}

pub struct Cache {
    pub capacity: usize,
}

pub struct Export {
    pub file_name: PathBuf,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            gateway,
            cache,
            export,
        } = from;

        let raw::Geocoding {
            gateway: gw_name,
            country,
            min_delay,
        } = geocoding.unwrap_or_default();

        let country = country.trim().to_string();
        if country.is_empty() {
            return Err(anyhow!("No country defined"));
        }

        let geo_gateway = match gw_name {
            Some(gw_name) => {
                let toml_name = gw_name.name();
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Nominatim => {
                        let raw::Nominatim {
                            api_base_url,
                            user_agent,
                        } = gateway.nominatim.ok_or_else(|| {
                            anyhow!("Missing '{toml_name}' gateway configuration")
                        })?;
                        if user_agent.trim().is_empty() {
                            return Err(anyhow!("Missing '{toml_name}' user agent"));
                        }
                        let api_base_url = api_base_url
                            .unwrap_or_else(|| nominatim::DEFAULT_API_BASE_URL.to_string());
                        log::info!("Use Nominatim geocoding gateway ({api_base_url})");
                        GeocodingGateway::Nominatim {
                            api_base_url,
                            user_agent,
                        }
                    }
                    raw::GeocodingGateway::Opencage => {
                        let raw::OpenCage { api_key } = gateway.opencage.ok_or_else(|| {
                            anyhow!("Missing '{toml_name}' gateway configuration")
                        })?;
                        log::info!("Use OpenCage geocoding gateway");
                        GeocodingGateway::OpenCage { api_key }
                    }
                };
                Some(gw)
            }
            None => None,
        };

        let geocoding = Geocoding {
            gateway: geo_gateway,
            country,
            min_delay: min_delay.unwrap_or(DEFAULT_MIN_DELAY),
        };

        let raw::Cache { capacity } = cache.unwrap_or_default();
        let cache = Cache { capacity };

        let raw::Export { file_name } = export.unwrap_or_default();
        let export = Export {
            file_name: file_name.unwrap_or_else(|| DEFAULT_EXPORT_FILE_NAME.into()),
        };

        Ok(Self {
            geocoding,
            cache,
            export,
        })
    }
}
