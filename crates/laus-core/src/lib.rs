//! Domain types and configuration for the LAUS unemployment extractor.
//!
//! Everything here is free of I/O: the scrape configuration, discovered option
//! sets, request payloads, and the parsed record types. The HTTP side lives in
//! `laus-scraper`.

pub mod app_config;
pub mod config;
pub mod error;
pub mod option_set;
pub mod records;
pub mod request;
pub mod scrape_config;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use option_set::{FormOption, OptionSet};
pub use records::{permalink, CountyRecord, ParseFailure, ScrapeOutcome, StateResult};
pub use request::{DiscoveryRequest, FormField, ScrapeRequest, SURVEY};
pub use scrape_config::{Granularity, ScrapeConfig, SeasonalAdjustment};
