pub mod client;
pub mod discovery;
pub mod error;
pub mod identity;
pub mod parse;
mod retry;
pub mod session;
pub mod summary;
pub mod transport;

pub use client::LausClient;
pub use discovery::{
    discover_parameter_space, extract_radio_options, extract_select_options, Combination,
    ParameterSpace,
};
pub use error::ScraperError;
pub use identity::BrowserIdentity;
pub use parse::parse_state_result;
pub use session::LausScraper;
pub use summary::ScrapeSummary;
pub use transport::Transport;
