pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{SearchConsoleClient, ServiceAccountAuthenticator};
pub use config::CheckConfig;
pub use crate::core::{check::ConnectivityCheck, report::CheckReport, runner::run};
pub use utils::error::{CheckError, Result};
