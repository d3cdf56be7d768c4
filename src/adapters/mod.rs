// Adapters layer: concrete implementations of the domain ports over HTTP.

pub mod auth;
pub mod search_console;

pub use auth::ServiceAccountAuthenticator;
pub use search_console::SearchConsoleClient;
