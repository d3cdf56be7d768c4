use crate::adapters::auth::WEBMASTERS_READONLY_SCOPE;
use crate::config::credentials::load_key;
use crate::core::report::{self, CheckReport};
use crate::domain::ports::{SitesApi, TokenProvider};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Runs the load → authenticate → list-sites sequence against the given ports.
pub struct ConnectivityCheck<T: TokenProvider, S: SitesApi> {
    tokens: T,
    sites: S,
}

impl<T: TokenProvider, S: SitesApi> ConnectivityCheck<T, S> {
    pub fn new(tokens: T, sites: S) -> Self {
        Self { tokens, sites }
    }

    /// Loading and authentication errors are returned; an API failure is printed
    /// and recorded in the report instead.
    pub async fn run<W: Write>(&self, key_path: &Path, out: &mut W) -> Result<CheckReport> {
        writeln!(
            out,
            "Testing connection with credentials from: {}\n",
            key_path.display()
        )?;

        let key = load_key(key_path)?;
        writeln!(
            out,
            "Credentials loaded for: {}\n",
            key.client_email().unwrap_or("(not set)")
        )?;

        writeln!(out, "Authenticating with Google API...")?;
        let token = self.tokens.fetch_token(&key, WEBMASTERS_READONLY_SCOPE).await?;
        tracing::info!("Obtained {} token", token.token_type);
        writeln!(out, "✓ Authentication successful\n")?;

        writeln!(out, "Testing Google Search Console connection...")?;
        let sites = match self.sites.list_sites(&token).await {
            Ok(sites) => {
                tracing::info!("Listed {} sites", sites.site_entry.len());
                Some(sites)
            }
            Err(e) if !e.is_recoverable() => return Err(e),
            Err(e) => {
                tracing::warn!("List sites failed: {}", e);
                writeln!(out, "{}", e.user_friendly_message())?;
                None
            }
        };

        let report = CheckReport { key, sites };
        report::render(out, &report)?;
        Ok(report)
    }
}
