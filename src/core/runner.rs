use crate::adapters::{SearchConsoleClient, ServiceAccountAuthenticator};
use crate::config::credentials::resolve_key_path;
use crate::config::CheckConfig;
use crate::core::check::ConnectivityCheck;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::Validate;
use std::io::Write;
use std::path::PathBuf;

/// Runs the whole check and returns the process exit code.
///
/// `default_paths` are searched in order when the config has no key path.
pub async fn run<W: Write>(config: &CheckConfig, default_paths: &[PathBuf], out: &mut W) -> i32 {
    match try_run(config, default_paths, out).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Check aborted: {}", e);
            if let Err(write_err) = report_error(out, &e) {
                tracing::warn!("Could not write error report: {}", write_err);
            }
            e.exit_code()
        }
    }
}

async fn try_run<W: Write>(
    config: &CheckConfig,
    default_paths: &[PathBuf],
    out: &mut W,
) -> Result<i32> {
    config.validate()?;
    let key_path = resolve_key_path(config.key_path(), default_paths)?;

    let check = ConnectivityCheck::new(
        ServiceAccountAuthenticator::new(),
        SearchConsoleClient::new(config.api_base_url()),
    );
    let report = check.run(&key_path, out).await?;
    Ok(report.exit_code())
}

fn report_error<W: Write>(out: &mut W, error: &CheckError) -> std::io::Result<()> {
    writeln!(out, "{}", error.user_friendly_message())?;

    if let CheckError::NoDefaultCredentials { searched } = error {
        writeln!(
            out,
            "\nUsage: gsc-check --key-path /path/to/service-account-key.json"
        )?;
        writeln!(out, "\nOr place your credentials at one of these locations:")?;
        for path in searched {
            writeln!(out, "  - {}", path)?;
        }
    }
    Ok(())
}
