use crate::domain::model::{ServiceAccountKey, SitesListResponse};
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;
const MISSING: &str = "(not set)";

/// Result of one connectivity check, ready for rendering.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub key: ServiceAccountKey,
    /// `None` when the list-sites call failed.
    pub sites: Option<SitesListResponse>,
}

impl CheckReport {
    pub fn api_reachable(&self) -> bool {
        self.sites.is_some()
    }

    pub fn property_count(&self) -> usize {
        self.sites.as_ref().map_or(0, |s| s.site_entry.len())
    }

    /// Zero properties still counts as success; only a failed API call does not.
    pub fn exit_code(&self) -> i32 {
        if self.api_reachable() {
            0
        } else {
            1
        }
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn render<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    writeln!(out, "\n{}", rule())?;
    writeln!(out, "GOOGLE SEARCH CONSOLE CONNECTION TEST")?;
    writeln!(out, "{}\n", rule())?;

    writeln!(out, "✓ Step 1: Credentials File")?;
    writeln!(
        out,
        "  Service Account Email: {}",
        report.key.client_email().unwrap_or(MISSING)
    )?;
    writeln!(
        out,
        "  Project ID: {}",
        report.key.project_id().unwrap_or(MISSING)
    )?;
    writeln!(out, "  Valid JSON: Yes\n")?;

    writeln!(out, "✓ Step 2: Google Authentication")?;
    writeln!(out, "  Successfully authenticated with Google API\n")?;

    let Some(sites) = &report.sites else {
        writeln!(out, "✗ Step 3: GSC API Connection")?;
        writeln!(out, "  Failed to retrieve GSC properties\n")?;
        return Ok(());
    };

    writeln!(out, "✓ Step 3: GSC API Connection")?;
    writeln!(out, "  Connected successfully")?;
    writeln!(out, "  Properties accessible: {}\n", sites.site_entry.len())?;

    if sites.site_entry.is_empty() {
        writeln!(out, "⚠ Step 4: No Properties Found")?;
        writeln!(
            out,
            "  The service account is authenticated but has no GSC properties."
        )?;
        writeln!(
            out,
            "  Make sure you've added the service account to your GSC property.\n"
        )?;
        return Ok(());
    }

    writeln!(out, "✓ Step 4: Accessible Properties")?;
    for (i, site) in sites.site_entry.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, site.site_url_or_unknown())?;
        writeln!(out, "     Permission: {}", site.permission_or_unknown())?;
    }

    writeln!(out, "\n{}", rule())?;
    writeln!(out, "ALL TESTS PASSED ✓")?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "\nYou're ready to use these credentials with Search Console tooling!")?;
    writeln!(out, "Next steps:")?;
    writeln!(out, "  1. Point your integration at this credentials file")?;
    writeln!(out, "  2. Restart the application that uses it")?;
    writeln!(out, "  3. Run a Search Console query to confirm data access\n")?;

    Ok(())
}
