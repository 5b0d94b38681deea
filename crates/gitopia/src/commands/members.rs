use crate::cli::OutputFormat;
use crate::output::output_list;
use anyhow::{Context, Result};
use dashboard_core::CodeHost;

pub fn handle_members(client: &dyn CodeHost, org: &str, format: OutputFormat) -> Result<()> {
    let members = client
        .organization_members(org)
        .with_context(|| format!("Failed to list members of '{}'", org))?;
    output_list(&members, format);
    Ok(())
}
