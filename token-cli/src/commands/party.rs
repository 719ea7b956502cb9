//! Party command: derive a party handle from public key material

use crate::cli_config::RuntimeDefaults;
use crate::error::CliResult;
use crate::logic::{parse_public_key_hex, OutputFormat};
use crate::output::Output;

/// Handle `party <public-key-hex>`
pub fn handle_party_command(
    public_key: &str,
    defaults: &RuntimeDefaults,
    output: &dyn Output,
) -> CliResult<()> {
    let party = parse_public_key_hex(public_key)?;
    match defaults.format {
        OutputFormat::Json => output.print_json(&serde_json::json!({ "party": party })),
        OutputFormat::Table => output.print(&party.to_string()),
    }
}
