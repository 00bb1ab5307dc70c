//! Output helpers: responses are JSON almost everywhere, so the CLI
//! pretty-prints JSON bodies and falls back to raw text.

use serde_json::Value;

use sumoly_api::ApiResponse;

use crate::error::CliError;

pub fn print_response(resp: &ApiResponse) -> Result<(), CliError> {
    match resp.json::<Value>() {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", resp.text()),
    }
    Ok(())
}
