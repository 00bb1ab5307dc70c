use serde_json::Value;

use sumoly_api::{Client, Params};

use crate::cli::AccessKeysCmd;
use crate::error::CliError;
use crate::output::print_response;

pub async fn run(client: &Client, cmd: AccessKeysCmd) -> Result<(), CliError> {
    match cmd {
        AccessKeysCmd::List { limit, token } => {
            let mut params = Params::new();
            if let Some(limit) = limit {
                params.insert("limit".into(), Value::from(limit));
            }
            if let Some(token) = token {
                params.insert("token".into(), Value::from(token));
            }
            let params = (!params.is_empty()).then_some(&params);
            let resp = client.list_access_keys(params).await?.error_for_status()?;
            print_response(&resp)
        }
        AccessKeysCmd::Personal => {
            let resp = client.list_personal_access_keys().await?.error_for_status()?;
            print_response(&resp)
        }
    }
}
