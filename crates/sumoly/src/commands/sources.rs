use serde_json::Value;

use sumoly_api::{Client, Params};

use crate::cli::SourcesCmd;
use crate::error::CliError;
use crate::output::print_response;

pub async fn run(client: &Client, cmd: SourcesCmd) -> Result<(), CliError> {
    match cmd {
        SourcesCmd::List { collector_id, download } => {
            let mut params = Params::new();
            if download {
                params.insert("download".into(), Value::from(true));
            }
            let params = (!params.is_empty()).then_some(&params);
            let resp = client.list_sources(collector_id, params).await?.error_for_status()?;
            print_response(&resp)
        }
        SourcesCmd::Get { collector_id, source_id } => {
            let resp = client
                .get_source(collector_id, source_id, None)
                .await?
                .error_for_status()?;
            print_response(&resp)
        }
        SourcesCmd::Delete { collector_id, source_id } => {
            let resp = client
                .delete_source(collector_id, source_id)
                .await?
                .error_for_status()?;
            print_response(&resp)
        }
    }
}
