use serde_json::Value;

use sumoly_api::models::CollectorUpdate;
use sumoly_api::{Client, Params};

use crate::cli::CollectorsCmd;
use crate::error::CliError;
use crate::output::print_response;

pub async fn run(client: &Client, cmd: CollectorsCmd) -> Result<(), CliError> {
    match cmd {
        CollectorsCmd::List { filter, limit, offset } => {
            let mut params = Params::new();
            if let Some(filter) = filter {
                params.insert("filter".into(), Value::from(filter));
            }
            if let Some(limit) = limit {
                params.insert("limit".into(), Value::from(limit));
            }
            if let Some(offset) = offset {
                params.insert("offset".into(), Value::from(offset));
            }
            let params = (!params.is_empty()).then_some(&params);
            let resp = client.list_collectors(params).await?.error_for_status()?;
            print_response(&resp)
        }
        CollectorsCmd::Get { id } => {
            let resp = client.get_collector(id).await?.error_for_status()?;
            print_response(&resp)
        }
        CollectorsCmd::GetByName { name } => {
            let resp = client.get_collector_by_name(&name).await?.error_for_status()?;
            print_response(&resp)
        }
        CollectorsCmd::Rename { id, name } => {
            let update = CollectorUpdate { name: Some(name), ..CollectorUpdate::default() };
            let resp = client.update_collector(id, &update).await?.error_for_status()?;
            print_response(&resp)
        }
        CollectorsCmd::Delete { id } => {
            let resp = client.delete_collector(id).await?.error_for_status()?;
            print_response(&resp)
        }
    }
}
