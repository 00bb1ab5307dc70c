// Collector upgrade endpoints
//
// Upgrades run as server-side tasks: start one, then poll its status by
// task id. The vendor has not pinned down a validation contract for these
// payloads, so no schemas are attached and bodies pass through as given.

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::client::{Client, Params};
use crate::error::Error;
use crate::response::ApiResponse;

impl Client {
    /// List collectors eligible for an upgrade or downgrade.
    ///
    /// `GET /v1/collectors/upgrades/collectors`
    pub async fn list_upgradable_collectors(
        &self,
        params: Option<&Params>,
    ) -> Result<ApiResponse, Error> {
        let url = self.api_url("v1/collectors/upgrades/collectors")?;
        debug!("listing upgradable collectors");
        self.request(Method::GET, url, params, None, None).await
    }

    /// List collector builds available as upgrade targets.
    ///
    /// `GET /v1/collectors/upgrades/targets`
    pub async fn list_collector_builds(&self) -> Result<ApiResponse, Error> {
        let url = self.api_url("v1/collectors/upgrades/targets")?;
        debug!("listing available collector builds");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Start an upgrade (or downgrade) task. The response carries the task
    /// id to poll with [`get_collector_upgrade`](Self::get_collector_upgrade);
    /// no polling happens client-side.
    ///
    /// `POST /v1/collectors/upgrades`
    pub async fn start_collector_upgrade(&self, task: &Value) -> Result<ApiResponse, Error> {
        let url = self.api_url("v1/collectors/upgrades")?;
        debug!("starting collector upgrade task");
        self.request(Method::POST, url, None, Some(task), None).await
    }

    /// Poll an upgrade task.
    ///
    /// `GET /v1/collectors/upgrades/{upgradeTaskId}`
    pub async fn get_collector_upgrade(&self, task_id: &str) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/collectors/upgrades/{task_id}"))?;
        debug!(task_id, "polling upgrade task");
        self.request(Method::GET, url, None, None, None).await
    }
}
