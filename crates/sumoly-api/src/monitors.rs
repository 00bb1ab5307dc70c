// Monitor endpoints
//
// Monitors live in their own library tree rooted at /v1/monitors/root.
// Monitor payloads are deep and trigger-type-specific; the schema checks
// the spine and lets the rest through.

use reqwest::Method;
use serde_json::json;
use tracing::debug;

use crate::client::{Client, Params, json_params};
use crate::error::Error;
use crate::response::ApiResponse;
use crate::schema::{Field, Kind, Schema};

static SEARCH_MONITORS_PARAMS: Schema = Schema {
    fields: &[
        Field::required("query", Kind::string()),
        Field::optional("limit", Kind::integer_range(1, 1000)),
        Field::optional("offset", Kind::integer_min(0)),
    ],
    additional_properties: false,
    forbid_together: &[],
};

static MONITOR_BODY: Schema = Schema {
    fields: &[
        Field::required("name", Kind::string_max(255)),
        Field::required(
            "type",
            Kind::one_of(&["MonitorsLibraryMonitor", "MonitorsLibraryFolder"]),
        ),
        Field::optional("monitorType", Kind::one_of(&["Logs", "Metrics"])),
        Field::optional("description", Kind::string_max(4096)),
        Field::optional("isDisabled", Kind::Boolean),
        Field::optional("queries", Kind::ObjectArray),
        Field::optional("triggers", Kind::ObjectArray),
        Field::optional("notifications", Kind::ObjectArray),
    ],
    // evaluation/notification details vary per monitor type
    additional_properties: true,
    forbid_together: &[],
};

impl Client {
    /// Get the root of the monitors library.
    ///
    /// `GET /v1/monitors/root`
    pub async fn get_monitors_root(&self) -> Result<ApiResponse, Error> {
        let url = self.api_url("v1/monitors/root")?;
        debug!("fetching monitors root");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Get a monitor or monitor folder by id.
    ///
    /// `GET /v1/monitors/{id}`
    pub async fn get_monitor(&self, monitor_id: &str) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/monitors/{monitor_id}"))?;
        debug!(monitor_id, "fetching monitor");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Search the monitors library.
    ///
    /// `GET /v1/monitors/search`
    pub async fn search_monitors(&self, params: &Params) -> Result<ApiResponse, Error> {
        SEARCH_MONITORS_PARAMS.validate(params)?;
        let url = self.api_url("v1/monitors/search")?;
        debug!("searching monitors");
        self.request(Method::GET, url, Some(params), None, None).await
    }

    /// Create a monitor (or monitor folder) under a parent.
    ///
    /// `POST /v1/monitors?parentId={parentId}`
    pub async fn create_monitor(
        &self,
        parent_id: &str,
        monitor: &Params,
    ) -> Result<ApiResponse, Error> {
        MONITOR_BODY.validate(monitor)?;
        let url = self.api_url("v1/monitors")?;
        debug!(parent_id, "creating monitor");
        let params = json_params(json!({ "parentId": parent_id }));
        let body = json!(monitor);
        self.request(Method::POST, url, Some(&params), Some(&body), None)
            .await
    }

    /// Replace a monitor's definition. The API versions monitors in the
    /// body (`version` field) rather than via ETags.
    ///
    /// `PUT /v1/monitors/{id}`
    pub async fn update_monitor(
        &self,
        monitor_id: &str,
        monitor: &Params,
    ) -> Result<ApiResponse, Error> {
        MONITOR_BODY.validate(monitor)?;
        let url = self.api_url(&format!("v1/monitors/{monitor_id}"))?;
        debug!(monitor_id, "updating monitor");
        let body = json!(monitor);
        self.request(Method::PUT, url, None, Some(&body), None).await
    }

    /// Delete a monitor or monitor folder.
    ///
    /// `DELETE /v1/monitors/{id}`
    pub async fn delete_monitor(&self, monitor_id: &str) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/monitors/{monitor_id}"))?;
        debug!(monitor_id, "deleting monitor");
        self.request(Method::DELETE, url, None, None, None).await
    }
}
