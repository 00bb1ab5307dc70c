// Collector management endpoints
//
// Collector CRUD under /v1/collectors. Updates are read-modify-write:
// fetch, merge typed field updates, PUT back under the fetched ETag.

use reqwest::Method;
use serde_json::json;
use tracing::debug;

use crate::client::{Client, Params};
use crate::error::Error;
use crate::models::{CollectorEnvelope, CollectorUpdate};
use crate::response::ApiResponse;
use crate::schema::{Field, Kind, Schema};

static LIST_COLLECTORS_PARAMS: Schema = Schema {
    fields: &[
        Field::optional("filter", Kind::one_of(&["hosted", "installed", "dead"])),
        Field::optional("limit", Kind::integer_range(1, 1000)),
        Field::optional("offset", Kind::integer_min(0)),
    ],
    additional_properties: false,
    forbid_together: &[],
};

static OFFLINE_COLLECTORS_PARAMS: Schema = Schema {
    fields: &[
        Field::optional("aliveBeforeDays", Kind::integer_min(1)),
        Field::optional("limit", Kind::integer_range(1, 1000)),
        Field::optional("offset", Kind::integer_min(0)),
    ],
    additional_properties: false,
    forbid_together: &[],
};

static CREATE_COLLECTOR_BODY: Schema = Schema {
    fields: &[
        Field::required("collectorType", Kind::one_of(&["Hosted"])),
        Field::required("name", Kind::string_max(128)),
        Field::optional("description", Kind::string_max(1024)),
        Field::optional("category", Kind::string()),
        Field::optional("timeZone", Kind::string()),
        Field::optional("ephemeral", Kind::Boolean),
        Field::optional("sourceSyncMode", Kind::one_of(&["UI", "Json"])),
        Field::optional("targetCpu", Kind::integer()),
        Field::optional("fields", Kind::Object),
        Field::optional("cutoffTimestamp", Kind::integer_min(0)),
        Field::optional("cutoffRelativeTime", Kind::string()),
    ],
    additional_properties: false,
    forbid_together: &[&["cutoffTimestamp", "cutoffRelativeTime"]],
};

impl Client {
    /// List collectors, with optional `filter`/`limit`/`offset` parameters.
    ///
    /// `GET /v1/collectors`
    pub async fn list_collectors(&self, params: Option<&Params>) -> Result<ApiResponse, Error> {
        if let Some(params) = params {
            LIST_COLLECTORS_PARAMS.validate(params)?;
        }
        let url = self.api_url("v1/collectors")?;
        debug!("listing collectors");
        self.request(Method::GET, url, params, None, None).await
    }

    /// List installed collectors last seen alive before `aliveBeforeDays`
    /// days ago (at least 1).
    ///
    /// `GET /v1/collectors/offline`
    pub async fn list_offline_collectors(
        &self,
        params: Option<&Params>,
    ) -> Result<ApiResponse, Error> {
        if let Some(params) = params {
            OFFLINE_COLLECTORS_PARAMS.validate(params)?;
        }
        let url = self.api_url("v1/collectors/offline")?;
        debug!("listing offline collectors");
        self.request(Method::GET, url, params, None, None).await
    }

    /// Get a collector by its identifier.
    ///
    /// `GET /v1/collectors/{collectorId}`
    pub async fn get_collector(&self, collector_id: i64) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/collectors/{collector_id}"))?;
        debug!(collector_id, "fetching collector");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Get a collector by name.
    ///
    /// `GET /v1/collectors/name/{name}`
    ///
    /// Names containing `;` `/` `%` `\` fail with [`Error::InvalidName`]
    /// before any request is made; names containing a `.` are routed with a
    /// trailing slash so the remote router does not read the tail as a
    /// file extension.
    pub async fn get_collector_by_name(&self, name: &str) -> Result<ApiResponse, Error> {
        let url = self.name_url("v1/collectors/name", name)?;
        debug!(name, "fetching collector by name");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Create a hosted collector from a collector definition (the inner
    /// object; the `{"collector": ...}` wrapper is added here). Installed
    /// collectors cannot be created over the API -- they register
    /// themselves.
    ///
    /// `POST /v1/collectors`
    pub async fn create_hosted_collector(
        &self,
        collector: &Params,
    ) -> Result<ApiResponse, Error> {
        CREATE_COLLECTOR_BODY.validate(collector)?;
        let url = self.api_url("v1/collectors")?;
        debug!("creating hosted collector");
        let body = json!({ "collector": collector });
        self.request(Method::POST, url, None, Some(&body), None).await
    }

    /// Update a collector: fetches the current representation, applies
    /// `update` field-by-field, and PUTs the merged result back with
    /// `If-Match` set to the fetched `ETag`. A concurrent modification
    /// surfaces as whatever status the server returns (usually 412).
    ///
    /// `GET` + `PUT /v1/collectors/{collectorId}`
    pub async fn update_collector(
        &self,
        collector_id: i64,
        update: &CollectorUpdate,
    ) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/collectors/{collector_id}"))?;
        debug!(collector_id, "updating collector");

        let current = self.request(Method::GET, url.clone(), None, None, None).await?;
        let mut envelope: CollectorEnvelope = current.json()?;
        update.apply(&mut envelope.collector);

        self.conditional_put(url, &current, &envelope).await
    }

    /// Delete a collector by its identifier.
    ///
    /// `DELETE /v1/collectors/{collectorId}`
    pub async fn delete_collector(&self, collector_id: i64) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/collectors/{collector_id}"))?;
        debug!(collector_id, "deleting collector");
        self.request(Method::DELETE, url, None, None, None).await
    }

    /// Delete installed collectors last seen alive before
    /// `aliveBeforeDays` days ago.
    ///
    /// `DELETE /v1/collectors/offline`
    pub async fn delete_offline_collectors(
        &self,
        params: Option<&Params>,
    ) -> Result<ApiResponse, Error> {
        if let Some(params) = params {
            OFFLINE_COLLECTORS_PARAMS.validate(params)?;
        }
        let url = self.api_url("v1/collectors/offline")?;
        debug!("deleting offline collectors");
        self.request(Method::DELETE, url, params, None, None).await
    }
}
