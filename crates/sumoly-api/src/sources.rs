// Source management endpoints
//
// Source CRUD nested under a collector: /v1/collectors/{id}/sources.
// The create-source schema checks the common spine only and admits
// type-specific fields (`sourceType` decides most of the field set).

use reqwest::Method;
use serde_json::json;
use tracing::debug;

use crate::client::{Client, Params};
use crate::error::Error;
use crate::models::{SourceEnvelope, SourceUpdate};
use crate::response::ApiResponse;
use crate::schema::{Field, Kind, Schema};

static LIST_SOURCES_PARAMS: Schema = Schema {
    fields: &[Field::optional("download", Kind::Boolean)],
    additional_properties: false,
    forbid_together: &[],
};

static CREATE_SOURCE_BODY: Schema = Schema {
    fields: &[
        Field::required("sourceType", Kind::string()),
        Field::required("name", Kind::string_max(128)),
        Field::optional("description", Kind::string_max(1024)),
        Field::optional("category", Kind::string()),
        Field::optional("hostName", Kind::string_max(128)),
        Field::optional("timeZone", Kind::string()),
        Field::optional("forceTimeZone", Kind::Boolean),
        Field::optional("automaticDateParsing", Kind::Boolean),
        Field::optional("multilineProcessingEnabled", Kind::Boolean),
        Field::optional("useAutolineMatching", Kind::Boolean),
        Field::optional("manualPrefixRegexp", Kind::string()),
        Field::optional("filters", Kind::ObjectArray),
        Field::optional("cutoffTimestamp", Kind::integer_min(0)),
        Field::optional("cutoffRelativeTime", Kind::string()),
        Field::optional("encoding", Kind::string()),
        Field::optional("interval", Kind::integer()),
        Field::optional("metrics", Kind::Array),
        Field::optional("fields", Kind::Object),
    ],
    // type-specific source fields (paths, ports, regions, ...) pass through
    additional_properties: true,
    forbid_together: &[&["cutoffTimestamp", "cutoffRelativeTime"]],
};

impl Client {
    /// List all sources on a collector. With `{"download": true}` the
    /// response is the registration-ready JSON array form.
    ///
    /// `GET /v1/collectors/{collectorId}/sources`
    pub async fn list_sources(
        &self,
        collector_id: i64,
        params: Option<&Params>,
    ) -> Result<ApiResponse, Error> {
        if let Some(params) = params {
            LIST_SOURCES_PARAMS.validate(params)?;
        }
        let url = self.api_url(&format!("v1/collectors/{collector_id}/sources"))?;
        debug!(collector_id, "listing sources");
        self.request(Method::GET, url, params, None, None).await
    }

    /// Get a single source.
    ///
    /// `GET /v1/collectors/{collectorId}/sources/{sourceId}`
    pub async fn get_source(
        &self,
        collector_id: i64,
        source_id: i64,
        params: Option<&Params>,
    ) -> Result<ApiResponse, Error> {
        if let Some(params) = params {
            LIST_SOURCES_PARAMS.validate(params)?;
        }
        let url =
            self.api_url(&format!("v1/collectors/{collector_id}/sources/{source_id}"))?;
        debug!(collector_id, source_id, "fetching source");
        self.request(Method::GET, url, params, None, None).await
    }

    /// Create a source from a source definition (the inner object; the
    /// `{"source": ...}` wrapper is added here).
    ///
    /// `POST /v1/collectors/{collectorId}/sources`
    pub async fn create_source(
        &self,
        collector_id: i64,
        source: &Params,
    ) -> Result<ApiResponse, Error> {
        CREATE_SOURCE_BODY.validate(source)?;
        let url = self.api_url(&format!("v1/collectors/{collector_id}/sources"))?;
        debug!(collector_id, "creating source");
        let body = json!({ "source": source });
        self.request(Method::POST, url, None, Some(&body), None).await
    }

    /// Update a source via read-modify-write: GET, apply `update`, PUT the
    /// merged representation under the fetched `ETag` as `If-Match`.
    ///
    /// `GET` + `PUT /v1/collectors/{collectorId}/sources/{sourceId}`
    pub async fn update_source(
        &self,
        collector_id: i64,
        source_id: i64,
        update: &SourceUpdate,
    ) -> Result<ApiResponse, Error> {
        let url =
            self.api_url(&format!("v1/collectors/{collector_id}/sources/{source_id}"))?;
        debug!(collector_id, source_id, "updating source");

        let current = self.request(Method::GET, url.clone(), None, None, None).await?;
        let mut envelope: SourceEnvelope = current.json()?;
        update.apply(&mut envelope.source);

        self.conditional_put(url, &current, &envelope).await
    }

    /// Delete a source from a collector.
    ///
    /// `DELETE /v1/collectors/{collectorId}/sources/{sourceId}`
    pub async fn delete_source(
        &self,
        collector_id: i64,
        source_id: i64,
    ) -> Result<ApiResponse, Error> {
        let url =
            self.api_url(&format!("v1/collectors/{collector_id}/sources/{source_id}"))?;
        debug!(collector_id, source_id, "deleting source");
        self.request(Method::DELETE, url, None, None, None).await
    }
}
