// Lookup table endpoints
//
// Table definitions are JSON; bulk data arrives as a raw CSV upload with
// `merge` / `fileEncoding` query parameters (no JSON body, no multipart).
// Uploads run as asynchronous jobs polled by job id.

use reqwest::Method;
use serde_json::json;
use tracing::debug;

use crate::client::{Client, Params};
use crate::error::Error;
use crate::response::ApiResponse;
use crate::schema::{Field, Kind, Schema};

static CREATE_TABLE_BODY: Schema = Schema {
    fields: &[
        Field::required("name", Kind::string_max(255)),
        Field::required("parentFolderId", Kind::string()),
        Field::required("fields", Kind::ObjectArray),
        Field::required("primaryKeys", Kind::Array),
        Field::optional("description", Kind::string_max(1024)),
        Field::optional("ttl", Kind::integer_min(0)),
        Field::optional(
            "sizeLimitAction",
            Kind::one_of(&["StopIncomingMessages", "DeleteOldData"]),
        ),
    ],
    additional_properties: false,
    forbid_together: &[],
};

static EDIT_TABLE_BODY: Schema = Schema {
    fields: &[
        Field::optional("description", Kind::string_max(1024)),
        Field::optional("ttl", Kind::integer_min(0)),
        Field::optional(
            "sizeLimitAction",
            Kind::one_of(&["StopIncomingMessages", "DeleteOldData"]),
        ),
    ],
    additional_properties: false,
    forbid_together: &[],
};

static UPLOAD_CSV_PARAMS: Schema = Schema {
    fields: &[
        Field::optional("merge", Kind::Boolean),
        Field::optional("fileEncoding", Kind::string()),
    ],
    additional_properties: false,
    forbid_together: &[],
};

static ROW_BODY: Schema = Schema {
    fields: &[Field::required("row", Kind::ObjectArray)],
    additional_properties: false,
    forbid_together: &[],
};

impl Client {
    /// Create a lookup table definition.
    ///
    /// `POST /v1/lookupTables`
    pub async fn create_lookup_table(&self, table: &Params) -> Result<ApiResponse, Error> {
        CREATE_TABLE_BODY.validate(table)?;
        let url = self.api_url("v1/lookupTables")?;
        debug!("creating lookup table");
        let body = json!(table);
        self.request(Method::POST, url, None, Some(&body), None).await
    }

    /// Get a lookup table definition.
    ///
    /// `GET /v1/lookupTables/{id}`
    pub async fn get_lookup_table(&self, table_id: &str) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/lookupTables/{table_id}"))?;
        debug!(table_id, "fetching lookup table");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Edit a lookup table's mutable settings (data and key columns are
    /// fixed at creation).
    ///
    /// `PUT /v1/lookupTables/{id}`
    pub async fn edit_lookup_table(
        &self,
        table_id: &str,
        table: &Params,
    ) -> Result<ApiResponse, Error> {
        EDIT_TABLE_BODY.validate(table)?;
        let url = self.api_url(&format!("v1/lookupTables/{table_id}"))?;
        debug!(table_id, "editing lookup table");
        let body = json!(table);
        self.request(Method::PUT, url, None, Some(&body), None).await
    }

    /// Delete a lookup table and its data.
    ///
    /// `DELETE /v1/lookupTables/{id}`
    pub async fn delete_lookup_table(&self, table_id: &str) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/lookupTables/{table_id}"))?;
        debug!(table_id, "deleting lookup table");
        self.request(Method::DELETE, url, None, None, None).await
    }

    /// Upload a CSV of rows into a table. The body is the raw file
    /// (`text/csv`); `params` may set `merge` (append vs. replace) and
    /// `fileEncoding`. Returns the upload job id.
    ///
    /// `POST /v1/lookupTables/{id}/upload`
    pub async fn upload_lookup_csv(
        &self,
        table_id: &str,
        csv: Vec<u8>,
        params: Option<&Params>,
    ) -> Result<ApiResponse, Error> {
        if let Some(params) = params {
            UPLOAD_CSV_PARAMS.validate(params)?;
        }
        let url = self.api_url(&format!("v1/lookupTables/{table_id}/upload"))?;
        debug!(table_id, bytes = csv.len(), "uploading lookup CSV");
        self.request_bytes(Method::POST, url, params, csv, "text/csv", None)
            .await
    }

    /// Poll a CSV upload (or truncate) job.
    ///
    /// `GET /v1/lookupTables/jobs/{jobId}/status`
    pub async fn get_lookup_job_status(&self, job_id: &str) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/lookupTables/jobs/{job_id}/status"))?;
        debug!(job_id, "polling lookup table job");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Remove all rows, keeping the definition.
    ///
    /// `POST /v1/lookupTables/{id}/truncate`
    pub async fn truncate_lookup_table(&self, table_id: &str) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/lookupTables/{table_id}/truncate"))?;
        debug!(table_id, "truncating lookup table");
        self.request(Method::POST, url, None, None, None).await
    }

    /// Insert or update a single row, keyed by the table's primary keys.
    /// Body shape: `{"row": [{"columnName": ..., "columnValue": ...}]}`.
    ///
    /// `PUT /v1/lookupTables/{id}/row`
    pub async fn update_lookup_row(
        &self,
        table_id: &str,
        row: &Params,
    ) -> Result<ApiResponse, Error> {
        ROW_BODY.validate(row)?;
        let url = self.api_url(&format!("v1/lookupTables/{table_id}/row"))?;
        debug!(table_id, "upserting lookup row");
        let body = json!(row);
        self.request(Method::PUT, url, None, Some(&body), None).await
    }

    /// Delete a single row, keyed by the table's primary keys.
    ///
    /// `PUT /v1/lookupTables/{id}/deleteTableRow`
    pub async fn delete_lookup_row(
        &self,
        table_id: &str,
        row: &Params,
    ) -> Result<ApiResponse, Error> {
        ROW_BODY.validate(row)?;
        let url = self.api_url(&format!("v1/lookupTables/{table_id}/deleteTableRow"))?;
        debug!(table_id, "deleting lookup row");
        let body = json!(row);
        self.request(Method::PUT, url, None, Some(&body), None).await
    }
}
