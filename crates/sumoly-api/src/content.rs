// Content library endpoints
//
// Export, import, copy, and delete all run as asynchronous server-side
// jobs: a start call returns a job id, separate calls poll status and
// fetch results. The client relays job state verbatim and never polls on
// its own.
//
// Content-manipulation calls accept an admin-mode flag that the API reads
// from an `isAdminMode` header carrying the literal string "true" or
// "false".

use reqwest::Method;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::{Client, Params, admin_mode_headers, json_params};
use crate::error::Error;
use crate::response::ApiResponse;
use crate::schema::{Field, Kind, Schema};

static IMPORT_PARAMS: Schema = Schema {
    fields: &[Field::optional("overwrite", Kind::Boolean)],
    additional_properties: false,
    forbid_together: &[],
};

impl Client {
    /// Look up a content item (folder, search, dashboard) by its library
    /// path.
    ///
    /// `GET /v2/content/path?path={path}`
    pub async fn get_content_by_path(&self, path: &str) -> Result<ApiResponse, Error> {
        let url = self.api_url("v2/content/path")?;
        debug!(path, "looking up content by path");
        let params = json_params(json!({ "path": path }));
        self.request(Method::GET, url, Some(&params), None, None).await
    }

    /// Start an export job for a content item. Returns the job id to poll
    /// with [`get_content_export_status`](Self::get_content_export_status).
    ///
    /// `POST /v2/content/{contentId}/export`
    pub async fn start_content_export(
        &self,
        content_id: &str,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v2/content/{content_id}/export"))?;
        debug!(content_id, admin_mode, "starting content export");
        self.request(Method::POST, url, None, None, Some(admin_mode_headers(admin_mode)))
            .await
    }

    /// Poll an export job.
    ///
    /// `GET /v2/content/{contentId}/export/{jobId}/status`
    pub async fn get_content_export_status(
        &self,
        content_id: &str,
        job_id: &str,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        let url =
            self.api_url(&format!("v2/content/{content_id}/export/{job_id}/status"))?;
        debug!(content_id, job_id, "polling content export");
        self.request(Method::GET, url, None, None, Some(admin_mode_headers(admin_mode)))
            .await
    }

    /// Fetch the exported content of a finished export job.
    ///
    /// `GET /v2/content/{contentId}/export/{jobId}/result`
    pub async fn get_content_export_result(
        &self,
        content_id: &str,
        job_id: &str,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        let url =
            self.api_url(&format!("v2/content/{content_id}/export/{job_id}/result"))?;
        debug!(content_id, job_id, "fetching content export result");
        self.request(Method::GET, url, None, None, Some(admin_mode_headers(admin_mode)))
            .await
    }

    /// Start an import job placing `content` into a folder. `params` may
    /// carry `{"overwrite": true}`.
    ///
    /// `POST /v2/content/folders/{folderId}/import`
    pub async fn start_content_import(
        &self,
        folder_id: &str,
        content: &Value,
        params: Option<&Params>,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        if let Some(params) = params {
            IMPORT_PARAMS.validate(params)?;
        }
        let url = self.api_url(&format!("v2/content/folders/{folder_id}/import"))?;
        debug!(folder_id, admin_mode, "starting content import");
        self.request(
            Method::POST,
            url,
            params,
            Some(content),
            Some(admin_mode_headers(admin_mode)),
        )
        .await
    }

    /// Poll an import job.
    ///
    /// `GET /v2/content/folders/{folderId}/import/{jobId}/status`
    pub async fn get_content_import_status(
        &self,
        folder_id: &str,
        job_id: &str,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        let url = self
            .api_url(&format!("v2/content/folders/{folder_id}/import/{job_id}/status"))?;
        debug!(folder_id, job_id, "polling content import");
        self.request(Method::GET, url, None, None, Some(admin_mode_headers(admin_mode)))
            .await
    }

    /// Start a copy job duplicating a content item into a destination
    /// folder.
    ///
    /// `POST /v2/content/{contentId}/copy?destinationFolder={folderId}`
    pub async fn start_content_copy(
        &self,
        content_id: &str,
        destination_folder_id: &str,
    ) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v2/content/{content_id}/copy"))?;
        debug!(content_id, destination_folder_id, "starting content copy");
        let params = json_params(json!({ "destinationFolder": destination_folder_id }));
        self.request(Method::POST, url, Some(&params), None, None).await
    }

    /// Poll a copy job.
    ///
    /// `GET /v2/content/{contentId}/copy/{jobId}/status`
    pub async fn get_content_copy_status(
        &self,
        content_id: &str,
        job_id: &str,
    ) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v2/content/{content_id}/copy/{job_id}/status"))?;
        debug!(content_id, job_id, "polling content copy");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Start a deletion job for a content item. Deletion is asynchronous
    /// like export/import; the response carries the job id.
    ///
    /// `DELETE /v2/content/{contentId}/delete`
    pub async fn start_content_deletion(
        &self,
        content_id: &str,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v2/content/{content_id}/delete"))?;
        debug!(content_id, admin_mode, "starting content deletion");
        self.request(Method::DELETE, url, None, None, Some(admin_mode_headers(admin_mode)))
            .await
    }

    /// Poll a deletion job.
    ///
    /// `GET /v2/content/{contentId}/delete/{jobId}/status`
    pub async fn get_content_deletion_status(
        &self,
        content_id: &str,
        job_id: &str,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        let url =
            self.api_url(&format!("v2/content/{content_id}/delete/{job_id}/status"))?;
        debug!(content_id, job_id, "polling content deletion");
        self.request(Method::GET, url, None, None, Some(admin_mode_headers(admin_mode)))
            .await
    }
}
