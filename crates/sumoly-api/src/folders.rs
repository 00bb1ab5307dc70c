// Content-library folder endpoints
//
// Folder CRUD under /v2/content/folders. The global-folder view is only
// reachable through an asynchronous job, same shape as content export.

use reqwest::Method;
use serde_json::json;
use tracing::debug;

use crate::client::{Client, Params, admin_mode_headers};
use crate::error::Error;
use crate::response::ApiResponse;
use crate::schema::{Field, Kind, Schema};

static CREATE_FOLDER_BODY: Schema = Schema {
    fields: &[
        Field::required("name", Kind::string_max(128)),
        Field::required("parentId", Kind::string()),
        Field::optional("description", Kind::string_max(255)),
    ],
    additional_properties: false,
    forbid_together: &[],
};

static UPDATE_FOLDER_BODY: Schema = Schema {
    fields: &[
        Field::optional("name", Kind::string_max(128)),
        Field::optional("description", Kind::string_max(255)),
    ],
    additional_properties: false,
    forbid_together: &[],
};

impl Client {
    /// Get the personal folder of the calling user.
    ///
    /// `GET /v2/content/folders/personal`
    pub async fn get_personal_folder(&self) -> Result<ApiResponse, Error> {
        let url = self.api_url("v2/content/folders/personal")?;
        debug!("fetching personal folder");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Get a folder by id.
    ///
    /// `GET /v2/content/folders/{folderId}`
    pub async fn get_folder(
        &self,
        folder_id: &str,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v2/content/folders/{folder_id}"))?;
        debug!(folder_id, "fetching folder");
        self.request(Method::GET, url, None, None, Some(admin_mode_headers(admin_mode)))
            .await
    }

    /// Create a folder.
    ///
    /// `POST /v2/content/folders`
    pub async fn create_folder(
        &self,
        folder: &Params,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        CREATE_FOLDER_BODY.validate(folder)?;
        let url = self.api_url("v2/content/folders")?;
        debug!("creating folder");
        let body = json!(folder);
        self.request(Method::POST, url, None, Some(&body), Some(admin_mode_headers(admin_mode)))
            .await
    }

    /// Update a folder's name or description.
    ///
    /// `PUT /v2/content/folders/{folderId}`
    pub async fn update_folder(
        &self,
        folder_id: &str,
        folder: &Params,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        UPDATE_FOLDER_BODY.validate(folder)?;
        let url = self.api_url(&format!("v2/content/folders/{folder_id}"))?;
        debug!(folder_id, "updating folder");
        let body = json!(folder);
        self.request(Method::PUT, url, None, Some(&body), Some(admin_mode_headers(admin_mode)))
            .await
    }

    /// Start the job that assembles the top-level (global) folder view.
    ///
    /// `GET /v2/content/folders/global`
    pub async fn start_global_folder_job(
        &self,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        let url = self.api_url("v2/content/folders/global")?;
        debug!(admin_mode, "starting global folder job");
        self.request(Method::GET, url, None, None, Some(admin_mode_headers(admin_mode)))
            .await
    }

    /// Poll a global-folder job.
    ///
    /// `GET /v2/content/folders/global/{jobId}/status`
    pub async fn get_global_folder_status(
        &self,
        job_id: &str,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v2/content/folders/global/{job_id}/status"))?;
        debug!(job_id, "polling global folder job");
        self.request(Method::GET, url, None, None, Some(admin_mode_headers(admin_mode)))
            .await
    }

    /// Fetch the result of a finished global-folder job.
    ///
    /// `GET /v2/content/folders/global/{jobId}/result`
    pub async fn get_global_folder_result(
        &self,
        job_id: &str,
        admin_mode: bool,
    ) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v2/content/folders/global/{job_id}/result"))?;
        debug!(job_id, "fetching global folder result");
        self.request(Method::GET, url, None, None, Some(admin_mode_headers(admin_mode)))
            .await
    }
}
