// App catalog endpoints
//
// Installing an app is an asynchronous job: start returns a job id,
// status is polled separately.

use reqwest::Method;
use serde_json::json;
use tracing::debug;

use crate::client::{Client, Params};
use crate::error::Error;
use crate::response::ApiResponse;
use crate::schema::{Field, Kind, Schema};

static INSTALL_APP_BODY: Schema = Schema {
    fields: &[
        Field::required("name", Kind::string_max(255)),
        Field::required("destinationFolderId", Kind::string()),
        Field::optional("description", Kind::string_max(255)),
        Field::optional("dataSourceValues", Kind::Object),
    ],
    additional_properties: false,
    forbid_together: &[],
};

impl Client {
    /// List the installable app catalog.
    ///
    /// `GET /v1/apps`
    pub async fn list_apps(&self) -> Result<ApiResponse, Error> {
        let url = self.api_url("v1/apps")?;
        debug!("listing apps");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Get one app by its catalog uuid.
    ///
    /// `GET /v1/apps/{uuid}`
    pub async fn get_app(&self, app_uuid: &str) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/apps/{app_uuid}"))?;
        debug!(app_uuid, "fetching app");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Start installing an app into a destination folder. Returns the
    /// install job id.
    ///
    /// `POST /v1/apps/{uuid}/install`
    pub async fn start_app_install(
        &self,
        app_uuid: &str,
        install: &Params,
    ) -> Result<ApiResponse, Error> {
        INSTALL_APP_BODY.validate(install)?;
        let url = self.api_url(&format!("v1/apps/{app_uuid}/install"))?;
        debug!(app_uuid, "starting app install");
        let body = json!(install);
        self.request(Method::POST, url, None, Some(&body), None).await
    }

    /// Poll an app install job.
    ///
    /// `GET /v1/apps/install/{jobId}/status`
    pub async fn get_app_install_status(&self, job_id: &str) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/apps/install/{job_id}/status"))?;
        debug!(job_id, "polling app install");
        self.request(Method::GET, url, None, None, None).await
    }
}
