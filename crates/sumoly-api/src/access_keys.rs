// Access key endpoints
//
// Key listings paginate with `limit` plus an opaque continuation `token`
// returned in the body; the client does not auto-paginate.

use reqwest::Method;
use serde_json::json;
use tracing::debug;

use crate::client::{Client, Params};
use crate::error::Error;
use crate::response::ApiResponse;
use crate::schema::{Field, Kind, Schema};

static LIST_KEYS_PARAMS: Schema = Schema {
    fields: &[
        Field::optional("limit", Kind::integer_range(1, 100)),
        Field::optional("token", Kind::string()),
    ],
    additional_properties: false,
    forbid_together: &[],
};

static CREATE_KEY_BODY: Schema = Schema {
    fields: &[
        Field::required("label", Kind::string_max(255)),
        Field::optional("corsHeaders", Kind::Array),
    ],
    additional_properties: false,
    forbid_together: &[],
};

static UPDATE_KEY_BODY: Schema = Schema {
    fields: &[
        Field::required("disabled", Kind::Boolean),
        Field::optional("corsHeaders", Kind::Array),
    ],
    additional_properties: false,
    forbid_together: &[],
};

impl Client {
    /// List all access keys in the organization.
    ///
    /// `GET /v1/accessKeys`
    pub async fn list_access_keys(&self, params: Option<&Params>) -> Result<ApiResponse, Error> {
        if let Some(params) = params {
            LIST_KEYS_PARAMS.validate(params)?;
        }
        let url = self.api_url("v1/accessKeys")?;
        debug!("listing access keys");
        self.request(Method::GET, url, params, None, None).await
    }

    /// List the calling user's own access keys.
    ///
    /// `GET /v1/accessKeys/personal`
    pub async fn list_personal_access_keys(&self) -> Result<ApiResponse, Error> {
        let url = self.api_url("v1/accessKeys/personal")?;
        debug!("listing personal access keys");
        self.request(Method::GET, url, None, None, None).await
    }

    /// Create an access key. The secret key appears only in this response.
    ///
    /// `POST /v1/accessKeys`
    pub async fn create_access_key(&self, key: &Params) -> Result<ApiResponse, Error> {
        CREATE_KEY_BODY.validate(key)?;
        let url = self.api_url("v1/accessKeys")?;
        debug!("creating access key");
        let body = json!(key);
        self.request(Method::POST, url, None, Some(&body), None).await
    }

    /// Enable/disable a key or replace its CORS header allowlist.
    ///
    /// `PUT /v1/accessKeys/{id}`
    pub async fn update_access_key(
        &self,
        access_key_id: &str,
        update: &Params,
    ) -> Result<ApiResponse, Error> {
        UPDATE_KEY_BODY.validate(update)?;
        let url = self.api_url(&format!("v1/accessKeys/{access_key_id}"))?;
        debug!(access_key_id, "updating access key");
        let body = json!(update);
        self.request(Method::PUT, url, None, Some(&body), None).await
    }

    /// Delete an access key.
    ///
    /// `DELETE /v1/accessKeys/{id}`
    pub async fn delete_access_key(&self, access_key_id: &str) -> Result<ApiResponse, Error> {
        let url = self.api_url(&format!("v1/accessKeys/{access_key_id}"))?;
        debug!(access_key_id, "deleting access key");
        self.request(Method::DELETE, url, None, None, None).await
    }
}
