// Client facade and authenticated request executor.
//
// Holds the credentials and the once-resolved regional endpoint, builds
// URLs, and dispatches authenticated requests. All endpoint modules
// (collectors, sources, content, ...) are implemented as inherent methods
// via separate files to keep this module focused on transport mechanics.

use reqwest::Method;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::credentials::Credentials;
use crate::endpoint::{self, DEFAULT_ENTRY_URL};
use crate::error::Error;
use crate::response::ApiResponse;
use crate::transport::TransportConfig;

/// Query-parameter or request-body map, as loose JSON.
pub type Params = Map<String, Value>;

/// The verbs the management API speaks. Anything else is a caller bug.
const SUPPORTED_METHODS: [Method; 7] = [
    Method::GET,
    Method::HEAD,
    Method::OPTIONS,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

/// Characters the API rejects in name-lookup path segments even when
/// URL-encoded.
const FORBIDDEN_NAME_CHARS: [char; 4] = [';', '/', '%', '\\'];

/// Client for the Sumo Logic management REST API.
///
/// Construction resolves the account's regional endpoint exactly once (see
/// [`endpoint`](crate::endpoint)); every catalog method then reuses that
/// base URL and the stored credentials. The client holds no other state, so
/// it is cheap to share behind an `Arc` from multiple tasks.
pub struct Client {
    http: reqwest::Client,
    credentials: Credentials,
    endpoint: Url,
}

impl Client {
    /// Connect via the global entry host, following its redirect to the
    /// regional deployment that owns `credentials`.
    pub async fn connect(
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let entry = Url::parse(DEFAULT_ENTRY_URL)?;
        Self::connect_to(entry, credentials, transport).await
    }

    /// Connect via a non-default entry host (FedRAMP deployments, test
    /// doubles). Still performs the one-shot redirect probe.
    pub async fn connect_to(
        entry: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let endpoint = endpoint::resolve(&http, &entry, &credentials).await?;
        Ok(Self { http, credentials, endpoint })
    }

    /// Build a client against an already-known regional endpoint, skipping
    /// the discovery probe. `endpoint` should be the regional base ending in
    /// `/api`, e.g. `https://api.us2.sumologic.com/api`.
    pub fn with_endpoint(
        http: reqwest::Client,
        credentials: Credentials,
        endpoint: Url,
    ) -> Self {
        Self { http, credentials, endpoint }
    }

    /// The resolved regional base URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an API path like `v1/collectors/123`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let full = format!("{}/{path}", self.endpoint.as_str().trim_end_matches('/'));
        Url::parse(&full).map_err(Error::InvalidUrl)
    }

    /// Build a name-lookup URL: `{base}/{prefix}/{name}`, with the name as
    /// a single encoded path segment.
    ///
    /// Names containing `;` `/` `%` `\` are rejected before any request --
    /// the API does not accept them even URL-encoded. Names containing a
    /// literal `.` get a trailing `/` appended so the remote routing layer
    /// does not read the tail as a file-extension suffix.
    pub(crate) fn name_url(&self, prefix: &str, name: &str) -> Result<Url, Error> {
        if name.chars().any(|c| FORBIDDEN_NAME_CHARS.contains(&c)) {
            return Err(Error::InvalidName { name: name.to_owned() });
        }
        let mut url = self.api_url(prefix)?;
        {
            let mut segments = url
                .path_segments_mut()
                .expect("API base URL is never cannot-be-a-base");
            segments.push(name);
            if name.contains('.') {
                segments.push("");
            }
        }
        Ok(url)
    }

    // ── Request executor ─────────────────────────────────────────────

    /// Issue an authenticated request and return the raw response.
    ///
    /// This is the single choke point every catalog method funnels
    /// through, and an escape hatch for endpoints not yet covered by the
    /// catalog. Behavior:
    ///
    /// 1. `method` must be one of the supported verbs
    ///    ([`Error::InvalidMethod`] otherwise).
    /// 2. `query` is appended to the URL; booleans serialize as
    ///    `true`/`false`, numbers in their canonical form.
    /// 3. Basic auth is computed from the stored credentials.
    /// 4. `body`, when present, is serialized as JSON with
    ///    `Content-Type: application/json`.
    /// 5. `extra_headers` are merged last and win on key collision (this
    ///    is how `If-Match` and `isAdminMode` get injected).
    ///
    /// No retry, no status-code interpretation: a non-2xx response is
    /// returned just like a 200.
    pub async fn request(
        &self,
        method: Method,
        url: Url,
        query: Option<&Params>,
        body: Option<&Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<ApiResponse, Error> {
        let mut builder = self.start_request(method, url, query)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.finish_request(builder, extra_headers).await
    }

    /// Like [`request`](Self::request), but with a raw (non-JSON) body.
    /// Used by the lookup-table CSV upload.
    pub(crate) async fn request_bytes(
        &self,
        method: Method,
        url: Url,
        query: Option<&Params>,
        body: Vec<u8>,
        content_type: &'static str,
        extra_headers: Option<HeaderMap>,
    ) -> Result<ApiResponse, Error> {
        let builder = self
            .start_request(method, url, query)?
            .header(header::CONTENT_TYPE, content_type)
            .body(body);
        self.finish_request(builder, extra_headers).await
    }

    fn start_request(
        &self,
        method: Method,
        mut url: Url,
        query: Option<&Params>,
    ) -> Result<reqwest::RequestBuilder, Error> {
        if !SUPPORTED_METHODS.contains(&method) {
            return Err(Error::InvalidMethod { method: method.to_string() });
        }
        if let Some(params) = query {
            append_query(&mut url, params);
        }
        debug!(%method, %url, "dispatching request");
        Ok(self.http.request(method, url).basic_auth(
            self.credentials.access_id(),
            Some(self.credentials.access_key().expose_secret()),
        ))
    }

    async fn finish_request(
        &self,
        mut builder: reqwest::RequestBuilder,
        extra_headers: Option<HeaderMap>,
    ) -> Result<ApiResponse, Error> {
        if let Some(extra) = extra_headers {
            builder = builder.headers(extra);
        }
        let resp = builder.send().await.map_err(Error::Transport)?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(Error::Transport)?;
        Ok(ApiResponse::new(status, headers, body.to_vec()))
    }

    // ── Read-modify-write support ────────────────────────────────────

    /// Issue the write half of a read-modify-write update: a `PUT` of
    /// `merged` carrying the `ETag` observed on `current` as `If-Match`,
    /// so the server rejects the write if the resource changed in between.
    pub(crate) async fn conditional_put(
        &self,
        url: Url,
        current: &ApiResponse,
        merged: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        let etag = current
            .headers()
            .get(header::ETAG)
            .cloned()
            .ok_or_else(|| Error::MissingEtag { url: url.to_string() })?;
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_MATCH, etag);
        let body = serde_json::to_value(merged)?;
        self.request(Method::PUT, url, None, Some(&body), Some(headers))
            .await
    }
}

/// Headers carrying the `isAdminMode` flag for content endpoints. The API
/// reads the literal lowercase strings `"true"`/`"false"`, not a boolean.
pub(crate) fn admin_mode_headers(admin_mode: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let value = if admin_mode { "true" } else { "false" };
    headers.insert(
        HeaderName::from_static("isadminmode"),
        HeaderValue::from_static(value),
    );
    headers
}

/// Shorthand for building an inline query map from a `json!` object.
/// Non-object values produce an empty map; callers only pass objects.
pub(crate) fn json_params(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => Params::new(),
    }
}

fn append_query(url: &mut Url, params: &Params) {
    if params.is_empty() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (key, value) in params {
        match value {
            Value::String(s) => {
                pairs.append_pair(key, s);
            }
            Value::Bool(b) => {
                pairs.append_pair(key, if *b { "true" } else { "false" });
            }
            Value::Null => {}
            other => {
                pairs.append_pair(key, &other.to_string());
            }
        }
    }
}
