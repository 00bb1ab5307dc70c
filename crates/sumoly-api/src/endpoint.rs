//! Regional endpoint discovery.
//!
//! Accounts live on regional deployments (`us1`, `us2`, `eu`, `au`, ...) but
//! share one global entry host. A request to the entry host is redirected to
//! the region that owns the credentials, so the client issues a single probe
//! at construction time, follows the redirect chain, and keeps the final
//! host as the base URL for every subsequent call. Resolution happens
//! exactly once per [`Client`](crate::Client) -- there is no re-resolution
//! or failover mid-lifetime.

use secrecy::ExposeSecret;
use tracing::debug;
use url::Url;

use crate::credentials::Credentials;
use crate::error::Error;

/// Global entry URL probed when no explicit endpoint is given.
pub const DEFAULT_ENTRY_URL: &str = "https://api.sumologic.com/api";

/// Path used for the discovery probe. Any authenticated path would do; this
/// one exists on every deployment.
const PROBE_PATH: &str = "v1/collectors";

/// Probe `entry` and return the regional `.../api` base URL.
///
/// The probe's HTTP status is deliberately ignored: even an unauthenticated
/// 401 from the regional host still reveals the regional host. Only a
/// transport-level failure (DNS, TLS, timeout) aborts resolution.
pub(crate) async fn resolve(
    http: &reqwest::Client,
    entry: &Url,
    credentials: &Credentials,
) -> Result<Url, Error> {
    let probe = Url::parse(&format!(
        "{}/{PROBE_PATH}",
        entry.as_str().trim_end_matches('/')
    ))
    .map_err(|e| Error::EndpointResolution { message: e.to_string() })?;
    debug!(%probe, "resolving regional endpoint");

    let resp = http
        .get(probe)
        .basic_auth(
            credentials.access_id(),
            Some(credentials.access_key().expose_secret()),
        )
        .send()
        .await
        .map_err(|e| Error::EndpointResolution {
            message: format!("probe request failed: {e}"),
        })?;

    let landed = resp.url().as_str();
    let base = landed
        .trim_end_matches('/')
        .strip_suffix(PROBE_PATH)
        .map(|s| s.trim_end_matches('/'))
        .ok_or_else(|| Error::EndpointResolution {
            message: format!("probe landed on unexpected URL: {landed}"),
        })?;

    let endpoint = Url::parse(base).map_err(|e| Error::EndpointResolution {
        message: format!("resolved endpoint is not a valid URL: {e}"),
    })?;
    debug!(%endpoint, "regional endpoint resolved");
    Ok(endpoint)
}
