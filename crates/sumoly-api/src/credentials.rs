use secrecy::SecretString;

/// Access-key pair for authenticating with the management API.
///
/// Immutable for the lifetime of a [`Client`](crate::Client). The key is
/// wrapped in [`SecretString`] so it is redacted from `Debug` output and
/// never lands in logs; it is read exactly once per request to build the
/// `Authorization: Basic` header.
///
/// Generate a pair under *Administration > Security > Access Keys* in the
/// Sumo Logic UI.
#[derive(Debug, Clone)]
pub struct Credentials {
    access_id: String,
    access_key: SecretString,
}

impl Credentials {
    /// Create credentials from an access id and access key.
    pub fn new(access_id: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            access_id: access_id.into(),
            access_key: SecretString::from(access_key.into()),
        }
    }

    /// The (non-secret) access id.
    pub fn access_id(&self) -> &str {
        &self.access_id
    }

    /// The secret access key. Exposure is the caller's responsibility.
    pub fn access_key(&self) -> &SecretString {
        &self.access_key
    }
}
