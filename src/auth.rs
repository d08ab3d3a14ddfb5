//! Signed request parameters for the Marvel catalog API
//!
//! Every request carries `ts`, `apikey` and `hash`, where the hash is the
//! hex-encoded MD5 digest of `ts + private_key + public_key`.

use std::fmt;

use chrono::Utc;
use md5::{Digest, Md5};

/// API key pair, resolved once from configuration at startup
#[derive(Clone)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// The three query parameters attached to each outbound request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthParams {
    pub ts: String,
    pub apikey: String,
    pub hash: String,
}

impl AuthParams {
    pub fn as_query(&self) -> [(&'static str, &str); 3] {
        [
            ("ts", self.ts.as_str()),
            ("apikey", self.apikey.as_str()),
            ("hash", self.hash.as_str()),
        ]
    }
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Sign with the current time. Never cache the result across requests.
    pub fn sign(&self) -> AuthParams {
        let ts = Utc::now().timestamp_millis().to_string();
        self.sign_at(&ts)
    }

    pub fn sign_at(&self, ts: &str) -> AuthParams {
        let mut hasher = Md5::new();
        hasher.update(ts.as_bytes());
        hasher.update(self.private_key.as_bytes());
        hasher.update(self.public_key.as_bytes());

        AuthParams {
            ts: ts.to_string(),
            apikey: self.public_key.clone(),
            hash: hex::encode(hasher.finalize()),
        }
    }
}
