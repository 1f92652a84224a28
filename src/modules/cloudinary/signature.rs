use std::fmt;
use std::str::FromStr;

use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Parameters the upload API never includes in the string to sign
const UNSIGNED_PARAMS: &[&str] = &["file", "api_key", "resource_type", "cloud_name", "signature"];

/// Digest used to sign upload API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    fn digest(&self, input: &[u8]) -> String {
        match self {
            Self::Sha1 => hex::encode(Sha1::digest(input)),
            Self::Sha256 => hex::encode(Sha256::digest(input)),
        }
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            other => Err(format!(
                "Unsupported signature algorithm '{}'. Use sha1 or sha256",
                other
            )),
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the canonical string to sign: signed params sorted by name, `k=v` joined with `&`
fn string_to_sign(params: &[(&str, String)]) -> String {
    let mut signed: Vec<&(&str, String)> = params
        .iter()
        .filter(|(key, value)| !UNSIGNED_PARAMS.contains(key) && !value.is_empty())
        .collect();
    signed.sort_by(|a, b| a.0.cmp(b.0));

    signed
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Sign upload API parameters with the account secret
///
/// # Arguments
/// * `params` - Every form field of the request; unsigned fields are skipped
/// * `api_secret` - The account API secret
/// * `algorithm` - Digest to apply
///
/// # Returns
/// The hex-encoded signature
pub fn sign_params(params: &[(&str, String)], api_secret: &str, algorithm: SignatureAlgorithm) -> String {
    let payload = format!("{}{}", string_to_sign(params), api_secret);
    algorithm.digest(payload.as_bytes())
}
