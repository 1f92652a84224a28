use std::env;
use std::str::FromStr;

use crate::modules::cloudinary::SignatureAlgorithm;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub cloudinary: CloudinaryConfig,
    pub runtime: RuntimeMode,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
}

/// Cloudinary account configuration, read once at startup
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    /// Cloud (account) name, first path segment of every API and delivery URL
    pub cloud_name: String,
    /// API key sent with signed upload API calls
    pub api_key: String,
    /// API secret used to sign upload API calls, never sent over the wire
    pub api_secret: String,
    /// Build `https` delivery URLs when true
    pub secure: bool,
    /// Base URL of the upload API (e.g., "https://api.cloudinary.com/v1_1")
    pub api_base_url: String,
    /// Digest used for request signatures
    pub signature_algorithm: SignatureAlgorithm,
}

/// How the binary receives requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    /// Long-lived HTTP server bound to `HOST:PORT`
    Server,
    /// Invoked by an AWS Lambda compatible function runtime
    Lambda,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            cloudinary: CloudinaryConfig::from_env()?,
            runtime: RuntimeMode::from_env(),
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl CloudinaryConfig {
    const DEFAULT_API_BASE_URL: &'static str = "https://api.cloudinary.com/v1_1";

    pub fn from_env() -> Result<Self, String> {
        let cloud_name = required_var("CLOUDINARY_CLOUD_NAME")?;
        let api_key = required_var("CLOUDINARY_API_KEY")?;
        let api_secret = required_var("CLOUDINARY_API_SECRET")?;

        let secure = match env::var("CLOUDINARY_SECURE") {
            Ok(value) => parse_bool(&value)
                .ok_or_else(|| "CLOUDINARY_SECURE must be true or false".to_string())?,
            Err(_) => true,
        };

        let api_base_url = env::var("CLOUDINARY_API_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let signature_algorithm = match env::var("CLOUDINARY_SIGNATURE_ALGORITHM") {
            Ok(value) => SignatureAlgorithm::from_str(&value)?,
            Err(_) => SignatureAlgorithm::default(),
        };

        Ok(Self {
            cloud_name,
            api_key,
            api_secret,
            secure,
            api_base_url,
            signature_algorithm,
        })
    }
}

impl RuntimeMode {
    /// The Lambda runtime always injects `AWS_LAMBDA_RUNTIME_API` into the function environment
    pub fn from_env() -> Self {
        match env::var("AWS_LAMBDA_RUNTIME_API") {
            Ok(value) if !value.is_empty() => RuntimeMode::Lambda,
            _ => RuntimeMode::Server,
        }
    }
}

fn required_var(name: &str) -> Result<String, String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| format!("{} is not set", name))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
