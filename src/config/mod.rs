//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::auth::{AuthPolicy, OperationPolicies};

/// Configuration for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, e.g. "127.0.0.1:3000"
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Configuration for list pagination
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page used when the caller omits `page` (pages are 1-based)
    #[serde(default = "default_page")]
    pub default_page: usize,

    /// Page size used when the caller omits `limit`
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Upper bound on `limit`; larger values are capped
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

fn default_max_limit() -> usize {
    100
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

/// Per-operation authorization policy strings ("public" / "authenticated")
///
/// Every operation has an explicit entry so the gating of each route is a
/// declared decision, not an inherited attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_policy")]
    pub list: String,

    #[serde(default = "default_policy")]
    pub get: String,

    #[serde(default = "default_policy")]
    pub create: String,

    #[serde(default = "default_policy")]
    pub update: String,

    #[serde(default = "default_policy")]
    pub delete: String,
}

fn default_policy() -> String {
    "authenticated".to_string()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            list: default_policy(),
            get: default_policy(),
            create: default_policy(),
            update: default_policy(),
            delete: default_policy(),
        }
    }
}

impl PolicyConfig {
    /// Resolve the policy strings into the operation table
    pub fn to_policies(&self) -> OperationPolicies {
        OperationPolicies {
            list: AuthPolicy::parse_policy(&self.list),
            get: AuthPolicy::parse_policy(&self.get),
            create: AuthPolicy::parse_policy(&self.create),
            update: AuthPolicy::parse_policy(&self.update),
            delete: AuthPolicy::parse_policy(&self.delete),
        }
    }
}

/// Authorization configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Accepted bearer tokens
    #[serde(default)]
    pub tokens: Vec<String>,

    /// Per-operation policies
    #[serde(default)]
    pub policies: PolicyConfig,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Create a default configuration for testing
    ///
    /// One known token; every operation gated.
    pub fn default_config() -> Self {
        Self {
            auth: AuthConfig {
                tokens: vec!["test-token".to_string()],
                policies: PolicyConfig::default(),
            },
            ..Self::default()
        }
    }
}
