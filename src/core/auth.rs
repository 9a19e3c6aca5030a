//! Authorization gate for the stock API
//!
//! Authorization is declared per operation in an [`OperationPolicies`]
//! table rather than attached ad hoc to individual routes. The gate
//! itself is binary: a request either carries a verifiable credential or
//! it does not.

use anyhow::Result;
use async_trait::async_trait;
use axum::http::HeaderMap;
use std::collections::HashSet;

/// Authorization context extracted from a request
#[derive(Debug, Clone)]
pub enum AuthContext {
    /// A verified credential was presented
    Authenticated { subject: String },

    /// No (or no verifiable) credential
    Anonymous,
}

impl AuthContext {
    /// Check if this context carries a verified credential
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthContext::Authenticated { .. })
    }
}

/// Authorization policy for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Public access (no auth required)
    Public,

    /// Any authenticated caller
    Authenticated,
}

impl AuthPolicy {
    /// Check if an auth context satisfies this policy
    pub fn check(&self, context: &AuthContext) -> bool {
        match self {
            AuthPolicy::Public => true,
            AuthPolicy::Authenticated => context.is_authenticated(),
        }
    }

    /// Parse a policy from its config string
    ///
    /// Unknown values fall back to `Authenticated`.
    pub fn parse_policy(s: &str) -> Self {
        match s {
            "public" => AuthPolicy::Public,
            "authenticated" => AuthPolicy::Authenticated,
            _ => AuthPolicy::Authenticated,
        }
    }
}

/// The operations exposed by the stock endpoint surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Name used in logs and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Declared authorization requirement for every operation
///
/// Every operation gets an explicit entry; there is no implicit default
/// at the call site. The table defaults to gating all five operations.
#[derive(Debug, Clone, Copy)]
pub struct OperationPolicies {
    pub list: AuthPolicy,
    pub get: AuthPolicy,
    pub create: AuthPolicy,
    pub update: AuthPolicy,
    pub delete: AuthPolicy,
}

impl OperationPolicies {
    /// Gate every operation behind authentication
    pub fn all_authenticated() -> Self {
        Self {
            list: AuthPolicy::Authenticated,
            get: AuthPolicy::Authenticated,
            create: AuthPolicy::Authenticated,
            update: AuthPolicy::Authenticated,
            delete: AuthPolicy::Authenticated,
        }
    }

    /// Open every operation (for development)
    pub fn all_public() -> Self {
        Self {
            list: AuthPolicy::Public,
            get: AuthPolicy::Public,
            create: AuthPolicy::Public,
            update: AuthPolicy::Public,
            delete: AuthPolicy::Public,
        }
    }

    /// The declared policy for an operation
    pub fn policy_for(&self, operation: Operation) -> AuthPolicy {
        match operation {
            Operation::List => self.list,
            Operation::Get => self.get,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }
}

impl Default for OperationPolicies {
    fn default() -> Self {
        Self::all_authenticated()
    }
}

/// Trait for auth providers
///
/// Credential issuance and verification internals live behind this seam;
/// the gate only consumes the resulting context.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Extract an auth context from request headers
    async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthContext>;
}

/// Bearer-token provider backed by a static token set
///
/// Reads `Authorization: Bearer <token>`. Missing, malformed, or unknown
/// tokens all resolve to `Anonymous`; gated operations then reject with a
/// generic authorization error.
pub struct StaticTokenProvider {
    tokens: HashSet<String>,
}

impl StaticTokenProvider {
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }
}

#[async_trait]
impl AuthProvider for StaticTokenProvider {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthContext> {
        let Some(value) = headers.get(axum::http::header::AUTHORIZATION) else {
            return Ok(AuthContext::Anonymous);
        };

        let Ok(value) = value.to_str() else {
            return Ok(AuthContext::Anonymous);
        };

        let Some(token) = value.strip_prefix("Bearer ") else {
            return Ok(AuthContext::Anonymous);
        };

        if self.tokens.contains(token) {
            Ok(AuthContext::Authenticated {
                subject: token.to_string(),
            })
        } else {
            tracing::debug!("presented token did not verify");
            Ok(AuthContext::Anonymous)
        }
    }
}

/// Default no-auth provider (for development)
pub struct NoAuthProvider;

#[async_trait]
impl AuthProvider for NoAuthProvider {
    async fn authenticate(&self, _headers: &HeaderMap) -> Result<AuthContext> {
        Ok(AuthContext::Anonymous)
    }
}
