//! Role-based access control. The authenticating reverse proxy verifies the
//! caller's token and injects `x-auth-subject` and `x-auth-roles` headers;
//! handlers declare the roles they accept and check the extracted caller
//! against them.

use crate::errors::ApiError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use std::collections::HashSet;

pub const SUBJECT_HEADER: &str = "x-auth-subject";
pub const ROLES_HEADER: &str = "x-auth-roles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Ministry staff read access to everything.
    ViewAll,
    /// Ministry staff permit administration.
    EditPermit,
    /// External proponent acting on their own mines.
    MinespaceProponent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ViewAll => "core_view_all",
            Role::EditPermit => "core_edit_permit",
            Role::MinespaceProponent => "minespace_proponent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "core_view_all" => Some(Role::ViewAll),
            "core_edit_permit" => Some(Role::EditPermit),
            "minespace_proponent" => Some(Role::MinespaceProponent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Caller {
    pub subject: String,
    roles: HashSet<Role>,
}

impl Caller {
    /// Builds a caller from proxy-injected headers. Unknown role names are
    /// ignored so new gateway roles do not break older deployments.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let subject = headers.get(SUBJECT_HEADER)?.to_str().ok()?.trim();
        if subject.is_empty() {
            return None;
        }
        let roles = headers
            .get(ROLES_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| {
                v.split(',')
                    .filter_map(|r| Role::parse(r.trim()))
                    .collect::<HashSet<_>>()
            })
            .unwrap_or_default();
        Some(Self {
            subject: subject.to_string(),
            roles,
        })
    }

    pub fn has_any(&self, required: &[Role]) -> bool {
        required.iter().any(|r| self.roles.contains(r))
    }

    pub fn require_any(&self, required: &[Role]) -> Result<(), ApiError> {
        if self.has_any(required) {
            Ok(())
        } else {
            let wanted: Vec<&str> = required.iter().map(Role::as_str).collect();
            Err(ApiError::Forbidden(format!(
                "missing required role (one of: {})",
                wanted.join(", ")
            )))
        }
    }

    #[cfg(test)]
    pub fn for_tests(subject: &str, roles: &[Role]) -> Self {
        Self {
            subject: subject.to_string(),
            roles: roles.iter().copied().collect(),
        }
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Caller::from_headers(&parts.headers).ok_or(ApiError::Unauthenticated)
    }
}
