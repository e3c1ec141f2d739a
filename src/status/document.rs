//! Typed status document of nginx_upstream_check_module.
//!
//! ```json
//! {"servers": {"total": 2, "generation": 1, "server": [
//!     {"index": 0, "upstream": "backend", "name": "10.0.0.1:80",
//!      "status": "up", "rise": 5, "fall": 0, "type": "http", "port": 0}
//! ]}}
//! ```
//!
//! Only `upstream` and `status` are required per server; everything else is
//! informational.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::status::error::FetchResult;

/// Status value that counts a server as up. Anything else is down.
pub const STATUS_UP: &str = "up";

/// Root of the status document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusDocument {
    pub servers: Servers,
}

/// The `servers` object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Servers {
    #[serde(default)]
    pub total: Option<u64>,

    #[serde(default)]
    pub generation: Option<u64>,

    pub server: Vec<ServerRecord>,
}

/// One backend server as reported by the check module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerRecord {
    /// Upstream block the server belongs to.
    pub upstream: String,

    /// Liveness tag, e.g. "up", "down".
    pub status: String,

    /// Server address as written in the nginx config.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub index: Option<u64>,

    #[serde(default)]
    pub rise: Option<u64>,

    #[serde(default)]
    pub fall: Option<u64>,

    /// Health check type (http, tcp, ...).
    #[serde(rename = "type", default)]
    pub check_type: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,
}

impl ServerRecord {
    /// Minimal record with only the fields the aggregation reads.
    pub fn new(upstream: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            upstream: upstream.into(),
            status: status.into(),
            name: None,
            index: None,
            rise: None,
            fall: None,
            check_type: None,
            port: None,
        }
    }

    /// Exact, case-sensitive match against "up".
    pub fn is_up(&self) -> bool {
        self.status == STATUS_UP
    }
}

impl StatusDocument {
    /// Wrap a list of server records.
    pub fn from_records(server: Vec<ServerRecord>) -> Self {
        Self {
            servers: Servers {
                total: None,
                generation: None,
                server,
            },
        }
    }

    /// Parse and validate a raw response body.
    pub fn from_slice(body: &[u8]) -> FetchResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn records(&self) -> &[ServerRecord] {
        &self.servers.server
    }

    /// Distinct upstream names, sorted.
    pub fn distinct_upstreams(&self) -> BTreeSet<String> {
        self.records()
            .iter()
            .map(|server| server.upstream.clone())
            .collect()
    }
}
