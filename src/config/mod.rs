//! Configuration utilities (ports, CORS, required client keys, env files)

use std::net::{Ipv4Addr, SocketAddr};

pub mod requirements;
pub mod service_account;
pub mod source;
pub mod validate;

pub use requirements::{RequiredKey, Requirements};
pub use source::{ConfigSource, MapSource, ProcessEnv};
pub use validate::{validate, KeyResolution, MissingConfigurationError};

/// Socket address to bind the server to.
///
/// Reads `PORT` or defaults to 8080, binds to 0.0.0.0.
pub fn server_addr(source: &impl ConfigSource) -> SocketAddr {
    let port = source
        .get("PORT")
        .and_then(|v| v.trim().parse::<u16>().ok())
        .unwrap_or(8080);
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
}

/// Origins allowed to call the API, from `CORS_ALLOWED_ORIGINS` (comma list).
/// Empty means any origin.
pub fn cors_origins(source: &impl ConfigSource) -> Vec<String> {
    source
        .get("CORS_ALLOWED_ORIGINS")
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
