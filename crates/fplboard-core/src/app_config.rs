use std::net::SocketAddr;

/// Runtime configuration for the fplboard server, loaded from environment
/// variables by [`crate::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the upstream FPL API, overridable for mock servers.
    pub fpl_base_url: String,
    pub request_timeout_secs: u64,
}
