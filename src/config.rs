//! Runtime configuration for the gateway.

use std::net::SocketAddr;

use clap::Parser;

/// Production base URL of the Asana REST API.
pub const ASANA_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Gateway configuration, read from flags or environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "asana-gateway",
    version,
    about = "Multi-tenant MCP gateway for the Asana API"
)]
pub struct GatewayConfig {
    /// Address the HTTP listener binds on.
    #[arg(long, env = "ASANA_GATEWAY_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Base URL of the Asana API.
    #[arg(long, env = "ASANA_BASE_URL", default_value = ASANA_BASE_URL)]
    pub base_url: String,

    /// Page size used by list tools when the call omits `limit`.
    #[arg(
        long,
        env = "ASANA_GATEWAY_PAGE_SIZE",
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    pub default_page_size: u32,

    /// Upper bound on the number of characters in a single tool response.
    #[arg(
        long,
        env = "ASANA_GATEWAY_MAX_RESPONSE_CHARS",
        default_value_t = 100_000
    )]
    pub max_response_chars: usize,

    /// Serve one stateful MCP session instead of the stateless HTTP gateway.
    /// Always refused at startup; see `transport::StatefulSession`.
    #[arg(long, env = "ASANA_GATEWAY_SESSION_MODE")]
    pub session_mode: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            base_url: ASANA_BASE_URL.to_string(),
            default_page_size: 50,
            max_response_chars: 100_000,
            session_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_clap_defaults() {
        let parsed = GatewayConfig::parse_from(["asana-gateway"]);
        let default = GatewayConfig::default();

        assert_eq!(parsed.bind, default.bind);
        assert_eq!(parsed.base_url, default.base_url);
        assert_eq!(parsed.default_page_size, default.default_page_size);
        assert_eq!(parsed.max_response_chars, default.max_response_chars);
        assert!(!parsed.session_mode);
    }

    #[test]
    fn test_page_size_out_of_range_is_rejected() {
        let result = GatewayConfig::try_parse_from(["asana-gateway", "--default-page-size", "500"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let parsed = GatewayConfig::parse_from([
            "asana-gateway",
            "--bind",
            "127.0.0.1:8080",
            "--base-url",
            "http://localhost:9999",
            "--default-page-size",
            "25",
        ]);

        assert_eq!(parsed.bind, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(parsed.base_url, "http://localhost:9999");
        assert_eq!(parsed.default_page_size, 25);
    }
}
