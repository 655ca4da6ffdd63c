//! Route string parsing
//!
//! A route is a URI-like string of the form `scheme://host[:port][/path]`,
//! e.g. `wss://gateway.example.net:8443/tunnel`. Only the host part is of
//! interest; scheme, port, and path are discarded. The host is informational
//! (the dialed identity is the fixed connection profile), so parsing is
//! best-effort and never fails.

/// A parsed connection route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Host extracted from the route string.
    pub host: String,
}

impl Route {
    /// Parse a route string, extracting the host.
    ///
    /// The host is the substring between `://` and the first following `:`
    /// or `/`. A route without a `://` separator is treated as starting at
    /// the host (offset 0); a route without port or path yields the
    /// remainder of the string. Degenerate inputs produce an empty host
    /// rather than an error.
    pub fn parse(input: &str) -> Self {
        let start = input.find("://").map(|pos| pos + 3).unwrap_or(0);
        let rest = &input[start..];
        let end = rest
            .find(':')
            .or_else(|| rest.find('/'))
            .unwrap_or(rest.len());

        Self {
            host: rest[..end].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_with_port_and_path() {
        let route = Route::parse("wss://vpn.example.com:8443/tunnel");
        assert_eq!(route.host, "vpn.example.com");
    }

    #[test]
    fn test_host_with_port_only() {
        let route = Route::parse("wss://vpn.example.com:8443");
        assert_eq!(route.host, "vpn.example.com");
    }

    #[test]
    fn test_host_with_path_only() {
        let route = Route::parse("https://vpn.example.com/tunnel/v2");
        assert_eq!(route.host, "vpn.example.com");
    }

    #[test]
    fn test_bare_host() {
        let route = Route::parse("wss://vpn.example.com");
        assert_eq!(route.host, "vpn.example.com");
    }

    #[test]
    fn test_missing_separator_with_port() {
        // No scheme: the whole string up to the first delimiter is the host
        let route = Route::parse("vpn.example.com:8443");
        assert_eq!(route.host, "vpn.example.com");
    }

    #[test]
    fn test_missing_separator_plain() {
        let route = Route::parse("vpn.example.com");
        assert_eq!(route.host, "vpn.example.com");
    }

    #[test]
    fn test_empty_input() {
        let route = Route::parse("");
        assert_eq!(route.host, "");
    }

    #[test]
    fn test_separator_at_end() {
        let route = Route::parse("wss://");
        assert_eq!(route.host, "");
    }

    #[test]
    fn test_ipv4_host() {
        let route = Route::parse("wss://203.0.113.7:443");
        assert_eq!(route.host, "203.0.113.7");
    }

}
