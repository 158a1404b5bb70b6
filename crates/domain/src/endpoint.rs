use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Address of a TLD server as written in the delegation table.
///
/// A bare host keeps the historical convention of reusing the port the
/// root server listens on; `host:port` names the port explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: Arc<str>,
    port: Option<u16>,
}

impl Endpoint {
    pub fn new(host: impl Into<Arc<str>>, port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn explicit_port(&self) -> Option<u16> {
        self.port
    }

    pub fn port_or(&self, default_port: u16) -> u16 {
        self.port.unwrap_or(default_port)
    }
}

fn parse_host_port(s: &str) -> Result<(&str, Option<u16>), String> {
    if let Some(rest) = s.strip_prefix('[') {
        let end = rest
            .find(']')
            .ok_or_else(|| format!("Unterminated IPv6 literal in '{}'", s))?;
        let host = &rest[..end];
        let tail = &rest[end + 1..];
        if tail.is_empty() {
            return Ok((host, None));
        }
        let port_str = tail
            .strip_prefix(':')
            .ok_or_else(|| format!("Unexpected characters after IPv6 literal in '{}'", s))?;
        let port = port_str
            .parse::<u16>()
            .map_err(|e| format!("Invalid port in '{}': {}", s, e))?;
        return Ok((host, Some(port)));
    }

    match s.rsplit_once(':') {
        // A second colon means an unbracketed IPv6 address with no port.
        Some((host, _)) if host.contains(':') => Ok((s, None)),
        Some((host, port_str)) => {
            let port = port_str
                .parse::<u16>()
                .map_err(|e| format!("Invalid port in '{}': {}", s, e))?;
            Ok((host, Some(port)))
        }
        None => Ok((s, None)),
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (host, port) = parse_host_port(s)?;
        if host.is_empty() {
            return Err(format!("Missing host in endpoint '{}'", s));
        }
        if port == Some(0) {
            return Err(format!("Port 0 is not a valid endpoint port in '{}'", s));
        }
        Ok(Self::new(host, port))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.port, self.host.contains(':')) {
            (None, _) => write!(f, "{}", self.host),
            (Some(port), true) => write!(f, "[{}]:{}", self.host, port),
            (Some(port), false) => write!(f, "{}:{}", self.host, port),
        }
    }
}
