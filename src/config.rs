//! Relay configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Invalid or missing values fall back
//! to defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::domain::Resolution;

/// Default listen port when `PORT` is not set.
const DEFAULT_PORT: u16 = 5000;

/// Top-level relay configuration.
///
/// Loaded once at startup via [`RelayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Socket address to bind the server to. The host is always
    /// `0.0.0.0` (all interfaces); only the port is configurable.
    pub listen_addr: SocketAddr,

    /// Resolution every forwarded frame must decode against.
    pub target_resolution: Resolution,

    /// Ring capacity of the frame broadcast channel. This bounds how far
    /// a slow viewer may fall behind before it starts skipping frames.
    pub frame_channel_capacity: usize,

    /// Whether a sender receives its own frames back.
    pub echo_to_sender: bool,
}

impl RelayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// | Variable                 | Default |
    /// |--------------------------|---------|
    /// | `PORT`                   | `5000`  |
    /// | `TARGET_WIDTH`           | `1280`  |
    /// | `TARGET_HEIGHT`          | `720`   |
    /// | `FRAME_CHANNEL_CAPACITY` | `64`    |
    /// | `ECHO_TO_SENDER`         | `false` |
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = parse_env("PORT", DEFAULT_PORT);
        let listen_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);

        let target_resolution = Resolution::new(
            parse_env("TARGET_WIDTH", 1280),
            parse_env("TARGET_HEIGHT", 720),
        );

        let frame_channel_capacity = parse_env("FRAME_CHANNEL_CAPACITY", 64);
        let echo_to_sender = parse_env_bool("ECHO_TO_SENDER", false);

        Self {
            listen_addr,
            target_resolution,
            frame_channel_capacity,
            echo_to_sender,
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            target_resolution: Resolution::new(1280, 720),
            frame_channel_capacity: 64,
            echo_to_sender: false,
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().as_deref() {
        Some("true") | Some("TRUE") | Some("1") => true,
        Some("false") | Some("FALSE") | Some("0") => false,
        _ => default,
    }
}
