//! Service configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the service always listens on.
pub const DEFAULT_PORT: u16 = 3001;

/// Location of the catalog file, relative to the working directory.
pub const DEFAULT_SONGS_FILE: &str = "data/songs.json";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "musik_api=info,tower_http=debug";

/// Runtime settings for the HTTP server.
///
/// Nothing here is read from the environment; only the log filter honours
/// `RUST_LOG`, see [`DEFAULT_LOG_FILTER`].
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub songs_file: PathBuf,
}

impl Config {
    /// Address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Base URL advertised in logs and in the OpenAPI document.
    pub fn public_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            songs_file: PathBuf::from(DEFAULT_SONGS_FILE),
        }
    }
}
