use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use pcloud_facade::{BuildError, Client, ClientBuilder, Region};

#[derive(Debug, clap::Parser)]
#[command(about, version)]
pub(crate) struct Config {
    /// Address to bind the server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,
    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 8085)]
    port: u16,
    /// Origin of the pCloud API, takes precedence over the region
    #[arg(long, env = "PCLOUD_BASE_URL")]
    base_url: Option<String>,
    /// Region of the pCloud API, "eu" or "us"
    #[arg(long, env = "PCLOUD_REGION")]
    region: Option<Region>,
    /// Timeout of the upstream requests, in milliseconds
    #[arg(long, env = "PCLOUD_TIMEOUT")]
    timeout: Option<u64>,
    /// Maximum size of an upload body, in bytes
    #[arg(
        long,
        env = "MAX_UPLOAD_SIZE",
        default_value_t = crate::router::DEFAULT_MAX_UPLOAD_SIZE
    )]
    max_upload_size: usize,
}

impl Config {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn max_upload_size(&self) -> usize {
        self.max_upload_size
    }

    pub fn build_client(&self) -> Result<Client, BuildError> {
        let mut builder = ClientBuilder::default();
        if let Some(region) = self.region {
            builder.set_region(region);
        }
        if let Some(ref base_url) = self.base_url {
            builder.set_base_url(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            builder.set_timeout(Duration::from_millis(timeout));
        }
        builder.build()
    }
}
