//! Request forwarder for the [pCloud HTTP Json API](https://docs.pcloud.com/protocols/http_json_protocol/).
//!
//! Every operation takes a flat request record, normalizes its path fields,
//! drops the absent optional fields and forwards the rest as query parameters
//! to the matching upstream endpoint. The upstream JSON body is returned
//! untouched.
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use pcloud_facade::folder::Folder;
//!
//! let client = pcloud_facade::ClientBuilder::from_env().build()?;
//! let listing = client.list_folder(Folder::new("my-auth-token")).await?;
//! println!("{listing}");
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

mod builder;
mod error;
mod http;
mod region;

pub mod auth;
pub mod file;
pub mod folder;
pub mod path;
pub mod share;

pub use builder::{ClientBuilder, Error as BuildError};
pub use error::Error;
pub use region::{Region, UnknownRegion};

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Base url of the european region
pub const EU_REGION: &str = "https://eapi.pcloud.com";
/// Base url of the american region
pub const US_REGION: &str = "https://api.pcloud.com";

pub type Result<T> = std::result::Result<T, Error>;

/// Untouched JSON document returned by the upstream API
pub type Payload = serde_json::Value;

/// Client forwarding the requests to the pCloud API
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Cow<'static, str>,
    inner: reqwest::Client,
}

impl Client {
    /// Creates a client targeting the provided base url with the default http configuration.
    pub fn new(base_url: impl Into<Cow<'static, str>>) -> std::result::Result<Self, BuildError> {
        ClientBuilder::default().with_base_url(base_url).build()
    }

    /// The upstream origin the requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_ref()
    }
}
