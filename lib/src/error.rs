//! The errors returned by the forwarder

/// All the errors that can happen while forwarding a request.
///
/// Errors reported by the pCloud API itself are not part of this enum: their JSON body
/// is returned as a regular [`Payload`](crate::Payload).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request targets the root folder by path, which is refused locally
    #[error("You can't delete root folder by path")]
    RootFolderDeletion,
    /// The upstream API could not be reached or the response could not be read
    #[error("unable to reach the upstream api")]
    Reqwest(#[from] reqwest::Error),
    /// The upstream API responded with something that is not JSON
    #[error("unable to parse the upstream response")]
    SerdeJson(#[from] serde_json::Error),
}
