//! Sharing operations
//!
//! The `auth` token is optional on these requests, it's forwarded only when provided.

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

/// Access granted to the recipient of a share
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SharePermissions {
    Read,
    Create,
    Modify,
    Delete,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid share permissions {0}, expected one of 0, 1, 2 or 4")]
pub struct InvalidPermissions(pub u8);

impl TryFrom<u8> for SharePermissions {
    type Error = InvalidPermissions;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Read),
            1 => Ok(Self::Create),
            2 => Ok(Self::Modify),
            4 => Ok(Self::Delete),
            other => Err(InvalidPermissions(other)),
        }
    }
}

impl From<SharePermissions> for u8 {
    fn from(value: SharePermissions) -> Self {
        match value {
            SharePermissions::Read => 0,
            SharePermissions::Create => 1,
            SharePermissions::Modify => 2,
            SharePermissions::Delete => 4,
        }
    }
}

/// Request to share a folder with another user.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Share {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(default, rename = "shareid", skip_serializing_if = "Option::is_none")]
    pub share_id: Option<u64>,
    #[serde(
        default,
        rename = "folderid",
        skip_serializing_if = "Option::is_none"
    )]
    pub folder_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub mail: String,
    pub permissions: SharePermissions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Share {
    pub fn new(mail: impl Into<String>, permissions: SharePermissions) -> Self {
        Self {
            auth: None,
            share_id: None,
            folder_id: None,
            path: None,
            mail: mail.into(),
            permissions,
            name: None,
            message: None,
        }
    }

    pub fn with_auth(mut self, value: impl Into<String>) -> Self {
        self.auth = Some(value.into());
        self
    }

    pub fn with_path(mut self, value: impl Into<String>) -> Self {
        self.path = Some(value.into());
        self
    }
}

/// Request listing the shares and share requests of the user.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct ShareList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(
        default,
        rename = "norequests",
        skip_serializing_if = "Option::is_none"
    )]
    pub no_requests: Option<u8>,
    #[serde(default, rename = "noshares", skip_serializing_if = "Option::is_none")]
    pub no_shares: Option<u8>,
    #[serde(
        default,
        rename = "noincoming",
        skip_serializing_if = "Option::is_none"
    )]
    pub no_incoming: Option<u8>,
    #[serde(
        default,
        rename = "nooutgoing",
        skip_serializing_if = "Option::is_none"
    )]
    pub no_outgoing: Option<u8>,
}

/// Request changing the permissions of an existing share.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct ShareUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(default, rename = "shareid", skip_serializing_if = "Option::is_none")]
    pub share_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<SharePermissions>,
}

/// Request removing an existing share.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct ShareDelete {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(default, rename = "shareid", skip_serializing_if = "Option::is_none")]
    pub share_id: Option<u64>,
}
