//! Authentication through the [`userinfo`](https://docs.pcloud.com/methods/general/userinfo.html) method

/// Credentials sent to `userinfo` to open a session.
///
/// `getauth` and `logout` are enabled unless the caller explicitly sets them to `null`,
/// so that a login returns an `auth` token and invalidates the previous ones.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct Login {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(
        default,
        rename = "passworddigest",
        skip_serializing_if = "Option::is_none"
    )]
    pub password_digest: Option<String>,
    #[serde(
        default = "crate::http::enabled",
        rename = "getauth",
        skip_serializing_if = "Option::is_none"
    )]
    pub get_auth: Option<u8>,
    #[serde(
        default = "crate::http::enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub logout: Option<u8>,
}

impl Login {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
            digest: None,
            password_digest: None,
            get_auth: Some(1),
            logout: Some(1),
        }
    }
}

impl crate::Client {
    /// Logs in with a username and a password (or a password digest).
    ///
    /// Calls `userinfo` and returns its response as is: on success it contains the `auth` token
    /// to provide to the other operations.
    #[tracing::instrument(skip(self, params))]
    pub async fn login(&self, params: Login) -> crate::Result<crate::Payload> {
        self.get_request("userinfo", params).await
    }
}
