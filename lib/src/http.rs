//! The transport implementing the [HTTP Json protocol](https://docs.pcloud.com/protocols/http_json_protocol/)

use crate::{Error, Payload};

async fn read_response(res: reqwest::Response) -> Result<Payload, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(Error::from)
}

impl crate::Client {
    fn build_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    #[tracing::instrument(name = "get", skip(self, params))]
    pub(crate) async fn get_request<P: serde::Serialize>(
        &self,
        method: &str,
        params: P,
    ) -> Result<Payload, Error> {
        let uri = self.build_url(method);
        tracing::debug!("calling {uri}");
        let res = self.inner.get(uri).query(&params).send().await?;
        read_response(res).await
    }

    #[tracing::instrument(name = "post", skip(self, params, form))]
    pub(crate) async fn post_request_multipart<P: serde::Serialize>(
        &self,
        method: &str,
        params: P,
        form: reqwest::multipart::Form,
    ) -> Result<Payload, Error> {
        let uri = self.build_url(method);
        tracing::debug!("calling {uri}");
        let res = self
            .inner
            .post(uri)
            .query(&params)
            .multipart(form)
            .send()
            .await?;
        read_response(res).await
    }
}

/// Returns `1` when the field is omitted from the inbound request.
pub(crate) fn enabled() -> Option<u8> {
    Some(1)
}
