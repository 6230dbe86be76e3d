//! HTTP transport for the GroupMe API
//!
//! One round trip per call, no retries, no backoff: transient-failure
//! handling is the caller's responsibility. The transport owns the three
//! wire-level concerns every operation shares:
//!
//! - URL construction from base URL + path segments + `token` query
//! - the HTTP 304 sentinel, surfaced as [`Fetched::NotModified`]
//! - decoding the `{response, meta}` envelope and classifying `meta.code`

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{Fetched, Meta};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// The `{response, meta}` wrapper carried by list-style endpoints
#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    response: Option<T>,
    meta: Meta,
}

/// HTTP transport bound to one base URL and access token
pub struct Transport {
    client: Client,
    base_url: Url,
    access_token: String,
}

impl Transport {
    /// Build a transport from client configuration
    ///
    /// Fails if the base URL does not parse or the TLS backend cannot
    /// initialize.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::BaseUrl {
                url: config.base_url.clone(),
            });
        }

        Ok(Self {
            client,
            base_url,
            access_token: config.access_token.clone(),
        })
    }

    /// Build the full URL for an endpoint, always appending the `token`
    /// query parameter
    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::BaseUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("token", &self.access_token);
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET an enveloped resource
    ///
    /// HTTP 304 short-circuits to `NotModified` before any body handling,
    /// matching the upstream contract that 304 carries no envelope.
    pub async fn get_enveloped<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Fetched<T>> {
        let url = self.endpoint(segments, query)?;
        debug!("GET {}", url.path());

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_MODIFIED {
            return Ok(Fetched::NotModified);
        }

        let body = response.text().await?;
        let envelope: ListEnvelope<T> = serde_json::from_str(&body)?;
        if envelope.meta.code != 200 {
            return Err(Error::api(envelope.meta.code, envelope.meta.errors));
        }

        match envelope.response {
            Some(data) => Ok(Fetched::Data(data)),
            None => Err(Error::decode("meta reported success but response was empty")),
        }
    }

    /// POST a JSON body and decode the raw response
    ///
    /// Creation endpoints answer with a bare object rather than the list
    /// envelope, so classification beyond the 304 sentinel is left to the
    /// caller.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Fetched<T>> {
        let url = self.endpoint(segments, &[])?;
        debug!("POST {}", url.path());

        let response = self.client.post(url).json(body).send().await?;
        if response.status() == StatusCode::NOT_MODIFIED {
            return Ok(Fetched::NotModified);
        }

        let body = response.text().await?;
        let parsed: T = serde_json::from_str(&body)?;
        Ok(Fetched::Data(parsed))
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
