//! HTTP implementation of [`RosterApi`] using reqwest.

use reqwest::{Client, Response, Url};

use super::{Mutation, RosterApi};
use crate::errors::{ClientError, Result};
use crate::models::{MutationAck, Rejection, Roster};

/// Roster service client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRosterApi {
    client: Client,
    base_url: Url,
}

impl HttpRosterApi {
    /// Create a client with reqwest's default transport settings.
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder().build()?;
        Self::with_client(client, base_url)
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client, base_url: Url) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "Base URL {} cannot carry a path",
                base_url
            )));
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("Base URL {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `/activities`
    pub fn activities_url(&self) -> Result<Url> {
        self.endpoint(&["activities"])
    }

    /// `/activities/{activity}/{mutation}?email={email}`, both values
    /// percent-encoded.
    pub fn mutation_url(&self, mutation: Mutation, activity: &str, email: &str) -> Result<Url> {
        let mut url = self.endpoint(&["activities", activity, mutation.path_segment()])?;
        url.query_pairs_mut().append_pair("email", email);
        Ok(url)
    }

    /// Split a response into status and body text.
    async fn read(resp: Response) -> Result<(reqwest::StatusCode, String)> {
        let status = resp.status();
        let text = resp.text().await?;
        Ok((status, text))
    }
}

impl RosterApi for HttpRosterApi {
    async fn fetch_activities(&self) -> Result<Roster> {
        let url = self.activities_url()?;
        tracing::debug!("GET {}", url);

        let resp = self.client.get(url).send().await?;
        let (status, text) = Self::read(resp).await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<Rejection>(&text)
                .ok()
                .and_then(|r| r.detail_text());
            return Err(ClientError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let roster: Roster = serde_json::from_str(&text)?;
        tracing::debug!("Fetched {} activities", roster.len());
        Ok(roster)
    }

    async fn mutate(&self, mutation: Mutation, activity: &str, email: &str) -> Result<MutationAck> {
        let url = self.mutation_url(mutation, activity, email)?;
        tracing::debug!("POST {}", url);

        let resp = self.client.post(url).send().await?;
        let (status, text) = Self::read(resp).await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        let rejection: Rejection = serde_json::from_str(&text)?;
        Err(ClientError::Status {
            status: status.as_u16(),
            detail: rejection.detail_text(),
        })
    }
}
