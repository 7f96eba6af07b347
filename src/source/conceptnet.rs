//! ConceptNet-backed association source
//!
//! Queries `GET {endpoint}/c/{lang}/{term}` and decodes the `edges` array
//! of the response. Each edge carries an `end` concept whose `label` (or
//! `term`, when no label is present) names the related term; an absent
//! weight defaults to 1.0. Everything else in the response is ignored.

use super::traits::{AssociationSource, SourceError, SourceResult};
use crate::graph::{RemoteEdge, Term};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

/// Default public ConceptNet endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.conceptnet.io";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    edges: Vec<ApiEdge>,
}

#[derive(Debug, Deserialize)]
struct ApiEdge {
    end: Option<ApiConcept>,
    weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ApiConcept {
    label: Option<String>,
    term: Option<String>,
}

impl ApiEdge {
    /// The display name of the far end, if the edge carries one
    fn end_label(&self) -> Option<&str> {
        let end = self.end.as_ref()?;
        end.label.as_deref().or(end.term.as_deref())
    }
}

/// Association source backed by the ConceptNet HTTP API
pub struct ConceptNetSource {
    client: Client,
    endpoint: Url,
    lang: String,
}

impl ConceptNetSource {
    /// Create a source against the public ConceptNet API
    pub fn new(lang: impl Into<String>) -> SourceResult<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, lang)
    }

    /// Create a source against a custom endpoint (mirrors, test servers)
    pub fn with_endpoint(endpoint: &str, lang: impl Into<String>) -> SourceResult<Self> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| SourceError::BadEndpoint(e.to_string()))?;
        if endpoint.cannot_be_a_base() {
            return Err(SourceError::BadEndpoint(endpoint.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            endpoint,
            lang: lang.into(),
        })
    }

    fn concept_url(&self, term: &Term) -> Url {
        let mut url = self.endpoint.clone();
        // cannot_be_a_base was rejected at construction
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["c", self.lang.as_str(), term.as_str()]);
        }
        url
    }
}

#[async_trait]
impl AssociationSource for ConceptNetSource {
    fn id(&self) -> &str {
        "conceptnet"
    }

    async fn associations(&self, term: &Term) -> SourceResult<Vec<RemoteEdge>> {
        let url = self.concept_url(term);
        tracing::debug!(%url, "fetching associations");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body: ApiResponse = response.json().await?;
        let edges = body
            .edges
            .iter()
            .filter_map(|e| {
                let label = e.end_label()?;
                Some(RemoteEdge::new(label, e.weight.unwrap_or(1.0)))
            })
            .collect();
        Ok(edges)
    }
}
