// src/query/assembler.rs
//! Turns a validated path and query into the final request URL.

use super::range::DateRange;
use super::vocabulary::Vocabulary;
use crate::constants::{API_KEY_PARAM, MONITORING_API_BASE};
use crate::error::RequestError;
use crate::types::ApiKey;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

lazy_static::lazy_static! {
    static ref MONITORING_BASE: Url = Url::parse(MONITORING_API_BASE)
        .expect("Monitoring API base URL failed to parse - this is a bug in the code");
}

/// Query pairs in the order the builder inserted them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(IndexMap<&'static str, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.0.insert(key, value.into());
        self
    }

    /// Inserts `value` only when present and non-empty.
    pub fn insert_text(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.insert(key, value);
        }
        self
    }

    /// Inserts the canonical token for `input`, or nothing if unrecognized.
    pub fn insert_term(&mut self, vocabulary: &Vocabulary, input: Option<&str>) -> &mut Self {
        if let Some(token) = input.and_then(|raw| vocabulary.normalize(raw)) {
            self.insert(vocabulary.key(), token);
        }
        self
    }

    /// Inserts the comma-joined recognized tokens, or nothing if none survive.
    pub fn insert_terms<S: AsRef<str>>(&mut self, vocabulary: &Vocabulary, inputs: &[S]) -> &mut Self {
        if let Some(joined) = vocabulary.normalize_all(inputs) {
            self.insert(vocabulary.key(), joined);
        }
        self
    }

    pub fn insert_range(&mut self, range: &DateRange) -> &mut Self {
        for (key, value) in range.query_pairs() {
            self.insert(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Whether an operation carries the API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authentication {
    ApiKey,
    Public,
}

/// Path segments and query produced by an endpoint, before the credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestPlan {
    segments: Vec<String>,
    query: QueryParams,
}

impl RequestPlan {
    pub fn at<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: QueryParams::new(),
        }
    }

    /// Appends one more segment, e.g. an optional file name.
    pub fn push_segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

/// A fully validated request against the monitoring API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledRequest {
    #[serde(serialize_with = "serialize_url")]
    base: Url,
    path: String,
    #[serde(skip)]
    segments: Vec<String>,
    query: QueryParams,
    #[serde(rename = "authenticated", serialize_with = "serialize_presence")]
    api_key: Option<ApiKey>,
}

impl CompiledRequest {
    /// Attaches the credential (when required) to a plan.
    pub fn assemble(
        plan: RequestPlan,
        authentication: Authentication,
        api_key: &str,
    ) -> Result<Self, RequestError> {
        let api_key = match authentication {
            Authentication::ApiKey => Some(ApiKey::new(api_key)?),
            Authentication::Public => None,
        };

        let path = plan.path();
        log::debug!("Compiled request: /{} ({} query params)", path, plan.query.len());

        Ok(Self {
            base: MONITORING_BASE.clone(),
            path,
            segments: plan.segments,
            query: plan.query,
            api_key,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// The unencoded path, e.g. `site/10,20/energy`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs produced by the builder, without the credential.
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    /// Every pair sent on the wire; `api_key` comes last when present.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self.query.iter().collect();
        if let Some(key) = &self.api_key {
            pairs.push((API_KEY_PARAM, key.as_str()));
        }
        pairs
    }

    pub fn to_url(&self) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(&self.segments);
        }

        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}

impl fmt::Display for CompiledRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_url().as_str())
    }
}

fn serialize_url<S: Serializer>(url: &Url, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(url.as_str())
}

fn serialize_presence<S: Serializer>(key: &Option<ApiKey>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(key.is_some())
}
