//! Transport Seam
//!
//! Describes requests independently of how they are sent, so the API layer
//! runs unchanged against the browser `fetch` or an in-memory backend.

use std::fmt;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::error::ApiResult;

/// Characters left as-is in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single path segment (e.g. an id)
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A local file to be uploaded
#[derive(Clone, PartialEq)]
pub struct FilePart {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for FilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePart")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    File(FilePart),
}

/// `multipart/form-data` body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Multipart {
    pub parts: Vec<(String, Part)>,
}

impl Multipart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push((name.to_string(), Part::Text(value.into())));
        self
    }

    pub fn file(mut self, name: &str, file: FilePart) -> Self {
        self.parts.push((name.to_string(), Part::File(file)));
        self
    }

    #[cfg(test)]
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(key, part)| match part {
            Part::Text(value) if key == name => Some(value.as_str()),
            _ => None,
        })
    }

    #[cfg(test)]
    pub fn get_file(&self, name: &str) -> Option<&FilePart> {
        self.parts.iter().find_map(|(key, part)| match part {
            Part::File(file) if key == name => Some(file),
            _ => None,
        })
    }
}

/// A request relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Multipart>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn body(mut self, body: Multipart) -> Self {
        self.body = Some(body);
        self
    }

    /// Path plus query string, e.g. `/categories?page=1&limit=10`
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, PATH_SEGMENT)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }

    /// Key under which a query response is cached
    pub fn cache_key(&self) -> String {
        format!("{} {}", self.method, self.path_and_query())
    }
}

/// Sends requests and returns the decoded JSON body.
///
/// Non-2xx responses must be reported as `ApiError::Http`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
}
