//! Request URL construction.
//!
//! A request target is either a literal URL or a list of path segments.
//! Segments are percent-encoded individually and joined with `/`; options
//! are appended as a query string.

use crate::http::params::{encode_component, Params};

/// One path segment. A list is joined with `,` before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    One(String),
    List(Vec<String>),
}

impl From<&str> for Segment {
    fn from(value: &str) -> Self {
        Segment::One(value.to_string())
    }
}

impl From<String> for Segment {
    fn from(value: String) -> Self {
        Segment::One(value)
    }
}

impl<T: Into<String>> From<Vec<T>> for Segment {
    fn from(values: Vec<T>) -> Self {
        Segment::List(values.into_iter().map(Into::into).collect())
    }
}

impl Segment {
    fn encode(&self) -> String {
        let joined;
        let raw = match self {
            Segment::One(s) => s.as_str(),
            Segment::List(items) => {
                joined = items.join(",");
                joined.as_str()
            }
        };
        encode_component(raw)
    }
}

/// What a request is addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Used as-is; options are merged into any existing query.
    Url(String),
    /// Encoded and joined with `/`.
    Segments(Vec<Segment>),
}

impl Target {
    pub fn segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        Target::Segments(segments.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Target {
    fn from(url: &str) -> Self {
        Target::Url(url.to_string())
    }
}

impl From<String> for Target {
    fn from(url: String) -> Self {
        Target::Url(url)
    }
}

impl From<&String> for Target {
    fn from(url: &String) -> Self {
        Target::Url(url.clone())
    }
}

impl From<Vec<Segment>> for Target {
    fn from(segments: Vec<Segment>) -> Self {
        Target::Segments(segments)
    }
}

/// Build the final request URL from a target and query options.
pub fn create_url(target: &Target, options: &Params) -> String {
    match target {
        Target::Segments(segments) => {
            let mut url = segments
                .iter()
                .map(Segment::encode)
                .collect::<Vec<_>>()
                .join("/");
            if !options.is_empty() {
                url.push('?');
                url.push_str(&options.encode());
            }
            url
        }
        Target::Url(path) => {
            let mut url = path.clone();
            if !options.is_empty() {
                url.push(if url.contains('?') { '&' } else { '?' });
                url.push_str(&options.encode());
            }
            url
        }
    }
}
