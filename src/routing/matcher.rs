//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse route paths into segment patterns (`build`, `:stratId`, `*`)
//! - Match a pattern against a prefix of the request path segments
//! - Capture named path parameters
//!
//! # Design Decisions
//! - Static segments compare ASCII case-insensitively
//! - Parameter values are percent-decoded; invalid UTF-8 keeps the raw text
//! - Empty segments are ignored, so `/build/` and `//build` equal `/build`
//! - No regex: matching is a single walk over the segments

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// The catch-all path marker.
pub const WILDCARD: &str = "*";

/// Parameter name under which the wildcard captures the unmatched path.
pub const PATH_MATCH_PARAM: &str = "pathMatch";

/// Error raised when a route path is not a valid pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("parameter segment `{segment}` needs an identifier name")]
    InvalidParamName { segment: String },

    #[error("parameter `{name}` appears more than once")]
    DuplicateParam { name: String },

    #[error("`*` is only valid as a whole route path")]
    MisplacedWildcard,
}

/// One segment of a compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal segment, e.g. `monitor`.
    Static(String),
    /// Named parameter, e.g. `:stratId` (stored without the colon).
    Param(String),
}

/// A compiled route path.
///
/// An empty pattern (from `""` or `"/"`) consumes nothing and is how index
/// views and the root layout match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathPattern {
    segments: Vec<Segment>,
    wildcard: bool,
}

impl PathPattern {
    /// Parse a route path.
    pub fn parse(path: &str) -> Result<Self, PatternError> {
        if path == WILDCARD {
            return Ok(Self {
                segments: Vec::new(),
                wildcard: true,
            });
        }

        let mut segments = Vec::new();
        for raw in path.split('/').filter(|s| !s.is_empty()) {
            if raw.contains('*') {
                return Err(PatternError::MisplacedWildcard);
            }

            match raw.strip_prefix(':') {
                Some(name) => {
                    if !is_identifier(name) {
                        return Err(PatternError::InvalidParamName {
                            segment: raw.to_string(),
                        });
                    }
                    if segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name))
                    {
                        return Err(PatternError::DuplicateParam {
                            name: name.to_string(),
                        });
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Static(raw.to_string())),
            }
        }

        Ok(Self {
            segments,
            wildcard: false,
        })
    }

    /// Returns true for the catch-all pattern.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Returns true if the pattern consumes no segments (index or root).
    pub fn is_empty(&self) -> bool {
        !self.wildcard && self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameters this pattern binds, in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match this pattern against the front of `segments`.
    ///
    /// On success returns how many segments were consumed and appends the
    /// captured parameters to `params`. On failure `params` is left as it was.
    pub fn match_prefix<'p>(
        &'p self,
        segments: &[&str],
        params: &mut Vec<(&'p str, String)>,
    ) -> Option<usize> {
        if self.wildcard {
            params.push((PATH_MATCH_PARAM, format!("/{}", segments.join("/"))));
            return Some(segments.len());
        }

        if segments.len() < self.segments.len() {
            return None;
        }

        let mark = params.len();
        for (pattern, actual) in self.segments.iter().zip(segments) {
            match pattern {
                Segment::Static(expected) => {
                    if !expected.eq_ignore_ascii_case(actual) {
                        params.truncate(mark);
                        return None;
                    }
                }
                Segment::Param(name) => params.push((name.as_str(), decode_param(actual))),
            }
        }

        Some(self.segments.len())
    }
}

/// Split a request path into its non-empty segments.
///
/// Anything after `?` or `#` is dropped.
pub fn split_path(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

/// Percent-decode a captured parameter value.
///
/// `+` is left alone: it only means a space in query strings.
pub fn decode_param(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
