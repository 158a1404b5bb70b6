use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::codec::{self, FormatError};

/// Resolution strategy selected by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryMode {
    /// The client follows referrals itself.
    Iterative,
    /// The root server performs the extra hop on the client's behalf.
    Recursive,
}

impl QueryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::Iterative => "it",
            QueryMode::Recursive => "rd",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "it" => Some(QueryMode::Iterative),
            "rd" => Some(QueryMode::Recursive),
            _ => None,
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub domain: Arc<str>,
    pub id: u64,
    pub mode: QueryMode,
}

impl Query {
    pub fn new(domain: impl Into<Arc<str>>, id: u64, mode: QueryMode) -> Self {
        Self {
            domain: domain.into(),
            id,
            mode,
        }
    }

    pub fn iterative(domain: impl Into<Arc<str>>, id: u64) -> Self {
        Self::new(domain, id, QueryMode::Iterative)
    }

    pub fn recursive(domain: impl Into<Arc<str>>, id: u64) -> Self {
        Self::new(domain, id, QueryMode::Recursive)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            codec::QUERY_MARKER,
            self.domain,
            self.id,
            self.mode
        )
    }
}

impl FromStr for Query {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode_query(s)
    }
}
