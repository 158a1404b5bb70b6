use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::codec::{self, FormatError};
use crate::query::Query;

/// Address carried by every NotFound answer.
pub const NOT_FOUND_ADDRESS: &str = "0.0.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseFlag {
    Authoritative,
    Referral,
    RecursiveAnswer,
    NotFound,
}

impl ResponseFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFlag::Authoritative => "aa",
            ResponseFlag::Referral => "ns",
            ResponseFlag::RecursiveAnswer => "ra",
            ResponseFlag::NotFound => "nx",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "aa" => Some(ResponseFlag::Authoritative),
            "ns" => Some(ResponseFlag::Referral),
            "ra" => Some(ResponseFlag::RecursiveAnswer),
            "nx" => Some(ResponseFlag::NotFound),
            _ => None,
        }
    }
}

impl fmt::Display for ResponseFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Domain as spelled by the answering authority.
    pub domain: Arc<str>,
    /// An address, or a TLD server endpoint for referrals.
    pub target: Arc<str>,
    pub id: u64,
    pub flag: ResponseFlag,
}

impl Response {
    pub fn new(
        domain: impl Into<Arc<str>>,
        target: impl Into<Arc<str>>,
        id: u64,
        flag: ResponseFlag,
    ) -> Self {
        Self {
            domain: domain.into(),
            target: target.into(),
            id,
            flag,
        }
    }

    /// NotFound answer for `query`, echoing the queried spelling and id.
    pub fn not_found(query: &Query) -> Self {
        Self {
            domain: Arc::clone(&query.domain),
            target: NOT_FOUND_ADDRESS.into(),
            id: query.id,
            flag: ResponseFlag::NotFound,
        }
    }

    pub fn authoritative(
        query: &Query,
        domain: impl Into<Arc<str>>,
        address: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            domain: domain.into(),
            target: address.into(),
            id: query.id,
            flag: ResponseFlag::Authoritative,
        }
    }

    pub fn referral(query: &Query, server: impl Into<Arc<str>>) -> Self {
        Self {
            domain: Arc::clone(&query.domain),
            target: server.into(),
            id: query.id,
            flag: ResponseFlag::Referral,
        }
    }

    pub fn is_referral(&self) -> bool {
        self.flag == ResponseFlag::Referral
    }

    /// Relabels an authoritative answer as obtained through recursion.
    pub fn into_recursive_answer(mut self) -> Self {
        if self.flag == ResponseFlag::Authoritative {
            self.flag = ResponseFlag::RecursiveAnswer;
        }
        self
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            codec::RESPONSE_MARKER,
            self.domain,
            self.target,
            self.id,
            self.flag
        )
    }
}

impl FromStr for Response {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode_response(s)
    }
}
