//! Text wire format.
//!
//! Queries are `0 <domain> <id> <mode>`, responses are
//! `1 <domain> <target> <id> <flag>`. Tokens are separated by ASCII
//! whitespace and a message carries no trailing terminator.

use crate::query::{Query, QueryMode};
use crate::response::{Response, ResponseFlag};
use thiserror::Error;

pub const QUERY_MARKER: &str = "0";
pub const RESPONSE_MARKER: &str = "1";

const QUERY_TOKENS: usize = 4;
const RESPONSE_TOKENS: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected {expected} tokens, found {found}")]
    TokenCount { expected: usize, found: usize },

    #[error("expected version marker '{expected}', found '{found}'")]
    VersionMarker {
        expected: &'static str,
        found: String,
    },

    #[error("unknown mode token '{0}'")]
    UnknownMode(String),

    #[error("unknown flag token '{0}'")]
    UnknownFlag(String),

    #[error("invalid id '{0}'")]
    InvalidId(String),

    #[error("message is not valid UTF-8")]
    NotUtf8,
}

fn tokenize<'a>(
    text: &'a str,
    expected: usize,
    marker: &'static str,
) -> Result<Vec<&'a str>, FormatError> {
    let tokens: Vec<&str> = text.split_ascii_whitespace().collect();
    if tokens.len() != expected {
        return Err(FormatError::TokenCount {
            expected,
            found: tokens.len(),
        });
    }
    if tokens[0] != marker {
        return Err(FormatError::VersionMarker {
            expected: marker,
            found: tokens[0].to_string(),
        });
    }
    Ok(tokens)
}

/// Only canonical decimal spellings are accepted, so an id always
/// re-encodes to the exact token it was read from.
fn parse_id(token: &str) -> Result<u64, FormatError> {
    let canonical = !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'));
    if !canonical {
        return Err(FormatError::InvalidId(token.to_string()));
    }
    token
        .parse::<u64>()
        .map_err(|_| FormatError::InvalidId(token.to_string()))
}

pub fn decode_query(text: &str) -> Result<Query, FormatError> {
    let tokens = tokenize(text, QUERY_TOKENS, QUERY_MARKER)?;
    let id = parse_id(tokens[2])?;
    let mode = QueryMode::from_token(tokens[3])
        .ok_or_else(|| FormatError::UnknownMode(tokens[3].to_string()))?;
    Ok(Query::new(tokens[1], id, mode))
}

pub fn decode_response(text: &str) -> Result<Response, FormatError> {
    let tokens = tokenize(text, RESPONSE_TOKENS, RESPONSE_MARKER)?;
    let id = parse_id(tokens[3])?;
    let flag = ResponseFlag::from_token(tokens[4])
        .ok_or_else(|| FormatError::UnknownFlag(tokens[4].to_string()))?;
    Ok(Response::new(tokens[1], tokens[2], id, flag))
}

/// Decodes raw bytes as read off the socket.
pub fn decode_query_bytes(bytes: &[u8]) -> Result<Query, FormatError> {
    let text = std::str::from_utf8(bytes).map_err(|_| FormatError::NotUtf8)?;
    decode_query(text)
}

pub fn decode_response_bytes(bytes: &[u8]) -> Result<Response, FormatError> {
    let text = std::str::from_utf8(bytes).map_err(|_| FormatError::NotUtf8)?;
    decode_response(text)
}

pub fn encode_query(query: &Query) -> String {
    query.to_string()
}

pub fn encode_response(response: &Response) -> String {
    response.to_string()
}
