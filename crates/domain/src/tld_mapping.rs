use crate::endpoint::Endpoint;
use std::sync::Arc;

/// One `tld -> TLD server` delegation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldDelegation {
    pub tld: Arc<str>,
    pub endpoint: Endpoint,
}

impl TldDelegation {
    pub fn new(tld: &str, endpoint: Endpoint) -> Self {
        Self {
            tld: tld.to_ascii_lowercase().into(),
            endpoint,
        }
    }

    /// A domain is under a TLD when it equals it or ends with `.` + TLD.
    pub fn covers(&self, domain: &str) -> bool {
        is_under_tld(domain, &self.tld)
    }
}

pub fn is_under_tld(domain: &str, tld: &str) -> bool {
    let (domain_len, tld_len) = (domain.len(), tld.len());
    if domain_len == tld_len {
        return domain.eq_ignore_ascii_case(tld);
    }
    if domain_len <= tld_len {
        return false;
    }
    let split = domain_len - tld_len;
    domain.is_char_boundary(split)
        && domain.as_bytes()[split - 1] == b'.'
        && domain[split..].eq_ignore_ascii_case(tld)
}

/// Delegations in registration order. The first covering entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TldMapping {
    delegations: Vec<TldDelegation>,
}

impl TldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delegation: TldDelegation) {
        self.delegations.push(delegation);
    }

    pub fn find(&self, domain: &str) -> Option<&TldDelegation> {
        self.delegations.iter().find(|d| d.covers(domain))
    }

    pub fn len(&self) -> usize {
        self.delegations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TldDelegation> {
        self.delegations.iter()
    }
}

impl FromIterator<TldDelegation> for TldMapping {
    fn from_iter<I: IntoIterator<Item = TldDelegation>>(iter: I) -> Self {
        Self {
            delegations: iter.into_iter().collect(),
        }
    }
}
