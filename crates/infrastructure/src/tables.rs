//! Loaders for the whitespace-separated text tables each role starts from.
//!
//! Root database: the first `delegation_lines` non-empty lines are
//! `tld endpoint` delegations, every later line a `domain address` pair.
//! TLD database: `domain address` pairs. Client hostnames: `domain mode`
//! pairs with mode `it` or `rd`.

use rudns_domain::{
    AddressTable, ConfigError, Endpoint, QueryMode, QueryPlan, TldDelegation, TldMapping,
};
use std::path::Path;
use tracing::{info, warn};

fn read_table(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path)
        .map_err(|e| ConfigError::FileRead(path.display().to_string(), e.to_string()))
}

/// Non-empty lines with their 1-based line numbers, split into tokens.
fn table_lines(contents: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| !tokens.is_empty())
}

fn insert_pair(table: &mut AddressTable, source: &str, line: usize, tokens: &[&str]) {
    if tokens.len() != 2 {
        warn!(source, line, "Skipping line without exactly two tokens");
        return;
    }
    if let Some(previous) = table.insert(tokens[0], tokens[1]) {
        warn!(
            source,
            line,
            domain = tokens[0],
            replaced = %previous.address,
            "Duplicate domain, keeping the later entry"
        );
    }
}

pub fn parse_root_database(
    source: &str,
    contents: &str,
    delegation_lines: usize,
) -> Result<(TldMapping, AddressTable), ConfigError> {
    let mut delegations = TldMapping::new();
    let mut direct = AddressTable::new();

    for (line, tokens) in table_lines(contents) {
        if delegations.len() < delegation_lines {
            if tokens.len() != 2 {
                return Err(ConfigError::Table {
                    path: source.to_string(),
                    line,
                    reason: "delegation lines must have exactly 2 tokens".to_string(),
                });
            }
            let endpoint: Endpoint = tokens[1].parse().map_err(|reason| ConfigError::Table {
                path: source.to_string(),
                line,
                reason,
            })?;
            delegations.push(TldDelegation::new(tokens[0], endpoint));
        } else {
            insert_pair(&mut direct, source, line, &tokens);
        }
    }

    if delegations.len() < delegation_lines {
        return Err(ConfigError::Table {
            path: source.to_string(),
            line: contents.lines().count(),
            reason: format!(
                "expected {} delegation lines, found {}",
                delegation_lines,
                delegations.len()
            ),
        });
    }

    Ok((delegations, direct))
}

pub fn parse_address_table(source: &str, contents: &str) -> AddressTable {
    let mut table = AddressTable::new();
    for (line, tokens) in table_lines(contents) {
        insert_pair(&mut table, source, line, &tokens);
    }
    table
}

pub fn parse_query_plans(source: &str, contents: &str) -> Vec<QueryPlan> {
    let mut plans = Vec::new();
    for (line, tokens) in table_lines(contents) {
        if tokens.len() != 2 {
            warn!(source, line, "Invalid line format");
            continue;
        }
        match QueryMode::from_token(tokens[1]) {
            Some(mode) => plans.push(QueryPlan::new(tokens[0], mode)),
            None => warn!(source, line, mode = tokens[1], "Unknown query mode"),
        }
    }
    plans
}

pub fn load_root_database(
    path: impl AsRef<Path>,
    delegation_lines: usize,
) -> Result<(TldMapping, AddressTable), ConfigError> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let (delegations, direct) =
        parse_root_database(&source, &read_table(path)?, delegation_lines)?;

    for delegation in delegations.iter() {
        info!(tld = %delegation.tld, server = %delegation.endpoint, "TLD delegation loaded");
    }
    info!(path = %source, direct = direct.len(), "Root database loaded");

    Ok((delegations, direct))
}

pub fn load_address_table(path: impl AsRef<Path>) -> Result<AddressTable, ConfigError> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let table = parse_address_table(&source, &read_table(path)?);
    info!(path = %source, entries = table.len(), "Address table loaded");
    Ok(table)
}

pub fn load_query_plans(path: impl AsRef<Path>) -> Result<Vec<QueryPlan>, ConfigError> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let contents = read_table(path)?;
    let plans = parse_query_plans(&source, &contents);
    if plans.is_empty() {
        return Err(ConfigError::Table {
            path: source,
            line: contents.lines().count(),
            reason: "no queries found".to_string(),
        });
    }
    info!(path = %source, queries = plans.len(), "Query list loaded");
    Ok(plans)
}
