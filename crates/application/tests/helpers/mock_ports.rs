#![allow(dead_code)]

use async_trait::async_trait;
use rudns_application::ports::{QueryTransport, ResponseLog};
use rudns_domain::{DomainError, Query, Response, ResponseFlag};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum Scripted {
    /// Answer echoing the query id.
    Answer {
        domain: String,
        target: String,
        flag: ResponseFlag,
    },
    /// Returned verbatim.
    Raw(Response),
}

#[derive(Clone, Default)]
pub struct MockQueryTransport {
    answers: Arc<Mutex<HashMap<(String, u16, String), Scripted>>>,
    failures: Arc<Mutex<HashMap<(String, u16), DomainError>>>,
    calls: Arc<Mutex<Vec<(String, u16, Query)>>>,
}

impl MockQueryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(
        &self,
        host: &str,
        port: u16,
        domain: &str,
        target: &str,
        flag: ResponseFlag,
    ) {
        self.answers.lock().unwrap().insert(
            (host.to_string(), port, domain.to_ascii_lowercase()),
            Scripted::Answer {
                domain: domain.to_string(),
                target: target.to_string(),
                flag,
            },
        );
    }

    pub fn set_raw_answer(&self, host: &str, port: u16, domain: &str, response: Response) {
        self.answers.lock().unwrap().insert(
            (host.to_string(), port, domain.to_ascii_lowercase()),
            Scripted::Raw(response),
        );
    }

    pub fn set_failure(&self, host: &str, port: u16, error: DomainError) {
        self.failures
            .lock()
            .unwrap()
            .insert((host.to_string(), port), error);
    }

    pub fn calls(&self) -> Vec<(String, u16, Query)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl QueryTransport for MockQueryTransport {
    async fn exchange(
        &self,
        host: &str,
        port: u16,
        query: &Query,
    ) -> Result<Response, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((host.to_string(), port, query.clone()));

        if let Some(err) = self
            .failures
            .lock()
            .unwrap()
            .get(&(host.to_string(), port))
            .cloned()
        {
            return Err(err);
        }

        let key = (host.to_string(), port, query.domain.to_ascii_lowercase());
        match self.answers.lock().unwrap().get(&key).cloned() {
            Some(Scripted::Answer {
                domain,
                target,
                flag,
            }) => Ok(Response::new(domain, target, query.id, flag)),
            Some(Scripted::Raw(response)) => Ok(response),
            None => Err(DomainError::TransportConnectionRefused {
                server: format!("{}:{}", host, port),
            }),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockResponseLog {
    entries: Arc<Mutex<Vec<Response>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockResponseLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let log = Self::default();
        *log.should_fail.lock().unwrap() = true;
        log
    }

    pub fn entries(&self) -> Vec<Response> {
        self.entries.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries().iter().map(|r| r.to_string()).collect()
    }
}

#[async_trait]
impl ResponseLog for MockResponseLog {
    async fn append(&self, response: &Response) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::ResponseLog("disk full".to_string()));
        }
        self.entries.lock().unwrap().push(response.clone());
        Ok(())
    }
}
