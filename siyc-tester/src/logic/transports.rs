//! Stand-in backends for the registration client.

use async_trait::async_trait;
use siyc_core::{
    ApiConfig, RegistrationClient, RegistrationDesk, RegistrationTransport, TransportFailure,
    TransportRequest, TransportResponse,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

pub const SCRIPTED_BASE_URL: &str = "http://scripted.siyc.test/api";

type Reply = Result<TransportResponse, TransportFailure>;

/// Answers each request with the next queued reply and keeps every request it saw.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<TransportRequest>>,
    latency: Duration,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(TransportResponse::new(status, body)));
        self
    }

    #[must_use]
    pub fn fail(self, failure: TransportFailure) -> Self {
        self.replies.borrow_mut().push_back(Err(failure));
        self
    }

    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl RegistrationTransport for ScriptedTransport {
    async fn post_json(&self, request: &TransportRequest) -> Reply {
        self.requests.borrow_mut().push(request.clone());
        let reply = self.replies.borrow_mut().pop_front();
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        reply.unwrap_or_else(|| {
            Err(TransportFailure::Unreachable(
                "no scripted reply left".to_string(),
            ))
        })
    }
}

/// A backend that accepts the connection and never answers.
#[derive(Debug, Default, Clone, Copy)]
pub struct StalledTransport;

#[async_trait(?Send)]
impl RegistrationTransport for StalledTransport {
    async fn post_json(&self, _request: &TransportRequest) -> Reply {
        tokio::time::sleep(Duration::from_secs(24 * 60 * 60)).await;
        Err(TransportFailure::Unreachable("stalled backend gave up".to_string()))
    }
}

pub fn scripted_config(timeout_ms: u64) -> ApiConfig {
    ApiConfig {
        base_url: SCRIPTED_BASE_URL.to_string(),
        timeout_ms,
        debug: false,
    }
}

pub fn desk<T: RegistrationTransport>(transport: T, timeout_ms: u64) -> RegistrationDesk<T> {
    RegistrationDesk::new(RegistrationClient::new(
        scripted_config(timeout_ms),
        transport,
    ))
}
