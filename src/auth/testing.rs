// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-process stand-in for the auth service, for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::client::{AuthClientError, TokenValidator, Validation};

pub(crate) enum Answer {
    Verdict(Validation),
    Timeout,
    Malformed,
    Panic,
}

pub(crate) struct FakeAuthority {
    answer: Answer,
    calls: AtomicUsize,
    seen_tokens: Mutex<Vec<String>>,
}

impl FakeAuthority {
    pub(crate) fn new(answer: Answer) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
            seen_tokens: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn accepting(email: &str) -> Arc<Self> {
        Self::new(Answer::Verdict(Validation {
            valid: true,
            email: Some(email.to_string()),
        }))
    }

    pub(crate) fn rejecting() -> Arc<Self> {
        Self::new(Answer::Verdict(Validation::rejected()))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn seen_tokens(&self) -> Vec<String> {
        self.seen_tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenValidator for FakeAuthority {
    async fn validate(&self, token: &str) -> Result<Validation, AuthClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_tokens.lock().unwrap().push(token.to_string());
        match &self.answer {
            Answer::Verdict(v) => Ok(v.clone()),
            Answer::Timeout => Err(AuthClientError::Timeout(Duration::from_secs(5))),
            Answer::Malformed => Err(AuthClientError::MalformedResponse("eof".into())),
            Answer::Panic => panic!("validator blew up"),
        }
    }
}
