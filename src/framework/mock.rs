//! # Mock Framework & Testing Guide
//!
//! Utilities for testing code that talks to a session actor without running the real entity.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mock | Real Actor |
//! |---------|------|------------|
//! | **Determinism** | Scripted replies | Real state machine |
//! | **Error Injection** | Easy (`return_err`) | Needs the right state |
//! | **Use Case** | Logic *around* a client | The session itself, or the whole system |
//!
//! ## Two styles
//!
//! **Manual**: [`create_mock_client`] hands you the client plus the raw receiver. Pull each
//! request off with [`expect_command`], assert on it and answer through the responder.
//!
//! **Fluent**: [`MockClient`] answers requests from a queue of scripted expectations and
//! records anything that did not match, which [`MockClient::verify`] then reports.
//!
//! ```rust
//! use rider_tracker::framework::mock::MockClient;
//! use rider_tracker::framework::{FrameworkError, SessionEntity};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)] struct Lamp;
//! #[derive(Debug, PartialEq)] enum Switch { On, Off }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct LampError;
//!
//! #[async_trait]
//! impl SessionEntity for Lamp {
//!     type Command = Switch; type Reply = bool; type Context = (); type Error = LampError;
//!     async fn handle(&mut self, cmd: Switch, _: &()) -> Result<bool, LampError> {
//!         Ok(cmd == Switch::On)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Lamp>::new();
//!     mock.expect(|cmd| *cmd == Switch::On).return_ok(true);
//!     mock.expect_any().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.send(Switch::On).await.unwrap());
//!     assert!(matches!(client.send(Switch::Off).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```

use crate::framework::{FrameworkError, Response, SessionClient, SessionEntity, SessionRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

type Matcher<T> = Box<dyn Fn(&<T as SessionEntity>::Command) -> bool + Send>;

/// One scripted request: which commands it accepts and what it answers.
struct Expectation<T: SessionEntity> {
    matcher: Matcher<T>,
    response: Result<T::Reply, FrameworkError>,
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in the order they were registered. A request
/// that finds no expectation, or fails the next expectation's matcher, gets no reply (the
/// caller sees [`FrameworkError::ActorDropped`]) and is recorded for [`MockClient::verify`].
pub struct MockClient<T: SessionEntity> {
    client: SessionClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: SessionEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SessionEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SessionRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let misses = mismatches.clone();
        let handle = tokio::spawn(async move {
            while let Some(SessionRequest {
                command,
                respond_to,
            }) = receiver.recv().await
            {
                let expectation = queue.lock().unwrap().pop_front();
                match expectation {
                    Some(expectation) if (expectation.matcher)(&command) => {
                        let _ = respond_to.send(expectation.response);
                    }
                    Some(_) => misses
                        .lock()
                        .unwrap()
                        .push(format!("unexpected command {command:?}")),
                    None => misses
                        .lock()
                        .unwrap()
                        .push(format!("no expectation left for {command:?}")),
                }
            }
        });

        Self {
            client: SessionClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> SessionClient<T> {
        self.client.clone()
    }

    /// Expects a command accepted by `matcher`.
    pub fn expect(
        &mut self,
        matcher: impl Fn(&T::Command) -> bool + Send + 'static,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            matcher: Box::new(matcher),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects any command.
    pub fn expect_any(&mut self) -> ExpectationBuilder<T> {
        self.expect(|_| true)
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let misses = self.mismatches.lock().unwrap();
        if !misses.is_empty() {
            panic!("Mock received unexpected requests: {misses:?}");
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<T: SessionEntity> {
    matcher: Matcher<T>,
    expectations: Queue<T>,
}

impl<T: SessionEntity> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful reply.
    pub fn return_ok(self, reply: T::Reply) {
        self.push(Ok(reply));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Reply, FrameworkError>) {
        self.expectations.lock().unwrap().push_back(Expectation {
            matcher: self.matcher,
            response,
        });
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it pulls requests off `receiver` (see [`expect_command`]) and
/// answers them however the scenario needs, including never answering at all.
pub fn create_mock_client<T: SessionEntity>(
    buffer_size: usize,
) -> (SessionClient<T>, mpsc::Receiver<SessionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Waits for the next request and splits it into the command and its responder.
pub async fn expect_command<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Command, Response<T::Reply>)> {
    receiver
        .recv()
        .await
        .map(|request| (request.command, request.respond_to))
}
