//! # Mock Store & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of scripted expectations instead of a running actor. Use it to test code *around*
//! the store (clients, HTTP handlers) deterministically, and to inject failures that a real
//! actor will not produce on demand.
//!
//! | | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None (scripted replies) | Real records |
//! | **Use Case** | Logic around the client, failure paths | The store itself, end-to-end flows |
//! | **Error Injection** | `return_err` | Only not-found and validation |
//!
//! ```rust
//! use actor_store::mock::MockClient;
//! use actor_store::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//! use std::cmp::Ordering;
//!
//! #[derive(Clone, Debug)] struct Note { id: u32 }
//! #[derive(Debug)] struct NoteCreate;
//! #[derive(Debug)] struct NoteUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32; type Create = NoteCreate; type Update = NoteUpdate;
//!     type Filter = (); type Error = NoteError;
//!     fn from_create_params(id: u32, _: NoteCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: NoteUpdate) -> Result<(), Self::Error> { Ok(()) }
//!     fn matches(&self, _: &()) -> bool { true }
//!     fn cmp_order(&self, other: &Self) -> Ordering { self.id.cmp(&other.id) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     let client = mock.client();
//!
//!     // Simulate a store outage
//!     mock.expect_delete(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.delete(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For asserting on the request payloads themselves, use [`create_mock_client`] with the
//! `expect_*` helper functions and answer each request by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use crate::query::PageRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply, in the order the requests are expected to arrive.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Count {
        response: Result<usize, FrameworkError>,
    },
    FindMany {
        response: Result<Vec<T>, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store with expectation tracking.
///
/// Requests that do not match the next expectation (wrong operation or wrong ID) are
/// recorded and left unanswered, so the caller sees `FrameworkError::ActorDropped` and
/// [`MockClient::verify`] reports the mismatch.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let failures = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                answer(request, expectation, &failures);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_count(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(|response| Expectation::Count { response })
    }

    pub fn expect_find_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::FindMany { response })
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Panics unless every expectation was consumed by a matching request.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {}", mismatches.join("; "));
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Replies to `request` from `expectation`, or records why they do not match.
///
/// A mismatch is recorded before the request's reply channel is dropped, so a caller that
/// sees `ActorDropped` can rely on `verify()` reporting it.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
    mismatches: &Mutex<Vec<String>>,
) {
    match (request, expectation) {
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            reply(respond_to, response, Ok(()), mismatches);
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            reply(respond_to, response, check_id(&id, &want), mismatches);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => {
            reply(respond_to, response, check_id(&id, &want), mismatches);
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) => {
            reply(respond_to, response, check_id(&id, &want), mismatches);
        }
        (ResourceRequest::Count { respond_to, .. }, Some(Expectation::Count { response })) => {
            reply(respond_to, response, Ok(()), mismatches);
        }
        (ResourceRequest::FindMany { respond_to, .. }, Some(Expectation::FindMany { response })) => {
            reply(respond_to, response, Ok(()), mismatches);
        }
        (request, Some(_)) => {
            mismatches.lock().unwrap().push(format!(
                "{} did not match the next expectation",
                request.operation()
            ));
            drop(request);
        }
        (request, None) => {
            mismatches.lock().unwrap().push(format!(
                "{} arrived with no expectation left",
                request.operation()
            ));
            drop(request);
        }
    }
}

fn reply<R>(
    respond_to: Response<R>,
    response: Result<R, FrameworkError>,
    check: Result<(), String>,
    mismatches: &Mutex<Vec<String>>,
) {
    match check {
        Ok(()) => {
            let _ = respond_to.send(response);
        }
        Err(mismatch) => {
            mismatches.lock().unwrap().push(mismatch);
            drop(respond_to);
        }
    }
}

fn check_id<Id: PartialEq + std::fmt::Debug>(got: &Id, want: &Id) -> Result<(), String> {
    if got == want {
        Ok(())
    } else {
        Err(format!("expected id {:?}, got {:?}", want, got))
    }
}

/// Builder returned by the `MockClient::expect_*` methods.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client and the receiving end of its channel.
///
/// Use this when a test needs to inspect what was sent (filters, pages, payloads) rather
/// than only script the reply.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Count request
pub async fn expect_count<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, oneshot::Sender<Result<usize, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Count { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindMany request
pub async fn expect_find_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Filter,
    PageRequest,
    oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::FindMany {
            filter,
            page,
            respond_to,
        }) => Some((filter, page, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cmp::Ordering;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct TagCreate {
        label: String,
    }

    #[derive(Debug)]
    struct TagUpdate;

    #[derive(Debug, thiserror::Error)]
    #[error("Tag error")]
    struct TagError;

    #[async_trait]
    impl ActorEntity for Tag {
        type Id = u32;
        type Create = TagCreate;
        type Update = TagUpdate;
        type Filter = Option<String>;
        type Error = TagError;

        fn from_create_params(id: u32, params: TagCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _update: TagUpdate) -> Result<(), Self::Error> {
            Ok(())
        }

        fn matches(&self, filter: &Option<String>) -> bool {
            filter.as_ref().map_or(true, |label| &self.label == label)
        }

        fn cmp_order(&self, other: &Self) -> Ordering {
            self.label.cmp(&other.label)
        }
    }

    fn tag(id: u32, label: &str) -> Tag {
        Tag {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_manual_mock_sees_request_payloads() {
        let (client, mut receiver) = create_mock_client::<Tag>(10);

        let list_task = tokio::spawn(async move {
            client
                .find_many(Some("blue".to_string()), PageRequest::new(5, 5))
                .await
        });

        let (filter, page, responder) = expect_find_many(&mut receiver)
            .await
            .expect("Expected FindMany request");
        assert_eq!(filter.as_deref(), Some("blue"));
        assert_eq!(page, PageRequest::new(5, 5));
        responder.send(Ok(vec![tag(6, "blue")])).unwrap();

        let found = list_task.await.unwrap().unwrap();
        assert_eq!(found, vec![tag(6, "blue")]);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_create().return_ok(tag(1, "red"));
        mock.expect_count().return_ok(1);
        mock.expect_delete(1).return_ok(());
        mock.expect_delete(1)
            .return_err(FrameworkError::NotFound("1".to_string()));

        let client = mock.client();
        let created = client
            .create(TagCreate {
                label: "red".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(client.count(None).await.unwrap(), 1);
        client.delete(1).await.unwrap();
        let second = client.delete(1).await;
        assert!(matches!(second, Err(FrameworkError::NotFound(_))));

        mock.verify();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_mismatch_is_recorded_before_caller_sees_it() {
        for _ in 0..50 {
            let mut mock = MockClient::<Tag>::new();
            mock.expect_count().return_ok(0);

            let result = mock.client().delete(3).await;
            assert!(matches!(result, Err(FrameworkError::ActorDropped)));

            let verified =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
            assert!(verified.is_err());
        }
    }

    #[tokio::test]
    async fn test_mock_client_wrong_id_is_reported() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_get(1).return_ok(Some(tag(1, "red")));

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verified = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verified.is_err());
    }
}
