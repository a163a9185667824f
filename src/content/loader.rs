use std::{
    cell::RefCell,
    collections::HashMap,
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use http::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("couldn't parse document: {0}")]
    Parse(String),
}

pub type LoadResult<T> = Result<Arc<T>, LoadError>;

/// What a fetch hands back before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub fn decode_document<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, LoadError> {
    let success = StatusCode::from_u16(status)
        .map(|s| s.is_success())
        .unwrap_or(false);
    if !success {
        return Err(LoadError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))
}

pub type SharedLoad<T> = Shared<LocalBoxFuture<'static, LoadResult<T>>>;

/// One load per document path. The first caller starts the fetch, everyone
/// after that awaits the same in-flight or settled result. Failures are
/// cached as well: nothing is ever retried.
pub struct ContentCache<T> {
    entries: RefCell<HashMap<String, SharedLoad<T>>>,
}

impl<T> Default for ContentCache<T> {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }
}

impl<T: DeserializeOwned + 'static> ContentCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<F, Fut>(&self, url: &str, fetch: F) -> SharedLoad<T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<RawResponse, LoadError>> + 'static,
    {
        if let Some(existing) = self.entries.borrow().get(url) {
            return existing.clone();
        }

        let path = url.to_string();
        let response = fetch(path.clone());
        let load = async move {
            let result = response
                .await
                .and_then(|res| decode_document::<T>(res.status, &res.body))
                .map(Arc::new);
            if let Err(err) = &result {
                log::error!("Error loading {path}: {err}");
            }
            result
        }
        .boxed_local()
        .shared();

        self.entries
            .borrow_mut()
            .insert(url.to_string(), load.clone());
        load
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.borrow().contains_key(url)
    }
}

/// Set when a section starts loading, cancelled when the section goes away.
/// A result only reaches the section while the token is live.
#[derive(Debug, Clone)]
pub struct LoadToken(Arc<AtomicBool>);

impl Default for LoadToken {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl LoadToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Hands `value` to `sink` if the token is still live. Returns whether it did.
    pub fn publish<V>(&self, value: V, sink: impl FnOnce(V)) -> bool {
        if self.is_live() {
            sink(value);
            true
        } else {
            false
        }
    }
}

/// Lifecycle of one section's data: it starts loading and settles exactly once.
#[derive(Debug)]
pub enum SectionState<T> {
    Loading,
    Loaded(Arc<T>),
    Empty,
}

impl<T> Clone for SectionState<T> {
    fn clone(&self) -> Self {
        match self {
            SectionState::Loading => SectionState::Loading,
            SectionState::Loaded(data) => SectionState::Loaded(Arc::clone(data)),
            SectionState::Empty => SectionState::Empty,
        }
    }
}

impl<T> From<LoadResult<T>> for SectionState<T> {
    fn from(result: LoadResult<T>) -> Self {
        match result {
            Ok(data) => SectionState::Loaded(data),
            Err(_) => SectionState::Empty,
        }
    }
}

impl<T> SectionState<T> {
    pub fn loaded(&self) -> Option<Arc<T>> {
        match self {
            SectionState::Loaded(data) => Some(Arc::clone(data)),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SectionState::Loading)
    }
}
