//! Page-view reporting for single-page apps.
//!
//! A [`PageView`] is produced once per completed navigation and handed to an
//! [`AnalyticsSink`]. Sinks own their transport; callers never retry.

use std::cell::RefCell;

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
mod gtag;

#[cfg(target_arch = "wasm32")]
pub use gtag::GtagSink;

/// Reasons a sink could not accept an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("analytics sink unavailable: {0}")]
    Unavailable(String),
    #[error("analytics sink rejected event: {0}")]
    Rejected(String),
}

/// Something that accepts named events with string attributes.
pub trait AnalyticsSink {
    fn log_event(&self, name: &str, params: &[(&str, &str)]) -> Result<(), SinkError>;
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for std::rc::Rc<S> {
    fn log_event(&self, name: &str, params: &[(&str, &str)]) -> Result<(), SinkError> {
        (**self).log_event(name, params)
    }
}

/// A single completed navigation, as reported to analytics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub page_path: String,
    pub page_title: String,
}

impl PageView {
    pub const EVENT_NAME: &'static str = "page_view";

    pub fn new(page_path: impl Into<String>, page_title: impl Into<String>) -> Self {
        Self {
            page_path: page_path.into(),
            page_title: page_title.into(),
        }
    }

    pub fn params(&self) -> [(&'static str, &str); 2] {
        [
            ("page_path", self.page_path.as_str()),
            ("page_title", self.page_title.as_str()),
        ]
    }

    /// Sends this page view to `sink` under [`Self::EVENT_NAME`].
    pub fn emit<S: AnalyticsSink + ?Sized>(&self, sink: &S) -> Result<(), SinkError> {
        sink.log_event(Self::EVENT_NAME, &self.params())
    }
}

/// An event captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub name: String,
    pub params: Vec<(String, String)>,
}

impl RecordedEvent {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Keeps every event in memory, in arrival order.
///
/// Used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: RefCell<Vec<RecordedEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl AnalyticsSink for MemorySink {
    fn log_event(&self, name: &str, params: &[(&str, &str)]) -> Result<(), SinkError> {
        log::trace!("recording event {name}");
        self.events.borrow_mut().push(RecordedEvent {
            name: name.to_owned(),
            params: params
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        });
        Ok(())
    }
}
