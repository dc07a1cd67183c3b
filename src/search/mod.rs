//! Wire types and transport for talking to the remote search service.
//!
//! A search is a single `POST` of [`SearchRequest`] to the configured endpoint.
//! The response body is trusted as-is and kept verbatim in a [`ResultList`];
//! the renderer only ever reads the `title` and `url` fields of each entry.

mod backend;
mod error;
mod request;
mod results;
mod worker;

pub use backend::{HttpBackend, SearchBackend};
pub use error::SearchError;
pub use request::{DEFAULT_ENDPOINT, SearchRequest};
pub use results::{ResultItem, ResultLink, ResultList};
pub(crate) use worker::{SearchResponse, spawn_search};
