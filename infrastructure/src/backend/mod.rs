//! HTTP adapter for the debate backend.
//!
//! [`HttpTransport`] implements the [`Transport`](debate_application::Transport)
//! port with `reqwest`; [`protocol`] holds the wire types.

pub mod http_transport;
pub mod protocol;

pub use http_transport::HttpTransport;
