//! Topic background context.
//!
//! A pure lookup: known topics return curated background text, anything
//! else gets a templated overview that embeds the topic.

pub mod topics;

pub use topics::{predefined_topics, topic_context};
