//! Progress reporting for debate rounds

pub mod reporter;
