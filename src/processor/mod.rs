//! Typed client for the Monetra REST API.

pub mod client;
pub mod types;

pub use client::{ProcessorClient, ProcessorError};
