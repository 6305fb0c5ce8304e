#![deny(missing_docs)]

//! Core building blocks for REST clients.
//!
//! This library provides two pieces: a one-method factory seam for obtaining
//! configured HTTP clients, and a multipart request model with a builder for
//! assembling serialized and binary parts before handing them to a transport.
//! Wire encoding, serialization and sending are left to that transport.

pub mod error;
pub mod factory;
pub mod models;
pub mod source;

pub use error::RestClientError;
pub use factory::{ClientConfig, DefaultHttpClientFactory, HttpClientFactory};
pub use models::{BinaryPart, MultiPartRequest, MultiPartRequestBuilder, SerializedPart};
pub use source::{ByteSource, FileSource, InMemorySource};
