//! Data structures for multipart REST requests.

mod multipart;

pub use multipart::{BinaryPart, MultiPartRequest, MultiPartRequestBuilder, SerializedPart};
