//! Multipart request model and builder.
//!
//! A multipart request is an ordered collection of serialized parts
//! (structured payloads to be encoded by the transport's serializer) and
//! binary parts (byte-source-backed payloads). The builder accumulates parts
//! in insertion order and snapshots them into an immutable request.

use std::fmt;
use std::sync::Arc;

use crate::error::RestClientError;
use crate::source::ByteSource;

/// A named structured payload destined for one segment of a multipart body.
///
/// The payload type `RQ` is opaque here; serializing it into bytes is the
/// transport's job.
#[derive(Debug, Clone)]
pub struct SerializedPart<RQ> {
    part_name: String,
    request: RQ,
}

impl<RQ> SerializedPart<RQ> {
    /// Returns the part name.
    pub fn part_name(&self) -> &str {
        &self.part_name
    }

    /// Returns the structured payload.
    pub fn request(&self) -> &RQ {
        &self.request
    }
}

/// A named byte-source-backed payload destined for a file-like segment of a
/// multipart body.
///
/// `filename` and `content_type` may be empty to mean "unspecified"; they are
/// carried verbatim. The part holds only a handle to its bytes; the source is
/// opened and read by the transport, never here.
#[derive(Clone)]
pub struct BinaryPart {
    part_name: String,
    filename: String,
    content_type: String,
    data: Arc<dyn ByteSource>,
}

impl BinaryPart {
    /// Returns the part name.
    pub fn part_name(&self) -> &str {
        &self.part_name
    }

    /// Returns the suggested filename, possibly empty.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the MIME type, possibly empty.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the handle to the part's bytes.
    pub fn data(&self) -> &Arc<dyn ByteSource> {
        &self.data
    }
}

impl fmt::Debug for BinaryPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryPart")
            .field("part_name", &self.part_name)
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("size_hint", &self.data.size_hint())
            .finish()
    }
}

/// An immutable multipart request: serialized parts and binary parts, each
/// sequence in insertion order.
///
/// Created only through [`MultiPartRequestBuilder::build`]; read-only
/// afterward, so a finished request is safe to share across threads.
#[derive(Debug, Clone)]
pub struct MultiPartRequest<RQ> {
    serialized_rqs: Vec<SerializedPart<RQ>>,
    binary_rqs: Vec<BinaryPart>,
}

impl<RQ> MultiPartRequest<RQ> {
    /// Returns the serialized parts in insertion order.
    pub fn serialized_rqs(&self) -> &[SerializedPart<RQ>] {
        &self.serialized_rqs
    }

    /// Returns the binary parts in insertion order.
    pub fn binary_rqs(&self) -> &[BinaryPart] {
        &self.binary_rqs
    }
}

/// Builder for [`MultiPartRequest`].
///
/// A plain mutable accumulator for single-threaded request construction.
/// Part names are not checked for emptiness or uniqueness here; a sane wire
/// encoding is the caller's and transport's responsibility.
#[derive(Debug)]
pub struct MultiPartRequestBuilder<RQ> {
    serialized_rqs: Vec<SerializedPart<RQ>>,
    binary_rqs: Vec<BinaryPart>,
}

impl<RQ> MultiPartRequestBuilder<RQ> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            serialized_rqs: Vec::new(),
            binary_rqs: Vec::new(),
        }
    }

    /// Appends a serialized part and returns the builder for chaining.
    pub fn add_serialized_part(&mut self, part_name: impl Into<String>, request: RQ) -> &mut Self {
        self.serialized_rqs.push(SerializedPart {
            part_name: part_name.into(),
            request,
        });
        self
    }

    /// Appends a binary part and returns the builder for chaining.
    ///
    /// The byte source is not opened here; reading is deferred to the
    /// transport.
    ///
    /// # Errors
    ///
    /// Returns [`RestClientError::InvalidArgument`] if `data` is `None`. The
    /// rejection happens before anything is appended, so the binary part
    /// sequence is unchanged after a failed call.
    pub fn add_binary_part(
        &mut self,
        part_name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Option<Arc<dyn ByteSource>>,
    ) -> Result<&mut Self, RestClientError> {
        let data = data
            .ok_or_else(|| RestClientError::invalid_argument("Provided data shouldn't be null"))?;
        self.binary_rqs.push(BinaryPart {
            part_name: part_name.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        });
        Ok(self)
    }
}

impl<RQ: Clone> MultiPartRequestBuilder<RQ> {
    /// Snapshots the accumulated parts into an immutable request.
    ///
    /// Always succeeds; a request with zero parts is valid at this layer.
    /// The sequences are copied, not shared, so mutating the builder after
    /// `build` never alters an already-built request, and the builder stays
    /// usable for further parts.
    pub fn build(&self) -> MultiPartRequest<RQ> {
        MultiPartRequest {
            serialized_rqs: self.serialized_rqs.clone(),
            binary_rqs: self.binary_rqs.clone(),
        }
    }
}

impl<RQ> Default for MultiPartRequestBuilder<RQ> {
    fn default() -> Self {
        Self::new()
    }
}
