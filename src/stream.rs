//! Accumulate-then-flush buffering wrappers around the core transforms.
//!
//! Neither type performs true incremental work: [`StreamingEncoder`] collects
//! records and calls the core array/table encoder once on
//! [`finish`](StreamingEncoder::finish); [`StreamingDecoder`] concatenates
//! text chunks and calls the core decoder once on
//! [`finish`](StreamingDecoder::finish). They exist so callers can feed data
//! as it arrives without holding the assembly logic themselves. A genuinely
//! incremental parser with a suspend point per chunk is a different design
//! and out of scope.
//!
//! ## Examples
//!
//! ```rust
//! use serde_slim::{slim, StreamingEncoder};
//!
//! let mut encoder = StreamingEncoder::new();
//! encoder.push(slim!({"id": 1, "name": "Mario"}));
//! encoder.push(slim!({"id": 2, "name": "Luigi"}));
//!
//! let text = encoder.finish();
//! assert!(text.starts_with("|2|id#,name$|"));
//! ```

use crate::{
    decode_with_options, encode_with_options, DecodeOptions, EncodeOptions, Result, SlimValue,
};

/// Batches records and encodes them in one shot.
///
/// Records pushed here are encoded exactly as if the caller had built the
/// array up front, so a uniform batch comes out in table form.
#[derive(Debug, Default)]
pub struct StreamingEncoder {
    records: Vec<SlimValue>,
    options: EncodeOptions,
}

impl StreamingEncoder {
    /// Creates an encoder with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder with explicit options.
    #[must_use]
    pub fn with_options(options: EncodeOptions) -> Self {
        StreamingEncoder {
            records: Vec::new(),
            options,
        }
    }

    /// Appends one record (or any value) to the batch.
    pub fn push(&mut self, record: SlimValue) {
        self.records.push(record);
    }

    /// Number of buffered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encodes the buffered records as a single SLIM array value.
    #[must_use]
    pub fn finish(self) -> String {
        encode_with_options(&SlimValue::Array(self.records), &self.options)
    }
}

/// Buffers text chunks and decodes the concatenation in one shot.
#[derive(Debug, Default)]
pub struct StreamingDecoder {
    buffer: String,
    options: DecodeOptions,
}

impl StreamingDecoder {
    /// Creates a decoder with default (lenient) options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder with explicit options.
    #[must_use]
    pub fn with_options(options: DecodeOptions) -> Self {
        StreamingDecoder {
            buffer: String::new(),
            options,
        }
    }

    /// Appends a chunk of SLIM text.
    pub fn push_chunk(&mut self, chunk: &str) {
        self.buffer.push_str(chunk);
    }

    /// Bytes buffered so far.
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Decodes everything buffered so far.
    pub fn finish(self) -> Result<SlimValue> {
        decode_with_options(&self.buffer, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode, slim};

    #[test]
    fn test_streaming_encoder_matches_batch_encode() {
        let rows = vec![slim!({"id": 1}), slim!({"id": 2})];

        let mut streaming = StreamingEncoder::new();
        for row in rows.clone() {
            streaming.push(row);
        }

        assert_eq!(
            streaming.finish(),
            crate::encode(&SlimValue::Array(rows))
        );
    }

    #[test]
    fn test_streaming_decoder_reassembles_chunks() {
        let text = crate::encode(&slim!([{"id": 1, "name": "Mario"}, {"id": 2, "name": "Luigi"}]));
        let (head, tail) = text.split_at(text.len() / 2);

        let mut streaming = StreamingDecoder::new();
        streaming.push_chunk(head);
        streaming.push_chunk(tail);

        assert_eq!(streaming.finish().unwrap(), decode(&text).unwrap());
    }

    #[test]
    fn test_empty_batch_encodes_empty_array() {
        assert_eq!(StreamingEncoder::new().finish(), "@[]");
    }
}
