//! Streaming compressor/decompressor for `(timestamp, f64)` time series,
//! implementing Facebook's Gorilla paper: delta-of-delta timestamp encoding
//! and XOR-based value encoding, grouped into fixed-duration blocks.
//!
//! ```
//! use tscodec::StreamEncoder;
//!
//! let mut enc = StreamEncoder::new();
//! enc.append(7205, 6.66).unwrap();
//! enc.append(7206, 7.66).unwrap();
//! enc.append(7207, 8.66).unwrap();
//!
//! let points: Vec<_> = enc.decode().unwrap();
//! assert_eq!(points, vec![(7205, 6.66), (7206, 7.66), (7207, 8.66)]);
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn to_u64(self) -> u64 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

pub mod error;
pub use error::{Error, Result, StreamError};

pub mod stream;

pub mod block;
pub use block::{EncodedBlock, BLOCK_WINDOW_SECS};

pub mod stream_encoder;
pub use stream_encoder::StreamEncoder;
