//! Routes appends across a sequence of fixed-duration blocks and exposes a
//! flat iterator over the whole decoded sequence.

use tracing::{debug, warn};

use crate::block::{BlockIter, EncodedBlock, BLOCK_WINDOW_SECS};
use crate::error::{Error, Result};

/// Owns an ordered sequence of [`EncodedBlock`]s and routes each append to
/// the most recent block, or opens a new one when the current tail block's
/// window rejects the timestamp.
#[derive(Debug, Default)]
pub struct StreamEncoder {
    blocks: Vec<EncodedBlock>,
    last_ts: Option<u64>,
}

impl StreamEncoder {
    pub fn new() -> Self {
        StreamEncoder {
            blocks: Vec::new(),
            last_ts: None,
        }
    }

    /// Number of blocks currently held. Equal to the number of distinct
    /// `t / BLOCK_WINDOW_SECS` windows observed so far.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn blocks(&self) -> &[EncodedBlock] {
        &self.blocks
    }

    /// Appends a sample, opening a new block if the current tail block's
    /// window does not accept `t`.
    ///
    /// Rejects any `t` earlier than the last timestamp accepted by this
    /// encoder, regardless of which block that timestamp landed in.
    pub fn append(&mut self, t: u64, v: f64) -> Result<()> {
        if let Some(last) = self.last_ts {
            if t < last {
                warn!(timestamp = t, last, "rejected out-of-order append");
                return Err(Error::OutOfOrderAppend { timestamp: t, last });
            }
        }

        match self.blocks.last_mut() {
            Some(block) if block.accepts(t) => {
                block.append(t, v)?;
            }
            _ => {
                let start_ts = t - (t % BLOCK_WINDOW_SECS);
                debug!(start_ts, "opening new block");
                self.blocks.push(EncodedBlock::new(t, v));
            }
        }

        self.last_ts = Some(t);
        Ok(())
    }

    /// A forward iterator over every decoded sample, in append order,
    /// concatenated across blocks.
    pub fn iter(&self) -> StreamEncoderIter {
        StreamEncoderIter {
            blocks: self.blocks.iter(),
            current: None,
        }
    }

    /// Convenience that walks [`StreamEncoder::iter`] to completion.
    pub fn decode(&self) -> Result<Vec<(u64, f64)>> {
        self.iter().collect()
    }
}

/// Forward iterator concatenating the per-block iterators of a [`StreamEncoder`].
pub struct StreamEncoderIter<'a> {
    blocks: std::slice::Iter<'a, EncodedBlock>,
    current: Option<BlockIter>,
}

impl Iterator for StreamEncoderIter<'_> {
    type Item = Result<(u64, f64)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(iter) = &mut self.current {
                if let Some(item) = iter.next() {
                    return Some(item);
                }
            }

            self.current = Some(self.blocks.next()?.iter());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_block_round_trip() {
        let mut enc = StreamEncoder::new();
        enc.append(7205, 6.66).unwrap();
        enc.append(7206, 7.66).unwrap();
        enc.append(7207, 8.66).unwrap();

        assert_eq!(enc.block_count(), 1);
        assert_eq!(enc.blocks()[0].start_ts(), 7200);
        assert_eq!(
            enc.decode().unwrap(),
            vec![(7205, 6.66), (7206, 7.66), (7207, 8.66)]
        );
    }

    #[test]
    fn block_split_across_windows() {
        let mut enc = StreamEncoder::new();
        enc.append(7205, 1.0).unwrap();
        enc.append(14405, 2.0).unwrap();

        assert_eq!(enc.block_count(), 2);
        assert_eq!(enc.blocks()[0].start_ts(), 7200);
        assert_eq!(enc.blocks()[1].start_ts(), 14400);
        assert_eq!(enc.decode().unwrap(), vec![(7205, 1.0), (14405, 2.0)]);
    }

    #[test]
    fn block_count_matches_distinct_windows() {
        let mut enc = StreamEncoder::new();
        let samples = [
            (100u64, 1.0f64),
            (7300, 2.0),
            (7500, 3.0),
            (20000, 4.0),
            (20100, 5.0),
        ];
        for &(t, v) in &samples {
            enc.append(t, v).unwrap();
        }

        // distinct t / BLOCK_WINDOW_SECS buckets: 0, 1, 2 -> 3 blocks
        assert_eq!(enc.block_count(), 3);
        assert_eq!(enc.decode().unwrap(), samples.to_vec());
    }

    #[test]
    fn out_of_order_append_across_blocks_is_rejected() {
        let mut enc = StreamEncoder::new();
        enc.append(7205, 1.0).unwrap();
        enc.append(14405, 2.0).unwrap();
        let err = enc.append(7300, 3.0).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfOrderAppend {
                timestamp: 7300,
                last: 14405
            }
        );
    }

    #[test]
    fn many_samples_across_many_blocks_round_trip() {
        let mut enc = StreamEncoder::new();
        let mut expected = Vec::new();
        let mut t = 0u64;
        for i in 0..10_000u64 {
            t += 1 + (i % 5);
            let v = (i as f64).sin();
            enc.append(t, v).unwrap();
            expected.push((t, v));
        }

        assert_eq!(enc.decode().unwrap(), expected);
    }
}
