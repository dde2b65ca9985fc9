//! Order-preserving fixed-size batching of labels.
//!
//! Concatenating the returned chunks in order always reproduces the input exactly.
//! The last chunk may be shorter than `size`.


use std::num::NonZeroUsize;

/// Splits `labels` into borrowed chunks of at most `size` labels.
pub fn chunk_slices<T>(labels: &[T], size: NonZeroUsize) -> Vec<&[T]> {
    labels.chunks(size.get()).collect()
}

/// Splits `labels` into owned chunks of at most `size` labels.
///
/// Empty input yields no chunks; `size >= labels.len()` yields exactly one.
pub fn chunk<T: Clone>(labels: &[T], size: NonZeroUsize) -> Vec<Vec<T>> {
    labels.chunks(size.get()).map(<[T]>::to_vec).collect()
}

/// Number of chunks `len` labels produce at `size` per chunk.
pub fn chunk_count(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get())
}
