use std::num::NonZeroUsize;

/// Split `items` into contiguous batches of at most `size` items.
///
/// Order is preserved within and across batches; only the last batch may be
/// shorter than `size`. An empty input yields no batches.
pub fn batches<T>(items: &[T], size: NonZeroUsize) -> Vec<&[T]> {
    items.chunks(size.get()).collect()
}

/// Number of batches `batches` produces for `len` items.
pub fn batch_count(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get())
}
