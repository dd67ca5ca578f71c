//! Conditional in-place replacement over slices.
//!
//! [replace_if] is the sequential baseline. With the `rayon` feature enabled,
//! [par::ParallelReplace] adds element-wise and chunked parallel variants, and
//! [pool] provides fixed-size thread pools cached by thread count.

#[cfg(feature = "rayon")]
pub mod chunk;
#[cfg(feature = "rayon")]
pub mod par;
#[cfg(feature = "rayon")]
pub mod pool;

/// Replaces every element of `items` matching `predicate` with `new_value`, in place.
pub fn replace_if<T, F>(items: &mut [T], predicate: F, new_value: T)
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    for item in items.iter_mut() {
        if predicate(item) {
            *item = new_value.clone();
        }
    }
}
