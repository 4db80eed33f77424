use thiserror::Error;

/// Errors raised by the fallible constructors and helpers.
///
/// Out-of-range alphabet sizes and orders are never errors: they are coerced
/// to the smallest valid value instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A fixed-capacity digit buffer cannot hold a string of the requested order.
    #[error("order {requested} exceeds fixed buffer capacity {capacity}")]
    CapacityExceeded {
        /// Requested string length (after coercion)
        requested: usize,
        /// Capacity of the buffer type
        capacity: usize,
    },

    /// The sequence length m^n does not fit in `usize`.
    #[error("sequence length {alphabet_size}^{order} overflows usize")]
    LengthOverflow {
        /// Alphabet size m (after coercion)
        alphabet_size: usize,
        /// Order n (after coercion)
        order: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
