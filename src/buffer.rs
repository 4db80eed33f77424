use crate::error::{Error, Result};

/// Storage for the digits of a necklace candidate.
///
/// The enumeration algorithm only needs a zero-initialised, fixed-length,
/// mutable slice. `Vec<usize>` allocates it on the heap; [`Inline`] keeps it
/// in a fixed-capacity array inside the enumerator.
pub trait DigitBuffer {
    /// Creates a buffer of `len` zero digits.
    fn zeroed(len: usize) -> Result<Self>
    where
        Self: Sized;

    /// The digits as a slice of exactly `len` elements.
    fn as_slice(&self) -> &[usize];

    /// Mutable view of the digits.
    fn as_mut_slice(&mut self) -> &mut [usize];
}

impl DigitBuffer for Vec<usize> {
    fn zeroed(len: usize) -> Result<Self> {
        Ok(vec![0; len])
    }

    fn as_slice(&self) -> &[usize] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [usize] {
        self
    }
}

/// Fixed-capacity digit storage holding up to `N` digits without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inline<const N: usize> {
    digits: [usize; N],
    len: usize,
}

impl<const N: usize> Inline<N> {
    /// Maximum number of digits this buffer can hold.
    pub const CAPACITY: usize = N;
}

impl<const N: usize> DigitBuffer for Inline<N> {
    fn zeroed(len: usize) -> Result<Self> {
        if len > N {
            return Err(Error::CapacityExceeded {
                requested: len,
                capacity: N,
            });
        }
        Ok(Self {
            digits: [0; N],
            len,
        })
    }

    fn as_slice(&self) -> &[usize] {
        &self.digits[..self.len]
    }

    fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.digits[..self.len]
    }
}
