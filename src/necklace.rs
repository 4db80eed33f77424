use crate::buffer::DigitBuffer;
use crate::error::Result;
use bitvec::prelude::*;
use tracing::debug;

/// Clamps requested parameters to the smallest valid ones.
///
/// Returns `(max_digit, order)`: the alphabet has at least two symbols and
/// strings have at least one digit.
pub(crate) fn coerce(alphabet_size: usize, order: usize) -> (usize, usize) {
    (alphabet_size.saturating_sub(1).max(1), order.max(1))
}

/// Iterative enumerator of pre-necklaces in lexicographic order.
///
/// Each call to [`advance_pre_necklace`](Self::advance_pre_necklace) moves to
/// the next pre-necklace of length `n` over the digits `0..m` in constant
/// amortized time. Necklaces are the candidates whose period divides `n`,
/// Lyndon words the ones whose period equals `n`.
///
/// The enumerator is single-pass. [`reset`](Self::reset) rewinds it to the
/// all-zero string.
#[derive(Debug, Clone)]
pub struct Necklace<B = Vec<usize>> {
    /// Current candidate string
    digits: B,
    /// Bit `j` is set iff `j` divides `len`
    divisors: BitVec,
    len: usize,
    max_digit: usize,
    /// Period of the current candidate, 0 once the enumeration is finished
    period: usize,
}

impl Necklace<Vec<usize>> {
    /// Creates a heap-backed enumerator for strings of length `order` over
    /// `alphabet_size` symbols.
    ///
    /// An alphabet smaller than two symbols is treated as binary and an order
    /// of zero as one.
    pub fn new(alphabet_size: usize, order: usize) -> Self {
        let (max_digit, len) = coerce(alphabet_size, order);
        log_coercion(alphabet_size, order, max_digit, len);
        Self::from_parts(vec![0; len], max_digit, len)
    }
}

impl<B: DigitBuffer> Necklace<B> {
    /// Creates an enumerator storing its digits in `B`.
    ///
    /// Fails only when `B` has a fixed capacity smaller than the coerced order.
    pub fn with_buffer(alphabet_size: usize, order: usize) -> Result<Self> {
        let (max_digit, len) = coerce(alphabet_size, order);
        log_coercion(alphabet_size, order, max_digit, len);
        let digits = B::zeroed(len)?;
        Ok(Self::from_parts(digits, max_digit, len))
    }

    fn from_parts(digits: B, max_digit: usize, len: usize) -> Self {
        let mut divisors = bitvec![0; len + 1];
        for j in 1..=len {
            divisors.set(j, len % j == 0);
        }

        Self {
            digits,
            divisors,
            len,
            max_digit,
            period: 1,
        }
    }

    /// Rewinds to the first pre-necklace (all zeros, period 1).
    pub fn reset(&mut self) {
        self.digits.as_mut_slice().fill(0);
        self.period = 1;
    }

    /// Moves to the next pre-necklace and returns its period.
    ///
    /// Returns 0 once the all-`max_digit` string has been passed. The
    /// enumeration then stays finished: further calls return 0 and leave the
    /// digits untouched.
    pub fn advance_pre_necklace(&mut self) -> usize {
        if self.period == 0 {
            return 0;
        }

        let max_digit = self.max_digit;
        let digits = self.digits.as_mut_slice();

        // Rightmost digit that can still be incremented
        let Some(j) = digits.iter().rposition(|&d| d < max_digit) else {
            debug!(
                alphabet_size = max_digit + 1,
                order = self.len,
                "necklace enumeration finished"
            );
            self.period = 0;
            return 0;
        };

        digits[j] += 1;
        let period = j + 1;

        // Tail repeats the new prefix periodically
        for k in period..digits.len() {
            digits[k] = digits[k - period];
        }

        self.period = period;
        period
    }

    /// Whether the current period divides `n`, i.e. the candidate is a necklace.
    pub fn is_necklace(&self) -> bool {
        self.divisors[self.period]
    }

    /// Whether the current period equals `n`, i.e. the candidate is a Lyndon word.
    pub fn is_lyndon(&self) -> bool {
        self.period == self.len
    }

    /// Advances to the next necklace. Returns its period, or 0 when finished.
    pub fn advance_to_next_necklace(&mut self) -> usize {
        loop {
            if self.advance_pre_necklace() == 0 {
                return 0;
            }
            if self.is_necklace() {
                return self.period;
            }
        }
    }

    /// Advances to the next Lyndon word. Returns `n`, or 0 when finished.
    pub fn advance_to_next_lyndon_word(&mut self) -> usize {
        loop {
            if self.advance_pre_necklace() == 0 {
                return 0;
            }
            if self.is_lyndon() {
                return self.period;
            }
        }
    }

    /// The current candidate, `n` digits long.
    pub fn digits(&self) -> &[usize] {
        self.digits.as_slice()
    }

    /// The first `period` digits of the current candidate.
    ///
    /// For a necklace this is the Lyndon word it repeats. Empty once finished.
    pub fn word(&self) -> &[usize] {
        &self.digits()[..self.period]
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn is_finished(&self) -> bool {
        self.period == 0
    }

    /// String length `n`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: the order is at least one.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn max_digit(&self) -> usize {
        self.max_digit
    }

    pub fn alphabet_size(&self) -> usize {
        self.max_digit + 1
    }
}

fn log_coercion(alphabet_size: usize, order: usize, max_digit: usize, len: usize) {
    if alphabet_size != max_digit + 1 || order != len {
        debug!(
            requested_alphabet_size = alphabet_size,
            requested_order = order,
            alphabet_size = max_digit + 1,
            order = len,
            "coerced necklace parameters"
        );
    }
}
