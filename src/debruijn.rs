use crate::buffer::DigitBuffer;
use crate::error::Result;
use crate::necklace::Necklace;
use crate::verify::sequence_length;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Lazy digit stream of the lexicographically minimal de Bruijn sequence B(m, n).
///
/// The sequence is the concatenation, in lexicographic order, of the Lyndon
/// words whose length divides `n`. Those are exactly the periods of the
/// necklaces produced by the owned [`Necklace`] enumerator, so the stream
/// walks a cursor over the first `period` digits of each necklace and fetches
/// the next one when the cursor runs off the end.
///
/// The stream yields `m^n` digits, then stays exhausted until restarted.
///
/// # Example
///
/// ```
/// use debruijn_rs::DeBruijn;
///
/// let digits: Vec<usize> = DeBruijn::new(2, 3).collect();
/// assert_eq!(digits, vec![0, 0, 0, 1, 0, 1, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct DeBruijn<B = Vec<usize>> {
    necklace: Necklace<B>,
    /// Position of the next digit within the current word, `None` when exhausted
    cursor: Option<usize>,
    /// Digits produced since the last restart
    emitted: usize,
    /// m^n, if it fits in `usize`
    total: Option<usize>,
}

impl DeBruijn<Vec<usize>> {
    /// Creates a heap-backed stream for B(`alphabet_size`, `order`).
    ///
    /// Parameters are coerced the same way as [`Necklace::new`].
    pub fn new(alphabet_size: usize, order: usize) -> Self {
        Self::from_necklace(Necklace::new(alphabet_size, order))
    }
}

impl<B: DigitBuffer> DeBruijn<B> {
    /// Creates a stream whose enumerator stores its digits in `B`.
    pub fn with_buffer(alphabet_size: usize, order: usize) -> Result<Self> {
        Ok(Self::from_necklace(Necklace::with_buffer(
            alphabet_size,
            order,
        )?))
    }

    fn from_necklace(necklace: Necklace<B>) -> Self {
        let total = sequence_length(necklace.alphabet_size(), necklace.len()).ok();
        let mut stream = Self {
            necklace,
            cursor: None,
            emitted: 0,
            total,
        };
        stream.start_first_word();
        stream
    }

    /// Rewinds to the first word and returns its length.
    ///
    /// The first word is always the single digit `0`, whose length divides
    /// every order.
    pub fn start_first_word(&mut self) -> usize {
        self.necklace.reset();
        self.cursor = Some(0);
        self.emitted = 0;
        self.necklace.period()
    }

    /// Fetches the next Lyndon word whose length divides `n`.
    ///
    /// Returns its length, or 0 when the sequence is complete.
    pub fn advance_to_next_word(&mut self) -> usize {
        let len = self.necklace.advance_to_next_necklace();
        if len == 0 {
            self.cursor = None;
            debug!(emitted = self.emitted, "de Bruijn stream exhausted");
        } else {
            self.cursor = Some(0);
            trace!(word = ?self.necklace.word(), "next de Bruijn word");
        }
        len
    }

    fn pull(&mut self) -> Option<usize> {
        let cursor = self.cursor?;
        let digit = self.necklace.digits()[cursor];
        self.emitted += 1;

        if cursor + 1 == self.necklace.period() {
            self.advance_to_next_word();
        } else {
            self.cursor = Some(cursor + 1);
        }

        Some(digit)
    }

    /// Returns the next digit, or [`sentinel`](Self::sentinel) once exhausted.
    ///
    /// The digit returned is always read before any word transition.
    pub fn next_digit(&mut self) -> usize {
        self.pull().unwrap_or_else(|| self.sentinel())
    }

    /// Restarts the stream and returns its first digit.
    pub fn first_digit(&mut self) -> usize {
        self.start_first_word();
        self.next_digit()
    }

    /// Restarts the stream without consuming a digit.
    pub fn restart(&mut self) {
        self.start_first_word();
    }

    /// Value returned by [`next_digit`](Self::next_digit) after the last digit: `m`.
    pub fn sentinel(&self) -> usize {
        self.necklace.max_digit() + 1
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    /// Alphabet size `m` after coercion.
    pub fn alphabet_size(&self) -> usize {
        self.necklace.alphabet_size()
    }

    /// Window length `n` after coercion.
    pub fn order(&self) -> usize {
        self.necklace.len()
    }

    /// Total number of digits `m^n`, if it fits in `usize`.
    pub fn total_len(&self) -> Option<usize> {
        self.total
    }

    /// The word currently being emitted. Empty once exhausted.
    pub fn current_word(&self) -> &[usize] {
        match self.cursor {
            Some(_) => self.necklace.word(),
            None => &[],
        }
    }
}

impl<B: DigitBuffer> Iterator for DeBruijn<B> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_exhausted() {
            return (0, Some(0));
        }
        match self.total {
            Some(total) => {
                let remaining = total.saturating_sub(self.emitted);
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

impl<B: DigitBuffer> FusedIterator for DeBruijn<B> {}

/// Collects the whole of B(`alphabet_size`, `order`).
pub fn sequence(alphabet_size: usize, order: usize) -> Vec<usize> {
    DeBruijn::new(alphabet_size, order).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Inline;

    fn drain_digits(stream: &mut DeBruijn) -> Vec<usize> {
        let sentinel = stream.sentinel();
        let mut out = Vec::new();
        loop {
            let d = stream.next_digit();
            if d == sentinel {
                break;
            }
            out.push(d);
        }
        out
    }

    #[test]
    fn test_binary_order_three() {
        assert_eq!(sequence(2, 3), vec![0, 0, 0, 1, 0, 1, 1, 1]);
    }

    #[test]
    fn test_quaternary_order_two() {
        assert_eq!(
            sequence(4, 2),
            vec![0, 0, 1, 0, 2, 0, 3, 1, 1, 2, 1, 3, 2, 2, 3, 3]
        );
    }

    #[test]
    fn test_next_digit_sentinel() {
        let mut stream = DeBruijn::new(2, 3);
        let digits = drain_digits(&mut stream);
        assert_eq!(digits.len(), 8);
        assert!(stream.is_exhausted());
        for _ in 0..4 {
            assert_eq!(stream.next_digit(), 2);
        }
    }

    #[test]
    fn test_first_digit_restarts() {
        let mut stream = DeBruijn::new(3, 2);
        let fresh = sequence(3, 2);

        for _ in 0..5 {
            stream.next_digit();
        }
        let mut restarted = vec![stream.first_digit()];
        restarted.extend(drain_digits(&mut stream));
        assert_eq!(restarted, fresh);

        // Restart also works from the exhausted state
        assert_eq!(stream.first_digit(), fresh[0]);
    }

    #[test]
    fn test_start_first_word_returns_initial_period() {
        let mut stream = DeBruijn::new(3, 4);
        stream.next_digit();
        stream.next_digit();
        assert_eq!(stream.start_first_word(), 1);
        assert_eq!(stream.current_word(), &[0]);
    }

    #[test]
    fn test_advance_to_next_word_lengths() {
        let mut stream = DeBruijn::new(2, 3);
        assert_eq!(stream.current_word(), &[0]);
        assert_eq!(stream.advance_to_next_word(), 3);
        assert_eq!(stream.current_word(), &[0, 0, 1]);
        assert_eq!(stream.advance_to_next_word(), 3);
        assert_eq!(stream.current_word(), &[0, 1, 1]);
        assert_eq!(stream.advance_to_next_word(), 1);
        assert_eq!(stream.current_word(), &[1]);
        assert_eq!(stream.advance_to_next_word(), 0);
        assert!(stream.current_word().is_empty());
        assert_eq!(stream.next_digit(), stream.sentinel());
    }

    #[test]
    fn test_size_hint_is_exact() {
        let mut stream = DeBruijn::new(3, 3);
        assert_eq!(stream.size_hint(), (27, Some(27)));
        stream.nth(9);
        assert_eq!(stream.size_hint(), (17, Some(17)));
        stream.by_ref().for_each(drop);
        assert_eq!(stream.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_size_hint_overflow() {
        let stream = DeBruijn::new(16, 64);
        assert_eq!(stream.total_len(), None);
        assert_eq!(stream.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_coerced_parameters() {
        let stream = DeBruijn::new(1, 0);
        assert_eq!(stream.alphabet_size(), 2);
        assert_eq!(stream.order(), 1);
        assert_eq!(stream.collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_inline_buffer() {
        let stream = DeBruijn::<Inline<4>>::with_buffer(3, 4).unwrap();
        let digits: Vec<usize> = stream.collect();
        assert_eq!(digits, sequence(3, 4));
    }

    #[test]
    fn test_iterator_fused() {
        let mut stream = DeBruijn::new(2, 1);
        assert_eq!(stream.next(), Some(0));
        assert_eq!(stream.next(), Some(1));
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
    }
}
