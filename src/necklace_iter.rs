use crate::buffer::DigitBuffer;
use crate::necklace::Necklace;
use std::iter::FusedIterator;

/// Which candidates a [`NecklaceIter`] yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Every pre-necklace
    PreNecklace,
    /// Candidates whose period divides the order
    Necklace,
    /// Candidates whose period equals the order
    Lyndon,
}

/// Iterator over the strings produced by a [`Necklace`] enumerator.
///
/// Yields owned copies of the digits in lexicographic order, starting with
/// the enumerator's current candidate if it passes the filter.
#[derive(Debug, Clone)]
pub struct NecklaceIter<B = Vec<usize>> {
    necklace: Necklace<B>,
    filter: Filter,
    started: bool,
}

impl<B: DigitBuffer> NecklaceIter<B> {
    pub(crate) fn new(necklace: Necklace<B>, filter: Filter) -> Self {
        Self {
            necklace,
            filter,
            started: false,
        }
    }

    fn accepts_current(&self) -> bool {
        match self.filter {
            Filter::PreNecklace => !self.necklace.is_finished(),
            Filter::Necklace => self.necklace.is_necklace(),
            Filter::Lyndon => self.necklace.is_lyndon(),
        }
    }

    fn advance(&mut self) {
        match self.filter {
            Filter::PreNecklace => self.necklace.advance_pre_necklace(),
            Filter::Necklace => self.necklace.advance_to_next_necklace(),
            Filter::Lyndon => self.necklace.advance_to_next_lyndon_word(),
        };
    }

    /// Returns the underlying enumerator.
    pub fn into_inner(self) -> Necklace<B> {
        self.necklace
    }
}

impl<B: DigitBuffer> Iterator for NecklaceIter<B> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.advance();
        } else {
            self.started = true;
            if !self.accepts_current() {
                self.advance();
            }
        }

        if self.necklace.is_finished() {
            None
        } else {
            Some(self.necklace.digits().to_vec())
        }
    }
}

impl<B: DigitBuffer> FusedIterator for NecklaceIter<B> {}

impl<B: DigitBuffer> Necklace<B> {
    /// Consumes the enumerator, iterating over every remaining pre-necklace.
    pub fn into_pre_necklaces(self) -> NecklaceIter<B> {
        NecklaceIter::new(self, Filter::PreNecklace)
    }

    /// Consumes the enumerator, iterating over the remaining necklaces.
    pub fn into_necklaces(self) -> NecklaceIter<B> {
        NecklaceIter::new(self, Filter::Necklace)
    }

    /// Consumes the enumerator, iterating over the remaining Lyndon words.
    pub fn into_lyndon_words(self) -> NecklaceIter<B> {
        NecklaceIter::new(self, Filter::Lyndon)
    }
}

/// All pre-necklaces of length `order` over `alphabet_size` symbols.
pub fn pre_necklaces(alphabet_size: usize, order: usize) -> NecklaceIter {
    Necklace::new(alphabet_size, order).into_pre_necklaces()
}

/// All necklaces of length `order` over `alphabet_size` symbols.
pub fn necklaces(alphabet_size: usize, order: usize) -> NecklaceIter {
    Necklace::new(alphabet_size, order).into_necklaces()
}

/// All Lyndon words of length `order` over `alphabet_size` symbols.
pub fn lyndon_words(alphabet_size: usize, order: usize) -> NecklaceIter {
    Necklace::new(alphabet_size, order).into_lyndon_words()
}
