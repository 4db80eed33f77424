//! # De Bruijn sequences from necklace enumeration
//!
//! Generates the lexicographically minimal de Bruijn sequence B(m, n): a
//! cyclic sequence of `m^n` digits over `0..m` in which every length-`n`
//! string occurs exactly once as a window.
//!
//! The sequence is the concatenation, in lexicographic order, of all Lyndon
//! words whose length divides `n`. These words come from an iterative
//! pre-necklace enumerator ([`Necklace`]) with a constant amortized time
//! successor; [`DeBruijn`] flattens them into a lazy digit stream.
//!
//! ## Example
//!
//! ```
//! use debruijn_rs::{verify, DeBruijn};
//!
//! let seq: Vec<usize> = DeBruijn::new(4, 2).collect();
//! assert_eq!(seq.len(), 16);
//! assert_eq!(&seq[..7], &[0, 0, 1, 0, 2, 0, 3]);
//! assert!(verify::is_de_bruijn(&seq, 4, 2));
//! ```
//!
//! ## Performance
//!
//! - O(1) amortized time per digit
//! - O(n) memory, optionally without allocating via [`buffer::Inline`]

pub mod buffer;
mod debruijn;
mod error;
mod necklace;
mod necklace_iter;
pub mod recursive;
pub mod verify;


pub use buffer::{DigitBuffer, Inline};
pub use debruijn::{sequence, DeBruijn};
pub use error::{Error, Result};
pub use necklace::Necklace;
pub use necklace_iter::{lyndon_words, necklaces, pre_necklaces, Filter, NecklaceIter};
