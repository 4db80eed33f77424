//! Recursive reference generator.
//!
//! Visits every necklace prefix depth-first and emits the prefix's period
//! whenever it divides `n`. Much slower than [`DeBruijn`](crate::DeBruijn) and
//! limited by recursion depth, but short enough to trust as a cross-check.

use crate::necklace::coerce;

/// Builds B(`alphabet_size`, `order`) recursively.
///
/// Parameters are coerced the same way as [`Necklace::new`](crate::Necklace::new).
pub fn de_bruijn(alphabet_size: usize, order: usize) -> Vec<usize> {
    let (max_digit, order) = coerce(alphabet_size, order);
    let mut prefix = vec![0; order];
    let mut out = Vec::new();
    visit(0, 1, max_digit, &mut prefix, &mut out);
    out
}

/// Builds B(|alphabet|, `order`) with every digit mapped through `alphabet`.
///
/// An empty alphabet yields an empty sequence and a single symbol yields that
/// symbol once.
pub fn de_bruijn_over<T: Clone>(alphabet: &[T], order: usize) -> Vec<T> {
    match alphabet {
        [] => Vec::new(),
        [only] => vec![only.clone()],
        _ => de_bruijn(alphabet.len(), order)
            .into_iter()
            .map(|d| alphabet[d].clone())
            .collect(),
    }
}

/// Fills `prefix[depth..]` with every continuation that keeps it a
/// pre-necklace of the given period.
fn visit(
    depth: usize,
    period: usize,
    max_digit: usize,
    prefix: &mut [usize],
    out: &mut Vec<usize>,
) {
    let order = prefix.len();
    if depth == order {
        if order % period == 0 {
            out.extend_from_slice(&prefix[..period]);
        }
        return;
    }

    // Position -1 behaves as a leading zero
    let inherited = depth.checked_sub(period).map_or(0, |i| prefix[i]);

    prefix[depth] = inherited;
    visit(depth + 1, period, max_digit, prefix, out);

    for digit in inherited + 1..=max_digit {
        prefix[depth] = digit;
        visit(depth + 1, depth + 1, max_digit, prefix, out);
    }
}
