use crate::error::{Error, Result};
use crate::necklace::coerce;
use ahash::AHashSet as HashSet;

/// Length `m^n` of B(`alphabet_size`, `order`) after coercion.
pub fn sequence_length(alphabet_size: usize, order: usize) -> Result<usize> {
    let (max_digit, order) = coerce(alphabet_size, order);
    let alphabet_size = max_digit + 1;
    u32::try_from(order)
        .ok()
        .and_then(|exp| alphabet_size.checked_pow(exp))
        .ok_or(Error::LengthOverflow {
            alphabet_size,
            order,
        })
}

/// Checks the de Bruijn property of `seq` for B(`alphabet_size`, `order`).
///
/// True iff `seq` has exactly `m^n` digits, every digit is below `m`, and all
/// `m^n` cyclic windows of length `n` are distinct.
pub fn is_de_bruijn(seq: &[usize], alphabet_size: usize, order: usize) -> bool {
    let (max_digit, order) = coerce(alphabet_size, order);
    let Ok(total) = sequence_length(alphabet_size, order) else {
        return false;
    };
    if seq.len() != total || seq.iter().any(|&d| d > max_digit) {
        return false;
    }

    // Each window is read as a base-m number below m^n
    let base = max_digit + 1;
    let high = total / base;
    let mut window = seq[..order - 1].iter().fold(0usize, |acc, &d| acc * base + d);

    let mut seen = HashSet::with_capacity(total);
    (0..total).all(|start| {
        window = (window % high) * base + seq[(start + order - 1) % total];
        seen.insert(window)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_length() {
        assert_eq!(sequence_length(2, 3), Ok(8));
        assert_eq!(sequence_length(4, 2), Ok(16));
        assert_eq!(sequence_length(1, 0), Ok(2));
    }

    #[test]
    fn test_sequence_length_overflow() {
        assert_eq!(
            sequence_length(2, 200),
            Err(Error::LengthOverflow {
                alphabet_size: 2,
                order: 200
            })
        );
    }

    #[test]
    fn test_accepts_known_sequence() {
        assert!(is_de_bruijn(&[0, 0, 0, 1, 0, 1, 1, 1], 2, 3));
        // Any rotation is still de Bruijn
        assert!(is_de_bruijn(&[1, 0, 1, 1, 1, 0, 0, 0], 2, 3));
    }

    #[test]
    fn test_rejects_repeated_window() {
        assert!(!is_de_bruijn(&[0, 0, 1, 0, 0, 1, 1, 1], 2, 3));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_de_bruijn(&[0, 0, 0, 1, 0, 1, 1], 2, 3));
        assert!(!is_de_bruijn(&[], 2, 3));
    }

    #[test]
    fn test_rejects_out_of_range_digit() {
        assert!(!is_de_bruijn(&[0, 0, 0, 1, 0, 1, 1, 2], 2, 3));
    }

    #[test]
    fn test_order_one() {
        assert!(is_de_bruijn(&[2, 0, 1], 3, 1));
        assert!(!is_de_bruijn(&[0, 0, 1], 3, 1));
    }
}
