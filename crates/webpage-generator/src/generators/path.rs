//! Page path policy.
//!
//! A path is either *numbered* (`posts/007`) or *organic* (whatever the
//! content collaborator returns). Both strategies are equally likely. In
//! either case a purely numeric final segment is rendered with at least
//! three digits so numbered pages sort in numeric order.

use super::pick;
use crate::content::ContentGenerator;
use crate::error::ContentError;
use rand::Rng;

/// Highest number used for numbered paths (lowest is 1).
pub const MAX_PATH_NUMBER: u32 = 50;

/// Minimum width of a numeric path segment.
const NUMBER_WIDTH: usize = 3;

/// Render `n` zero-padded to at least three digits.
pub fn zero_pad(n: u64) -> String {
    format!("{n:0width$}", width = NUMBER_WIDTH)
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize a segment of ASCII digits to its decimal value padded to at
/// least three digits. Works on the digits directly so that arbitrarily long
/// segments never overflow.
fn pad_digits(segment: &str) -> String {
    let digits = segment.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    format!("{digits:0>width$}", width = NUMBER_WIDTH)
}

/// Zero-pad the final `/`-delimited segment of `path` if it is purely
/// numeric. Other segments, and paths with a non-numeric tail, are returned
/// unchanged.
pub fn pad_numeric_tail(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((head, tail)) if is_numeric(tail) => format!("{head}/{}", pad_digits(tail)),
        None if is_numeric(path) => pad_digits(path),
        _ => path.to_string(),
    }
}

/// `base/NNN` with a base from `bases` and a number in `1..=MAX_PATH_NUMBER`.
///
/// # Panics
///
/// Panics if `bases` is empty.
pub fn numbered_path<R: Rng>(rng: &mut R, bases: &[String]) -> String {
    let base = pick(rng, bases);
    let number = rng.gen_range(1..=MAX_PATH_NUMBER);
    format!("{base}/{}", zero_pad(u64::from(number)))
}

/// A collaborator-supplied path with its numeric tail padded.
pub fn organic_path<C: ContentGenerator + ?Sized>(content: &mut C) -> Result<String, ContentError> {
    Ok(pad_numeric_tail(&content.uri_path()?))
}

/// Choose between the numbered and organic strategies with equal odds.
///
/// # Panics
///
/// Panics if `bases` is empty.
pub fn generate_path<R: Rng, C: ContentGenerator + ?Sized>(
    rng: &mut R,
    content: &mut C,
    bases: &[String],
) -> Result<String, ContentError> {
    if rng.gen_bool(0.5) {
        Ok(numbered_path(rng, bases))
    } else {
        organic_path(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_pad_parses_back() {
        for n in 0..=999u64 {
            let padded = zero_pad(n);
            assert!(padded.len() >= 3, "{padded}");
            assert_eq!(padded.parse::<u64>().unwrap(), n);
        }
        assert_eq!(zero_pad(0), "000");
        assert_eq!(zero_pad(7), "007");
        assert_eq!(zero_pad(1234), "1234");
    }

    #[test]
    fn test_pad_numeric_tail() {
        assert_eq!(pad_numeric_tail("a/b/42"), "a/b/042");
        assert_eq!(pad_numeric_tail("a/b/c"), "a/b/c");
        assert_eq!(pad_numeric_tail("a/7/c"), "a/7/c");
        assert_eq!(pad_numeric_tail("5"), "005");
        assert_eq!(pad_numeric_tail("list/0"), "list/000");
        assert_eq!(pad_numeric_tail("list/0042"), "list/042");
        assert_eq!(pad_numeric_tail("list/123456"), "list/123456");
        assert_eq!(pad_numeric_tail("list/"), "list/");
        assert_eq!(pad_numeric_tail(""), "");
    }

    #[test]
    fn test_pad_handles_segments_wider_than_u64() {
        let long = "98765432109876543210987654321";
        assert_eq!(pad_numeric_tail(&format!("x/{long}")), format!("x/{long}"));
    }

    #[test]
    fn test_numbered_path_shape() {
        let bases = vec!["posts".to_string(), "entry".to_string()];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let path = numbered_path(&mut rng, &bases);
            let (base, number) = path.split_once('/').unwrap();
            assert!(bases.iter().any(|b| b == base));
            assert_eq!(number.len(), 3);
            let n: u32 = number.parse().unwrap();
            assert!((1..=MAX_PATH_NUMBER).contains(&n));
        }
    }
}
