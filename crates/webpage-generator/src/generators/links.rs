//! Outlink and inlink lists.

use super::pick;
use crate::content::ContentGenerator;
use crate::error::ContentError;
use rand::Rng;

/// Most links a page lists in either direction.
pub const MAX_LINKS: usize = 3;

/// Between zero and [`MAX_LINKS`] absolute URLs of the form
/// `http://<domain>/<path>`, in generation order. Duplicates are allowed.
///
/// # Panics
///
/// Panics if `domains` is empty and at least one link is drawn.
pub fn generate_links<R: Rng, C: ContentGenerator + ?Sized>(
    rng: &mut R,
    content: &mut C,
    domains: &[String],
) -> Result<Vec<String>, ContentError> {
    let count = rng.gen_range(0..=MAX_LINKS);
    (0..count)
        .map(|_| -> Result<String, ContentError> {
            let domain = pick(rng, domains);
            Ok(format!("http://{domain}/{}", content.uri_path()?))
        })
        .collect()
}
