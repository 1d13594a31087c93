//! Generation policies for the individual parts of a page record.
//!
//! Each policy takes the RNG and the content collaborator explicitly so it
//! can be exercised on its own with a seeded RNG and a stub collaborator.

pub mod html;
pub mod links;
pub mod path;

use rand::Rng;

/// Pick one entry uniformly at random.
///
/// `items` must be non-empty; [`Vocabulary::validate`](crate::Vocabulary::validate)
/// guarantees this for every vocabulary list.
pub(crate) fn pick<'a, R: Rng, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
