//! Local partial-sum aggregation (combine phase).

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::Result;
use crate::point::Point;

/// Fold a batch of `(centroidId, point)` pairs into one partial sum per
/// distinct centroid id.
///
/// Purely a data-movement optimization between the assignment and merge
/// phases: because [`Point::merge`] is associative and commutative,
/// skipping this fold and merging the raw points directly yields the
/// identical final centroids.
pub fn fold_partials<I>(pairs: I) -> Result<HashMap<usize, Point>>
where
  I: IntoIterator<Item = (usize, Point)>,
{
  let mut partials: HashMap<usize, Point> = HashMap::new();
  for (id, point) in pairs {
    match partials.entry(id) {
      Entry::Occupied(mut partial) => partial.get_mut().merge(&point)?,
      Entry::Vacant(slot) => {
        slot.insert(point);
      }
    }
  }
  Ok(partials)
}
