//! First-wins extremum search.
//!
//! Both finders scan left to right once and replace the current candidate
//! only when a key is *strictly* greater. When several elements share the
//! greatest key, the first one encountered is returned.
//!
//! This differs from [`Iterator::max_by_key`], which returns the *last*
//! maximum.

use tally_types::Person;

/// Returns the first element with the greatest key, or `None` if `items` is empty.
///
/// # Examples
///
/// ```
/// use tally::find_max_by_key;
///
/// let scores = [("a", 5), ("b", 5), ("c", 3)];
/// assert_eq!(find_max_by_key(scores, |s| s.1), Some(("a", 5)));
///
/// let empty: [(&str, u32); 0] = [];
/// assert_eq!(find_max_by_key(empty, |s| s.1), None);
/// ```
pub fn find_max_by_key<I, K, F>(items: I, mut key: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut iter = items.into_iter();
    let mut best = iter.next()?;
    let mut best_key = key(&best);

    for item in iter {
        let item_key = key(&item);
        if item_key > best_key {
            best_key = item_key;
            best = item;
        }
    }

    Some(best)
}

/// Like [`find_max_by_key`], but with a key function that can fail.
///
/// The first error from `key` is returned immediately. No partial result is
/// produced and the remaining elements are not visited.
///
/// # Examples
///
/// ```
/// use tally::try_find_max_by_key;
///
/// let raw = ["3", "17", "5"];
/// let max = try_find_max_by_key(raw, |s| s.parse::<u32>());
/// assert_eq!(max, Ok(Some("17")));
///
/// let bad = ["3", "x", "5"];
/// assert!(try_find_max_by_key(bad, |s| s.parse::<u32>()).is_err());
/// ```
pub fn try_find_max_by_key<I, K, E, F>(items: I, mut key: F) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> Result<K, E>,
{
    let mut iter = items.into_iter();
    let Some(mut best) = iter.next() else {
        return Ok(None);
    };
    let mut best_key = key(&best)?;

    for item in iter {
        let item_key = key(&item)?;
        if item_key > best_key {
            best_key = item_key;
            best = item;
        }
    }

    Ok(Some(best))
}

/// Returns the oldest person, preferring the earliest on equal ages.
pub fn find_oldest(people: &[Person]) -> Option<&Person> {
    let oldest = find_max_by_key(people, |p| p.age);

    match oldest {
        Some(person) => tracing::debug!(name = %person.name, age = person.age, "found oldest person"),
        None => tracing::debug!("no people to compare"),
    }

    oldest
}
