//! Weighted winner selection
//!
//! Partitions `[1, total_weight]` into contiguous sub-ranges, one per entry
//! in input order with length equal to its weight, then uniformly samples a
//! point in the interval. An entry's chance of winning is therefore exactly
//! `weight / total_weight`.

use crate::source::RandomSource;
use librix_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A contest participant and its probability mass.
///
/// Weights are review counts in practice, so they are integers; zero is a
/// valid weight that contributes no mass, negative is rejected outright.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeightedEntry {
    pub identity: String,
    pub weight: i64,
}

impl WeightedEntry {
    #[inline]
    #[must_use]
    pub fn new(identity: impl Into<String>, weight: i64) -> Self {
        Self {
            identity: identity.into(),
            weight,
        }
    }
}

/// Select exactly one entry with probability proportional to its weight.
///
/// Returns `Ok(None)` when the list is empty or every weight is zero; there
/// is no one to select, and that is not an error. A negative weight fails
/// the whole call with [`Error::InvalidWeight`] before any randomness is
/// consumed; a weight sum past `u64::MAX` fails likewise with
/// [`Error::WeightOverflow`].
pub fn select_winner<'a, S>(
    entries: &'a [WeightedEntry],
    source: &mut S,
) -> Result<Option<&'a str>>
where
    S: RandomSource + ?Sized,
{
    // Validate everything before the draw: a rejected call must leave the
    // random source untouched.
    for entry in entries {
        if entry.weight < 0 {
            return Err(Error::InvalidWeight {
                identity: entry.identity.clone(),
                weight: entry.weight,
            });
        }
    }

    let mut prefix: Vec<u64> = Vec::with_capacity(entries.len());
    let mut total: u64 = 0;
    for entry in entries {
        total = total
            .checked_add(entry.weight as u64)
            .ok_or_else(|| Error::WeightOverflow {
                identity: entry.identity.clone(),
            })?;
        prefix.push(total);
    }

    if total == 0 {
        return Ok(None);
    }

    let r = source.draw(total);
    // First prefix sum >= r; zero-weight entries have empty sub-ranges and
    // can never be landed on.
    let index = prefix.partition_point(|&p| p < r);
    debug!(r, total, index, "contest draw");

    Ok(entries.get(index).map(|e| e.identity.as_str()))
}
