//! Uniform random compositions (stars and bars).
//!
//! # Algorithm
//!
//! To split `total` into `n` positive parts, draw `n - 1` distinct dividers
//! from `1..total` without replacement, sort them, and read off the gaps
//! between consecutive dividers (with virtual dividers at `0` and `total`).
//! Each composition corresponds to exactly one divider set, so every
//! composition is equally likely.
//!
//! Non-negative parts reduce to the positive case: add one to every part
//! (`total + n` overall), sample, subtract one again.
//!
//! # Reference
//! Feller (1968), "An Introduction to Probability Theory and Its
//! Applications", Vol. 1, Ch. II.5

use rand::seq::index;
use rand::Rng;

use crate::error::{GanttError, Result};

/// Returns `n` positive integers summing to `total`, uniformly over all
/// such compositions.
///
/// # Errors
/// `InvalidArgument` if `n == 0` or `n > total` (fewer than `n - 1`
/// divider positions are available).
pub fn partition_pos<R: Rng + ?Sized>(n: usize, total: usize, rng: &mut R) -> Result<Vec<usize>> {
    if n == 0 {
        return Err(GanttError::invalid_argument("n", "must be at least 1"));
    }
    if n > total {
        return Err(GanttError::invalid_argument(
            "total",
            format!("cannot split {total} into {n} positive parts"),
        ));
    }

    // Dividers are drawn from 1..=total-1; `index::sample` yields 0-based.
    let mut dividers: Vec<usize> = index::sample(rng, total - 1, n - 1)
        .into_iter()
        .map(|d| d + 1)
        .collect();
    dividers.sort_unstable();

    let mut parts = Vec::with_capacity(n);
    let mut prev = 0;
    for d in dividers.into_iter().chain(std::iter::once(total)) {
        parts.push(d - prev);
        prev = d;
    }
    Ok(parts)
}

/// Returns `n` non-negative integers summing to `total`, uniformly over all
/// such compositions.
///
/// # Errors
/// `InvalidArgument` if `n == 0` or `total + n` does not fit in `usize`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_gantt::generator::partition_nonneg;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let parts = partition_nonneg(5, 6, &mut rng).unwrap();
/// assert_eq!(parts.len(), 5);
/// assert_eq!(parts.iter().sum::<usize>(), 6);
/// ```
pub fn partition_nonneg<R: Rng + ?Sized>(
    n: usize,
    total: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let shifted = total.checked_add(n).ok_or_else(|| {
        GanttError::invalid_argument("total", format!("{total} + {n} overflows usize"))
    })?;
    let parts = partition_pos(n, shifted, rng)?;
    Ok(parts.into_iter().map(|p| p - 1).collect())
}
