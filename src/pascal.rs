//! Rows of Pascal's triangle, the binomial weights of the Bernstein basis.
//!
//! A row is computed with the incremental multiplicative recurrence
//! `C(n, k) = C(n, k-1) * (n - k + 1) / k`. The product is formed first so
//! the division by `k` is always exact.
use core::ops::Index;
use std::collections::HashMap;

use log::debug;
use tinyvec::TinyVec;

use crate::error::BezierError;

/// Binomial coefficients `C(n, 0..=n)` for one degree `n`.
/// Stored inline up to degree 7, which covers every curve the synthesizer produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientRow {
    row: TinyVec<[u64; 8]>,
}

impl CoefficientRow {
    /// Degree `n` of the row, one less than its length.
    pub fn degree(&self) -> usize {
        self.row.len() - 1
    }

    pub fn len(&self) -> usize {
        self.row.len()
    }

    /// Always false, a row holds at least `C(0, 0)`.
    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    pub fn get(&self, k: usize) -> Option<u64> {
        self.row.get(k).copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.row
    }

    pub fn iter(&self) -> core::slice::Iter<'_, u64> {
        self.row.iter()
    }
}

impl Index<usize> for CoefficientRow {
    type Output = u64;

    fn index(&self, k: usize) -> &u64 {
        &self.row[k]
    }
}

impl<'a> IntoIterator for &'a CoefficientRow {
    type Item = &'a u64;
    type IntoIter = core::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.row.iter()
    }
}

/// Largest degree whose intermediate products `C(n, k) * k` still fit a `u64`.
pub const MAX_DEGREE: usize = 62;

/// Calculates row `degree` (0-indexed) of Pascal's triangle.
/// Fails with `CoefficientOverflow` for degrees above `MAX_DEGREE`, before anything is allocated.
/// The factor is `(n - k + 1)`: the variant `row[k-1] * (n - k) / k` found in some C ports
/// yields `[1, 2, 1, 1]` for degree 3, so rows ported from such code will differ.
pub fn pascal_row(degree: usize) -> Result<CoefficientRow, BezierError> {
    if degree > MAX_DEGREE {
        return Err(BezierError::CoefficientOverflow { degree });
    }

    let mut row: TinyVec<[u64; 8]> = TinyVec::with_capacity(degree + 1);
    row.resize(degree + 1, 0);

    // first and last entries are always 1, for degree 0 both are the same entry
    row[0] = 1;
    row[degree] = 1;
    for k in 1..degree {
        let factor = (degree - k + 1) as u64;
        let product = row[k - 1]
            .checked_mul(factor)
            .ok_or(BezierError::CoefficientOverflow { degree })?;
        row[k] = product / k as u64;
    }

    Ok(CoefficientRow { row })
}

/// Like `pascal_row` for callers holding a signed degree, e.g. one taken from a foreign interface.
/// A negative degree is reported instead of wrapping.
pub fn pascal_row_checked(degree: i64) -> Result<CoefficientRow, BezierError> {
    let n = usize::try_from(degree).map_err(|_| BezierError::InvalidDegree { degree, min: 0 })?;
    pascal_row(n)
}

/// Memoizes coefficient rows by degree. Rows are a pure function of the degree,
/// so a cached row is always identical to a freshly computed one.
#[derive(Debug, Default, Clone)]
pub struct CoefficientCache {
    rows: HashMap<usize, CoefficientRow>,
}

impl CoefficientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the row for `degree`, computing it on the first request.
    pub fn row(&mut self, degree: usize) -> Result<&CoefficientRow, BezierError> {
        if !self.rows.contains_key(&degree) {
            debug!("coefficient cache miss for degree {}", degree);
            let row = pascal_row(degree)?;
            self.rows.insert(degree, row);
        }
        Ok(&self.rows[&degree])
    }

    /// Number of cached degrees
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_rows() {
        assert_eq!(pascal_row(0).unwrap().as_slice(), &[1]);
        assert_eq!(pascal_row(1).unwrap().as_slice(), &[1, 1]);
        assert_eq!(pascal_row(3).unwrap().as_slice(), &[1, 3, 3, 1]);
        assert_eq!(pascal_row(6).unwrap().as_slice(), &[1, 6, 15, 20, 15, 6, 1]);
    }

    #[test]
    fn rows_are_symmetric_with_unit_ends() {
        for n in 0..=MAX_DEGREE {
            let row = pascal_row(n).unwrap();
            assert_eq!(row.len(), n + 1);
            assert_eq!(row.degree(), n);
            assert_eq!(row[0], 1);
            assert_eq!(row[n], 1);
            for k in 0..=n {
                assert_eq!(row[k], row[n - k], "degree {} index {}", n, k);
            }
        }
    }

    #[test]
    fn row_sums_are_powers_of_two() {
        // the sum of row 63 would already be 2^63, stay well inside u128 anyway
        for n in 0..=62u32 {
            let row = pascal_row(n as usize).unwrap();
            let sum: u128 = row.iter().map(|&c| c as u128).sum();
            assert_eq!(sum, 1u128 << n, "degree {}", n);
        }
    }

    #[test]
    fn each_row_follows_from_the_previous() {
        let mut previous = pascal_row(0).unwrap();
        for n in 1..=40 {
            let row = pascal_row(n).unwrap();
            for k in 1..n {
                assert_eq!(row[k], previous[k - 1] + previous[k]);
            }
            previous = row;
        }
    }

    #[test]
    fn large_rows_spill_to_heap() {
        let row = pascal_row(20).unwrap();
        assert_eq!(row[10], 184_756);
        assert!(row.get(21).is_none());
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            pascal_row(70),
            Err(BezierError::CoefficientOverflow { degree: 70 })
        );
        assert!(pascal_row(MAX_DEGREE).is_ok());
        assert_eq!(
            pascal_row(MAX_DEGREE + 1),
            Err(BezierError::CoefficientOverflow { degree: MAX_DEGREE + 1 })
        );
    }

    #[test]
    fn huge_degrees_are_reported_without_allocating() {
        assert_eq!(
            pascal_row(usize::MAX),
            Err(BezierError::CoefficientOverflow { degree: usize::MAX })
        );
        assert_eq!(
            pascal_row(1_000_000_000),
            Err(BezierError::CoefficientOverflow { degree: 1_000_000_000 })
        );
        assert!(pascal_row_checked(i64::MAX).is_err());
    }

    #[test]
    fn degree_three_row_is_symmetric() {
        let row = pascal_row(3).unwrap();
        assert_eq!(row.as_slice(), &[1, 3, 3, 1]);
        assert_ne!(row.as_slice(), &[1, 2, 1, 1]);
    }

    #[test]
    fn negative_degree_is_rejected() {
        assert_eq!(
            pascal_row_checked(-1),
            Err(BezierError::InvalidDegree { degree: -1, min: 0 })
        );
        assert_eq!(pascal_row_checked(4).unwrap().as_slice(), &[1, 4, 6, 4, 1]);
    }

    #[test]
    fn cache_returns_identical_rows() {
        let mut cache = CoefficientCache::new();
        assert!(cache.is_empty());
        let cached = cache.row(5).unwrap().clone();
        assert_eq!(cached, pascal_row(5).unwrap());
        // second lookup is served from the cache
        assert_eq!(cache.row(5).unwrap(), &cached);
        cache.row(3).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
