// One-pass hash-map scan for the first pair of elements summing to a target.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Find the first pair of indices `(i, j)`, `i < j`, with
/// `nums[i] + nums[j] == target`.
///
/// Single left-to-right scan keeping a map from each seen value to the index
/// of its first occurrence. As soon as some `nums[j]` has its complement
/// `target - nums[j]` already in the map, that earlier index and `j` are the
/// answer, so when several pairs exist the one completing earliest in the
/// scan wins (smallest `j`, then the complement's first occurrence as `i`).
/// Duplicate values are fine: `[3, 3]` with target 6 resolves to `(0, 1)`.
/// O(n) time, O(n) auxiliary space.
///
/// ```
/// use n7m::pair_sum::find_pair;
///
/// assert_eq!(find_pair(&[2, 7, 11, 15], 9).unwrap(), (0, 1));
/// ```
///
/// # Errors
///
/// [`Error::NoPairFound`] when the scan exhausts `nums` (including an empty
/// slice) without two elements summing to `target`.
pub fn find_pair(nums: &[i64], target: i64) -> Result<(usize, usize)> {
    let mut first_index_by_value: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (j, &value) in nums.iter().enumerate() {
        // A complement outside the i64 range cannot have been seen; the
        // element itself still gets recorded for later pairings.
        if let Some(needed) = target.checked_sub(value) {
            if let Some(&i) = first_index_by_value.get(&needed) {
                return Ok((i, j));
            }
        }
        first_index_by_value.entry(value).or_insert(j);
    }

    Err(Error::NoPairFound { target })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_case() {
        assert_eq!(find_pair(&[2, 7, 11, 15], 9).unwrap(), (0, 1));
    }

    #[test]
    fn test_duplicate_values_pair_with_each_other() {
        assert_eq!(find_pair(&[3, 3], 6).unwrap(), (0, 1));
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(find_pair(&[-1, -2, -3, -4, -5], -8).unwrap(), (2, 4));
    }

    #[test]
    fn test_no_solution() {
        assert_eq!(
            find_pair(&[1, 2, 3], 100),
            Err(Error::NoPairFound { target: 100 })
        );
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(find_pair(&[], 0), Err(Error::NoPairFound { target: 0 }));
    }

    #[test]
    fn test_element_cannot_pair_with_itself() {
        // 5 + 5 == 10, but a single occurrence is not a pair
        assert_eq!(
            find_pair(&[5], 10),
            Err(Error::NoPairFound { target: 10 })
        );
        assert_eq!(find_pair(&[5, 5], 10).unwrap(), (0, 1));
    }

    #[test]
    fn test_earliest_completing_pair_wins() {
        // (0, 1) and (2, 3) both sum to 5; the scan completes (0, 1) first
        assert_eq!(find_pair(&[1, 4, 2, 3], 5).unwrap(), (0, 1));
    }

    #[test]
    fn test_duplicate_complement_uses_first_occurrence() {
        // both 3s precede the 6; i must be the first one
        assert_eq!(find_pair(&[3, 3, 6], 9).unwrap(), (0, 2));
    }

    #[test]
    fn test_zero_target_with_opposites() {
        assert_eq!(find_pair(&[4, -4], 0).unwrap(), (0, 1));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        // i64::MIN + i64::MAX == -1
        assert_eq!(find_pair(&[i64::MIN, i64::MAX], -1).unwrap(), (0, 1));

        // target - 1 overflows for target == i64::MIN; the scan must skip
        // that lookup yet still find the later pair
        assert_eq!(
            find_pair(&[1, -1, i64::MIN + 1], i64::MIN).unwrap(),
            (1, 2)
        );
    }
}
