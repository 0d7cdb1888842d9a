use crate::SortError;

#[inline]
pub fn validate_len<T>(data: &[T]) -> Result<(), SortError> {
    if data.is_empty() {
        return Err(SortError::InvalidListSize);
    }
    Ok(())
}

#[inline]
pub fn min_max(data: &[i64]) -> Option<(i64, i64)> {
    let (&first, rest) = data.split_first()?;
    let mut min = first;
    let mut max = first;
    for &x in rest {
        if x < min {
            min = x;
        } else if x > max {
            max = x;
        }
    }
    Some((min, max))
}

/// Merges the sorted runs `block[..mid]` and `block[mid..]` into `out`.
///
/// The left head is taken only when it is strictly less than the right head,
/// so equal keys are emitted right run first. `out` must be exactly as long
/// as `block`.
#[inline]
pub fn merge_runs<T: Copy + Ord>(block: &[T], mid: usize, out: &mut [T]) {
    debug_assert_eq!(block.len(), out.len());

    let (left, right) = block.split_at(mid);
    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;

    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            out[k] = left[i];
            i += 1;
        } else {
            out[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    if i < left.len() {
        out[k..].copy_from_slice(&left[i..]);
    } else {
        out[k..].copy_from_slice(&right[j..]);
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[derive(Clone, Copy, Debug)]
    struct Tagged {
        key: i64,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn t(key: i64, tag: char) -> Tagged {
        Tagged { key, tag }
    }

    #[test]
    fn merge_ties_take_right_run_first() {
        let block = [t(1, 'a'), t(2, 'b'), t(1, 'c'), t(2, 'd')];
        let mut out = [t(0, '-'); 4];
        merge_runs(&block, 2, &mut out);

        let tags: String = out.iter().map(|x| x.tag).collect();
        assert_eq!(tags, "cadb");
    }

    #[test]
    fn merge_copies_remaining_tail() {
        let block = [1, 5, 9, 2, 3];
        let mut out = [0; 5];
        merge_runs(&block, 3, &mut out);
        assert_eq!(out, [1, 2, 3, 5, 9]);

        let block = [7, 1, 2, 3];
        let mut out = [0; 4];
        merge_runs(&block, 1, &mut out);
        assert_eq!(out, [1, 2, 3, 7]);
    }

    #[test]
    fn merge_with_empty_side() {
        let block = [4, 6, 8];
        let mut out = [0; 3];
        merge_runs(&block, 0, &mut out);
        assert_eq!(out, [4, 6, 8]);
        merge_runs(&block, 3, &mut out);
        assert_eq!(out, [4, 6, 8]);
    }

    #[test]
    fn validate_rejects_empty_only() {
        assert_eq!(validate_len::<i64>(&[]), Err(SortError::InvalidListSize));
        assert_eq!(validate_len(&[0_i64]), Ok(()));
    }

    #[test]
    fn min_max_handles_negatives() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[3]), Some((3, 3)));
        assert_eq!(min_max(&[3, -7, 12, 0]), Some((-7, 12)));
    }
}
