use crate::{SortContext, SortError, TUNED_PARAMS};

use super::common;

// Chained hash table keyed by `value mod table_len`, then a walk over every
// value between the minimum and maximum. Time is linear in both the input
// length and the value range.
pub fn sort(data: &mut [i64], _ctx: &mut SortContext) -> Result<(), SortError> {
    common::validate_len(data)?;

    let len = data.len();
    let table_len = (len.saturating_mul(TUNED_PARAMS.hash_table_scale_num)
        / TUNED_PARAMS.hash_table_scale_den)
        .max(1);

    let mut table: Vec<Vec<i64>> = vec![Vec::new(); table_len];
    for &x in data.iter() {
        table[bucket_index(x, table_len)].push(x);
    }

    let Some((low, high)) = common::min_max(data) else {
        return Ok(());
    };

    let mut out = 0usize;
    let mut value = low;
    loop {
        for &x in &table[bucket_index(value, table_len)] {
            if x == value {
                data[out] = x;
                out += 1;
            }
        }
        if out == len || value == high {
            break;
        }
        value += 1;
    }

    debug_assert_eq!(out, len);
    Ok(())
}

#[inline]
fn bucket_index(value: i64, table_len: usize) -> usize {
    (value as i128).rem_euclid(table_len as i128) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_land_in_table() {
        for table_len in [1_usize, 2, 7, 133] {
            for value in [-1_i64, -8, i64::MIN, i64::MAX, 0] {
                assert!(bucket_index(value, table_len) < table_len);
            }
        }
    }

    #[test]
    fn sorts_mixed_sign_narrow_range() {
        let mut ctx = SortContext::default();
        let mut data = vec![3, -2, 0, 3, -5, 1, -2, 4];
        sort(&mut data, &mut ctx).unwrap();
        assert_eq!(data, vec![-5, -2, -2, 0, 1, 3, 3, 4]);
    }

    #[test]
    fn stops_at_domain_edge() {
        let mut ctx = SortContext::default();
        let mut data = vec![i64::MAX, i64::MAX - 2, i64::MAX - 1];
        sort(&mut data, &mut ctx).unwrap();
        assert_eq!(data, vec![i64::MAX - 2, i64::MAX - 1, i64::MAX]);
    }
}
