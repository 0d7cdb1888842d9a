use crate::{SortContext, SortError};

use super::common;

pub fn sort(data: &mut [i64], _ctx: &mut SortContext) -> Result<(), SortError> {
    common::validate_len(data)?;
    insertion_sort(data);
    Ok(())
}

#[inline]
pub fn insertion_sort(data: &mut [i64]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            let prev = data[j - 1];
            if prev <= key {
                break;
            }
            data[j] = prev;
            j -= 1;
        }
        data[j] = key;
    }
}
