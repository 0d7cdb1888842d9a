use crate::{SortContext, SortError};

use super::common;

pub fn sort(data: &mut [i64], _ctx: &mut SortContext) -> Result<(), SortError> {
    common::validate_len(data)?;

    let len = data.len();
    for i in 0..len {
        let mut pos = i;
        for j in (i + 1)..len {
            if data[j] < data[pos] {
                pos = j;
            }
        }
        data.swap(i, pos);
    }

    Ok(())
}
