use crate::{SortContext, SortError};

use super::common;

/// A contiguous range of the input awaiting a split or a merge.
#[derive(Clone, Copy, Debug)]
struct Block {
    index: usize,
    len: usize,
    merge: bool,
}

// Top-down merge sort driven by an explicit stack instead of recursion. A block
// is pushed back flagged for merging before its halves, so both halves are
// sorted by the time it is popped again.
pub fn sort(data: &mut [i64], ctx: &mut SortContext) -> Result<(), SortError> {
    common::validate_len(data)?;

    let len = data.len();
    let tmp = ctx.ensure_scratch(len);

    let mut stack = vec![Block {
        index: 0,
        len,
        merge: false,
    }];

    while let Some(mut block) = stack.pop() {
        let left_len = block.len / 2;
        if block.merge {
            let range = block.index..(block.index + block.len);
            let out = &mut tmp[..block.len];
            common::merge_runs(&data[range.clone()], left_len, out);
            data[range].copy_from_slice(out);
            continue;
        }

        let right_len = block.len - left_len;
        block.merge = true;
        stack.push(block);
        if left_len > 1 {
            stack.push(Block {
                index: block.index,
                len: left_len,
                merge: false,
            });
        }
        if right_len > 1 {
            stack.push(Block {
                index: block.index + left_len,
                len: right_len,
                merge: false,
            });
        }
    }

    Ok(())
}
