use crate::{SortContext, SortError};

use super::common;

// Bottom-up merge sort. Runs of `stack_size` are merged pairwise into blocks of
// twice that size, doubling every pass, through one scratch buffer of `len`.
pub fn sort(data: &mut [i64], ctx: &mut SortContext) -> Result<(), SortError> {
    common::validate_len(data)?;

    let len = data.len();
    let tmp = ctx.ensure_scratch(len);

    let mut stack_size = 1usize;
    while stack_size < len {
        merge_pass(data, tmp, stack_size);
        stack_size <<= 1;
    }

    Ok(())
}

fn merge_pass(data: &mut [i64], tmp: &mut [i64], stack_size: usize) {
    let len = data.len();
    let full_block = stack_size * 2;
    let num_blocks = len / full_block + 1;

    for i in 0..num_blocks {
        let index = full_block * i;
        let mut block_size = full_block;

        // The last block may be short, or empty when `len` is a multiple of
        // `full_block`. With no right run it is still sorted from the previous pass.
        if i == num_blocks - 1 {
            block_size = len - index;
            if block_size <= stack_size {
                break;
            }
        }

        let block = &mut data[index..(index + block_size)];
        let out = &mut tmp[..block_size];
        common::merge_runs(block, stack_size, out);
        block.copy_from_slice(out);
    }
}
