pub(crate) mod common;
pub(crate) mod hash_sort;
pub(crate) mod insertion_sort;
pub(crate) mod merge_sort;
pub(crate) mod merge_sort_optimized;
pub(crate) mod selection_sort;
