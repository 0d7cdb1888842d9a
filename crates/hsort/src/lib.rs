mod algorithms;
mod error;

pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataTrack {
    FullI64,
    BoundedRange,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    SelectionSort,
    MergeSort,
    MergeSortOptimized,
    HashSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 5] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::SelectionSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::MergeSortOptimized,
    SortAlgorithm::HashSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::MergeSortOptimized => "merge_sort_optimized",
        SortAlgorithm::HashSort => "hash_sort",
    }
}

/// Hash sort walks every value between the minimum and the maximum, so it is
/// only practical when that range is small.
pub fn supports_track(algo: SortAlgorithm, track: DataTrack) -> bool {
    !matches!((algo, track), (SortAlgorithm::HashSort, DataTrack::FullI64))
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub hash_table_scale_num: usize,
    pub hash_table_scale_den: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    hash_table_scale_num: 133,
    hash_table_scale_den: 100,
};

/// Scratch storage the merge sorts borrow for the duration of one call.
///
/// Reusing a context across calls keeps a single allocation alive; the
/// exclusive borrow keeps two sorts from sharing it.
#[derive(Clone, Debug, Default)]
pub struct SortContext {
    pub scratch: Vec<i64>,
}

impl SortContext {
    #[inline]
    pub(crate) fn ensure_scratch(&mut self, len: usize) -> &mut [i64] {
        if self.scratch.len() < len {
            self.scratch.resize(len, 0);
        }
        &mut self.scratch[..len]
    }
}

/// Sorts `data` ascending with the bottom-up merge sort.
pub fn sort(data: &mut [i64]) -> Result<(), SortError> {
    sort_i64(SortAlgorithm::MergeSortOptimized, data)
}

pub fn sort_i64(algo: SortAlgorithm, data: &mut [i64]) -> Result<(), SortError> {
    let mut ctx = SortContext::default();
    sort_i64_with_ctx(algo, data, &mut ctx)
}

pub fn sort_i64_with_ctx(
    algo: SortAlgorithm,
    data: &mut [i64],
    ctx: &mut SortContext,
) -> Result<(), SortError> {
    log::trace!("{}: sorting {} values", algorithm_name(algo), data.len());

    let result = match algo {
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort(data, ctx),
        SortAlgorithm::SelectionSort => algorithms::selection_sort::sort(data, ctx),
        SortAlgorithm::MergeSort => algorithms::merge_sort::sort(data, ctx),
        SortAlgorithm::MergeSortOptimized => algorithms::merge_sort_optimized::sort(data, ctx),
        SortAlgorithm::HashSort => algorithms::hash_sort::sort(data, ctx),
    };

    if let Err(err) = &result {
        log::debug!("{}: rejected input: {err}", algorithm_name(algo));
    }
    result
}
