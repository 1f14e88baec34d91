// Trait aliasing for readibility
// https://stackoverflow.com/questions/26070559/is-there-any-way-to-create-a-type-alias-for-multiple-traits
pub trait SortTraits: Clone + Ord {}
impl<T: Clone + Ord> SortTraits for T {}

/// Sorts `input` with the classic top-down merge sort and returns a new vector.
///
/// The input is split at `len / 2`, both halves are sorted recursively and the
/// results are combined with [`merge`]. Empty and single element inputs are
/// returned as a copy.
pub fn merge_sort<T: SortTraits>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }
    let mid = input.len() / 2;
    let (left, right) = input.split_at(mid);
    merge(&merge_sort(left), &merge_sort(right))
}

/// Merges two ascending slices into a fresh ascending vector.
///
/// On ties the element from `left` goes first, which keeps equal elements in
/// their left-to-right order. Both inputs must already be sorted; this is not
/// checked.
pub fn merge<T: SortTraits>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut id1 = 0;
    let mut id2 = 0;
    while id1 < left.len() && id2 < right.len() {
        if left[id1] <= right[id2] {
            merged.push(left[id1].clone());
            id1 += 1;
        } else {
            merged.push(right[id2].clone());
            id2 += 1;
        }
    }
    // At most one of these is non empty
    merged.extend_from_slice(&left[id1..]);
    merged.extend_from_slice(&right[id2..]);
    merged
}

struct SortVecPair<T: SortTraits> {
    bin_size: usize,
    length: usize,
    values: Vec<T>,
    buffer: Vec<T>,
}

pub(crate) struct BinsPositions {
    pub(crate) start: usize,
    pub(crate) mid: usize,
    pub(crate) end: usize,
}

impl BinsPositions {
    /// Positions of the `id`-th pair of bins for a pass of width `bin_size`.
    /// The second bin is truncated at `length`. Returns `None` once the first
    /// bin would have no partner.
    pub(crate) fn nth(id: usize, bin_size: usize, length: usize) -> Option<BinsPositions> {
        let start = id * 2 * bin_size;
        let mid = start + bin_size;
        if mid >= length {
            return None;
        }
        Some(BinsPositions {
            start,
            mid,
            end: (mid + bin_size).min(length),
        })
    }
}

impl<T: SortTraits> SortVecPair<T> {
    fn new(unsorted_vec: &[T]) -> SortVecPair<T> {
        SortVecPair {
            bin_size: 1,
            length: unsorted_vec.len(),
            values: unsorted_vec.to_vec(),
            buffer: unsorted_vec.to_vec(),
        }
    }

    fn merge_pass(&mut self) {
        let mut id = 0;
        let mut merged_up_to = 0;
        while let Some(BinsPositions { start, mid, end }) =
            BinsPositions::nth(id, self.bin_size, self.length)
        {
            let bin1 = &self.values[start..mid];
            let bin2 = &self.values[mid..end];
            let buf = &mut self.buffer[start..end];
            merge_bins(bin1, bin2, buf);
            merged_up_to = end;
            id += 1;
        }
        // A lone trailing bin has no partner this pass, carry it over as is
        self.buffer[merged_up_to..].clone_from_slice(&self.values[merged_up_to..]);
    }

    fn finish_merge(&mut self) {
        // The buffer now holds the merged bins
        std::mem::swap(&mut self.values, &mut self.buffer);
        // Double the bin size to prepare for the next merging iteration
        self.bin_size *= 2;
    }

    fn get_bin_size(&self) -> usize {
        self.bin_size
    }

    fn get_values(self) -> Vec<T> {
        self.values
    }
}

/// Iterative merge sort: merges runs of width 1, 2, 4, ... until a single run
/// covers the input. Uses no recursion, so the stack stays flat for any input
/// size, and yields exactly the same output as [`merge_sort`].
pub fn merge_sort_bottom_up<T: SortTraits>(input: &[T]) -> Vec<T> {
    let mut sort_vec_pair = SortVecPair::new(input);
    while sort_vec_pair.get_bin_size() < input.len() {
        sort_vec_pair.merge_pass();
        sort_vec_pair.finish_merge();
    }
    sort_vec_pair.get_values()
}

/// Merges `bin1` and `bin2` into `buf`, which must be exactly as long as both
/// bins together.
pub(crate) fn merge_bins<T: SortTraits>(bin1: &[T], bin2: &[T], buf: &mut [T]) {
    debug_assert_eq!(bin1.len() + bin2.len(), buf.len());
    let mut id1 = 0;
    let mut id2 = 0;
    for min_val in buf {
        if id1 >= bin1.len() {
            *min_val = bin2[id2].clone();
            id2 += 1;
        } else if id2 >= bin2.len() {
            *min_val = bin1[id1].clone();
            id1 += 1;
        } else if bin1[id1] <= bin2[id2] {
            *min_val = bin1[id1].clone();
            id1 += 1;
        } else {
            *min_val = bin2[id2].clone();
            id2 += 1;
        }
    }
}
