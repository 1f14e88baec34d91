use std::sync::mpsc;
use std::thread;

mod threadpool;
pub use crate::multicore_sort::threadpool::ThreadPool;

use crate::error::SortError;
use crate::single_core_sort::{merge, merge_sort, BinsPositions, SortTraits};

/// Recursive merge sort that forks the two halves onto scoped threads for the
/// first `depth` levels, then continues sequentially with
/// [`merge_sort`]. Both halves are joined before they are merged, so the
/// output is identical to the sequential sort.
pub fn merge_sort_parallel<T>(input: &[T], depth: usize) -> Vec<T>
where
    T: SortTraits + Send + Sync,
{
    if depth == 0 || input.len() <= 1 {
        return merge_sort(input);
    }
    let (left, right) = input.split_at(input.len() / 2);
    let (left_sorted, right_sorted) = thread::scope(|s| {
        let handle = s.spawn(|| merge_sort_parallel(left, depth - 1));
        let right_sorted = merge_sort_parallel(right, depth - 1);
        let left_sorted = handle
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
        (left_sorted, right_sorted)
    });
    merge(&left_sorted, &right_sorted)
}

/// Bottom-up merge sort where each pass hands every pair of bins to a
/// [`ThreadPool`] of `threads` workers.
///
/// Jobs own a copy of their bins and send the merged run back over a channel
/// tagged with its pair index, so no locking of the values is needed. The
/// pass waits for every job before the bin size doubles.
pub fn merge_sort_threadpool<T>(input: &[T], threads: usize) -> Result<Vec<T>, SortError>
where
    T: SortTraits + Send + 'static,
{
    let threadpool = ThreadPool::new(threads)?;
    let length = input.len();
    let mut values = input.to_vec();
    let mut bin_size = 1;
    while bin_size < length {
        // Channel to keep track of the pool progress through the tasks
        let (task_progress_write, task_progress_read) = mpsc::channel();
        let mut num_tasks = 0;
        let mut merged_up_to = 0;
        while let Some(BinsPositions { start, mid, end }) =
            BinsPositions::nth(num_tasks, bin_size, length)
        {
            let mut bin1 = values[start..end].to_vec();
            let bin2 = bin1.split_off(mid - start);
            let task_progress_write = task_progress_write.clone();
            let id = num_tasks;
            threadpool.execute(move || {
                // The receiver only goes away if the pass already failed
                let _ = task_progress_write.send((id, merge(&bin1, &bin2)));
            })?;
            merged_up_to = end;
            num_tasks += 1;
        }
        // Only the jobs hold senders now, so a dead worker ends the wait below
        drop(task_progress_write);

        let mut runs: Vec<Option<Vec<T>>> = vec![None; num_tasks];
        for _ in 0..num_tasks {
            let (id, run) = task_progress_read
                .recv()
                .map_err(|_| SortError::WorkerDisconnected)?;
            runs[id] = Some(run);
        }

        let mut next = Vec::with_capacity(length);
        for run in runs {
            next.extend(run.ok_or(SortError::WorkerDisconnected)?);
        }
        // A lone trailing bin has no partner this pass
        next.extend_from_slice(&values[merged_up_to..]);
        values = next;
        bin_size *= 2;
    }
    Ok(values)
}
