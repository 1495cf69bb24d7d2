// Textbook comparison sorts, instrumented through `Tracer`

use super::{StepSink, Tracer};

/// Bubble sort without the early-exit check: every pass runs to the end of the
/// unsorted prefix, so an input of length n costs n(n-1)/2 comparisons.
pub(super) fn bubble<S: StepSink + ?Sized>(t: &mut Tracer<'_, S>) {
    let n = t.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if t.greater(j, j + 1) {
                t.swap(j, j + 1);
            }
        }
    }
}

/// Selection sort. The closing swap of every pass is recorded even when the
/// minimum is already in place.
pub(super) fn selection<S: StepSink + ?Sized>(t: &mut Tracer<'_, S>) {
    let n = t.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            t.compare(j, min);
            if t.value(j) < t.value(min) {
                min = j;
            }
        }
        t.swap(i, min);
    }
}

/// Insertion sort by shifting. The key leaves a hole that moves left; each
/// shift check compares the element left of the hole with the hole.
pub(super) fn insertion<S: StepSink + ?Sized>(t: &mut Tracer<'_, S>) {
    let n = t.len();
    for i in 1..n {
        let key = t.value(i);
        let mut hole = i;
        while hole > 0 {
            t.compare(hole - 1, hole);
            let left = t.value(hole - 1);
            if left <= key {
                break;
            }
            t.overwrite(hole, left);
            hole -= 1;
        }
        t.overwrite(hole, key);
    }
}

/// Top-down merge sort over half-open ranges
pub(super) fn merge<S: StepSink + ?Sized>(t: &mut Tracer<'_, S>) {
    let n = t.len();
    merge_sort(t, 0, n);
}

fn merge_sort<S: StepSink + ?Sized>(t: &mut Tracer<'_, S>, lo: usize, hi: usize) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_sort(t, lo, mid);
    merge_sort(t, mid, hi);
    merge_runs(t, lo, mid, hi);
}

/// Merge `[lo, mid)` and `[mid, hi)`. Compares name positions in the
/// pre-merge array; every placed element is an overwrite of the target slot.
fn merge_runs<S: StepSink + ?Sized>(t: &mut Tracer<'_, S>, lo: usize, mid: usize, hi: usize) {
    let aux: Vec<u32> = t.values[lo..hi].to_vec();
    let (mut i, mut j, mut k) = (lo, mid, lo);

    while i < mid && j < hi {
        t.compare(i, j);
        // `<=` keeps equal elements in input order
        if aux[i - lo] <= aux[j - lo] {
            t.overwrite(k, aux[i - lo]);
            i += 1;
        } else {
            t.overwrite(k, aux[j - lo]);
            j += 1;
        }
        k += 1;
    }
    while i < mid {
        t.overwrite(k, aux[i - lo]);
        i += 1;
        k += 1;
    }
    while j < hi {
        t.overwrite(k, aux[j - lo]);
        j += 1;
        k += 1;
    }
}

/// Quick sort with the Lomuto partition (pivot = last element of the range).
///
/// Ranges are kept on an explicit stack so sorted inputs cannot exhaust the
/// call stack; the left range is always finished before the right one, which
/// matches the recursive order step for step.
pub(super) fn quick<S: StepSink + ?Sized>(t: &mut Tracer<'_, S>) {
    let n = t.len();
    if n < 2 {
        return;
    }
    let mut pending = vec![(0usize, n - 1)];
    while let Some((low, high)) = pending.pop() {
        let p = partition(t, low, high);
        if p + 1 < high {
            pending.push((p + 1, high));
        }
        if p > low + 1 {
            pending.push((low, p - 1));
        }
    }
}

fn partition<S: StepSink + ?Sized>(t: &mut Tracer<'_, S>, low: usize, high: usize) -> usize {
    let mut store = low;
    for j in low..high {
        t.compare(j, high);
        if t.value(j) <= t.value(high) {
            t.swap(store, j);
            store += 1;
        }
    }
    t.swap(store, high);
    store
}

/// Heap sort: bottom-up max-heap build, then repeated root extraction
pub(super) fn heap<S: StepSink + ?Sized>(t: &mut Tracer<'_, S>) {
    let n = t.len();
    for i in (0..n / 2).rev() {
        sift_down(t, n, i);
    }
    for end in (1..n).rev() {
        t.swap(0, end);
        sift_down(t, end, 0);
    }
}

fn sift_down<S: StepSink + ?Sized>(t: &mut Tracer<'_, S>, n: usize, mut root: usize) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < n && t.greater(left, largest) {
            largest = left;
        }
        if right < n && t.greater(right, largest) {
            largest = right;
        }
        if largest == root {
            return;
        }
        t.swap(root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Algorithm;
    use crate::trace::{record, replay, Step};

    fn sorted(values: &[u32]) -> Vec<u32> {
        let mut v = values.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_all_algorithms_sort_awkward_inputs() {
        let inputs: [&[u32]; 6] = [
            &[2, 1],
            &[4, 4, 4, 4, 4],
            &[1, 2, 3, 4, 5, 6],
            &[9, 8, 7, 6, 5, 4, 3],
            &[3, 1, 3, 1, 2, 2, 0, 3],
            &[10, 400, 10, 399, 11, 200, 200, 57, 1],
        ];
        for algorithm in Algorithm::ALL {
            for input in inputs {
                let trace = record(algorithm, input);
                assert_eq!(
                    replay(&trace, input),
                    sorted(input),
                    "{algorithm} on {input:?}"
                );
            }
        }
    }

    #[test]
    fn test_selection_counts() {
        // n(n-1)/2 comparisons and one swap per pass, no-op swaps included
        let trace = record(Algorithm::Selection, &[1, 2, 3, 4, 5]);
        assert_eq!(trace.comparisons(), 10);
        assert_eq!(trace.swaps(), 4);
        assert!(trace.iter().any(|s| *s == Step::Swap(0, 0)));
    }

    #[test]
    fn test_insertion_shifts_with_overwrites() {
        let trace = record(Algorithm::Insertion, &[3, 1, 2]);
        assert_eq!(
            trace.steps(),
            &[
                Step::Compare(0, 1),
                Step::Overwrite(1, 3),
                Step::Overwrite(0, 1),
                Step::Compare(1, 2),
                Step::Overwrite(2, 3),
                Step::Compare(0, 1),
                Step::Overwrite(1, 2),
            ]
        );
        assert_eq!(trace.swaps(), 0);
    }

    #[test]
    fn test_merge_never_swaps() {
        let trace = record(Algorithm::Merge, &[8, 3, 5, 1, 9, 2, 7, 4]);
        assert_eq!(trace.swaps(), 0);
        // Every merge level writes every element exactly once
        let overwrites = trace
            .iter()
            .filter(|s| matches!(s, Step::Overwrite(..)))
            .count();
        assert_eq!(overwrites, 8 * 3);
    }

    #[test]
    fn test_quick_compares_against_last_element() {
        let trace = record(Algorithm::Quick, &[3, 1, 2]);
        assert_eq!(
            trace.steps(),
            &[
                Step::Compare(0, 2),
                Step::Compare(1, 2),
                Step::Swap(0, 1),
                Step::Swap(1, 2),
            ]
        );
    }

    #[test]
    fn test_quick_handles_sorted_input() {
        let input: Vec<u32> = (0..2000).collect();
        let trace = record(Algorithm::Quick, &input);
        assert_eq!(trace.comparisons(), 2000 * 1999 / 2);
        assert_eq!(replay(&trace, &input), input);
    }

    #[test]
    fn test_heap_sorts_reverse_input() {
        let input = [5, 4, 3, 2, 1];
        let trace = record(Algorithm::Heap, &input);
        assert_eq!(trace.steps()[0], Step::Compare(3, 1));
        assert_eq!(replay(&trace, &input), vec![1, 2, 3, 4, 5]);
    }
}
