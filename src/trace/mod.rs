//! Trace recording for sorting algorithms
//!
//! Each algorithm runs to completion against a private copy of its input and
//! pushes every elementary operation it performs into a [`StepSink`]. The
//! resulting [`Trace`] carries no timing: the
//! [`Scheduler`](crate::playback::Scheduler) assigns timing when it replays it.
//!
//! # Recording model
//!
//! ```text
//! input ──clone──▶ working copy ──algorithm──▶ Compare / Swap / Overwrite ──▶ StepSink
//! ```
//!
//! - [`record`]: collect a whole trace synchronously (a `Vec<Step>` sink)
//! - [`live::LiveRun`]: run the algorithm on a worker that blocks after each step
//!   until the scheduler asks for the next one
//!
//! Replaying a trace over a copy of the input with [`replay`] always reproduces
//! the algorithm's final array.

mod algorithms;
pub mod live;

use crate::config::Algorithm;

/// One atomic operation performed by a sorting algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Two indices were compared; nothing changed
    Compare(usize, usize),
    /// The values at two indices were exchanged
    Swap(usize, usize),
    /// The value at an index was replaced directly
    Overwrite(usize, u32),
    /// The index holds its final value
    MarkSorted(usize),
}

impl Step {
    pub fn is_compare(&self) -> bool {
        matches!(self, Step::Compare(..))
    }

    pub fn is_swap(&self) -> bool {
        matches!(self, Step::Swap(..))
    }
}

/// Destination for the steps of an algorithm run
pub trait StepSink {
    fn push(&mut self, step: Step);
}

impl StepSink for Vec<Step> {
    fn push(&mut self, step: Step) {
        Vec::push(self, step);
    }
}

/// The ordered steps of one algorithm run over one input snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    algorithm: Algorithm,
    input_len: usize,
    steps: Vec<Step>,
}

impl Trace {
    /// Wrap steps produced elsewhere. Steps whose indices fall outside
    /// `input_len` are skipped during replay.
    pub fn from_steps(algorithm: Algorithm, input_len: usize, steps: Vec<Step>) -> Self {
        Trace {
            algorithm,
            input_len,
            steps,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Length of the array the trace was recorded against
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of `Compare` steps
    pub fn comparisons(&self) -> usize {
        self.steps.iter().filter(|s| s.is_compare()).count()
    }

    /// Number of `Swap` steps
    pub fn swaps(&self) -> usize {
        self.steps.iter().filter(|s| s.is_swap()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Record the full trace of `algorithm` sorting `input`.
///
/// The caller's slice is never touched. Inputs of length 0 or 1 yield an
/// empty trace.
pub fn record(algorithm: Algorithm, input: &[u32]) -> Trace {
    let mut steps = Vec::new();
    run(algorithm, input.to_vec(), &mut steps);
    Trace {
        algorithm,
        input_len: input.len(),
        steps,
    }
}

/// Run `algorithm` over `values`, pushing every step into `sink`.
/// Returns the sorted working copy.
pub(crate) fn run<S: StepSink + ?Sized>(
    algorithm: Algorithm,
    values: Vec<u32>,
    sink: &mut S,
) -> Vec<u32> {
    let mut tracer = Tracer { values, sink };
    match algorithm {
        Algorithm::Bubble => algorithms::bubble(&mut tracer),
        Algorithm::Selection => algorithms::selection(&mut tracer),
        Algorithm::Insertion => algorithms::insertion(&mut tracer),
        Algorithm::Merge => algorithms::merge(&mut tracer),
        Algorithm::Quick => algorithms::quick(&mut tracer),
        Algorithm::Heap => algorithms::heap(&mut tracer),
    }
    tracer.values
}

/// Apply one step to `values`.
///
/// Returns `false` (and leaves `values` untouched) when the step names an
/// index outside the slice.
pub fn apply(step: &Step, values: &mut [u32]) -> bool {
    let len = values.len();
    match *step {
        Step::Compare(i, j) => i < len && j < len,
        Step::Swap(i, j) => {
            if i >= len || j >= len {
                return false;
            }
            values.swap(i, j);
            true
        }
        Step::Overwrite(i, value) => match values.get_mut(i) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        },
        Step::MarkSorted(i) => i < len,
    }
}

/// Replay `trace` over a copy of `input` and return the resulting array
pub fn replay(trace: &Trace, input: &[u32]) -> Vec<u32> {
    let mut values = input.to_vec();
    for step in trace {
        apply(step, &mut values);
    }
    values
}

/// Working copy plus sink; every mutation goes through here so it is recorded
pub(crate) struct Tracer<'a, S: StepSink + ?Sized> {
    values: Vec<u32>,
    sink: &'a mut S,
}

impl<S: StepSink + ?Sized> Tracer<'_, S> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn value(&self, i: usize) -> u32 {
        self.values[i]
    }

    /// Record a comparison between two indices
    fn compare(&mut self, i: usize, j: usize) {
        self.sink.push(Step::Compare(i, j));
    }

    /// Record `Compare(i, j)` and report whether `values[i] > values[j]`
    fn greater(&mut self, i: usize, j: usize) -> bool {
        self.compare(i, j);
        self.values[i] > self.values[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.sink.push(Step::Swap(i, j));
        self.values.swap(i, j);
    }

    fn overwrite(&mut self, i: usize, value: u32) {
        self.sink.push(Step::Overwrite(i, value));
        self.values[i] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_reference_trace() {
        let input = [5, 3, 8, 1];
        let trace = record(Algorithm::Bubble, &input);

        assert_eq!(
            trace.steps(),
            &[
                Step::Compare(0, 1),
                Step::Swap(0, 1),
                Step::Compare(1, 2),
                Step::Compare(2, 3),
                Step::Swap(2, 3),
                Step::Compare(0, 1),
                Step::Compare(1, 2),
                Step::Swap(1, 2),
                Step::Compare(0, 1),
                Step::Swap(0, 1),
            ]
        );
        assert_eq!(trace.comparisons(), 6);
        assert_eq!(trace.swaps(), 3);
        assert_eq!(replay(&trace, &input), vec![1, 3, 5, 8]);
        // The caller's array is untouched
        assert_eq!(input, [5, 3, 8, 1]);
    }

    #[test]
    fn test_trivial_inputs_record_nothing() {
        for algorithm in Algorithm::ALL {
            assert!(record(algorithm, &[]).is_empty(), "{algorithm}");
            assert!(record(algorithm, &[7]).is_empty(), "{algorithm}");
        }
    }

    #[test]
    fn test_apply_skips_out_of_range_steps() {
        let mut values = vec![1, 2];
        assert!(!apply(&Step::Swap(0, 2), &mut values));
        assert!(!apply(&Step::Overwrite(5, 9), &mut values));
        assert_eq!(values, vec![1, 2]);

        assert!(apply(&Step::Overwrite(1, 9), &mut values));
        assert!(apply(&Step::MarkSorted(0), &mut values));
        assert_eq!(values, vec![1, 9]);
    }

    #[test]
    fn test_longest_trace_stays_bounded() {
        use crate::constants::MAX_LENGTH;

        // Reversed input is bubble sort's worst case: every compare swaps
        let input: Vec<u32> = (0..MAX_LENGTH as u32).rev().collect();
        let trace = record(Algorithm::Bubble, &input);
        let pairs = MAX_LENGTH * (MAX_LENGTH - 1) / 2;

        assert_eq!(trace.comparisons(), pairs);
        assert_eq!(trace.swaps(), pairs);
        let bytes = trace.len() * std::mem::size_of::<Step>();
        assert!(bytes < 128 * 1024 * 1024, "trace uses {bytes} bytes");
    }

    #[test]
    fn test_run_returns_sorted_working_copy() {
        let mut sink = Vec::new();
        let sorted = run(Algorithm::Heap, vec![4, 1, 3, 1], &mut sink);
        assert_eq!(sorted, vec![1, 1, 3, 4]);
        assert!(!sink.is_empty());
    }
}
