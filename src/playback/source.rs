// Where the scheduler pulls its steps from

use crate::config::Algorithm;
use crate::trace::live::LiveRun;
use crate::trace::{Step, Trace};

/// A recorded trace with a read cursor, or a live algorithm run
#[derive(Debug)]
pub enum StepSource {
    Recorded { trace: Trace, cursor: usize },
    Live(LiveRun),
}

impl StepSource {
    pub fn recorded(trace: Trace) -> Self {
        StepSource::Recorded { trace, cursor: 0 }
    }

    pub fn live(run: LiveRun) -> Self {
        StepSource::Live(run)
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            StepSource::Recorded { trace, .. } => trace.algorithm(),
            StepSource::Live(run) => run.algorithm(),
        }
    }

    pub fn input_len(&self) -> usize {
        match self {
            StepSource::Recorded { trace, .. } => trace.input_len(),
            StepSource::Live(run) => run.input_len(),
        }
    }

    /// Known only for recorded traces
    pub fn total_steps(&self) -> Option<usize> {
        match self {
            StepSource::Recorded { trace, .. } => Some(trace.len()),
            StepSource::Live(_) => None,
        }
    }

    pub(crate) fn next_step(&mut self) -> Option<Step> {
        match self {
            StepSource::Recorded { trace, cursor } => {
                let step = *trace.get(*cursor)?;
                *cursor += 1;
                Some(step)
            }
            StepSource::Live(run) => run.next_step(),
        }
    }
}

impl From<Trace> for StepSource {
    fn from(trace: Trace) -> Self {
        StepSource::recorded(trace)
    }
}
