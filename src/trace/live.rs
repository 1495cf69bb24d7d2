//! Live step source
//!
//! Instead of recording the whole trace first, a [`LiveRun`] runs the algorithm
//! on a worker thread connected to the scheduler by a zero-capacity channel.
//! Every `send` is a rendezvous: the worker stays suspended after emitting a
//! step until the scheduler pulls the next one, so the algorithm advances
//! exactly as fast as playback does.
//!
//! Dropping the run disconnects the channel. The worker notices on its next
//! send, stops emitting, and finishes sorting its private copy silently.

use super::{run, Step, StepSink};
use crate::config::Algorithm;
use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

struct ChannelSink {
    sender: SyncSender<Step>,
    connected: bool,
}

impl StepSink for ChannelSink {
    fn push(&mut self, step: Step) {
        if self.connected && self.sender.send(step).is_err() {
            self.connected = false;
        }
    }
}

/// An algorithm running on a worker, one step at a time
#[derive(Debug)]
pub struct LiveRun {
    algorithm: Algorithm,
    input_len: usize,
    receiver: Receiver<Step>,
    pulled: usize,
}

impl LiveRun {
    /// Start `algorithm` on a private copy of `input`
    pub fn spawn(algorithm: Algorithm, input: &[u32]) -> io::Result<Self> {
        let (sender, receiver) = mpsc::sync_channel(0);
        let values = input.to_vec();

        thread::Builder::new()
            .name(format!("sortty-live-{}", algorithm.key()))
            .spawn(move || {
                let mut sink = ChannelSink {
                    sender,
                    connected: true,
                };
                run(algorithm, values, &mut sink);
            })?;

        Ok(LiveRun {
            algorithm,
            input_len: input.len(),
            receiver,
            pulled: 0,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Steps handed out so far
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    /// Resume the worker until it emits its next step.
    /// `None` once the algorithm has finished.
    pub fn next_step(&mut self) -> Option<Step> {
        let step = self.receiver.recv().ok()?;
        self.pulled += 1;
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::record;

    #[test]
    fn test_live_run_matches_recorded_trace() {
        let input = [9, 2, 7, 2, 5, 1, 8];
        for algorithm in Algorithm::ALL {
            let mut live = LiveRun::spawn(algorithm, &input).unwrap();
            let mut steps = Vec::new();
            while let Some(step) = live.next_step() {
                steps.push(step);
            }
            assert_eq!(steps, record(algorithm, &input).steps(), "{algorithm}");
            assert_eq!(live.pulled(), steps.len());
        }
    }

    #[test]
    fn test_dropping_live_run_mid_sort() {
        let input: Vec<u32> = (0..200).rev().collect();
        let mut live = LiveRun::spawn(Algorithm::Bubble, &input).unwrap();
        assert_eq!(live.next_step(), Some(Step::Compare(0, 1)));
        assert_eq!(live.next_step(), Some(Step::Swap(0, 1)));
        // Returns immediately; the worker is not joined
        drop(live);
    }
}
