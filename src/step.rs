use std::time::Duration;

use crate::maze::Grid;

/// Receives read-only grid snapshots as the engines make progress.
///
/// Any `FnMut(&Grid)` closure is a sink. To hand frames to another thread, clone
/// the grid inside the closure and send it over a channel.
pub trait StepSink {
    fn on_step(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> StepSink for F {
    fn on_step(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// Sink that drops every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSteps;

impl StepSink for NoSteps {
    fn on_step(&mut self, _grid: &Grid) {}
}

/// Publishes frames to a sink and paces them.
///
/// The interval is the only suspension point of the engines: after a frame is
/// handed to the sink the calling thread sleeps for it. A zero interval means no
/// pacing, and generators skip their intermediate frames altogether.
pub struct StepEmitter<'a> {
    sink: &'a mut dyn StepSink,
    interval: Duration,
    frames: usize,
}

impl<'a> StepEmitter<'a> {
    pub fn new(sink: &'a mut dyn StepSink, interval: Duration) -> Self {
        Self {
            sink,
            interval,
            frames: 0,
        }
    }

    /// Whether intermediate generation frames should be emitted.
    pub fn is_animated(&self) -> bool {
        !self.interval.is_zero()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of frames emitted so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Hands a snapshot to the sink, then waits for the interval.
    pub fn emit(&mut self, grid: &Grid) {
        self.sink.on_step(grid);
        self.frames += 1;
        if !self.interval.is_zero() {
            std::thread::sleep(self.interval);
        }
    }

    /// Emits only when animated. Used after each carving action.
    pub fn emit_animated(&mut self, grid: &Grid) {
        if self.is_animated() {
            self.emit(grid);
        }
    }
}
