//! Scheduled tasks: delayed callbacks rebuilt as an explicit queue.
//!
//! The queue is polled once per update with the elapsed time; a task
//! whose delay has run out reports its kind back to the caller. There
//! are no callbacks and no timer thread, so cancellation is just
//! removal from the queue.

/// What a task does when it fires. The queue never interprets kinds;
/// session logic matches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// One step of the pause-resume countdown (repeating).
    CountdownTick,
    /// Full session reset after game over (one-shot).
    Restart,
}

#[derive(Debug, Clone)]
pub struct ScheduledTask {
    pub kind: TaskKind,
    /// Time left before the next fire. Signed so overshoot from a large
    /// dt carries into the next interval.
    pub remaining_ms: i64,
    /// Re-arm period for repeating tasks.
    pub interval_ms: u64,
    pub repeat: bool,
}

/// FIFO of pending tasks, polled once per update.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    tasks: Vec<ScheduledTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task `delay_ms` from now. Repeating tasks re-fire
    /// every `delay_ms` until cancelled.
    pub fn schedule(&mut self, kind: TaskKind, delay_ms: u64, repeat: bool) {
        self.tasks.push(ScheduledTask {
            kind,
            remaining_ms: delay_ms as i64,
            interval_ms: delay_ms,
            repeat,
        });
    }

    /// Advance all tasks by `dt_ms` and collect the kinds that fired,
    /// in queue order. One-shot tasks are removed on fire; repeating
    /// tasks re-arm, carrying any overshoot so long frames do not drift
    /// the cadence.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<TaskKind> {
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            self.tasks[i].remaining_ms -= dt_ms as i64;

            let mut remove = false;
            while self.tasks[i].remaining_ms <= 0 {
                fired.push(self.tasks[i].kind);
                if self.tasks[i].repeat {
                    self.tasks[i].remaining_ms += self.tasks[i].interval_ms as i64;
                } else {
                    remove = true;
                    break;
                }
            }

            if remove {
                self.tasks.remove(i);
            } else {
                i += 1;
            }
        }
        fired
    }

    /// Cancel every pending task of `kind`. Returns true if any was
    /// removed.
    pub fn cancel(&mut self, kind: TaskKind) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.kind != kind);
        self.tasks.len() != before
    }

    pub fn is_scheduled(&self, kind: TaskKind) -> bool {
        self.tasks.iter().any(|t| t.kind == kind)
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
