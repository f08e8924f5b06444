//! Cancellable interval tasks driven by caller-supplied elapsed time.
//! The frame loop owns the clock; the scheduler only tracks when each task is due.

use std::mem;
use std::time::Duration;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskHandle(u64);

#[derive(Clone, Debug)]
struct IntervalTask {
    handle: TaskHandle,
    interval: Duration,
    until_next: Duration,
}

#[derive(Debug, Default)]
pub struct IntervalScheduler {
    next_id: u64,
    tasks: Vec<IntervalTask>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a task that fires every `interval`, first after one full interval.
    pub fn schedule_every(&mut self, interval: Duration) -> TaskHandle {
        let interval = interval.max(MIN_INTERVAL);
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push(IntervalTask { handle, interval, until_next: interval });
        handle
    }

    /// Returns whether a live task was removed.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.handle != handle);
        self.tasks.len() != before
    }

    pub fn is_active(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|task| task.handle == handle)
    }

    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn interval_of(&self, handle: TaskHandle) -> Option<Duration> {
        self.tasks.iter().find(|task| task.handle == handle).map(|task| task.interval)
    }

    /// Fires the earliest task due within `remaining` (ties go to the earlier handle),
    /// moves the clock to that firing, and deducts the wait from `remaining`. Returns
    /// `None` once nothing is due, after spending the rest of the budget. Callers may
    /// cancel tasks between calls; cancelled tasks never fire again.
    pub fn fire_next(&mut self, remaining: &mut Duration) -> Option<TaskHandle> {
        let due = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.until_next <= *remaining)
            .min_by_key(|(_, task)| (task.until_next, task.handle))
            .map(|(index, task)| (index, task.until_next));

        let Some((index, wait)) = due else {
            let rest = mem::take(remaining);
            for task in &mut self.tasks {
                task.until_next -= rest;
            }
            return None;
        };

        for task in &mut self.tasks {
            task.until_next -= wait;
        }
        *remaining -= wait;
        let fired = &mut self.tasks[index];
        fired.until_next = fired.interval;
        Some(fired.handle)
    }
}
