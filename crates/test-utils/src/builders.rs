#![allow(dead_code)]

use depdag::sched::Scheduler;

/// Builder for `Scheduler<String>` to simplify test setup.
///
/// Records registrations in order, so tests get the same first-seen index
/// assignment a real input stream would produce.
pub struct SchedulerBuilder {
    scheduler: Scheduler<String>,
}

impl SchedulerBuilder {
    pub fn new() -> Self {
        Self {
            scheduler: Scheduler::new(),
        }
    }

    /// Register a task without prerequisites.
    pub fn with_task(mut self, task: &str) -> Self {
        self.scheduler.add_task(task.to_string());
        self
    }

    /// Record that `task` depends on `prerequisite`.
    pub fn with_prerequisite(mut self, task: &str, prerequisite: &str) -> Self {
        self.scheduler
            .add_prerequisite(task.to_string(), prerequisite.to_string());
        self
    }

    /// Build a chain where each task depends on the one before it:
    /// `with_chain(&["A", "B", "C"])` makes B depend on A and C on B.
    pub fn with_chain(mut self, tasks: &[&str]) -> Self {
        for pair in tasks.windows(2) {
            self.scheduler
                .add_prerequisite(pair[1].to_string(), pair[0].to_string());
        }
        self
    }

    pub fn build(self) -> Scheduler<String> {
        self.scheduler
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
