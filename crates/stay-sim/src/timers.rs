//! Timed tasks: delayed side effects advanced by the frame clock.
//!
//! Each task counts up to its duration and then yields its action exactly once.
//! Nothing suspends; the owner polls `advance` every tick.

/// Deferred encounter actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// Recoil lead time elapsed: set the loss latch.
    LatchLoss,
    /// Loss animation elapsed: signal the loss to the session.
    SignalLoss,
}

/// A count-up timer carrying a completion action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedTask {
    pub action: TaskAction,
    pub elapsed: f32,
    pub duration: f32,
}

impl TimedTask {
    pub fn new(action: TaskAction, duration: f32) -> Self {
        Self {
            action,
            elapsed: 0.0,
            duration: duration.max(0.0),
        }
    }

    pub fn is_due(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Pending tasks in start order.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<TimedTask>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, action: TaskAction, duration: f32) {
        self.tasks.push(TimedTask::new(action, duration));
    }

    /// Whether a task with this action is pending.
    pub fn is_pending(&self, action: TaskAction) -> bool {
        self.tasks.iter().any(|t| t.action == action)
    }

    pub fn elapsed(&self, action: TaskAction) -> Option<f32> {
        self.tasks
            .iter()
            .find(|t| t.action == action)
            .map(|t| t.elapsed)
    }

    pub fn cancel(&mut self, action: TaskAction) {
        self.tasks.retain(|t| t.action != action);
    }

    /// Advance every task by `dt` and remove the ones that came due, returning
    /// their actions in start order.
    pub fn advance(&mut self, dt: f32) -> Vec<TaskAction> {
        let dt = dt.max(0.0);
        let mut due = Vec::new();
        self.tasks.retain_mut(|task| {
            task.elapsed += dt;
            if task.is_due() {
                due.push(task.action);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
