//! Hooks into the phases of a simulation step.

/// Receives a callback at each phase boundary of [`SpringSolver::step`].
///
/// Every hook defaults to doing nothing, so implementors pick the phases they
/// care about.
///
/// [`SpringSolver::step`]: crate::solver::SpringSolver::step
pub trait StepObserver {
    /// Called after field and spring forces have been accumulated.
    fn on_forces(&mut self) {}

    /// Called after all point masses have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after the collision pass with the number of resolved contacts.
    fn on_collisions(&mut self, _resolved: usize) {}

    /// Called last, after bounds handling.
    fn on_step_complete(&mut self) {}
}

/// Ignores every hook.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Counts steps and resolved contacts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub steps: usize,
    pub contacts: usize,
}

impl StepObserver for StepStats {
    fn on_collisions(&mut self, resolved: usize) {
        self.contacts += resolved;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
