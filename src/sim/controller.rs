use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::context::AgentView;
use crate::model::AgentAction;

/// A decision policy bound to one agent.
///
/// Object-safe so controllers can be stored as `Box<dyn Controller>`. A
/// controller only sees the [`AgentView`] it is given and answers with an
/// action; it may keep private state between calls but must return promptly.
pub trait Controller {
    fn decide(&mut self, view: &AgentView<'_>) -> AgentAction;
}

impl<C: Controller + ?Sized> Controller for Box<C> {
    fn decide(&mut self, view: &AgentView<'_>) -> AgentAction {
        (**self).decide(view)
    }
}

/// Wrap a closure as a [`Controller`].
pub fn from_fn<F>(f: F) -> FnController<F>
where
    F: FnMut(&AgentView<'_>) -> AgentAction,
{
    FnController(f)
}

/// Controller built by [`from_fn`].
pub struct FnController<F>(F);

impl<F> Controller for FnController<F>
where
    F: FnMut(&AgentView<'_>) -> AgentAction,
{
    fn decide(&mut self, view: &AgentView<'_>) -> AgentAction {
        (self.0)(view)
    }
}

/// Picks uniformly among the five moves.
///
/// Seeded walkers are reproducible: the same seed yields the same sequence of
/// actions regardless of what the view contains.
#[derive(Debug, Clone)]
pub struct RandomWalkController {
    rng: SmallRng,
}

impl RandomWalkController {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Unseeded walker; not reproducible across runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl Controller for RandomWalkController {
    fn decide(&mut self, _view: &AgentView<'_>) -> AgentAction {
        let idx = self.rng.random_range(0..AgentAction::MOVES.len());
        AgentAction::MOVES[idx].clone()
    }
}

/// Replays a fixed list of actions, then stays put forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedController {
    script: VecDeque<AgentAction>,
}

impl ScriptedController {
    pub fn new(script: impl IntoIterator<Item = AgentAction>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Controller for ScriptedController {
    fn decide(&mut self, _view: &AgentView<'_>) -> AgentAction {
        self.script.pop_front().unwrap_or_default()
    }
}
