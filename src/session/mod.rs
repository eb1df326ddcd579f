//! Game session - one owner for all mutable game state
//!
//! A session runs the turn cycle: resolve the action, refresh percepts,
//! capture a snapshot. Every call completes before returning, so the state
//! seen after an action is final.

pub mod snapshot;

pub use snapshot::{ActionResult, AgentView, CellView, Occupant, SessionSnapshot};

use crate::agent::Agent;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::{SessionId, TurnDirection};
use crate::simulation::{
    compute_percepts, resolve, Action, ActionOutcome, PerceptSet, PerceptUpdate, ScoreTracker,
    SessionStatus,
};
use crate::world::{Layout, World, WorldGenerator};

pub struct GameSession {
    id: SessionId,
    config: GameConfig,
    generator: WorldGenerator,
    /// Replayed by `new_session` instead of drawing a random world
    fixed_layout: Option<Layout>,
    world: World,
    agent: Agent,
    tracker: ScoreTracker,
    percepts: PerceptSet,
}

impl GameSession {
    /// Validates `config` and starts the first session on a random world
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut generator = WorldGenerator::new(&config)?;
        let world = generator.generate()?;
        Ok(Self::start(config, generator, None, world))
    }

    /// Starts a session on a known world; `new_session` replays it
    pub fn with_layout(config: GameConfig, layout: Layout) -> Result<Self> {
        let generator = WorldGenerator::new(&config)?;
        let world = World::from_layout(&layout)?;
        Ok(Self::start(config, generator, Some(layout), world))
    }

    fn start(
        config: GameConfig,
        generator: WorldGenerator,
        fixed_layout: Option<Layout>,
        world: World,
    ) -> Self {
        let agent = Agent::new();
        let percepts = compute_percepts(agent.position, &world);
        let session = Self {
            id: SessionId::new(),
            tracker: ScoreTracker::new(config.scoring.clone()),
            config,
            generator,
            fixed_layout,
            world,
            agent,
            percepts,
        };
        tracing::info!(
            session = %session.id,
            seeded = session.config.seed.is_some(),
            fixed = session.fixed_layout.is_some(),
            "New session"
        );
        session
    }

    /// Throws away the current game and starts a fresh one
    pub fn new_session(&mut self) -> Result<SessionSnapshot> {
        let world = match &self.fixed_layout {
            Some(layout) => World::from_layout(layout)?,
            None => self.generator.generate()?,
        };

        self.id = SessionId::new();
        self.agent = Agent::new();
        self.tracker = ScoreTracker::new(self.config.scoring.clone());
        self.percepts = compute_percepts(self.agent.position, &world);
        self.world = world;

        tracing::info!(session = %self.id, "New session");
        Ok(self.snapshot())
    }

    pub fn turn_left(&mut self) -> ActionResult {
        self.perform(Action::Turn(TurnDirection::Left))
    }

    pub fn turn_right(&mut self) -> ActionResult {
        self.perform(Action::Turn(TurnDirection::Right))
    }

    pub fn move_forward(&mut self) -> ActionResult {
        self.perform(Action::MoveForward)
    }

    pub fn grab(&mut self) -> ActionResult {
        self.perform(Action::Grab)
    }

    pub fn shoot(&mut self) -> ActionResult {
        self.perform(Action::Shoot)
    }

    /// Runs one full turn cycle for `action`
    pub fn perform(&mut self, action: Action) -> ActionResult {
        let resolution = resolve(action, &mut self.world, &mut self.agent, &mut self.tracker);

        match resolution.outcome {
            ActionOutcome::SessionOver => {
                tracing::warn!(session = %self.id, ?action, "Action after session end ignored");
            }
            ActionOutcome::NoProjectile => {
                tracing::debug!(session = %self.id, "Shoot with no arrow ignored");
            }
            ActionOutcome::Applied => {
                self.percepts = if self.tracker.status().is_over() {
                    PerceptSet::empty()
                } else {
                    match resolution.percepts {
                        PerceptUpdate::Clear => PerceptSet::empty(),
                        PerceptUpdate::Recompute => compute_percepts(self.agent.position, &self.world),
                        PerceptUpdate::Keep => self.percepts,
                    }
                };
                tracing::debug!(
                    session = %self.id,
                    ?action,
                    events = ?resolution.events,
                    delta = resolution.score_delta,
                    score = self.tracker.score(),
                    "Action resolved"
                );
            }
        }

        if resolution.outcome == ActionOutcome::Applied && self.tracker.status().is_over() {
            tracing::info!(
                session = %self.id,
                status = ?self.tracker.status(),
                score = self.tracker.score(),
                "Session over"
            );
        }

        ActionResult {
            action,
            outcome: resolution.outcome,
            events: resolution.events,
            score_delta: resolution.score_delta,
            snapshot: self.snapshot(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(
            self.id,
            &self.world,
            &self.agent,
            self.tracker.score(),
            self.tracker.status(),
            self.tracker.death_cause(),
            self.percepts,
        )
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn score(&self) -> i32 {
        self.tracker.score()
    }

    pub fn status(&self) -> SessionStatus {
        self.tracker.status()
    }

    pub fn percepts(&self) -> PerceptSet {
        self.percepts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Coord;
    use crate::simulation::GameEvent;

    fn session() -> GameSession {
        // Pit right above the start cell, so the start cell has a breeze
        GameSession::with_layout(
            GameConfig::default(),
            Layout::new(
                vec![Coord::new(0, 1), Coord::new(3, 3)],
                Coord::new(2, 2),
                Coord::new(2, 0),
            ),
        )
        .unwrap()
    }

    #[test]
    fn test_initial_snapshot() {
        let s = session();
        let snap = s.snapshot();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.status, SessionStatus::InProgress);
        assert!(snap.percepts.breeze);
        assert_eq!(snap.agent.arrows, 1);
        assert!(snap.cell(Coord::ORIGIN).unwrap().visited);
        assert!(snap.cell(Coord::ORIGIN).unwrap().current);
        assert!(snap.cells.iter().all(|c| c.occupant.is_none()));
    }

    #[test]
    fn test_turn_clears_percepts() {
        let mut s = session();
        let r = s.turn_left();
        assert!(r.snapshot.percepts.is_empty());
    }

    #[test]
    fn test_missed_shot_keeps_percepts() {
        let mut s = session();
        let r = s.shoot();
        assert_eq!(r.events, vec![GameEvent::Shot]);
        assert!(r.snapshot.percepts.breeze);
    }

    #[test]
    fn test_bump_keeps_percepts() {
        let mut s = GameSession::with_layout(
            GameConfig::default(),
            Layout::new(
                vec![Coord::new(3, 1), Coord::new(0, 3)],
                Coord::new(2, 2),
                Coord::new(1, 2),
            ),
        )
        .unwrap();
        for _ in 0..3 {
            s.move_forward();
        }
        assert!(s.percepts().breeze);

        let r = s.move_forward();
        assert_eq!(r.events, vec![GameEvent::Bump]);
        assert_eq!(r.snapshot.agent.position, Coord::new(3, 0));
        assert!(r.snapshot.percepts.breeze);
    }

    #[test]
    fn test_loss_reveals_board_and_clears_percepts() {
        let mut s = session();
        s.turn_left();
        let r = s.move_forward();
        assert_eq!(r.snapshot.status, SessionStatus::Lost);
        assert!(r.snapshot.percepts.is_empty());
        assert_eq!(
            r.snapshot.cell(Coord::new(0, 1)).unwrap().occupant,
            Some(Occupant::Pit)
        );
        assert_eq!(
            r.snapshot.cell(Coord::new(2, 2)).unwrap().occupant,
            Some(Occupant::Beast { alive: true })
        );
    }

    #[test]
    fn test_new_session_resets_everything() {
        let mut s = session();
        let first_id = s.id();
        s.shoot();
        s.turn_left();
        s.move_forward();
        assert!(s.status().is_over());

        let snap = s.new_session().unwrap();
        assert_ne!(snap.session_id, first_id);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.status, SessionStatus::InProgress);
        assert_eq!(snap.agent.arrows, 1);
        assert!(s.world().beast.alive);
        assert_eq!(snap.cells.iter().filter(|c| c.visited).count(), 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = session().snapshot().to_json().unwrap();
        assert!(json.contains("\"status\": \"InProgress\""));
    }
}
