//! Action resolution
//!
//! Each action charges its cost, mutates agent and world, and reports the
//! events it produced. Lethal-cell and escape checks run right after any
//! action that can leave the agent on a new cell.

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::core::types::{Coord, TurnDirection};
use crate::simulation::scoring::{DeathCause, Ending, ScoreTracker, SessionStatus};
use crate::world::World;

/// The five agent actions (two of them are turns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Turn(TurnDirection),
    MoveForward,
    Grab,
    Shoot,
}

/// One-shot signals produced by an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    Turned(TurnDirection),
    Move { to: Coord },
    Bump,
    Grab,
    /// The arrow left the bow, hit or miss
    Shot,
    Scream,
    Died(DeathCause),
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    Applied,
    /// Rejected because the session already ended
    SessionOver,
    /// Shoot without an arrow: nothing happens
    NoProjectile,
}

/// What the session should do with the displayed percepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerceptUpdate {
    Clear,
    Recompute,
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: ActionOutcome,
    pub events: Vec<GameEvent>,
    pub score_delta: i32,
    pub percepts: PerceptUpdate,
}

impl Resolution {
    fn declined(outcome: ActionOutcome) -> Self {
        Self {
            outcome,
            events: Vec::new(),
            score_delta: 0,
            percepts: PerceptUpdate::Keep,
        }
    }
}

/// Applies `action` to the session state. Declines without mutation when the
/// session is over or the action is unavailable.
pub fn resolve(
    action: Action,
    world: &mut World,
    agent: &mut Agent,
    tracker: &mut ScoreTracker,
) -> Resolution {
    if !tracker.status().accepts_actions() {
        return Resolution::declined(ActionOutcome::SessionOver);
    }
    if action == Action::Shoot && !agent.has_arrow {
        return Resolution::declined(ActionOutcome::NoProjectile);
    }

    let score_before = tracker.score();
    let mut events = Vec::new();
    let percepts = match action {
        Action::Turn(direction) => turn(direction, agent, tracker, &mut events),
        Action::MoveForward => move_forward(world, agent, tracker, &mut events),
        Action::Grab => grab(world, agent, tracker, &mut events),
        Action::Shoot => shoot(world, agent, tracker, &mut events),
    };

    Resolution {
        outcome: ActionOutcome::Applied,
        events,
        score_delta: tracker.score().saturating_sub(score_before),
        percepts,
    }
}

fn turn(
    direction: TurnDirection,
    agent: &mut Agent,
    tracker: &mut ScoreTracker,
    events: &mut Vec<GameEvent>,
) -> PerceptUpdate {
    tracker.charge(tracker.scoring().turn);
    agent.turn(direction);
    events.push(GameEvent::Turned(direction));
    PerceptUpdate::Clear
}

fn move_forward(
    world: &mut World,
    agent: &mut Agent,
    tracker: &mut ScoreTracker,
    events: &mut Vec<GameEvent>,
) -> PerceptUpdate {
    tracker.charge(tracker.scoring().move_forward);

    let target = agent.facing_cell();
    if !world.grid.in_bounds(target) {
        events.push(GameEvent::Bump);
        return PerceptUpdate::Keep;
    }

    agent.position = target;
    world.grid.mark_visited(target);
    events.push(GameEvent::Move { to: target });

    if !check_escape(agent, tracker, events) {
        check_contact(world, agent, tracker, events);
    }
    PerceptUpdate::Recompute
}

fn grab(
    world: &mut World,
    agent: &mut Agent,
    tracker: &mut ScoreTracker,
    events: &mut Vec<GameEvent>,
) -> PerceptUpdate {
    tracker.charge(tracker.scoring().grab);

    if !world.take_treasure(agent.position) {
        return PerceptUpdate::Keep;
    }
    agent.has_treasure = true;
    events.push(GameEvent::Grab);

    check_contact(world, agent, tracker, events);
    PerceptUpdate::Recompute
}

fn shoot(
    world: &mut World,
    agent: &mut Agent,
    tracker: &mut ScoreTracker,
    events: &mut Vec<GameEvent>,
) -> PerceptUpdate {
    if !agent.take_arrow() {
        return PerceptUpdate::Keep;
    }
    tracker.charge(tracker.scoring().shoot);
    events.push(GameEvent::Shot);

    // No obstruction: the arrow flies to the edge of the grid
    if agent.is_in_line_of_fire(world.beast.position) && world.kill_beast() {
        events.push(GameEvent::Scream);
        return PerceptUpdate::Recompute;
    }
    PerceptUpdate::Keep
}

/// Ends the session if the agent stands on the start cell holding the treasure
fn check_escape(agent: &Agent, tracker: &mut ScoreTracker, events: &mut Vec<GameEvent>) -> bool {
    if agent.position.is_origin()
        && agent.has_treasure
        && tracker.finish(Ending::Escaped) == Some(SessionStatus::Won)
    {
        events.push(GameEvent::Won);
        return true;
    }
    false
}

/// Ends the session if the agent's cell holds the live beast or a pit
fn check_contact(
    world: &World,
    agent: &Agent,
    tracker: &mut ScoreTracker,
    events: &mut Vec<GameEvent>,
) -> bool {
    let cause = if world.has_live_beast(agent.position) {
        DeathCause::Beast
    } else if world.has_pit(agent.position) {
        DeathCause::Pit
    } else {
        return false;
    };

    if tracker.finish(Ending::Died(cause)).is_some() {
        events.push(GameEvent::Died(cause));
        return true;
    }
    false
}
