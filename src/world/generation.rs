//! World generation by rejection sampling
//!
//! Items are placed in a fixed order (pits, beast, treasure). Each draw picks
//! a uniformly random cell and is rejected if it is the start cell or already
//! holds anything. Every item gets its own retry ceiling so a degenerate plan
//! can never spin forever.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::{GameConfig, PIT_COUNT};
use crate::core::error::{GameError, Result};
use crate::core::types::Coord;
use crate::world::grid::{GRID_HEIGHT, GRID_WIDTH};
use crate::world::World;

/// Concrete positions of every hidden item in one world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub pits: Vec<Coord>,
    pub beast: Coord,
    pub treasure: Coord,
}

impl Layout {
    pub fn new(pits: Vec<Coord>, beast: Coord, treasure: Coord) -> Self {
        Self { pits, beast, treasure }
    }

    fn items(&self) -> impl Iterator<Item = (&'static str, Coord)> + '_ {
        self.pits
            .iter()
            .map(|&p| ("pit", p))
            .chain(std::iter::once(("beast", self.beast)))
            .chain(std::iter::once(("treasure", self.treasure)))
    }

    /// Checks pit count, bounds, start-cell exclusion and pairwise distinctness
    pub fn validate(&self, width: usize, height: usize) -> Result<()> {
        if self.pits.len() != PIT_COUNT {
            return Err(GameError::InvalidConfiguration(format!(
                "layout must hold {} pits, got {}",
                PIT_COUNT,
                self.pits.len()
            )));
        }

        let mut seen = HashSet::new();
        for (item, coord) in self.items() {
            if coord.x < 0 || coord.y < 0 || coord.x as usize >= width || coord.y as usize >= height
            {
                return Err(GameError::InvalidConfiguration(format!(
                    "{} at {} is outside the {}x{} grid",
                    item, coord, width, height
                )));
            }
            if coord.is_origin() {
                return Err(GameError::InvalidConfiguration(format!(
                    "{} may not occupy the start cell",
                    item
                )));
            }
            if !seen.insert(coord) {
                return Err(GameError::InvalidConfiguration(format!(
                    "{} at {} overlaps another item",
                    item, coord
                )));
            }
        }
        Ok(())
    }
}

/// How many of each item a world needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPlan {
    pub pits: usize,
    pub beasts: usize,
    pub treasures: usize,
}

impl PlacementPlan {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            pits: config.pit_count,
            beasts: 1,
            treasures: 1,
        }
    }

    pub fn total(&self) -> usize {
        self.pits + self.beasts + self.treasures
    }
}

/// Fails if a `width` x `height` grid minus the start cell cannot hold the plan
pub fn check_capacity(width: usize, height: usize, plan: &PlacementPlan) -> Result<()> {
    let free = (width * height).saturating_sub(1);
    if plan.total() > free {
        return Err(GameError::InvalidConfiguration(format!(
            "{} items do not fit in a {}x{} grid with {} free cells",
            plan.total(),
            width,
            height,
            free
        )));
    }
    Ok(())
}

/// Produces fresh worlds from a configured placement plan
pub struct WorldGenerator {
    plan: PlacementPlan,
    retry_limit: u32,
    rng: ChaCha8Rng,
}

impl WorldGenerator {
    /// Validates the plan against the fixed grid before any world is drawn
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Self::from_plan(
            PlacementPlan::from_config(config),
            config.placement_retry_limit,
            config.seed,
        )
    }

    fn from_plan(plan: PlacementPlan, retry_limit: u32, seed: Option<u64>) -> Result<Self> {
        check_capacity(GRID_WIDTH, GRID_HEIGHT, &plan)?;

        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Self {
            plan,
            retry_limit,
            rng,
        })
    }

    /// Draws a new layout and builds the world from it
    pub fn generate(&mut self) -> Result<World> {
        let layout = self.generate_layout()?;
        World::from_layout(&layout)
    }

    pub fn generate_layout(&mut self) -> Result<Layout> {
        let mut occupied = HashSet::new();

        let pits = self.place("pit", self.plan.pits, &mut occupied)?;
        let beast = self.place_one("beast", &mut occupied)?;
        let treasure = self.place_one("treasure", &mut occupied)?;

        tracing::debug!(?pits, %beast, %treasure, "Generated layout");
        Ok(Layout::new(pits, beast, treasure))
    }

    fn place_one(&mut self, item: &'static str, occupied: &mut HashSet<Coord>) -> Result<Coord> {
        let mut placed = self.place(item, 1, occupied)?;
        placed
            .pop()
            .ok_or_else(|| exhausted(item, self.retry_limit))
    }

    fn place(
        &mut self,
        item: &'static str,
        count: usize,
        occupied: &mut HashSet<Coord>,
    ) -> Result<Vec<Coord>> {
        let mut positions = Vec::with_capacity(count);

        while positions.len() < count {
            let mut attempts = 0;
            let coord = loop {
                if attempts >= self.retry_limit {
                    return Err(exhausted(item, attempts));
                }
                attempts += 1;

                let candidate = Coord::new(
                    self.rng.gen_range(0..GRID_WIDTH as i32),
                    self.rng.gen_range(0..GRID_HEIGHT as i32),
                );
                if !candidate.is_origin() && !occupied.contains(&candidate) {
                    break candidate;
                }
            };

            occupied.insert(coord);
            positions.push(coord);
        }

        Ok(positions)
    }
}

fn exhausted(item: &str, attempts: u32) -> GameError {
    GameError::InvalidConfiguration(format!(
        "could not place {} after {} attempts",
        item, attempts
    ))
}
