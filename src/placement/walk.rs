use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::connector::{Catalog, StructureKind};
use crate::error::{OperationError, Result};
use crate::math::Isometry3;

use super::{
    ConnectorRef, Frontier, FrontierEntry, GeneratorConfig, Join, Layout, RejectReason,
    RoomValidator, StagedStructure, StructureId, StructureInstance, StructureStore, Termination,
    WalkStats,
};

/// Result of a single branch attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BranchOutcome {
    /// The candidate was placed.
    Committed(StructureId),
    /// The candidate had no connector of the opposite polarity.
    NoCompatibleConnector,
    /// The candidate room failed validation and was discarded.
    Rejected(RejectReason),
}

/// Grows a dungeon from a start room by repeatedly attaching rooms and
/// corridors to open connectors.
///
/// Each iteration consumes one randomly chosen open connector, whether or
/// not any branch built from it succeeds. Room placements are validated
/// against the minimum room distance and the area bounds; corridor
/// placements are not.
pub struct DungeonWalk<'a> {
    catalog: &'a Catalog,
    config: &'a GeneratorConfig,
}

#[derive(Debug, Default)]
struct WalkState {
    store: StructureStore,
    frontier: Frontier,
    joins: Vec<Join>,
    stats: WalkStats,
}

impl WalkState {
    fn room_count(&self) -> usize {
        1 + self.stats.rooms_placed
    }
}

/// The walk's random decisions, one method per draw.
trait WalkDraws {
    /// Index into the open frontier slots.
    fn frontier_slot(&mut self, open: usize) -> usize;
    /// Branch count in `1..=max_branch`.
    fn branch_count(&mut self, max_branch: usize) -> usize;
    /// `true` for a room branch, `false` for a corridor.
    fn room_branch(&mut self) -> bool;
    /// Index into the corridor templates.
    fn corridor(&mut self, corridors: usize) -> usize;
    /// Index into the candidate's compatible connectors.
    fn candidate_connector(&mut self, compatible: usize) -> usize;
}

/// Uniform draws from an `Rng`.
struct RngDraws<'r, R: ?Sized>(&'r mut R);

impl<R: Rng + ?Sized> WalkDraws for RngDraws<'_, R> {
    fn frontier_slot(&mut self, open: usize) -> usize {
        self.0.gen_range(0..open)
    }

    fn branch_count(&mut self, max_branch: usize) -> usize {
        self.0.gen_range(1..=max_branch)
    }

    fn room_branch(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    fn corridor(&mut self, corridors: usize) -> usize {
        self.0.gen_range(0..corridors)
    }

    fn candidate_connector(&mut self, compatible: usize) -> usize {
        self.0.gen_range(0..compatible)
    }
}

impl<'a> DungeonWalk<'a> {
    /// Creates a new `DungeonWalk` operation.
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: &'a GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    /// Executes the walk with a `ChaCha8Rng` seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn execute(&self) -> Result<Layout> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.execute_with_rng(&mut rng)
    }

    /// Executes the walk drawing from `rng`.
    ///
    /// Per iteration the draws are: frontier slot, branch count, then for
    /// each branch the room/corridor coin, the corridor index (corridors
    /// only) and the candidate connector (when one is compatible).
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn execute_with_rng(&self, rng: &mut impl Rng) -> Result<Layout> {
        self.run(&mut RngDraws(rng))
    }

    fn run(&self, draws: &mut impl WalkDraws) -> Result<Layout> {
        self.config.validate()?;

        let mut state = WalkState::default();
        let room = self.catalog.room();
        let start = state
            .store
            .insert(StructureInstance::from_template(room, Isometry3::identity()));
        for (connector, c) in room.connectors().iter().enumerate() {
            state.frontier.push_open(
                ConnectorRef {
                    structure: start,
                    connector,
                },
                c.polarity(),
            );
        }

        let termination = loop {
            if state.room_count() >= self.config.room_count {
                break Termination::TargetReached;
            }
            let open = state.frontier.open_slots();
            if open.is_empty() {
                break Termination::FrontierExhausted;
            }
            if state.stats.iterations >= self.config.max_iterations {
                break Termination::IterationCap;
            }

            let slot = open[draws.frontier_slot(open.len())];
            let Some(base) = state.frontier.consume(slot) else {
                break Termination::FrontierExhausted;
            };
            state.stats.iterations += 1;

            let target = state
                .store
                .get(base.at.structure)?
                .connector_world_frame(base.at.connector)
                .ok_or_else(|| OperationError::EntityNotFound("connector".into()))?;

            let branches = draws.branch_count(self.config.max_branch);
            for _ in 0..branches {
                if state.room_count() >= self.config.room_count {
                    break;
                }
                let outcome = self.branch(draws, &base, &target, &mut state);
                tracing::debug!(base = ?base.at, ?outcome, "branch");
            }
        };

        tracing::info!(
            rooms = state.room_count(),
            corridors = state.stats.corridors_placed,
            iterations = state.stats.iterations,
            ?termination,
            "dungeon walk finished"
        );

        Ok(Layout {
            open_connectors: state.frontier.open(),
            structures: state.store,
            start,
            joins: state.joins,
            termination,
            stats: state.stats,
        })
    }

    /// Attempts one branch off `base`, whose world frame is `target`.
    fn branch(
        &self,
        draws: &mut impl WalkDraws,
        base: &FrontierEntry,
        target: &Isometry3,
        state: &mut WalkState,
    ) -> BranchOutcome {
        state.stats.branches += 1;

        let template = if draws.room_branch() {
            self.catalog.room()
        } else {
            let corridors = self.catalog.corridors();
            &corridors[draws.corridor(corridors.len())]
        };

        let compatible = template.compatible_with(base.polarity);
        if compatible.is_empty() {
            state.stats.skipped_polarity += 1;
            return BranchOutcome::NoCompatibleConnector;
        }
        let joined = compatible[draws.candidate_connector(compatible.len())];
        let Some(staged) = StagedStructure::attach(template, joined, target) else {
            return BranchOutcome::NoCompatibleConnector;
        };

        let kind = staged.kind();
        if kind == StructureKind::Room {
            let validator = RoomValidator::new(&state.store, self.config);
            if let Err(reason) = validator.check(&staged.position()) {
                match reason {
                    RejectReason::TooClose { .. } => state.stats.rejected_too_close += 1,
                    RejectReason::OutOfBounds => state.stats.rejected_out_of_bounds += 1,
                }
                return BranchOutcome::Rejected(reason);
            }
        }

        let attached = staged.commit(&mut state.store, &mut state.frontier);
        state.joins.push(Join {
            base: base.at,
            attached,
        });
        match kind {
            StructureKind::Room => state.stats.rooms_placed += 1,
            StructureKind::Corridor => state.stats.corridors_placed += 1,
        }
        BranchOutcome::Committed(attached.structure)
    }
}
