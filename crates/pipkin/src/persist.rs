//! Synchronous persistence facade for the game thread.
//!
//! The game loop is single-threaded; persistence happens at a handful of
//! well-defined points (startup resume, creature creation, care saves).
//! [`Store`] owns the Tokio runtime the sqlx pool needs and blocks on each
//! DAO future, so screens call plain synchronous methods.

use anyhow::{Context, Result};
use pipkin_core::db::{self, Database};
use pipkin_core::model::{
    CreatureEvolution, CreatureRaiseType, CreatureType, Gender, Medicine, Sickness,
};
use pipkin_core::CareSession;

/// Reference data loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub kinds: Vec<CreatureType>,
    pub raise_types: Vec<CreatureRaiseType>,
    pub medicines: Vec<Medicine>,
    pub sicknesses: Vec<Sickness>,
}

pub struct Store {
    runtime: tokio::runtime::Runtime,
    db: Database,
}

impl Store {
    pub fn new(runtime: tokio::runtime::Runtime, db: Database) -> Self {
        Store { runtime, db }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        let pool = self.db.pool();
        self.runtime.block_on(async {
            Ok(Catalog {
                kinds: db::catalog::all_creature_types(pool).await?,
                raise_types: db::catalog::all_raise_types(pool).await?,
                medicines: db::catalog::all_medicines(pool).await?,
                sicknesses: db::catalog::all_sicknesses(pool).await?,
            })
        })
    }

    /// Resume the most recently created living creature, if any.
    pub fn resume_session(&self) -> Result<Option<CareSession>> {
        let pool = self.db.pool();
        self.runtime.block_on(async {
            let Some(creature) = db::creatures::latest_alive(pool).await? else {
                return Ok(None);
            };

            let Some(state) = db::states::find_by_creature(pool, creature.id).await? else {
                log::warn!("creature {} has no saved state, starting over", creature.id);
                return Ok(None);
            };

            let evolution = db::evolutions::find_by_id(pool, creature.evolution_id)
                .await?
                .with_context(|| format!("evolution stage {} missing", creature.evolution_id))?;

            let raise_type = db::catalog::find_raise_type(pool, state.raise_type_id)
                .await?
                .with_context(|| format!("raise type {} missing", state.raise_type_id))?;

            let sickness = match state.sickness_id {
                Some(id) => db::catalog::find_sickness(pool, id).await?,
                None => None,
            };

            log::info!("Resuming {} ({})", creature.name, evolution.name);
            Ok(Some(CareSession::resume(
                creature, state, evolution, raise_type, sickness,
            )))
        })
    }

    /// Create a creature with full gauges and persist both its rows.
    /// Returns the live session for it.
    pub fn create_creature(
        &self,
        kind: CreatureType,
        raise_type: CreatureRaiseType,
        name: String,
        gender: Gender,
    ) -> Result<CareSession> {
        let pool = self.db.pool();
        self.runtime.block_on(async {
            let first_stage = db::evolutions::next_stage(pool, kind.id, 0)
                .await?
                .with_context(|| format!("no evolution stages for type {}", kind.id))?;

            let mut creature = pipkin_core::model::Creature::newborn(
                kind,
                first_stage.id,
                name,
                gender,
            );
            db::creatures::create(pool, &mut creature).await?;

            let mut session = CareSession::fresh(creature, first_stage, raise_type);
            let mut state = session.snapshot();
            db::states::create(pool, &mut state).await?;
            session.set_state_id(state.id);

            log::info!(
                "Created creature {} ({})",
                session.creature.name,
                session.creature.id
            );
            Ok(session)
        })
    }

    /// Persist the session: the creature row (alive/death/evolution may have
    /// changed) and its state row.
    pub fn save_session(&self, session: &CareSession) -> Result<()> {
        let pool = self.db.pool();
        self.runtime.block_on(async {
            db::creatures::update(pool, &session.creature).await?;
            db::states::update(pool, &session.snapshot()).await?;
            Ok(())
        })
    }

    /// The stage the creature evolves into next, if any.
    pub fn next_stage(&self, type_id: i64, experience: i64) -> Result<Option<CreatureEvolution>> {
        self.runtime
            .block_on(db::evolutions::next_stage(self.db.pool(), type_id, experience))
            .map_err(Into::into)
    }
}
