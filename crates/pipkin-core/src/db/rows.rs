//! Row structs decoded straight from query results.
//!
//! Queries alias the contract's column names (`CI_ID` etc.) onto these
//! field names; the `From` impls convert epoch-millisecond dates and
//! integer genders into the model types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::model::{Creature, CreatureState, CreatureType, Gender};

fn millis_to_datetime(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_default()
}

#[derive(Debug, FromRow)]
pub(crate) struct CreatureRow {
    pub id: i64,
    pub type_id: i64,
    pub type_name: String,
    pub evolution_id: i64,
    pub name: String,
    pub birth_ms: i64,
    pub death_ms: Option<i64>,
    pub alive: bool,
    pub gender: i64,
}

impl From<CreatureRow> for Creature {
    fn from(row: CreatureRow) -> Self {
        Creature {
            id: row.id,
            kind: CreatureType {
                id: row.type_id,
                name: row.type_name,
            },
            evolution_id: row.evolution_id,
            name: row.name,
            birth_date: millis_to_datetime(row.birth_ms),
            death_date: row.death_ms.map(millis_to_datetime),
            alive: row.alive,
            gender: Gender::from_db(row.gender),
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct CreatureStateRow {
    pub id: i64,
    pub creature_id: i64,
    pub raise_type_id: i64,
    pub sickness_id: Option<i64>,
    pub health: i64,
    pub bowel: i64,
    pub discipline: i64,
    pub hunger: i64,
    pub happy: i64,
    pub sick: bool,
    pub experience: i64,
}

impl From<CreatureStateRow> for CreatureState {
    fn from(row: CreatureStateRow) -> Self {
        CreatureState {
            id: row.id,
            creature_id: row.creature_id,
            raise_type_id: row.raise_type_id,
            sickness_id: row.sickness_id,
            health: row.health,
            bowel: row.bowel,
            discipline: row.discipline,
            hunger: row.hunger,
            happy: row.happy,
            sick: row.sick,
            experience: row.experience,
        }
    }
}
