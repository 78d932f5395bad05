//! Model types backing the eight persisted tables.
//!
//! Dates are epoch milliseconds on disk (the persisted contract) and
//! `chrono::DateTime<Utc>` in memory; the conversion lives in the row
//! structs in [`crate::db`].

use chrono::{DateTime, Utc};

/// Biological sex of a creature, stored as an integer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn to_db(self) -> i64 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }

    pub fn from_db(value: i64) -> Self {
        if value == 0 { Gender::Female } else { Gender::Male }
    }
}

/// A species entry from `CREATURE_TYPE`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureType {
    pub id: i64,
    pub name: String,
}

/// A living (or once-living) pet from `CREATURE_INFO`, joined with its type.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub id: i64,
    pub kind: CreatureType,
    pub evolution_id: i64,
    pub name: String,
    pub birth_date: DateTime<Utc>,
    pub death_date: Option<DateTime<Utc>>,
    pub alive: bool,
    pub gender: Gender,
}

impl Creature {
    /// A newborn creature, not yet persisted (`id` 0 means unassigned).
    pub fn newborn(kind: CreatureType, evolution_id: i64, name: String, gender: Gender) -> Self {
        Creature {
            id: 0,
            kind,
            evolution_id,
            name,
            birth_date: Utc::now(),
            death_date: None,
            alive: true,
            gender,
        }
    }

    /// Age at the given instant, in whole seconds.
    pub fn age_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.birth_date).num_seconds().max(0)
    }
}

/// Mutable gauges for one creature, from `CREATURE_STATE`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureState {
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

/// An evolution stage from `CREATURE_EVOLUTION`: the stat maxima a creature
/// carries while in this stage, and the experience at which it leaves it.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureEvolution {
    pub id: i64,
    pub type_id: i64,
    pub name: String,
    pub max_health: i64,
    pub max_bowel: i64,
    pub max_discipline: i64,
    pub max_hunger: i64,
    pub max_happy: i64,
    pub max_experience: i64,
}

/// A raising style from `CREATURE_RAISE_TYPE`; the multiplier scales
/// experience gain.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureRaiseType {
    pub id: i64,
    pub name: String,
    pub multiplier: f64,
}

/// A cure from `MEDICINE`.
#[derive(Debug, Clone, PartialEq)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
}

/// An ailment from `SICKNESS`; `medicine_id` names the medicine that cures it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sickness {
    pub id: i64,
    pub medicine_id: i64,
    pub name: String,
}

/// An experience band from `EXPERIENCE`, bounding the final-stage threshold
/// for one creature type.
#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub id: i64,
    pub type_id: i64,
    pub min_xp: i64,
    pub max_xp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_db_roundtrip() {
        assert_eq!(Gender::from_db(Gender::Female.to_db()), Gender::Female);
        assert_eq!(Gender::from_db(Gender::Male.to_db()), Gender::Male);
    }

    #[test]
    fn test_newborn_defaults() {
        let kind = CreatureType {
            id: 1,
            name: "DEFAULT".to_string(),
        };
        let creature = Creature::newborn(kind, 1, "Mochi".to_string(), Gender::Female);
        assert_eq!(creature.id, 0);
        assert!(creature.alive);
        assert!(creature.death_date.is_none());
        assert_eq!(creature.age_seconds(creature.birth_date), 0);
    }
}
