//! DAO functions for the `CREATURE_EVOLUTION` table.

use sqlx::{FromRow, SqlitePool};

use crate::error::Result;
use crate::model::CreatureEvolution;

#[derive(Debug, FromRow)]
struct EvolutionRow {
    id: i64,
    type_id: i64,
    name: String,
    max_health: i64,
    max_bowel: i64,
    max_discipline: i64,
    max_hunger: i64,
    max_happy: i64,
    max_experience: i64,
}

impl From<EvolutionRow> for CreatureEvolution {
    fn from(row: EvolutionRow) -> Self {
        CreatureEvolution {
            id: row.id,
            type_id: row.type_id,
            name: row.name,
            max_health: row.max_health,
            max_bowel: row.max_bowel,
            max_discipline: row.max_discipline,
            max_hunger: row.max_hunger,
            max_happy: row.max_happy,
            max_experience: row.max_experience,
        }
    }
}

const SELECT: &str = "
    SELECT CE_ID AS id,
           CT_ID AS type_id,
           CE_NAME AS name,
           CE_MAX_HEALTH AS max_health,
           CE_MAX_BOWEL AS max_bowel,
           CE_MAX_DISCIPLINE AS max_discipline,
           CE_MAX_HUNGER AS max_hunger,
           CE_MAX_HAPPY AS max_happy,
           CE_MAX_EXPERIENCE AS max_experience
    FROM CREATURE_EVOLUTION
";

pub async fn create(pool: &SqlitePool, evolution: &mut CreatureEvolution) -> Result<()> {
    let result = sqlx::query(
        "INSERT INTO CREATURE_EVOLUTION \
         (CE_ID, CT_ID, CE_NAME, CE_MAX_HEALTH, CE_MAX_BOWEL, CE_MAX_DISCIPLINE, \
          CE_MAX_HUNGER, CE_MAX_HAPPY, CE_MAX_EXPERIENCE) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(if evolution.id > 0 { Some(evolution.id) } else { None })
    .bind(evolution.type_id)
    .bind(&evolution.name)
    .bind(evolution.max_health)
    .bind(evolution.max_bowel)
    .bind(evolution.max_discipline)
    .bind(evolution.max_hunger)
    .bind(evolution.max_happy)
    .bind(evolution.max_experience)
    .execute(pool)
    .await?;

    evolution.id = result.last_insert_rowid();
    Ok(())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<CreatureEvolution>> {
    let query = format!("{SELECT} WHERE CE_ID = ?");
    let row = sqlx::query_as::<_, EvolutionRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(CreatureEvolution::from))
}

/// All stages for a creature type, ordered by experience threshold.
pub async fn stages_for_type(pool: &SqlitePool, type_id: i64) -> Result<Vec<CreatureEvolution>> {
    let query = format!("{SELECT} WHERE CT_ID = ? ORDER BY CE_MAX_EXPERIENCE");
    let rows = sqlx::query_as::<_, EvolutionRow>(&query)
        .bind(type_id)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(CreatureEvolution::from).collect())
}

/// The first stage whose threshold lies above the given experience, i.e.
/// the stage a creature evolves into next. `None` at the final stage.
pub async fn next_stage(
    pool: &SqlitePool,
    type_id: i64,
    experience: i64,
) -> Result<Option<CreatureEvolution>> {
    let query =
        format!("{SELECT} WHERE CT_ID = ? AND CE_MAX_EXPERIENCE > ? ORDER BY CE_MAX_EXPERIENCE LIMIT 1");
    let row = sqlx::query_as::<_, EvolutionRow>(&query)
        .bind(type_id)
        .bind(experience)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(CreatureEvolution::from))
}
