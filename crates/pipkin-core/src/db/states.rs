//! DAO functions for the `CREATURE_STATE` table.

use sqlx::SqlitePool;

use super::rows::CreatureStateRow;
use crate::error::Result;
use crate::model::CreatureState;

const SELECT: &str = "
    SELECT CS_ID AS id,
           CI_ID AS creature_id,
           CRT_ID AS raise_type_id,
           S_ID AS sickness_id,
           CS_HEALTH AS health,
           CS_BOWEL AS bowel,
           CS_DISCIPLINE AS discipline,
           CS_HUNGER AS hunger,
           CS_HAPPY AS happy,
           CS_SICK AS sick,
           CS_EXPERIENCE AS experience
    FROM CREATURE_STATE
";

/// Insert a state row; the assigned rowid is written back onto the model.
pub async fn create(pool: &SqlitePool, state: &mut CreatureState) -> Result<()> {
    let result = sqlx::query(
        "INSERT INTO CREATURE_STATE \
         (CS_ID, CI_ID, CRT_ID, S_ID, CS_HEALTH, CS_BOWEL, CS_DISCIPLINE, \
          CS_HUNGER, CS_HAPPY, CS_SICK, CS_EXPERIENCE) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(if state.id > 0 { Some(state.id) } else { None })
    .bind(state.creature_id)
    .bind(state.raise_type_id)
    .bind(state.sickness_id)
    .bind(state.health)
    .bind(state.bowel)
    .bind(state.discipline)
    .bind(state.hunger)
    .bind(state.happy)
    .bind(state.sick)
    .bind(state.experience)
    .execute(pool)
    .await?;

    state.id = result.last_insert_rowid();
    Ok(())
}

pub async fn update(pool: &SqlitePool, state: &CreatureState) -> Result<()> {
    sqlx::query(
        "UPDATE CREATURE_STATE \
         SET CI_ID = ?, CRT_ID = ?, S_ID = ?, CS_HEALTH = ?, CS_BOWEL = ?, \
             CS_DISCIPLINE = ?, CS_HUNGER = ?, CS_HAPPY = ?, CS_SICK = ?, \
             CS_EXPERIENCE = ? \
         WHERE CS_ID = ?",
    )
    .bind(state.creature_id)
    .bind(state.raise_type_id)
    .bind(state.sickness_id)
    .bind(state.health)
    .bind(state.bowel)
    .bind(state.discipline)
    .bind(state.hunger)
    .bind(state.happy)
    .bind(state.sick)
    .bind(state.experience)
    .bind(state.id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_creature(pool: &SqlitePool, creature_id: i64) -> Result<Option<CreatureState>> {
    let query = format!("{SELECT} WHERE CI_ID = ?");
    let row = sqlx::query_as::<_, CreatureStateRow>(&query)
        .bind(creature_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(CreatureState::from))
}

pub async fn delete_for_creature(pool: &SqlitePool, creature_id: i64) -> Result<()> {
    sqlx::query("DELETE FROM CREATURE_STATE WHERE CI_ID = ?")
        .bind(creature_id)
        .execute(pool)
        .await?;
    Ok(())
}
