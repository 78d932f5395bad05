//! DAO functions for the `CREATURE_INFO` table.

use sqlx::SqlitePool;

use super::rows::CreatureRow;
use crate::error::Result;
use crate::model::Creature;

const SELECT_JOINED: &str = "
    SELECT ci.CI_ID AS id,
           ci.CT_ID AS type_id,
           ct.CT_NAME AS type_name,
           ci.CE_ID AS evolution_id,
           ci.CI_NAME AS name,
           ci.CI_BIRTH_DATE AS birth_ms,
           ci.CI_DEATH_DATE AS death_ms,
           ci.CI_ALIVE AS alive,
           ci.CI_GENDER AS gender
    FROM CREATURE_INFO ci
    JOIN CREATURE_TYPE ct ON ci.CT_ID = ct.CT_ID
";

/// Insert a creature; a zero id is left to SQLite to assign, and the
/// assigned rowid is written back onto the model.
pub async fn create(pool: &SqlitePool, creature: &mut Creature) -> Result<()> {
    let result = sqlx::query(
        "INSERT INTO CREATURE_INFO \
         (CI_ID, CT_ID, CE_ID, CI_NAME, CI_BIRTH_DATE, CI_DEATH_DATE, CI_ALIVE, CI_GENDER) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(if creature.id > 0 { Some(creature.id) } else { None })
    .bind(creature.kind.id)
    .bind(creature.evolution_id)
    .bind(&creature.name)
    .bind(creature.birth_date.timestamp_millis())
    .bind(creature.death_date.map(|d| d.timestamp_millis()))
    .bind(creature.alive)
    .bind(creature.gender.to_db())
    .execute(pool)
    .await?;

    creature.id = result.last_insert_rowid();
    log::debug!("created creature {} ({})", creature.id, creature.name);
    Ok(())
}

pub async fn update(pool: &SqlitePool, creature: &Creature) -> Result<()> {
    sqlx::query(
        "UPDATE CREATURE_INFO \
         SET CT_ID = ?, CE_ID = ?, CI_NAME = ?, CI_BIRTH_DATE = ?, \
             CI_DEATH_DATE = ?, CI_ALIVE = ?, CI_GENDER = ? \
         WHERE CI_ID = ?",
    )
    .bind(creature.kind.id)
    .bind(creature.evolution_id)
    .bind(&creature.name)
    .bind(creature.birth_date.timestamp_millis())
    .bind(creature.death_date.map(|d| d.timestamp_millis()))
    .bind(creature.alive)
    .bind(creature.gender.to_db())
    .bind(creature.id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM CREATURE_INFO WHERE CI_ID = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Creature>> {
    let query = format!("{SELECT_JOINED} WHERE ci.CI_ID = ?");
    let row = sqlx::query_as::<_, CreatureRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Creature::from))
}

pub async fn all(pool: &SqlitePool) -> Result<Vec<Creature>> {
    let query = format!("{SELECT_JOINED} ORDER BY ci.CI_ID");
    let rows = sqlx::query_as::<_, CreatureRow>(&query)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Creature::from).collect())
}

/// The most recently created living creature, if any. The game resumes
/// this one on startup.
pub async fn latest_alive(pool: &SqlitePool) -> Result<Option<Creature>> {
    let query = format!("{SELECT_JOINED} WHERE ci.CI_ALIVE = 1 ORDER BY ci.CI_ID DESC LIMIT 1");
    let row = sqlx::query_as::<_, CreatureRow>(&query)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Creature::from))
}

pub async fn alive_count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM CREATURE_INFO WHERE CI_ALIVE = 1")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn is_empty(pool: &SqlitePool) -> Result<bool> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM CREATURE_INFO")
        .fetch_one(pool)
        .await?;
    Ok(count == 0)
}
