//! DAO functions for the reference tables: `MEDICINE`, `SICKNESS`,
//! `CREATURE_RAISE_TYPE`, `CREATURE_TYPE`, and `EXPERIENCE`.

use sqlx::{FromRow, SqlitePool};

use crate::error::{CoreError, Result};
use crate::model::{CreatureRaiseType, CreatureType, Experience, Medicine, Sickness};

#[derive(Debug, FromRow)]
struct NamedRow {
    id: i64,
    name: String,
}

pub async fn create_medicine(pool: &SqlitePool, medicine: &mut Medicine) -> Result<()> {
    let result = sqlx::query("INSERT INTO MEDICINE (M_ID, M_NAME) VALUES (?, ?)")
        .bind(if medicine.id > 0 { Some(medicine.id) } else { None })
        .bind(&medicine.name)
        .execute(pool)
        .await?;
    medicine.id = result.last_insert_rowid();
    Ok(())
}

pub async fn all_medicines(pool: &SqlitePool) -> Result<Vec<Medicine>> {
    let rows = sqlx::query_as::<_, NamedRow>("SELECT M_ID AS id, M_NAME AS name FROM MEDICINE ORDER BY M_ID")
        .fetch_all(pool)
        .await?;
    Ok(rows
        .into_iter()
        .map(|r| Medicine { id: r.id, name: r.name })
        .collect())
}

pub async fn find_medicine(pool: &SqlitePool, id: i64) -> Result<Option<Medicine>> {
    let row = sqlx::query_as::<_, NamedRow>("SELECT M_ID AS id, M_NAME AS name FROM MEDICINE WHERE M_ID = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| Medicine { id: r.id, name: r.name }))
}

#[derive(Debug, FromRow)]
struct SicknessRow {
    id: i64,
    medicine_id: i64,
    name: String,
}

pub async fn create_sickness(pool: &SqlitePool, sickness: &mut Sickness) -> Result<()> {
    let result = sqlx::query("INSERT INTO SICKNESS (S_ID, M_ID, S_NAME) VALUES (?, ?, ?)")
        .bind(if sickness.id > 0 { Some(sickness.id) } else { None })
        .bind(sickness.medicine_id)
        .bind(&sickness.name)
        .execute(pool)
        .await?;
    sickness.id = result.last_insert_rowid();
    Ok(())
}

pub async fn all_sicknesses(pool: &SqlitePool) -> Result<Vec<Sickness>> {
    let rows = sqlx::query_as::<_, SicknessRow>(
        "SELECT S_ID AS id, M_ID AS medicine_id, S_NAME AS name FROM SICKNESS ORDER BY S_ID",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows
        .into_iter()
        .map(|r| Sickness {
            id: r.id,
            medicine_id: r.medicine_id,
            name: r.name,
        })
        .collect())
}

pub async fn find_sickness(pool: &SqlitePool, id: i64) -> Result<Option<Sickness>> {
    let row = sqlx::query_as::<_, SicknessRow>(
        "SELECT S_ID AS id, M_ID AS medicine_id, S_NAME AS name FROM SICKNESS WHERE S_ID = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|r| Sickness {
        id: r.id,
        medicine_id: r.medicine_id,
        name: r.name,
    }))
}

/// The medicine that cures the given sickness.
pub async fn medicine_for(pool: &SqlitePool, sickness: &Sickness) -> Result<Medicine> {
    find_medicine(pool, sickness.medicine_id)
        .await?
        .ok_or(CoreError::UnknownMedicine(sickness.id, sickness.medicine_id))
}

#[derive(Debug, FromRow)]
struct RaiseTypeRow {
    id: i64,
    name: String,
    multiplier: f64,
}

pub async fn create_raise_type(pool: &SqlitePool, raise_type: &mut CreatureRaiseType) -> Result<()> {
    let result = sqlx::query(
        "INSERT INTO CREATURE_RAISE_TYPE (CRT_ID, CRT_NAME, CRT_MULTIPLIER) VALUES (?, ?, ?)",
    )
    .bind(if raise_type.id > 0 { Some(raise_type.id) } else { None })
    .bind(&raise_type.name)
    .bind(raise_type.multiplier)
    .execute(pool)
    .await?;
    raise_type.id = result.last_insert_rowid();
    Ok(())
}

pub async fn all_raise_types(pool: &SqlitePool) -> Result<Vec<CreatureRaiseType>> {
    let rows = sqlx::query_as::<_, RaiseTypeRow>(
        "SELECT CRT_ID AS id, CRT_NAME AS name, CRT_MULTIPLIER AS multiplier \
         FROM CREATURE_RAISE_TYPE ORDER BY CRT_ID",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows
        .into_iter()
        .map(|r| CreatureRaiseType {
            id: r.id,
            name: r.name,
            multiplier: r.multiplier,
        })
        .collect())
}

pub async fn find_raise_type(pool: &SqlitePool, id: i64) -> Result<Option<CreatureRaiseType>> {
    let row = sqlx::query_as::<_, RaiseTypeRow>(
        "SELECT CRT_ID AS id, CRT_NAME AS name, CRT_MULTIPLIER AS multiplier \
         FROM CREATURE_RAISE_TYPE WHERE CRT_ID = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|r| CreatureRaiseType {
        id: r.id,
        name: r.name,
        multiplier: r.multiplier,
    }))
}

pub async fn create_creature_type(pool: &SqlitePool, kind: &mut CreatureType) -> Result<()> {
    let result = sqlx::query("INSERT INTO CREATURE_TYPE (CT_ID, CT_NAME) VALUES (?, ?)")
        .bind(if kind.id > 0 { Some(kind.id) } else { None })
        .bind(&kind.name)
        .execute(pool)
        .await?;
    kind.id = result.last_insert_rowid();
    Ok(())
}

pub async fn all_creature_types(pool: &SqlitePool) -> Result<Vec<CreatureType>> {
    let rows = sqlx::query_as::<_, NamedRow>(
        "SELECT CT_ID AS id, CT_NAME AS name FROM CREATURE_TYPE ORDER BY CT_ID",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows
        .into_iter()
        .map(|r| CreatureType { id: r.id, name: r.name })
        .collect())
}

#[derive(Debug, FromRow)]
struct ExperienceRow {
    id: i64,
    type_id: i64,
    min_xp: i64,
    max_xp: i64,
}

pub async fn create_experience(pool: &SqlitePool, experience: &mut Experience) -> Result<()> {
    let result = sqlx::query(
        "INSERT INTO EXPERIENCE (E_ID, CT_ID, E_MIN_XP, E_MAX_XP) VALUES (?, ?, ?, ?)",
    )
    .bind(if experience.id > 0 { Some(experience.id) } else { None })
    .bind(experience.type_id)
    .bind(experience.min_xp)
    .bind(experience.max_xp)
    .execute(pool)
    .await?;
    experience.id = result.last_insert_rowid();
    Ok(())
}

/// The experience band for a creature type, if one is registered.
pub async fn band_for_type(pool: &SqlitePool, type_id: i64) -> Result<Option<Experience>> {
    let row = sqlx::query_as::<_, ExperienceRow>(
        "SELECT E_ID AS id, CT_ID AS type_id, E_MIN_XP AS min_xp, E_MAX_XP AS max_xp \
         FROM EXPERIENCE WHERE CT_ID = ? LIMIT 1",
    )
    .bind(type_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|r| Experience {
        id: r.id,
        type_id: r.type_id,
        min_xp: r.min_xp,
        max_xp: r.max_xp,
    }))
}
