//! SQLite persistence.
//!
//! [`Database`] owns the connection pool, creates the schema, and seeds
//! reference data. The per-table DAO modules expose free functions over
//! the pool, e.g. `db::creatures::find_by_id(db.pool(), id)`.

pub mod catalog;
pub mod creatures;
pub mod evolutions;
mod rows;
pub mod schema;
pub mod states;

use std::path::Path;

use rand::Rng;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::error::Result;
use crate::model::{CreatureEvolution, CreatureRaiseType, CreatureType, Experience, Medicine, Sickness};

/// Schema version written to `PRAGMA user_version` after initialization.
const SCHEMA_VERSION: i64 = 1;

/// Handle to the creature store.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the database file and initialize the schema.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        log::info!("Opened creature database at {}", path.display());
        let db = Database { pool };
        db.init_schema().await?;
        Ok(db)
    }

    /// An in-memory database for tests.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);

        // A single connection: every in-memory connection is its own database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let db = Database { pool };
        db.init_schema().await?;
        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the schema if this database is at version zero.
    async fn init_schema(&self) -> Result<()> {
        let version = sqlx::query_scalar::<_, i64>("PRAGMA user_version")
            .fetch_one(&self.pool)
            .await?;

        if version < SCHEMA_VERSION {
            sqlx::raw_sql(schema::SCHEMA).execute(&self.pool).await?;
            sqlx::query(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
                .execute(&self.pool)
                .await?;
            log::info!("Initialized schema at version {SCHEMA_VERSION}");
        }
        Ok(())
    }

    /// Whether the reference tables have been seeded yet.
    pub async fn is_seeded(&self) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM CREATURE_TYPE")
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Seed reference data: medicines, sicknesses, the default raise type
    /// and creature type, three evolution stages, and the experience band.
    /// Skipped when already seeded.
    pub async fn seed_defaults(&self, rng: &mut impl Rng) -> Result<()> {
        if self.is_seeded().await? {
            log::debug!("Reference data already seeded");
            return Ok(());
        }

        let medicine_names = ["Tonic", "Salve", "Elixir", "Drops", "Syrup"];
        let sickness_names = ["Sniffles", "Tummyache", "Fever", "Blues", "Fleas"];

        for (medicine_name, sickness_name) in medicine_names.iter().zip(sickness_names) {
            let mut medicine = Medicine {
                id: 0,
                name: medicine_name.to_string(),
            };
            catalog::create_medicine(&self.pool, &mut medicine).await?;

            let mut sickness = Sickness {
                id: 0,
                medicine_id: medicine.id,
                name: sickness_name.to_string(),
            };
            catalog::create_sickness(&self.pool, &mut sickness).await?;
        }

        let mut raise_type = CreatureRaiseType {
            id: 0,
            name: "HEALTHY".to_string(),
            multiplier: 1.00,
        };
        catalog::create_raise_type(&self.pool, &mut raise_type).await?;

        let mut kind = CreatureType {
            id: 0,
            name: "DEFAULT".to_string(),
        };
        catalog::create_creature_type(&self.pool, &mut kind).await?;

        let mut band = Experience {
            id: 0,
            type_id: kind.id,
            min_xp: 70_000,
            max_xp: 120_000,
        };
        catalog::create_experience(&self.pool, &mut band).await?;

        // Final-stage threshold is sampled from the type's experience band.
        let adult_threshold = rng.gen_range(band.min_xp..=band.max_xp);
        let stages: [(&str, i64, i64); 3] = [
            ("Hatchling", 100, 1_000),
            ("Juvenile", 140, 10_000),
            ("Adult", 200, adult_threshold),
        ];
        for (name, max_stat, max_experience) in stages {
            let mut stage = CreatureEvolution {
                id: 0,
                type_id: kind.id,
                name: name.to_string(),
                max_health: max_stat,
                max_bowel: max_stat,
                max_discipline: max_stat,
                max_hunger: max_stat,
                max_happy: max_stat,
                max_experience,
            };
            evolutions::create(&self.pool, &mut stage).await?;
        }

        log::info!("Seeded reference data");
        Ok(())
    }

    /// Delete every row in every table. Development and testing only.
    pub async fn wipe(&self) -> Result<()> {
        // Children before parents, so foreign keys stay satisfied.
        for table in [
            "CREATURE_STATE",
            "CREATURE_INFO",
            "CREATURE_EVOLUTION",
            "EXPERIENCE",
            "SICKNESS",
            "MEDICINE",
            "CREATURE_RAISE_TYPE",
            "CREATURE_TYPE",
        ] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&self.pool)
                .await?;
        }
        log::warn!("Wiped all creature data");
        Ok(())
    }
}
