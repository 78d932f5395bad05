//! Integration tests for the SQLite persistence layer.
//!
//! Each test gets its own in-memory database, seeded where the scenario
//! needs reference data.

use rand::rngs::mock::StepRng;

use pipkin_core::db::{self, Database};
use pipkin_core::model::{Creature, CreatureState, CreatureType, Gender};

async fn seeded_db() -> Database {
    let db = Database::in_memory().await.expect("in-memory db");
    let mut rng = StepRng::new(0, 1);
    db.seed_defaults(&mut rng).await.expect("seed");
    db
}

fn sample_creature(kind: CreatureType, evolution_id: i64) -> Creature {
    Creature::newborn(kind, evolution_id, "Mochi".to_string(), Gender::Female)
}

#[tokio::test]
async fn creature_insert_then_read_returns_same_fields() {
    let db = seeded_db().await;
    let kinds = db::catalog::all_creature_types(db.pool()).await.unwrap();
    let stages = db::evolutions::stages_for_type(db.pool(), kinds[0].id)
        .await
        .unwrap();

    let mut creature = sample_creature(kinds[0].clone(), stages[0].id);
    db::creatures::create(db.pool(), &mut creature).await.unwrap();
    assert!(creature.id > 0, "insert assigns a rowid");

    let loaded = db::creatures::find_by_id(db.pool(), creature.id)
        .await
        .unwrap()
        .expect("creature present");

    assert_eq!(loaded.name, "Mochi");
    assert_eq!(loaded.kind.name, "DEFAULT");
    assert_eq!(loaded.gender, Gender::Female);
    assert!(loaded.alive);
    assert!(loaded.death_date.is_none());
    // Dates round-trip at millisecond precision.
    assert_eq!(
        loaded.birth_date.timestamp_millis(),
        creature.birth_date.timestamp_millis()
    );
}

#[tokio::test]
async fn find_missing_creature_returns_none() {
    let db = seeded_db().await;
    let found = db::creatures::find_by_id(db.pool(), 4242).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn alive_count_and_latest_alive() {
    let db = seeded_db().await;
    let kinds = db::catalog::all_creature_types(db.pool()).await.unwrap();
    let stages = db::evolutions::stages_for_type(db.pool(), kinds[0].id)
        .await
        .unwrap();

    assert!(db::creatures::is_empty(db.pool()).await.unwrap());
    assert_eq!(db::creatures::alive_count(db.pool()).await.unwrap(), 0);

    let mut first = sample_creature(kinds[0].clone(), stages[0].id);
    db::creatures::create(db.pool(), &mut first).await.unwrap();

    let mut second = sample_creature(kinds[0].clone(), stages[0].id);
    second.name = "Pip".to_string();
    db::creatures::create(db.pool(), &mut second).await.unwrap();

    assert_eq!(db::creatures::alive_count(db.pool()).await.unwrap(), 2);

    // Killing the newer one makes the older one the resume target.
    second.alive = false;
    db::creatures::update(db.pool(), &second).await.unwrap();

    assert_eq!(db::creatures::alive_count(db.pool()).await.unwrap(), 1);
    let latest = db::creatures::latest_alive(db.pool())
        .await
        .unwrap()
        .expect("one alive");
    assert_eq!(latest.id, first.id);
}

#[tokio::test]
async fn state_roundtrip_and_update() {
    let db = seeded_db().await;
    let kinds = db::catalog::all_creature_types(db.pool()).await.unwrap();
    let stages = db::evolutions::stages_for_type(db.pool(), kinds[0].id)
        .await
        .unwrap();
    let raise_types = db::catalog::all_raise_types(db.pool()).await.unwrap();

    let mut creature = sample_creature(kinds[0].clone(), stages[0].id);
    db::creatures::create(db.pool(), &mut creature).await.unwrap();

    let mut state = CreatureState {
        id: 0,
        creature_id: creature.id,
        raise_type_id: raise_types[0].id,
        sickness_id: None,
        health: 100,
        bowel: 0,
        discipline: 0,
        hunger: 100,
        happy: 100,
        sick: false,
        experience: 0,
    };
    db::states::create(db.pool(), &mut state).await.unwrap();
    assert!(state.id > 0);

    let loaded = db::states::find_by_creature(db.pool(), creature.id)
        .await
        .unwrap()
        .expect("state present");
    assert_eq!(loaded, state);

    // Mutate and save again.
    state.hunger = 40;
    state.sick = true;
    state.sickness_id = Some(1);
    state.experience = 512;
    db::states::update(db.pool(), &state).await.unwrap();

    let reloaded = db::states::find_by_creature(db.pool(), creature.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.hunger, 40);
    assert!(reloaded.sick);
    assert_eq!(reloaded.sickness_id, Some(1));
    assert_eq!(reloaded.experience, 512);
}

#[tokio::test]
async fn delete_creature_and_state() {
    let db = seeded_db().await;
    let kinds = db::catalog::all_creature_types(db.pool()).await.unwrap();
    let stages = db::evolutions::stages_for_type(db.pool(), kinds[0].id)
        .await
        .unwrap();
    let raise_types = db::catalog::all_raise_types(db.pool()).await.unwrap();

    let mut creature = sample_creature(kinds[0].clone(), stages[0].id);
    db::creatures::create(db.pool(), &mut creature).await.unwrap();
    let mut state = CreatureState {
        id: 0,
        creature_id: creature.id,
        raise_type_id: raise_types[0].id,
        sickness_id: None,
        health: 100,
        bowel: 0,
        discipline: 0,
        hunger: 100,
        happy: 100,
        sick: false,
        experience: 0,
    };
    db::states::create(db.pool(), &mut state).await.unwrap();

    // State rows reference the creature, so they go first.
    db::states::delete_for_creature(db.pool(), creature.id)
        .await
        .unwrap();
    db::creatures::delete(db.pool(), creature.id).await.unwrap();

    assert!(db::creatures::find_by_id(db.pool(), creature.id)
        .await
        .unwrap()
        .is_none());
    assert!(db::states::find_by_creature(db.pool(), creature.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn seed_is_idempotent_and_within_bands() {
    let db = seeded_db().await;
    let mut rng = StepRng::new(0, 1);
    // A second seed call must not duplicate reference rows.
    db.seed_defaults(&mut rng).await.unwrap();

    let medicines = db::catalog::all_medicines(db.pool()).await.unwrap();
    let sicknesses = db::catalog::all_sicknesses(db.pool()).await.unwrap();
    assert_eq!(medicines.len(), 5);
    assert_eq!(sicknesses.len(), 5);

    // Every sickness maps to a real medicine.
    for sickness in &sicknesses {
        let medicine = db::catalog::medicine_for(db.pool(), sickness).await.unwrap();
        assert_eq!(medicine.id, sickness.medicine_id);
    }

    let kinds = db::catalog::all_creature_types(db.pool()).await.unwrap();
    assert_eq!(kinds.len(), 1);

    let band = db::catalog::band_for_type(db.pool(), kinds[0].id)
        .await
        .unwrap()
        .expect("band seeded");
    assert_eq!((band.min_xp, band.max_xp), (70_000, 120_000));

    let stages = db::evolutions::stages_for_type(db.pool(), kinds[0].id)
        .await
        .unwrap();
    assert_eq!(stages.len(), 3);
    let adult = stages.last().unwrap();
    assert!(adult.max_experience >= band.min_xp && adult.max_experience <= band.max_xp);
}

#[tokio::test]
async fn next_stage_walks_the_ladder() {
    let db = seeded_db().await;
    let kinds = db::catalog::all_creature_types(db.pool()).await.unwrap();
    let stages = db::evolutions::stages_for_type(db.pool(), kinds[0].id)
        .await
        .unwrap();

    let next = db::evolutions::next_stage(db.pool(), kinds[0].id, 0)
        .await
        .unwrap()
        .expect("first stage");
    assert_eq!(next.id, stages[0].id);

    let next = db::evolutions::next_stage(db.pool(), kinds[0].id, stages[0].max_experience)
        .await
        .unwrap()
        .expect("second stage");
    assert_eq!(next.id, stages[1].id);

    // Past the final threshold there is nothing left to evolve into.
    let done = db::evolutions::next_stage(db.pool(), kinds[0].id, stages[2].max_experience)
        .await
        .unwrap();
    assert!(done.is_none());
}

#[tokio::test]
async fn wipe_empties_every_table() {
    let db = seeded_db().await;
    let kinds = db::catalog::all_creature_types(db.pool()).await.unwrap();
    let stages = db::evolutions::stages_for_type(db.pool(), kinds[0].id)
        .await
        .unwrap();
    let mut creature = sample_creature(kinds[0].clone(), stages[0].id);
    db::creatures::create(db.pool(), &mut creature).await.unwrap();

    db.wipe().await.unwrap();

    assert!(db::creatures::is_empty(db.pool()).await.unwrap());
    assert!(!db.is_seeded().await.unwrap());
    assert!(db::catalog::all_medicines(db.pool()).await.unwrap().is_empty());
}

#[tokio::test]
async fn open_creates_file_database() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("creatures.db");

    {
        let db = Database::open(&path).await.expect("open");
        let mut rng = StepRng::new(0, 1);
        db.seed_defaults(&mut rng).await.unwrap();
    }
    assert!(path.exists());

    // Re-opening finds the seeded data (schema init is idempotent).
    let db = Database::open(&path).await.expect("reopen");
    assert!(db.is_seeded().await.unwrap());
}
