//! SQL schema for the creature store.
//!
//! Table and column names are the persisted contract; existing save files
//! depend on them. Executed once at connection startup, gated on
//! `PRAGMA user_version`; future migrations bump that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS MEDICINE (
    M_ID    INTEGER PRIMARY KEY,
    M_NAME  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS SICKNESS (
    S_ID    INTEGER PRIMARY KEY,
    M_ID    INTEGER NOT NULL REFERENCES MEDICINE(M_ID),
    S_NAME  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS CREATURE_RAISE_TYPE (
    CRT_ID          INTEGER PRIMARY KEY,
    CRT_NAME        TEXT NOT NULL,
    CRT_MULTIPLIER  REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS CREATURE_TYPE (
    CT_ID    INTEGER PRIMARY KEY,
    CT_NAME  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS CREATURE_EVOLUTION (
    CE_ID              INTEGER PRIMARY KEY,
    CT_ID              INTEGER NOT NULL REFERENCES CREATURE_TYPE(CT_ID),
    CE_NAME            TEXT NOT NULL,
    CE_MAX_HEALTH      INTEGER NOT NULL,
    CE_MAX_BOWEL       INTEGER NOT NULL,
    CE_MAX_DISCIPLINE  INTEGER NOT NULL,
    CE_MAX_HUNGER      INTEGER NOT NULL,
    CE_MAX_HAPPY       INTEGER NOT NULL,
    CE_MAX_EXPERIENCE  INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS CREATURE_INFO (
    CI_ID          INTEGER PRIMARY KEY,
    CT_ID          INTEGER NOT NULL REFERENCES CREATURE_TYPE(CT_ID),
    CE_ID          INTEGER NOT NULL REFERENCES CREATURE_EVOLUTION(CE_ID),
    CI_NAME        TEXT NOT NULL,
    CI_BIRTH_DATE  INTEGER NOT NULL,   -- epoch milliseconds
    CI_DEATH_DATE  INTEGER,            -- epoch milliseconds, NULL while alive
    CI_ALIVE       BOOLEAN NOT NULL,
    CI_GENDER      INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS CREATURE_STATE (
    CS_ID          INTEGER PRIMARY KEY,
    CI_ID          INTEGER NOT NULL REFERENCES CREATURE_INFO(CI_ID),
    CRT_ID         INTEGER NOT NULL REFERENCES CREATURE_RAISE_TYPE(CRT_ID),
    S_ID           INTEGER REFERENCES SICKNESS(S_ID),
    CS_HEALTH      INTEGER NOT NULL,
    CS_BOWEL       INTEGER NOT NULL,
    CS_DISCIPLINE  INTEGER NOT NULL,
    CS_HUNGER      INTEGER NOT NULL,
    CS_HAPPY       INTEGER NOT NULL,
    CS_SICK        BOOLEAN NOT NULL,
    CS_EXPERIENCE  INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS EXPERIENCE (
    E_ID      INTEGER PRIMARY KEY,
    CT_ID     INTEGER NOT NULL REFERENCES CREATURE_TYPE(CT_ID),
    E_MIN_XP  INTEGER NOT NULL,
    E_MAX_XP  INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS creature_state_creature_idx ON CREATURE_STATE(CI_ID);
CREATE INDEX IF NOT EXISTS creature_evolution_type_idx ON CREATURE_EVOLUTION(CT_ID);
";
