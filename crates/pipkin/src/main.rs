use std::path::PathBuf;

use clap::Parser;

use pipkin::app::App;
use pipkin::config::GameConfig;
use pipkin::persist::Store;
use pipkin_core::Database;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Delete the existing creature database and start fresh
    #[arg(long)]
    regenerate: bool,

    /// Database file location
    #[arg(long, default_value = "pipkin.db")]
    database: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.regenerate && args.database.exists() {
        log::info!("--regenerate flag detected, deleting existing database");
        std::fs::remove_file(&args.database)?;
        // WAL sidecar files, if present.
        for suffix in ["-wal", "-shm"] {
            let mut sidecar = args.database.clone().into_os_string();
            sidecar.push(suffix);
            let _ = std::fs::remove_file(PathBuf::from(sidecar));
        }
    }

    let config = GameConfig::load()?;

    // The sqlx pool needs a Tokio runtime; the game loop blocks on it at
    // the few persistence points.
    let runtime = tokio::runtime::Runtime::new()?;
    let db = runtime.block_on(Database::open(&args.database))?;
    runtime.block_on(db.seed_defaults(&mut rand::thread_rng()))?;

    let store = Store::new(runtime, db);
    let catalog = store.load_catalog()?;

    log::info!("Starting Pipkin");
    pollster::block_on(run(config, store, catalog))
}

async fn run(
    config: GameConfig,
    store: Store,
    catalog: pipkin::persist::Catalog,
) -> anyhow::Result<()> {
    let (app, event_loop) = App::new(config, store, catalog).await?;
    App::run(event_loop, app)
}
