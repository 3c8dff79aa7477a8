use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rTimebank…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_str);

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(&db_str)?;

    println!("✅ Database initialized at {}", db_str);

    ttlog_lenient(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_str),
    );

    println!("🎉 rTimebank initialization completed!");
    Ok(())
}
