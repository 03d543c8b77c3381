use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::Connection;

/// Versioned schema changes, applied in order. Never edit a shipped entry;
/// append a new one.
const MIGRATIONS: &[(&str, &str, &str)] = &[(
    "001",
    "initial",
    include_str!("migrations/001_initial.sql"),
)];

const LEDGER: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TEXT NOT NULL
)";

fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT version FROM schema_migrations ORDER BY version")?;
    let versions = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(versions)
}

/// Brings the slot schema up to date. Pending migrations run together in one
/// transaction, so a failure leaves the database at its previous version.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(LEDGER)
        .context("Failed to create schema_migrations table")?;

    let applied = applied_versions(conn)?;
    let pending: Vec<_> = MIGRATIONS
        .iter()
        .filter(|(version, _, _)| !applied.iter().any(|v| v == version))
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;
    for (version, name, sql) in pending {
        tracing::info!(version, name, "Applying slot schema migration");
        tx.execute_batch(sql)
            .with_context(|| format!("Failed to apply migration {}: {}", version, name))?;
        tx.execute(
            "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?, ?, ?)",
            (version, name, Utc::now().to_rfc3339()),
        )?;
    }
    tx.commit()?;

    Ok(())
}
