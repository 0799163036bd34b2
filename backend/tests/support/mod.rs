//! Shared helpers for the PostgreSQL-backed integration suites.

use postgres::{Client, NoTls};
use uuid::Uuid;

/// Render a `postgres` error with its SQLSTATE and detail.
///
/// The `Display` implementation collapses database errors to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };
    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// True when `SKIP_TEST_CLUSTER` is `1`, `true` or `yes`.
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip when `SKIP_TEST_CLUSTER` is set, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Create a fresh, uniquely named database and return its name.
pub fn create_database(admin_url: &str) -> Result<String, String> {
    let name = format!("genomes_{}", Uuid::new_v4().simple());
    let mut client =
        Client::connect(admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(name)
}

/// Insert genome rows in the given order.
pub fn insert_genomes(url: &str, rows: &[(i64, &str)]) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    for (id, name) in rows {
        client
            .execute(
                "INSERT INTO genomes (id, name) VALUES ($1, $2)",
                &[id, name],
            )
            .map_err(|err| format_postgres_error(&err))?;
    }
    Ok(())
}
