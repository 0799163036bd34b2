//! Integration tests for `DieselGenomeRepository` against embedded PostgreSQL.
//!
//! Each test provisions its own database, applies the embedded migrations
//! and exercises the real `genomes` query through the pool.

use luckygenome::domain::GenomeRecord;
use luckygenome::domain::ports::GenomeRepository;
use luckygenome::outbound::persistence::{
    DbPool, DieselGenomeRepository, PoolConfig, run_pending_migrations,
};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{create_database, handle_cluster_setup_failure, insert_genomes};

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    database_url: String,
    repository: DieselGenomeRepository,
}

impl TestContext {
    fn find_all(&self) -> Vec<GenomeRecord> {
        self.runtime
            .block_on(self.repository.find_all())
            .expect("genome query succeeds")
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let admin_url = cluster.connection().database_url("postgres");
    let database = create_database(&admin_url)?;
    let database_url = cluster.connection().database_url(&database);
    run_pending_migrations(&database_url).map_err(|err| err.to_string())?;

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        database_url,
        repository: DieselGenomeRepository::new(pool),
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn empty_table_yields_no_rows(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: empty_table_yields_no_rows skipped");
        return;
    };

    assert!(context.find_all().is_empty());
}

#[rstest]
fn single_row_is_decoded(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: single_row_is_decoded skipped");
        return;
    };
    insert_genomes(&context.database_url, &[(1, "Alice")]).expect("seed Alice");

    assert_eq!(context.find_all(), vec![GenomeRecord::new(1, "Alice")]);
}

#[rstest]
fn rows_are_ordered_by_id(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: rows_are_ordered_by_id skipped");
        return;
    };
    insert_genomes(
        &context.database_url,
        &[(30, "Carol"), (1, "Alice"), (5_000_000_000, "Dan"), (2, "Bob")],
    )
    .expect("seed genomes");

    let ids: Vec<i64> = context.find_all().iter().map(GenomeRecord::id).collect();

    assert_eq!(ids, vec![1, 2, 30, 5_000_000_000]);
}

#[rstest]
fn repeated_queries_are_identical(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: repeated_queries_are_identical skipped");
        return;
    };
    insert_genomes(&context.database_url, &[(2, "Bob"), (1, "Alice")]).expect("seed genomes");

    assert_eq!(context.find_all(), context.find_all());
}

#[rstest]
fn migrations_are_idempotent(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: migrations_are_idempotent skipped");
        return;
    };

    let applied = run_pending_migrations(&context.database_url).expect("rerun migrations");

    assert_eq!(applied, 0);
}
