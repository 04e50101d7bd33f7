//! Ordered schema migrations and the ledger recording which ones have run.
//!
//! The ledger records a migration once per grades table. Every run still inspects the table,
//! so a schema migrated before the ledger existed is recorded rather than altered twice, and a
//! recorded change that has since gone missing is applied again.

use std::collections::BTreeSet;

use sqlx::mysql::{MySql, MySqlDatabaseError};
use sqlx::Executor;
use tracing::{info_span, Instrument};

use gradebook_configuration::TableName;
use query_engine_metadata::metadata::grades;
use query_engine_translation::translation::{migrations, schema as schema_statements};

use crate::error::Error;
use crate::query;
use crate::schema;
use crate::state::State;

/// MySQL's `ER_DUP_KEYNAME`.
const DUPLICATE_KEY_NAME: u16 = 1061;

/// A single step in the schema's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    /// Sorts in application order; recorded in the ledger.
    pub version: &'static str,
    pub description: &'static str,
    pub kind: MigrationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationKind {
    /// Add `Category` to the grades table, then the `(Subject, Category)` index.
    AddGradeCategory,
}

/// Every migration, in the order they are applied.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: "0001_add_grade_category",
    description: "Add Category column and (Subject, Category) index to grades",
    kind: MigrationKind::AddGradeCategory,
}];

/// What happened when adding the supporting index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    Added,
    AlreadyExists,
    /// Any other failure. Not fatal: the column is already in place.
    Failed(String),
}

/// What happened to one migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The ledger lists it for this table and the table has the change.
    AlreadyApplied,
    /// Not in the ledger, but the schema already has the change.
    AlreadyPresent,
    Applied { index: IndexOutcome },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationResult {
    pub migration: Migration,
    pub outcome: MigrationOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// The table the migrations operated on.
    pub table: TableName,
    pub results: Vec<MigrationResult>,
}

impl MigrationReport {
    /// Whether this run changed the schema at all.
    pub fn changed_schema(&self) -> bool {
        self.results
            .iter()
            .any(|result| matches!(result.outcome, MigrationOutcome::Applied { .. }))
    }
}

/// The migrations that are not in `applied`, in list order.
pub fn pending<'a>(migrations: &'a [Migration], applied: &BTreeSet<String>) -> Vec<&'a Migration> {
    migrations
        .iter()
        .filter(|migration| !applied.contains(migration.version))
        .collect()
}

/// Create the ledger table if it does not exist.
pub async fn ensure_ledger(state: &State) -> Result<(), Error> {
    let statement = schema_statements::create_migrations_table(&state.tables.migrations);
    query::execute(&state.pool, &statement).await?;
    Ok(())
}

/// The versions the ledger records for the configured grades table.
pub async fn applied_versions(state: &State) -> Result<BTreeSet<String>, Error> {
    let statement =
        migrations::select_applied_migrations(&state.tables.migrations, &state.tables.grades);
    let rows: Vec<(String,)> = query::fetch_all(&state.pool, &statement).await?;
    Ok(rows.into_iter().map(|(version,)| version).collect())
}

pub async fn record_applied(state: &State, migration: &Migration) -> Result<(), Error> {
    query::execute(
        &state.pool,
        &migrations::insert_applied_migration(
            &state.tables.migrations,
            &state.tables.grades,
            migration.version,
            migration.description,
        ),
    )
    .await?;
    Ok(())
}

/// Run every migration against the configured grades table, in order, recording the ones
/// the ledger does not list yet.
///
/// Recorded migrations are inspected too. The first failure stops the run. Migrations that
/// succeeded before it stay recorded.
pub async fn run_migrations(
    state: &State,
    migrations: &[Migration],
) -> Result<MigrationReport, Error> {
    ensure_ledger(state).await?;
    let applied = applied_versions(state).await?;
    let pending_versions: BTreeSet<&str> = pending(migrations, &applied)
        .into_iter()
        .map(|migration| migration.version)
        .collect();

    let mut results = Vec::with_capacity(migrations.len());
    for migration in migrations {
        let recorded = !pending_versions.contains(migration.version);
        let outcome = async {
            let outcome = apply(state, migration).await?;
            if recorded {
                if let MigrationOutcome::Applied { .. } = outcome {
                    tracing::warn!(
                        table = %state.tables.grades,
                        "recorded migration was missing from the table, applied it again"
                    );
                }
            } else {
                record_applied(state, migration).await?;
            }
            Ok::<_, Error>(settle(recorded, outcome))
        }
        .instrument(info_span!("Apply migration", version = migration.version))
        .await
        .map_err(|err| Error::Migration {
            version: migration.version.to_string(),
            source: Box::new(err),
        })?;

        results.push(MigrationResult {
            migration: *migration,
            outcome,
        });
    }

    Ok(MigrationReport {
        table: state.tables.grades.clone(),
        results,
    })
}

/// Fold the ledger's record into what applying found.
fn settle(recorded: bool, outcome: MigrationOutcome) -> MigrationOutcome {
    match outcome {
        MigrationOutcome::AlreadyPresent if recorded => MigrationOutcome::AlreadyApplied,
        outcome => outcome,
    }
}

async fn apply(state: &State, migration: &Migration) -> Result<MigrationOutcome, Error> {
    match migration.kind {
        MigrationKind::AddGradeCategory => add_grade_category(state).await,
    }
}

/// Add the `Category` column unless it is already there, then the supporting index.
///
/// A failure adding the column rolls back and is returned; a failure adding the index is
/// only reported.
pub async fn add_grade_category(state: &State) -> Result<MigrationOutcome, Error> {
    let table = &state.tables.grades;
    let columns = schema::table_columns(&state.pool, table).await?;
    if schema::has_column(&columns, grades::CATEGORY) {
        tracing::info!(%table, "column Category already exists");
        return Ok(MigrationOutcome::AlreadyPresent);
    }

    let mut transaction = state.pool.begin().await?;
    match query::execute(&mut *transaction, &migrations::add_category_column(table)).await {
        Ok(_) => transaction.commit().await?,
        Err(err) => {
            if let Err(rollback_err) = transaction.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            return Err(err);
        }
    }
    tracing::info!(%table, "added column Category");

    let index = add_subject_category_index(&state.pool, table).await;
    Ok(MigrationOutcome::Applied { index })
}

/// Add `idx_subject_category`, treating an existing index of that name as success.
pub async fn add_subject_category_index<'c, E>(executor: E, table: &TableName) -> IndexOutcome
where
    E: Executor<'c, Database = MySql>,
{
    match query::execute(executor, &migrations::add_subject_category_index(table)).await {
        Ok(_) => IndexOutcome::Added,
        Err(Error::Sqlx(err)) if is_duplicate_key_name(&err) => IndexOutcome::AlreadyExists,
        Err(err) => {
            tracing::warn!(error = %err, "could not add index");
            IndexOutcome::Failed(err.to_string())
        }
    }
}

/// Whether `err` is MySQL refusing a second index with the same name.
pub fn is_duplicate_key_name(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(database_error) => {
            database_error
                .try_downcast_ref::<MySqlDatabaseError>()
                .is_some_and(|mysql_error| mysql_error.number() == DUPLICATE_KEY_NAME)
                || is_duplicate_key_name_message(database_error.message())
        }
        _ => false,
    }
}

pub fn is_duplicate_key_name_message(message: &str) -> bool {
    message.contains("Duplicate key name")
}
