//! Thin helpers over the gradebook tables.

use tracing::{info_span, Instrument};

use query_engine_metadata::metadata::{Assignment, Category, Subject};
use query_engine_translation::translation::{queries, schema};

use crate::error::Error;
use crate::query;
use crate::state::State;

/// Create any missing table of the base schema.
pub async fn init_db(state: &State) -> Result<(), Error> {
    async {
        for statement in schema::base_schema(&state.tables) {
            query::execute(&state.pool, &statement).await?;
        }
        Ok(())
    }
    .instrument(info_span!("Initialize database"))
    .await
}

/// Every subject, ordered by name.
pub async fn get_all_subjects(state: &State) -> Result<Vec<Subject>, Error> {
    query::fetch_all(
        &state.pool,
        &queries::select_all_subjects(&state.tables.subjects),
    )
    .instrument(info_span!("Get all subjects"))
    .await
}

pub async fn get_subject_by_name(state: &State, name: &str) -> Result<Option<Subject>, Error> {
    query::fetch_optional(
        &state.pool,
        &queries::select_subject_by_name(&state.tables.subjects, name),
    )
    .instrument(info_span!("Get subject by name", name))
    .await
}

/// Insert a subject and return its id.
pub async fn add_subject(state: &State, name: &str) -> Result<u64, Error> {
    let result = query::execute(
        &state.pool,
        &queries::insert_subject(&state.tables.subjects, name),
    )
    .instrument(info_span!("Add subject", name))
    .await?;
    Ok(result.last_insert_id())
}

/// Every category, ordered by subject then name.
pub async fn get_all_categories(state: &State) -> Result<Vec<Category>, Error> {
    query::fetch_all(
        &state.pool,
        &queries::select_all_categories(&state.tables.categories),
    )
    .instrument(info_span!("Get all categories"))
    .await
}

/// Every assignment, ordered by subject, category and id.
pub async fn get_all_assignments(state: &State) -> Result<Vec<Assignment>, Error> {
    query::fetch_all(
        &state.pool,
        &queries::select_all_assignments(&state.tables.grades),
    )
    .instrument(info_span!("Get all assignments"))
    .await
}

/// Every grade row, in id order.
pub async fn get_all_grades(state: &State) -> Result<Vec<Assignment>, Error> {
    query::fetch_all(&state.pool, &queries::select_all_grades(&state.tables.grades))
        .instrument(info_span!("Get all grades"))
        .await
}
