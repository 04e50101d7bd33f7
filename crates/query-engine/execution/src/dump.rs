//! Read everything the dump tool prints. Nothing here writes.

use query_engine_metadata::metadata::{Assignment, Category};

use crate::crud;
use crate::error::Error;
use crate::state::State;

#[derive(Debug, Clone, PartialEq)]
pub struct DumpReport {
    pub categories: Vec<Category>,
    pub assignments: Vec<Assignment>,
    /// What `get_all_grades` returned.
    pub grades: Vec<Assignment>,
}

pub async fn collect(state: &State) -> Result<DumpReport, Error> {
    let categories = crud::get_all_categories(state).await?;
    let assignments = crud::get_all_assignments(state).await?;
    let grades = crud::get_all_grades(state).await?;
    Ok(DumpReport {
        categories,
        assignments,
        grades,
    })
}
