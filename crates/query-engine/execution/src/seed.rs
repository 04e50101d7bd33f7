//! Make sure the reference subjects exist.

use tracing::{info_span, Instrument};

use query_engine_metadata::metadata::Subject;

use crate::crud;
use crate::error::Error;
use crate::state::State;

/// What happened to one reference subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Added { name: String, id: u64 },
    AlreadyExists(Subject),
}

/// The subjects found before seeding, and one outcome per reference name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub existing: Vec<Subject>,
    pub outcomes: Vec<SeedOutcome>,
}

impl SeedReport {
    /// How many subjects this run inserted.
    pub fn inserted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, SeedOutcome::Added { .. }))
            .count()
    }
}

/// Look up each of `reference` by name and insert the ones that are missing.
pub async fn ensure_subjects(state: &State, reference: &[&str]) -> Result<SeedReport, Error> {
    let existing = crud::get_all_subjects(state).await?;

    let mut outcomes = Vec::with_capacity(reference.len());
    for name in reference {
        let outcome = async {
            match crud::get_subject_by_name(state, name).await? {
                Some(subject) => {
                    tracing::info!(name, id = subject.id, "subject already exists");
                    Ok::<_, Error>(SeedOutcome::AlreadyExists(subject))
                }
                None => {
                    let id = crud::add_subject(state, name).await?;
                    tracing::info!(name, id, "added missing subject");
                    Ok(SeedOutcome::Added {
                        name: (*name).to_string(),
                        id,
                    })
                }
            }
        }
        .instrument(info_span!("Ensure subject", name))
        .await?;
        outcomes.push(outcome);
    }

    Ok(SeedReport { existing, outcomes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_inserted_subjects() {
        let report = SeedReport {
            existing: vec![Subject {
                id: 1,
                name: "History".to_string(),
            }],
            outcomes: vec![
                SeedOutcome::Added {
                    name: "Mathematics".to_string(),
                    id: 2,
                },
                SeedOutcome::AlreadyExists(Subject {
                    id: 1,
                    name: "History".to_string(),
                }),
                SeedOutcome::Added {
                    name: "Science".to_string(),
                    id: 3,
                },
            ],
        };

        assert_eq!(report.inserted(), 2);
    }
}
