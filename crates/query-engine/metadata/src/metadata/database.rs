//! Column, index and value names of the gradebook schema.
//!
//! Column names keep the casing of the existing database, which mixes `id` with PascalCase.

/// The subjects every gradebook is expected to contain.
pub const REFERENCE_SUBJECTS: [&str; 3] = ["Mathematics", "History", "Science"];

/// Value of `Category` for rows that predate categories.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Index over `(Subject, Category)` on the grades table.
pub const SUBJECT_CATEGORY_INDEX: &str = "idx_subject_category";

/// Length of every `VARCHAR` column.
pub const NAME_LENGTH: u32 = 255;

pub mod subjects {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";

    pub const ALL: [&str; 2] = [ID, NAME];
}

pub mod grades {
    pub const ID: &str = "id";
    pub const SUBJECT: &str = "Subject";
    pub const CATEGORY: &str = "Category";
    pub const ASSIGNMENT_NAME: &str = "AssignmentName";
    pub const STUDY_TIME: &str = "StudyTime";
    pub const GRADE: &str = "Grade";
    pub const WEIGHT: &str = "Weight";

    pub const ALL: [&str; 7] = [
        ID,
        SUBJECT,
        CATEGORY,
        ASSIGNMENT_NAME,
        STUDY_TIME,
        GRADE,
        WEIGHT,
    ];
}

pub mod categories {
    pub const ID: &str = "id";
    pub const SUBJECT: &str = "Subject";
    pub const CATEGORY_NAME: &str = "CategoryName";
    pub const TOTAL_WEIGHT: &str = "TotalWeight";
    pub const DEFAULT_NAME: &str = "DefaultName";

    pub const ALL: [&str; 5] = [ID, SUBJECT, CATEGORY_NAME, TOTAL_WEIGHT, DEFAULT_NAME];
}

/// The ledger. A migration is recorded once per grades table it was run against.
pub mod migrations {
    pub const VERSION: &str = "version";
    pub const TABLE_NAME: &str = "table_name";
    pub const DESCRIPTION: &str = "description";
    pub const APPLIED_AT: &str = "applied_at";

    pub const VERSION_LENGTH: u32 = 64;
    pub const TABLE_NAME_LENGTH: u32 = 64;
}
