use thiserror::Error;

/// A request failed a required-field or type check before composition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("document title must not be empty")]
    EmptyTitle,

    #[error("slide {0}: title must not be empty")]
    EmptySlideTitle(usize),

    #[error("section {0}: heading must not be empty")]
    EmptySectionHeading(usize),

    #[error("sheet {0}: name must not be empty")]
    EmptySheetName(usize),

    #[error("sheet {index}: name '{name}' exceeds 31 characters")]
    SheetNameTooLong { index: usize, name: String },

    #[error("sheet {index}: formula {formula} has no target cell")]
    EmptyFormulaCell { index: usize, formula: usize },
}
