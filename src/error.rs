use papermill_content::ValidationError;
use papermill_store::StoreError;
use thiserror::Error;

/// Any failure while generating one document. All variants are fatal to
/// that single request only; no partial output is persisted.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("presentation composition failed: {0}")]
    Deck(#[from] papermill_deck::ComposeError),

    #[error("document composition failed: {0}")]
    Doc(#[from] papermill_doc::ComposeError),

    #[error("spreadsheet composition failed: {0}")]
    Sheet(#[from] papermill_sheet::ComposeError),

    #[error("pdf composition failed: {0}")]
    Page(#[from] papermill_page::ComposeError),

    #[error("storage failed: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
