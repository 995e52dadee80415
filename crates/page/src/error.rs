use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
