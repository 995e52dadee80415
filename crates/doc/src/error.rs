use papermill_ooxml::OoxmlError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("failed to assemble document package: {0}")]
    Package(#[from] OoxmlError),
}
