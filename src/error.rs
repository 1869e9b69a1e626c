use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid pixel bounds: width={width}, height={height} leave no plot area")]
    InvalidBounds { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
