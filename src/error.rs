use thiserror::Error;

use crate::core::DataSetKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("data set {index} is a {kind} data set; bar charts require bar data sets")]
    IncompatibleDataSet { index: usize, kind: DataSetKind },
}
