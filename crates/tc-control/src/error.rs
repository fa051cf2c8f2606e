use tc_core::{CarId, TcError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error(transparent)]
    Config(#[from] TcError),

    #[error("failed to spawn the thread for {car}: {source}")]
    Spawn {
        car:    CarId,
        #[source]
        source: std::io::Error,
    },

    #[error("the thread for {0} panicked")]
    CarPanicked(CarId),
}

pub type ControlResult<T> = Result<T, ControlError>;
