use tc_core::{CarId, TcError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("duplicate car id {0}")]
    DuplicateCar(CarId),

    #[error("{car}: arrival time {secs} is not a finite, non-negative number of seconds within range")]
    InvalidArrival { car: CarId, secs: f64 },

    #[error(transparent)]
    Core(#[from] TcError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
