use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("chase offset must be finite, got {0}")]
    InvalidOffset(f32),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
