use thiserror::Error;

pub type PsResult<T> = Result<T, PsError>;

#[derive(Error, Debug)]
pub enum PsError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
