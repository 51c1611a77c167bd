use thiserror::Error;

pub type SgfResult<T> = Result<T, SgfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SgfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
