use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("invalid birth date {input:?}: expected YYYY-MM-DD ({source})")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, StatsError>;
