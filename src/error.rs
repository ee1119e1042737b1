use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported type {0}: implemented only for slices of integers, strings and floats")]
    UnsupportedType(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
