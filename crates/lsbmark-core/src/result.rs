use crate::error::LsbError;

pub type Result<T> = std::result::Result<T, LsbError>;
