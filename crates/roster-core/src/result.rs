use crate::error::RosterError;

pub type RosterResult<T> = Result<T, RosterError>;
