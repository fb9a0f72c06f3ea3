//! Settled result of a verb call.
//!
//! Serializes as exactly one of `{"data": ...}` or `{"error": ...}`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome<D, E> {
    Data(D),
    Error(E),
}

impl<D, E> Outcome<D, E> {
    pub fn is_data(&self) -> bool {
        matches!(self, Outcome::Data(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    pub fn data(&self) -> Option<&D> {
        match self {
            Outcome::Data(data) => Some(data),
            Outcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Error(err) => Some(err),
            Outcome::Data(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(D) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Data(data) => Outcome::Data(f(data)),
            Outcome::Error(err) => Outcome::Error(err),
        }
    }

    pub fn into_result(self) -> Result<D, E> {
        self.into()
    }
}

impl<D, E> From<Result<D, E>> for Outcome<D, E> {
    fn from(result: Result<D, E>) -> Self {
        match result {
            Ok(data) => Outcome::Data(data),
            Err(err) => Outcome::Error(err),
        }
    }
}

impl<D, E> From<Outcome<D, E>> for Result<D, E> {
    fn from(outcome: Outcome<D, E>) -> Self {
        match outcome {
            Outcome::Data(data) => Ok(data),
            Outcome::Error(err) => Err(err),
        }
    }
}
