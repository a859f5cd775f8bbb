//! Invocation errors.

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::ty::Ty;

/// An argument-binding or invocation failure.
///
/// Both variants are reported before the target is entered; a failed
/// invocation never has partial effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// The invocation target is not a function value.
    #[error("cannot call a value of type {0}")]
    NotCallable(Ty),

    /// Strict binding found no argument matching a declared parameter.
    #[error("no argument matched parameter {index} of type {}", expected_tys(.ty))]
    Unresolved { index: usize, ty: Ty },
}

impl InvokeError {
    /// Whether this is an unresolved-parameter failure, regardless of which
    /// parameter went unmatched.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, InvokeError::Unresolved { .. })
    }
}

/// A `Result` type specialized to invocation errors.
pub type InvokeResult<T> = Result<T, InvokeError>;

fn expected_tys(ty: &Ty) -> String {
    match ty {
        Ty::Cap(cap) => format!("{cap} (satisfied by {})", oxford_or(cap.implementors())),
        ty => ty.to_string(),
    }
}

/// Wrapper that `Display`s as a prose list joined with "or", with Oxford
/// comma placement.
struct Oxford<'a, D>(&'a [D]);

fn oxford_or<D: Display>(list: &[D]) -> Oxford<D> {
    Oxford(list)
}

impl<D: Display> Display for Oxford<'_, D> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.0 {
            [] => Ok(()),
            [only] => write!(f, "{only}"),
            [first, second] => write!(f, "{first} or {second}"),
            [head @ .., last] => {
                for item in head {
                    write!(f, "{item}, ")?;
                }
                write!(f, "or {last}")
            }
        }
    }
}
