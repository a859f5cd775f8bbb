//! Invocable targets.

use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use crate::ty::Ty;
use crate::val::Value;

/// An invocable target: a positional signature plus an entry point.
///
/// `call` receives exactly one value per declared parameter, in declaration
/// order, and must produce exactly one value per declared result, in
/// declaration order. A failure of the callable itself travels as a
/// trailing `Fail`-typed result value by convention; `call` never fails at
/// the Rust level.
pub trait Callable: Debug {
    fn name(&self) -> &str;
    fn params(&self) -> &[Ty];
    fn results(&self) -> &[Ty];
    fn call(&self, args: &[Value]) -> Vec<Value>;
}

/// A [`Callable`] backed by a Rust closure and an explicit signature.
pub struct NativeFn {
    name: String,
    params: Vec<Ty>,
    results: Vec<Ty>,
    body: Box<dyn Fn(&[Value]) -> Vec<Value>>,
}

impl NativeFn {
    pub fn new(
        name: impl Into<String>,
        params: impl Into<Vec<Ty>>,
        results: impl Into<Vec<Ty>>,
        body: impl Fn(&[Value]) -> Vec<Value> + 'static,
    ) -> NativeFn {
        NativeFn {
            name: name.into(),
            params: params.into(),
            results: results.into(),
            body: Box::new(body),
        }
    }

    /// Wrap this function as a callable [`Value`].
    pub fn into_value(self) -> Value {
        Value::Fun(Rc::new(self))
    }
}

impl Debug for NativeFn {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("NativeFn")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("results", &self.results)
            .finish_non_exhaustive()
    }
}

impl Callable for NativeFn {
    fn name(&self) -> &str {
        &self.name
    }

    fn params(&self) -> &[Ty] {
        &self.params
    }

    fn results(&self) -> &[Ty] {
        &self.results
    }

    fn call(&self, args: &[Value]) -> Vec<Value> {
        debug_assert_eq!(args.len(), self.params.len());
        (self.body)(args)
    }
}
