//! Type-directed argument binding and invocation.
//!
//! [`invoke`] binds a bag of candidate values to a callable's declared
//! parameters purely by type, then calls it. Each parameter takes the first
//! candidate, in supplied order, whose runtime type satisfies the declared
//! type; a candidate may be bound to any number of parameters, and unused
//! candidates are ignored. The scan is a plain O(params × args) pass and
//! first-match-wins keeps it deterministic.

use std::rc::Rc;

use crate::error::{InvokeError, InvokeResult};
use crate::split::split;
use crate::val::{Fault, Value};


/// How binding handles a parameter no argument matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Strict,
    Lenient,
}

/// Call `target`, matching each declared parameter against `args` by type.
///
/// Fails with [`InvokeError::NotCallable`] if `target` is not a function
/// value, and with [`InvokeError::Unresolved`] if some declared parameter
/// has no matching argument. In both cases the target is never entered.
///
/// On success, returns the produced results in declaration order; a
/// callable declaring no results yields an empty vector.
pub fn invoke(target: &Value, args: &[Value]) -> InvokeResult<Vec<Value>> {
    bind_and_call(Binding::Strict, target, args)
}

/// Like [`invoke`], but a parameter no argument matched is bound to the
/// zero value of its declared type instead of failing.
///
/// The only remaining failure is [`InvokeError::NotCallable`].
pub fn invoke_lenient(target: &Value, args: &[Value]) -> InvokeResult<Vec<Value>> {
    bind_and_call(Binding::Lenient, target, args)
}

/// Call `target`, then split a trailing failure away from its results.
///
/// An invocation failure short-circuits; the splitter is never consulted.
pub fn invoke_split(
    target: &Value,
    args: &[Value],
) -> InvokeResult<(Vec<Value>, Option<Rc<Fault>>)> {
    let results = invoke(target, args)?;
    Ok(split(target, results))
}

/// Like [`invoke_split`], with lenient binding.
pub fn invoke_split_lenient(
    target: &Value,
    args: &[Value],
) -> InvokeResult<(Vec<Value>, Option<Rc<Fault>>)> {
    let results = invoke_lenient(target, args)?;
    Ok(split(target, results))
}

fn bind_and_call(mode: Binding, target: &Value, args: &[Value]) -> InvokeResult<Vec<Value>> {
    let Value::Fun(fun) = target else {
        return Err(InvokeError::NotCallable(target.ty()));
    };

    let params = fun.params();
    let mut bound = Vec::with_capacity(params.len());

    for (index, &ty) in params.iter().enumerate() {
        match args.iter().find(|arg| arg.matches(ty)) {
            Some(arg) => bound.push(arg.clone()),
            None if mode == Binding::Lenient => bound.push(ty.zero()),
            None => return Err(InvokeError::Unresolved { index, ty }),
        }
    }

    let results = fun.call(&bound);
    debug_assert_eq!(results.len(), fun.results().len());
    Ok(results)
}
