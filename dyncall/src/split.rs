//! Trailing-failure extraction from call results.

use std::rc::Rc;

use crate::ty::Cap;
use crate::val::{Fault, Value};


/// Split a trailing failure value away from `results`, per `target`'s
/// declared signature.
///
/// By convention a callable's last declared result, if its type is
/// failure-capable, carries the failure outcome of the call. Only the
/// final declared position is ever inspected; a failure-capable type
/// anywhere else stays in the informational results regardless of its
/// runtime value. The declared type is authoritative because an absent
/// failure value carries no type information of its own.
///
/// If the convention applies, returns the leading results unchanged and in
/// order, together with the extracted fault (`None` when the call reported
/// no failure). Otherwise returns all `results` unchanged with no fault.
///
/// # Panics
///
/// Panics if `target` is not a function value, or if `results` does not
/// have exactly one value per declared result. Both indicate misuse by the
/// caller, such as supplying results produced by a different callable.
pub fn split(target: &Value, mut results: Vec<Value>) -> (Vec<Value>, Option<Rc<Fault>>) {
    let Value::Fun(fun) = target else {
        panic!("cannot split results of a non-callable value of type {}", target.ty());
    };

    let declared = fun.results();
    assert_eq!(
        results.len(),
        declared.len(),
        "results do not match the declared result count of `{}`",
        fun.name(),
    );

    match declared.last() {
        Some(ty) if ty.implements(Cap::Fail) => {
            let fault = match results.pop() {
                Some(Value::Fault(fault)) => fault,
                Some(Value::Nil) => None,
                Some(other) => panic!(
                    "declared failure result of `{}` holds a value of type {}",
                    fun.name(),
                    other.ty(),
                ),
                None => unreachable!("declared results are non-empty"),
            };
            (results, fault)
        }
        _ => (results, None),
    }
}
