//! End-to-end exercises of the public API: several handlers sharing one
//! candidate pool, driven through binding, invocation, and splitting.

use std::rc::Rc;

use dyncall::{
    invoke, invoke_lenient, invoke_split, invoke_split_lenient, Cap, Fault, NativeFn, PrimTy, Ty,
    Value,
};

/// A handler that renders a numbered label from whatever context it is
/// handed: any showable value plus a separator string.
fn label_handler() -> Value {
    NativeFn::new(
        "label",
        [Ty::Cap(Cap::Show), Ty::Prim(PrimTy::Str), Ty::Prim(PrimTy::Int)],
        [Ty::Prim(PrimTy::Str), Ty::Cap(Cap::Fail)],
        |args| match args {
            [shown, Value::Str(sep), Value::Int(n)] => {
                vec![Value::str(format!("{n}{sep}{shown}")), Value::Fault(None)]
            }
            _ => unreachable!(),
        },
    )
    .into_value()
}

/// A handler that sums an integer list, failing on an empty one.
fn sum_handler() -> Value {
    NativeFn::new(
        "sum",
        [Ty::Prim(PrimTy::List)],
        [Ty::Prim(PrimTy::Int), Ty::Cap(Cap::Fail)],
        |args| match args {
            [Value::List(items)] if items.is_empty() => {
                vec![Value::Int(0), Value::fault("nothing to sum")]
            }
            [Value::List(items)] => {
                let total = items
                    .iter()
                    .map(|item| match item {
                        Value::Int(n) => *n,
                        _ => 0,
                    })
                    .sum();
                vec![Value::Int(total), Value::Fault(None)]
            }
            _ => unreachable!(),
        },
    )
    .into_value()
}

#[test]
fn handlers_share_one_pool() {
    // One pool serves both handlers; each picks what its signature needs,
    // regardless of the order the values were supplied in.
    let pool = [
        Value::list([Value::Int(1), Value::Int(2), Value::Int(3)]),
        Value::Int(7),
        Value::str("· "),
    ];

    let (outs, fault) = invoke_split(&label_handler(), &pool).unwrap();
    assert!(fault.is_none());
    // `Show` binds the first showable candidate: the `Int`, not the list.
    assert_eq!(outs[0], "7· 7");

    let (outs, fault) = invoke_split(&sum_handler(), &pool).unwrap();
    assert!(fault.is_none());
    assert_eq!(outs[0], 6);
}

#[test]
fn extracted_fault_is_an_ordinary_error() {
    let pool = [Value::list([])];
    let (outs, fault) = invoke_split(&sum_handler(), &pool).unwrap();
    assert_eq!(outs[0], 0);

    // The extracted failure plugs into std error handling.
    let err: Rc<Fault> = fault.unwrap();
    let err: &dyn std::error::Error = &*err;
    assert_eq!(err.to_string(), "nothing to sum");
}

#[test]
fn strict_reports_what_is_missing() {
    let pool = [Value::Int(7), Value::str("· ")];

    let err = invoke(&sum_handler(), &pool).unwrap_err();
    assert!(err.is_unresolved());
    insta::assert_snapshot!(err, @"no argument matched parameter 0 of type List");

    // The same pool invokes fine leniently: the list defaults to empty,
    // and the handler turns that into its own domain failure.
    let (_, fault) = invoke_split_lenient(&sum_handler(), &pool).unwrap();
    assert_eq!(fault.unwrap().msg(), "nothing to sum");
}

#[test]
fn results_of_zero_arity_handlers() {
    let ping = NativeFn::new("ping", [], [], |_| Vec::new()).into_value();
    assert_eq!(invoke(&ping, &[Value::Nil]), Ok(vec![]));

    let (outs, fault) = invoke_split(&ping, &[]).unwrap();
    assert!(outs.is_empty());
    assert!(fault.is_none());
}

#[test]
fn non_callable_pool_member_is_not_a_target() {
    let pool = [Value::str("x")];
    let err = invoke_lenient(&pool[0], &pool).unwrap_err();
    insta::assert_snapshot!(err, @"cannot call a value of type Str");
}
