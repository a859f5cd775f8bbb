//! Type-directed call binding for dynamically typed values.
//!
//! Given a callable value and a bag of candidate arguments, [`invoke`]
//! binds one candidate per declared parameter by runtime-type
//! compatibility and calls the target; [`split`] separates a trailing
//! failure-typed result from the informational ones.
//!
//! ```
//! use dyncall::{invoke_split, Cap, NativeFn, PrimTy, Ty, Value};
//!
//! let greet = NativeFn::new(
//!     "greet",
//!     [Ty::Prim(PrimTy::Str)],
//!     [Ty::Prim(PrimTy::Str), Ty::Cap(Cap::Fail)],
//!     |args| match args {
//!         [Value::Str(name)] => vec![Value::str(format!("hello {name}")), Value::Fault(None)],
//!         _ => unreachable!(),
//!     },
//! )
//! .into_value();
//!
//! // Arguments bind by type, not by supplied order; the `Int` is unused.
//! let (out, fault) = invoke_split(&greet, &[Value::Int(3), Value::str("ada")]).unwrap();
//! assert!(fault.is_none());
//! assert_eq!(out[0], "hello ada");
//! ```

pub mod callable;
pub mod error;
pub mod invoke;
pub mod split;
pub mod ty;
pub mod val;

pub use callable::{Callable, NativeFn};
pub use error::{InvokeError, InvokeResult};
pub use invoke::{invoke, invoke_lenient, invoke_split, invoke_split_lenient};
pub use split::split;
pub use ty::{Cap, PrimTy, Ty};
pub use val::{Fault, Value};
