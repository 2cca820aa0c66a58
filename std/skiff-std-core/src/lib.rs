//!
//! skiff-std-core - Boundary ABI Contract
//!
//! Compiled skiff programs call the runtime through a C ABI in which only
//! primitive integers and pointers cross the boundary; composite layouts
//! never pass by value. The guest side cannot see native struct layouts at
//! all, which is why the threading shim publishes handle sizes instead of
//! handle types.
//!
//! This crate pins down the function-pointer signatures the other runtime
//! crates accept, and asserts at compile time that every one of them (and
//! the by-value thread handle) fits in a machine word.
//!

use std::ffi::c_void;

use static_assertions::assert_eq_size;

/// Start routine for a native thread.
///
/// Matches the parameter type of the host threading library's create call
/// exactly, so thread creation forwards the pointer untouched.
pub type ThreadStart = extern "C" fn(*mut c_void) -> *mut c_void;

/// Zero-argument callback registered across the boundary: the one-time
/// program initializer and the per-frame step function both use it.
pub type TickFn = extern "C" fn();

assert_eq_size!(ThreadStart, usize);
assert_eq_size!(TickFn, usize);
assert_eq_size!(libc::pthread_t, usize);
