//!
//! Condition-variable pass-throughs.
//!
//! Wait relies on the native library's atomic release/reacquire of the
//! paired mutex; nothing is reimplemented here. Only single-wake signal is
//! exposed, no broadcast: a deliberate restriction of the guest surface,
//! not a limitation of the library underneath.
//!

use std::mem;

use libc::{c_int, pthread_cond_t, pthread_condattr_t, pthread_mutex_t};

/// Byte size of the native condition variable, for guest-side opaque
/// storage.
#[unsafe(no_mangle)]
pub extern "C" fn skiff_cond_size() -> c_int {
    mem::size_of::<pthread_cond_t>() as c_int
}

/// Initialize a condition variable with optional attributes (null for
/// defaults).
///
/// # Safety
/// `c` must point to uninitialized storage of at least [`skiff_cond_size`]
/// bytes; `attr` must be null or a valid condition-variable attributes
/// object.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_cond_init(
    c: *mut pthread_cond_t,
    attr: *const pthread_condattr_t,
) -> c_int {
    unsafe { libc::pthread_cond_init(c, attr) }
}

/// Destroy a condition variable.
///
/// # Safety
/// `c` must be an initialized condition variable with no blocked waiters.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_cond_destroy(c: *mut pthread_cond_t) -> c_int {
    unsafe { libc::pthread_cond_destroy(c) }
}

/// Block on `c`, atomically releasing `m` while blocked and reacquiring it
/// before returning.
///
/// # Safety
/// `c` must be initialized and `m` must be an initialized mutex held by the
/// calling thread.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_cond_wait(c: *mut pthread_cond_t, m: *mut pthread_mutex_t) -> c_int {
    unsafe { libc::pthread_cond_wait(c, m) }
}

/// Wake at least one waiter blocked on `c`.
///
/// Signal-before-wait races are the caller's to avoid through the usual
/// mutex discipline.
///
/// # Safety
/// `c` must be an initialized condition variable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_cond_signal(c: *mut pthread_cond_t) -> c_int {
    unsafe { libc::pthread_cond_signal(c) }
}
