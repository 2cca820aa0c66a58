//!
//! Mutex pass-throughs.
//!
//! No bookkeeping on this side of the boundary: lock/unlock pairing and the
//! rule against destroying a locked or still-referenced mutex are the
//! caller's responsibility, exactly as with the native library.
//!

use std::mem;

use libc::{c_int, pthread_mutex_t, pthread_mutexattr_t};

/// Byte size of the native mutex, for guest-side opaque storage.
#[unsafe(no_mangle)]
pub extern "C" fn skiff_mutex_size() -> c_int {
    mem::size_of::<pthread_mutex_t>() as c_int
}

/// Initialize a mutex with optional attributes (null for defaults).
///
/// # Safety
/// `m` must point to uninitialized storage of at least [`skiff_mutex_size`]
/// bytes; `attr` must be null or a valid mutex attributes object.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_mutex_init(
    m: *mut pthread_mutex_t,
    attr: *const pthread_mutexattr_t,
) -> c_int {
    unsafe { libc::pthread_mutex_init(m, attr) }
}

/// Destroy a mutex.
///
/// # Safety
/// `m` must be an initialized, unlocked mutex no other thread still uses.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_mutex_destroy(m: *mut pthread_mutex_t) -> c_int {
    unsafe { libc::pthread_mutex_destroy(m) }
}

/// Lock a mutex, blocking until acquired.
///
/// # Safety
/// `m` must be an initialized mutex.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_mutex_lock(m: *mut pthread_mutex_t) -> c_int {
    unsafe { libc::pthread_mutex_lock(m) }
}

/// Unlock a mutex held by the calling thread.
///
/// # Safety
/// `m` must be an initialized mutex.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_mutex_unlock(m: *mut pthread_mutex_t) -> c_int {
    unsafe { libc::pthread_mutex_unlock(m) }
}
