//!
//! Thread lifecycle pass-throughs.
//!
//! Creation always produces a detached thread: a local attributes object is
//! initialized, forced to `PTHREAD_CREATE_DETACHED`, used for the one create
//! call, and destroyed before returning. The attributes object never escapes
//! the function. Detached-only creation is a deliberate constraint of this
//! runtime, stated in the create call's docs rather than silently applied.
//!

use std::ffi::c_void;
use std::mem;

use libc::{c_int, pthread_attr_t, pthread_t};

use skiff_std_core::ThreadStart;

/// Byte size of the native thread handle, so guest code can allocate
/// matching opaque storage.
#[unsafe(no_mangle)]
pub extern "C" fn skiff_thread_size() -> c_int {
    mem::size_of::<pthread_t>() as c_int
}

/// Spawn a detached native thread running `start(arg)`.
///
/// The new thread's resources are reclaimed automatically when it finishes
/// and it cannot be joined. `_attr` is accepted for ABI stability and
/// ignored: detached creation is enforced no matter what the caller
/// configured. Returns the native status code from thread creation
/// unchanged (0 on success, e.g. `EAGAIN` on resource exhaustion).
///
/// # Safety
/// `out` must point to writable storage for one thread handle, and `arg`
/// must stay valid for as long as `start` uses it.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_thread_create(
    out: *mut pthread_t,
    _attr: *const pthread_attr_t,
    start: ThreadStart,
    arg: *mut c_void,
) -> c_int {
    unsafe {
        let mut detached: pthread_attr_t = mem::zeroed();
        libc::pthread_attr_init(&mut detached);
        libc::pthread_attr_setdetachstate(&mut detached, libc::PTHREAD_CREATE_DETACHED);
        let ret = libc::pthread_create(out, &detached, start, arg);
        libc::pthread_attr_destroy(&mut detached);
        ret
    }
}

/// Mark a thread detached, releasing its resources automatically on exit.
///
/// # Safety
/// `t` must be a live thread handle that has not been joined or detached.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_thread_detach(t: pthread_t) -> c_int {
    unsafe { libc::pthread_detach(t) }
}

/// Block until `t` exits and store its exit value in `*out_status`.
///
/// Invalid for threads created through [`skiff_thread_create`], which are
/// detached; as with the native library, joining a detached thread is
/// undefined.
///
/// # Safety
/// `out_status` must be null or point to writable pointer storage, and `t`
/// must be a joinable handle not already joined or detached.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_thread_join(t: pthread_t, out_status: *mut *mut c_void) -> c_int {
    unsafe { libc::pthread_join(t, out_status) }
}
