//!
//! skiff-std-threads - Native Threading Shim
//!
//! Forwards thread, mutex, and condition-variable calls from compiled skiff
//! programs to the host's POSIX threading library. Every operation is a
//! pass-through: the arguments go to the corresponding `pthread_*` call and
//! the native status code comes back unchanged, with no retry, no
//! interpretation, and no logging in between. Handles are owned entirely by
//! the native library; this crate never allocates, inspects, or frees their
//! internals.
//!
//! ## Handle storage
//!
//! Guest code cannot see native struct layouts, so it allocates opaque
//! buffers sized by the probes (`skiff_thread_size`, `skiff_mutex_size`,
//! `skiff_cond_size`) and passes their addresses into the other operations.
//! A handle handed to a destroy/lock/wait operation must have come from the
//! matching init/create operation and not have been released already; that
//! discipline belongs to the caller, exactly as with the native library.
//!
//! ## Platform Support
//!
//! Native Unix only (Linux, macOS). The shim binds POSIX pthreads and has
//! no meaning on targets without them.
//!

pub mod thread;
pub mod mutex;
pub mod cond;

pub use thread::*;
pub use mutex::*;
pub use cond::*;
