//! Program bootstrap.
//!
//! A compiled skiff program does not own its `main`; the toolchain emits a
//! thin entry that hands two function pointers to the runtime. The runtime
//! runs the program's init code exactly once, then parks the thread in the
//! host run loop until the program cancels it.

use libc::c_int;
use skiff_std_core::TickFn;
use skiff_std_mainloop::skiff_set_main_loop;
use tracing::debug;

use crate::diagnostics;

/// Start a skiff program: run `init` once, then drive `step` as the main
/// loop at `fps` until cancelled.
///
/// Blocks for the lifetime of the loop and returns 0 once it ends. The
/// process exit status is the caller's; the runtime reports success
/// unconditionally because native status codes from guest operations
/// already travel through their own return values.
#[unsafe(no_mangle)]
pub extern "C" fn skiff_runtime_start(init: TickFn, step: TickFn, fps: c_int) -> c_int {
    diagnostics::init();

    debug!("runtime start: running guest init");
    init();

    debug!(fps, "guest init done; entering main loop");
    skiff_set_main_loop(step, fps);

    0
}
