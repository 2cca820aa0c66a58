//!
//! skiff-std-mainloop - Host Run Loop
//!
//! Drives a guest step function frame by frame on the thread that registers
//! it, in the style of browser-hosted run loops: registration blocks, the
//! host owns the cadence, and the guest's only way out is an explicit
//! cancel.
//!
//! ## Functions
//!
//! - `set_main_loop(step: fn(), fps: int)` - Register `step` and drive it
//!   until cancelled; blocks the calling thread
//! - `cancel_main_loop()` - Stop the running loop after its current frame
//!
//! ## Cadence
//!
//! `fps > 0` paces frames against monotonic deadlines spaced `1/fps` apart.
//! A late frame rebases the schedule instead of bursting to catch up, so a
//! stall costs the frames it covered and nothing after. `fps <= 0` runs
//! unthrottled with a scheduler yield between frames.
//!
//! ## Cancellation
//!
//! `cancel_main_loop` may be called from inside the step function or from
//! another thread. The loop observes the flag between frames; the current
//! frame always completes. Cancelling when no loop runs is a logged no-op.
//!

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use libc::c_int;
use skiff_std_core::TickFn;
use tracing::{debug, warn};

/// Set while a loop is driving frames. Guards against a second registration
/// from inside a step function.
static RUNNING: AtomicBool = AtomicBool::new(false);

/// Stop request for the running loop, observed between frames.
static CANCELLED: AtomicBool = AtomicBool::new(false);

enum Cadence {
    Throttled(Duration),
    Unthrottled,
}

impl Cadence {
    fn from_fps(fps: c_int) -> Self {
        if fps > 0 {
            Cadence::Throttled(Duration::from_secs(1) / fps as u32)
        } else {
            Cadence::Unthrottled
        }
    }
}

/// Run `step` until cancelled, returning the number of frames driven.
fn drive(step: TickFn, cadence: Cadence) -> u64 {
    let mut frames: u64 = 0;
    let mut deadline = Instant::now();

    while !CANCELLED.load(Ordering::Acquire) {
        step();
        frames += 1;

        match cadence {
            Cadence::Throttled(frame) => {
                deadline += frame;
                let now = Instant::now();
                if deadline > now {
                    thread::sleep(deadline - now);
                } else {
                    // Lost the cadence; rebase the schedule rather than
                    // burst to catch up.
                    deadline = now;
                }
            }
            Cadence::Unthrottled => thread::yield_now(),
        }
    }

    frames
}

/// Register `step` as the program's main loop and drive it on the calling
/// thread until [`skiff_cancel_main_loop`] is observed.
///
/// Blocks for the lifetime of the loop. Only one loop may run per process;
/// a second registration while one is running is rejected with a warning
/// and returns immediately.
#[unsafe(no_mangle)]
pub extern "C" fn skiff_set_main_loop(step: TickFn, fps: c_int) {
    if RUNNING.swap(true, Ordering::AcqRel) {
        warn!("main loop already running; ignoring second registration");
        return;
    }
    CANCELLED.store(false, Ordering::Release);

    debug!(fps, "entering main loop");
    let frames = drive(step, Cadence::from_fps(fps));
    debug!(frames, "main loop finished");

    RUNNING.store(false, Ordering::Release);
}

/// Request that the running main loop stop after its current frame.
///
/// Callable from the step function itself or from any other thread. If no
/// loop is running the call is a no-op apart from a warning.
#[unsafe(no_mangle)]
pub extern "C" fn skiff_cancel_main_loop() {
    if !RUNNING.load(Ordering::Acquire) {
        warn!("cancel requested but no main loop is running");
        return;
    }
    CANCELLED.store(true, Ordering::Release);
}
