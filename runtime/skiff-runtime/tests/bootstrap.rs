///
/// Runtime Bootstrap Integration Tests
///
/// Exercises the runtime surface the way a compiled skiff program would:
/// start the runtime with init/step entry points, run shim threads against
/// a shim mutex, stop the loop with cancel.
///
/// Run all:  `cargo test --test bootstrap`
/// Run one:  `cargo test --test bootstrap agree`
///
/// NOTE: the main loop is process-wide state, so tests that drive it are
/// serialized via LOOP_LOCK to prevent races.
///

use std::ffi::c_void;
use std::mem;
use std::ptr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use skiff_runtime::{
    skiff_cancel_main_loop, skiff_mutex_destroy, skiff_mutex_init, skiff_mutex_lock,
    skiff_mutex_unlock, skiff_runtime_start, skiff_thread_create,
};

static LOOP_LOCK: Mutex<()> = Mutex::new(());

// ── Bootstrap ordering ──────────────────────────────────────────────

static INIT_CALLS: AtomicI64 = AtomicI64::new(0);
static STEPS_BEFORE_INIT: AtomicI64 = AtomicI64::new(0);
static STEPS: AtomicI64 = AtomicI64::new(0);

extern "C" fn record_init() {
    INIT_CALLS.fetch_add(1, Ordering::SeqCst);
}

extern "C" fn record_step() {
    if INIT_CALLS.load(Ordering::SeqCst) == 0 {
        STEPS_BEFORE_INIT.fetch_add(1, Ordering::SeqCst);
    }
    if STEPS.fetch_add(1, Ordering::SeqCst) + 1 == 25 {
        skiff_cancel_main_loop();
    }
}

#[test]
fn bootstrap_runs_init_once_then_steps() {
    let _lock = LOOP_LOCK.lock().unwrap();
    INIT_CALLS.store(0, Ordering::SeqCst);
    STEPS_BEFORE_INIT.store(0, Ordering::SeqCst);
    STEPS.store(0, Ordering::SeqCst);

    let code = skiff_runtime_start(record_init, record_step, 0);

    assert_eq!(code, 0);
    assert_eq!(INIT_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(STEPS_BEFORE_INIT.load(Ordering::SeqCst), 0);
    assert_eq!(STEPS.load(Ordering::SeqCst), 25);
}

static ROUND_INITS: AtomicI64 = AtomicI64::new(0);
static ROUND_STEPS: AtomicI64 = AtomicI64::new(0);

extern "C" fn round_init() {
    ROUND_INITS.fetch_add(1, Ordering::SeqCst);
}

extern "C" fn round_step() {
    if ROUND_STEPS.fetch_add(1, Ordering::SeqCst) % 3 == 2 {
        skiff_cancel_main_loop();
    }
}

#[test]
fn a_second_bootstrap_runs_after_the_first_ends() {
    let _lock = LOOP_LOCK.lock().unwrap();
    ROUND_INITS.store(0, Ordering::SeqCst);
    ROUND_STEPS.store(0, Ordering::SeqCst);

    assert_eq!(skiff_runtime_start(round_init, round_step, 0), 0);
    assert_eq!(skiff_runtime_start(round_init, round_step, 0), 0);

    assert_eq!(ROUND_INITS.load(Ordering::SeqCst), 2);
    assert_eq!(ROUND_STEPS.load(Ordering::SeqCst), 6);
}

// ── Threads and mutexes across the shim ─────────────────────────────

struct SharedCounter {
    lock: libc::pthread_mutex_t,
    value: i64,
    done: AtomicI64,
}

extern "C" fn bump_many(arg: *mut c_void) -> *mut c_void {
    let shared = arg as *mut SharedCounter;
    unsafe {
        for _ in 0..250 {
            skiff_mutex_lock(&raw mut (*shared).lock);
            (*shared).value += 1;
            skiff_mutex_unlock(&raw mut (*shared).lock);
        }
        (*shared).done.fetch_add(1, Ordering::SeqCst);
    }
    ptr::null_mut()
}

#[test]
fn detached_shim_threads_agree_through_a_shim_mutex() {
    let shared: *mut SharedCounter = Box::into_raw(Box::new(SharedCounter {
        lock: unsafe { mem::zeroed() },
        value: 0,
        done: AtomicI64::new(0),
    }));

    unsafe {
        assert_eq!(skiff_mutex_init(&raw mut (*shared).lock, ptr::null()), 0);

        for _ in 0..8 {
            let mut handle: libc::pthread_t = mem::zeroed();
            assert_eq!(
                skiff_thread_create(&mut handle, ptr::null(), bump_many, shared as *mut c_void),
                0
            );
        }

        // The workers are detached, so completion is observed through the
        // done counter rather than joins.
        let deadline = Instant::now() + Duration::from_secs(10);
        while (*shared).done.load(Ordering::SeqCst) < 8 {
            assert!(Instant::now() < deadline, "detached workers did not finish");
            thread::sleep(Duration::from_millis(5));
        }

        assert_eq!((*shared).value, 8 * 250);
        assert_eq!(skiff_mutex_destroy(&raw mut (*shared).lock), 0);
        drop(Box::from_raw(shared));
    }
}
