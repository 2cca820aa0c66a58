//!
//! skiff-std-console - Console Output
//!
//! Forwards guest messages to the host console for skiff programs.
//!
//! ## Functions
//!
//! - `console_log(msg: string)` - Write a line to stdout
//! - `console_warn(msg: string)` - Write a line to stderr
//! - `console_error(msg: string)` - Write a line to stderr
//!
//! ## Fidelity
//!
//! Message bytes travel to the console unmodified. No prefixes, no level
//! tags, no encoding checks; a message containing `%d` or invalid UTF-8
//! arrives exactly as the guest produced it. The only byte this crate adds
//! is the trailing newline.
//!

use std::ffi::CStr;
use std::io::{self, Write};

use libc::c_char;

/// Write `msg` followed by a newline and flush, so interleaved guest and
/// host output stays line-coherent.
fn forward(out: &mut impl Write, msg: &[u8]) -> io::Result<()> {
    out.write_all(msg)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Write a null-terminated message to stdout.
///
/// A null pointer is ignored. Write errors are swallowed; the console is a
/// best-effort sink.
///
/// # Safety
/// `msg` must be null or point to a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_console_log(msg: *const c_char) {
    if msg.is_null() {
        return;
    }
    let bytes = unsafe { CStr::from_ptr(msg) }.to_bytes();
    let _ = forward(&mut io::stdout().lock(), bytes);
}

/// Write a null-terminated message to stderr.
///
/// # Safety
/// `msg` must be null or point to a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_console_warn(msg: *const c_char) {
    if msg.is_null() {
        return;
    }
    let bytes = unsafe { CStr::from_ptr(msg) }.to_bytes();
    let _ = forward(&mut io::stderr().lock(), bytes);
}

/// Write a null-terminated message to stderr.
///
/// # Safety
/// `msg` must be null or point to a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn skiff_console_error(msg: *const c_char) {
    if msg.is_null() {
        return;
    }
    let bytes = unsafe { CStr::from_ptr(msg) }.to_bytes();
    let _ = forward(&mut io::stderr().lock(), bytes);
}
