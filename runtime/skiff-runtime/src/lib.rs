///
/// skiff Runtime Static Library
///
/// Provides all runtime functions needed by AOT-compiled skiff programs.
/// This crate produces a static library (libskiff_runtime.a) that gets
/// linked with the compiled skiff object file to produce a standalone
/// binary.
///
/// Contains:
/// - Program bootstrap (skiff_runtime_start)
/// - Runtime diagnostics setup (SKIFF_LOG)
/// - All standard library functions via skiff-std-* crate dependencies
///

mod bootstrap;
mod diagnostics;

pub use bootstrap::*;

pub use skiff_std_console::*;
pub use skiff_std_core::*;
pub use skiff_std_mainloop::*;
pub use skiff_std_threads::*;
