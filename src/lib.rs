//! Concurrent `wc`: one worker thread per input file, a mutex-protected
//! running total, and a completion tracker the dispatcher blocks on.

/// Use mimalloc as the global allocator.
/// Faster than glibc malloc for small allocations, with better thread-local
/// caching across worker threads.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod common;
pub mod stats;
