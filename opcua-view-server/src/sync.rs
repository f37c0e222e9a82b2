// SPDX-License-Identifier: MPL-2.0

//! Common synchronous locks. Re-exports locks from `parking_lot` used internally.

/// Read-write lock. Use this if you usually only need to read the value.
pub type RwLock<T> = parking_lot::RwLock<T>;
/// Mutually exclusive lock. Use this if you need both read and write often.
pub type Mutex<T> = parking_lot::Mutex<T>;

/// Tracing macro for obtaining a read lock on a `RwLock`.
#[macro_export]
macro_rules! trace_read_lock {
    ( $x:expr ) => {{
        let v = $x.read();
        v
    }};
}

/// Tracing macro for obtaining a write lock on a `RwLock`.
#[macro_export]
macro_rules! trace_write_lock {
    ( $x:expr ) => {{
        let v = $x.write();
        v
    }};
}
