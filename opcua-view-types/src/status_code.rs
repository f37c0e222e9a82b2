// SPDX-License-Identifier: MPL-2.0

//! Contains the subset of the OPC UA `StatusCode` table used by the view-navigation
//! services. Each code is a plain `u32`, with `0` ("Good") meaning success and the
//! high bit set for anything in the "Bad" severity band.

use std::fmt;

/// Result status of an operation, wire-compatible with the OPC UA `StatusCode` `u32`
/// encoding: zero is `Good`, values with the top two bits set are `Bad`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct StatusCode(u32);

macro_rules! status_codes {
    ($( $(#[$doc:meta])* $name:ident = $val:expr ),* $(,)?) => {
        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $name: StatusCode = StatusCode($val);
            )*

            /// Human readable name of the status code, or `"Unknown"`.
            pub fn name(&self) -> &'static str {
                match self.0 {
                    $( $val => stringify!($name), )*
                    _ => "Unknown",
                }
            }
        }
    };
}

status_codes! {
    /// The operation succeeded.
    Good = 0,
    /// Caller specified an empty input array where at least one element is required.
    BadNothingToDo = 0x8004_0000,
    /// The requested view does not exist.
    BadViewIdUnknown = 0x8025_0000,
    /// The starting node id is not present in the node store.
    BadNodeIdUnknown = 0x8003_3000,
    /// The browse direction is not one of forward, inverse, or both.
    BadBrowseDirectionInvalid = 0x8015_6000,
    /// The reference type id is unknown, or does not name a reference-type node.
    BadReferenceTypeIdInvalid = 0x8015_5000,
    /// The session has no continuation points left to allocate.
    BadNoContinuationPoints = 0x8015_7000,
    /// The supplied continuation point identifier is not known to the session.
    BadContinuationPointInvalid = 0x8015_4000,
    /// A relative path element had a null or empty target browse name.
    BadBrowseNameInvalid = 0x8003_5000,
    /// The path did not resolve to any target, and no other error applies.
    BadNoMatch = 0x8002_a000,
    /// An allocation failed while building a result.
    BadOutOfMemory = 0x8000_1000,
}

impl Default for StatusCode {
    fn default() -> Self {
        StatusCode::Good
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl StatusCode {
    /// Returns `true` if this is the `Good` status, i.e. the operation succeeded.
    pub fn is_good(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the severity bits mark this code as `Bad`.
    pub fn is_bad(&self) -> bool {
        self.0 & 0xC000_0000 == 0x8000_0000
    }

    /// The raw `u32` status code value.
    pub fn bits(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn good_is_good() {
        assert!(StatusCode::Good.is_good());
        assert!(!StatusCode::Good.is_bad());
    }

    #[test]
    fn bad_codes_are_bad() {
        assert!(StatusCode::BadNodeIdUnknown.is_bad());
        assert!(!StatusCode::BadNodeIdUnknown.is_good());
    }

    #[test]
    fn default_is_good() {
        assert_eq!(StatusCode::default(), StatusCode::Good);
    }
}
