// SPDX-License-Identifier: MPL-2.0

//! Cryptographically strong random byte generation, used to mint continuation
//! point identifiers.
#![warn(missing_docs)]

pub mod random;
