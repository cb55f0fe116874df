//! One-of-two value containers and the conversions between them.
//!
//! - [`either::Either`]: a left or a right value, neither side privileged.
//! - [`result::Result`]: a success or an error value.
//! - [`trying::Try`]: the value produced by a fallible operation, or the
//!   failure it raised.
//!
//! [`conversion`] moves any of these into any other without losing the
//! payload or which side it was on.
#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]

extern crate alloc;

pub mod conversion;
pub mod either;
pub mod errors;
pub mod result;
pub mod trying;
