//! The Skylog Library.
//!
//! Storage-agnostic building blocks shared by the flight store and
//! its command-line tools.

#![deny(
    asm_sub_register,
    deprecated,
    missing_abi,
    unsafe_code,
    unused_macros,
    unused_must_use,
    unused_unsafe
)]
#![deny(clippy::from_over_into, clippy::needless_question_mark)]
#![cfg_attr(
    not(debug_assertions),
    deny(unused_imports, unused_mut, unused_variables,)
)]

pub mod error;
pub mod normalize;
pub mod property;
pub mod timestamp;

pub use error::{SkylogError, SkylogResult};
