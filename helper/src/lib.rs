#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Public API
#[cfg(feature = "fs")]
pub mod fs;
