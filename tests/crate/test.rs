#![no_std]

pub use bigmath::*;
