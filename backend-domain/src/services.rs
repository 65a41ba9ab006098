// Pure domain services

pub mod composer;

pub use composer::*;
