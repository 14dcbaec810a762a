#![allow(clippy::upper_case_acronyms)]

pub mod map;

pub use map::BSTMap;
