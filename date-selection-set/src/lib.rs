#![doc = include_str!("../README.md")]

pub mod sorted_vec;


pub use sorted_vec::{Toggled, UniqueSortedVec};
