//! Random-number generators implementing `GeneratesRandomNumbers`.

pub mod one_through_ten;

pub use naming_core::GeneratesRandomNumbers;
pub use one_through_ten::{OneThroughTen, RANGE};
