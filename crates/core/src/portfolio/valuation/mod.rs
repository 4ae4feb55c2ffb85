pub mod valuation_calculator;
pub mod valuation_model;

#[cfg(test)]
mod valuation_calculator_tests;

pub use valuation_calculator::*;
pub use valuation_model::*;
