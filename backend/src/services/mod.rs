//! Business logic services
//!
//! Services sit between route handlers and the shared calculator.

pub mod calculator;

pub use calculator::CalculatorService;
