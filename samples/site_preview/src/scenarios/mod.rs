pub mod comparison;
pub mod review;
