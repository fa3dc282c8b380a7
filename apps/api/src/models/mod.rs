pub mod candidate;
pub mod review;
