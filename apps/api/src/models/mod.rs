pub mod candidate;
pub mod lenient;
pub mod records;
