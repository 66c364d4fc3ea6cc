pub mod candidate;
pub mod input;
pub mod response;
