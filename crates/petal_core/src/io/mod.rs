pub mod input;
pub mod options;
