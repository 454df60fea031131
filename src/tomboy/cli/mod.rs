pub mod print;
pub mod setup;
