pub mod command;
pub mod error;
pub mod probe;
pub mod worker;
