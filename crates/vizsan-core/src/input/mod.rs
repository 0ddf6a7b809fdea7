pub mod guard;
pub mod read;
