//! Services backing the command-line front end.

pub mod font;
