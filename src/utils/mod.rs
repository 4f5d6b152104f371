//! Shared text helpers: the alphabet and the key-square primitive.

pub mod alphabet;
pub mod square;
