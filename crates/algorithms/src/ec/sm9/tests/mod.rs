//! SM9 test suite


mod engine;
mod field;
mod groups;
