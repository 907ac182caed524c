//! Word list input
//!
//! Streams normalized candidates out of line-oriented dictionary files such as
//! ispell `*.dic` lists.

pub mod source;

pub use source::LineSource;
