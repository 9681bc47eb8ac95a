//! Password rule sections
//!
//! Each section holds pure predicates over one aspect of a password. The
//! validator and the scorer combine them.

mod length;
mod pattern;
mod variety;

pub use length::{char_length, length_ok};
pub use pattern::{
    contains_known_pattern, has_dominant_char, has_sequential_run, longest_repeat_run,
    pattern_found,
};
pub use variety::{digit_ok, lower_ok, observed_classes, symbol_ok, upper_ok};
