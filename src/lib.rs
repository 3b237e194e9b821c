//! TextF - Simple string helper utilities inspired by Total.js
//!
//! TextF provides the small string-manipulation helpers used across
//! Total.js-style applications:
//! - Character-wise reversal and palindrome detection
//! - Ellipsis truncation
//! - Whitespace word splitting and title-casing
//! - Vowel counting
//!
//! All helpers are pure, synchronous functions over borrowed input and are
//! safe to call from any number of threads without coordination.

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod utils;

// Re-export main functions for public API
pub use utils::string::{
    capitalize_words, count_vowels, is_palindrome, reverse, split_into_words, truncate,
};
pub use utils::{Utils, U};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::utils::{Utils, U};
    pub use crate::{
        capitalize_words, count_vowels, is_palindrome, reverse, split_into_words, truncate,
    };
}
