pub mod error;
pub mod input;
pub mod numeronym;
pub mod pair_sum;

// Re-export main types for convenient access
pub use error::{Error, Result};

// Re-export numeronym conversion entry points
pub use numeronym::{
    all_numeronyms, segments, text_to_numeronym, text_to_numeronym_into,
    token_to_numeronym, Segment, Segments, Token,
};

// Re-export the pair-sum scan
pub use pair_sum::find_pair;
