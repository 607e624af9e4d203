pub mod constants;
pub mod matcher;

pub use matcher::{
    match_substitution, match_substitution_with, relative_deviation, MatchStrategy, OriginalItem,
    WeightedDeviation,
};
