//! Static properties used to construct predictive parsers.
//!
//! Every analysis is a monotone fixed point over the rule list: passes repeat until one of
//! them changes nothing. None of them can fail.

pub mod derivability;
pub mod first;
pub mod follow;
pub mod usefulness;

pub use self::derivability::Derivability;
pub use self::first::FirstSets;
pub use self::follow::FollowSets;
pub use self::usefulness::{Usefulness, UselessSymbol};
