//! Substring search across every level of the territorial hierarchy.
//!
//! A query is a single depth-first pass over the dataset. Matches are grouped
//! by level and keep the dataset's iteration order; nothing is ranked.

mod hierarchy_search;
mod result;

pub use hierarchy_search::{SearchConfig, bulk_hierarchy_search_inner, hierarchy_search_inner};
pub use result::{Match, MatchId, Parents, SearchResult};
