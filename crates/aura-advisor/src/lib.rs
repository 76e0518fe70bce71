//! Career recommendation matching for Aura
//!
//! A static, in-memory knowledge base of global trends and industry sectors,
//! plus a pure matcher that maps a free-text interest query to an ordered,
//! de-duplicated list of recommendation cards.

pub mod knowledge;
pub mod matcher;

pub use knowledge::{KnowledgeBase, RoleEntry, SalaryBands, Sector, TrendEntry};
pub use matcher::{match_query, MatchResult, NO_MATCH_GUIDANCE};
