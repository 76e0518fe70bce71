//! Query-to-recommendation matching over the static knowledge base.
//!
//! Matching is plain substring containment against a lowercased query, never
//! tokenized or fuzzy. The quirks of the reference behavior (notably the
//! sector-keyword re-check during role inclusion) are part of the observable
//! contract and are kept as-is.

use crate::knowledge::{KnowledgeBase, RoleEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Guidance shown when a query matches nothing.
pub const NO_MATCH_GUIDANCE: &str = "No recommendations matched. Try an area like \
    \"technology\", \"healthcare\" or \"finance\", or ask about \"ai trends\" in a field.";

const DERIVED_TREND_IMPACT: &str = "High";

/// One card-worth of output from the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchResult {
    /// A global macro trend.
    Trend {
        name: String,
        description: String,
        impact: String,
    },
    /// A trend synthesized from a matched sector's upcoming AI trends.
    DerivedTrend {
        name: String,
        sector: String,
        description: String,
        impact: String,
    },
    /// An emerging role within a matched sector.
    Role { sector: String, role: RoleEntry },
    /// Nothing matched; carries guidance for the user.
    NoMatch { guidance: String },
}

impl MatchResult {
    /// Identifying key used for de-duplication: role title or trend name.
    pub fn key(&self) -> Option<&str> {
        match self {
            MatchResult::Trend { name, .. } | MatchResult::DerivedTrend { name, .. } => Some(name),
            MatchResult::Role { role, .. } => Some(&role.title),
            MatchResult::NoMatch { .. } => None,
        }
    }
}

/// Match a free-text interest query against the knowledge base.
///
/// Pure and idempotent; performs no I/O. The caller rejects empty or
/// whitespace-only queries before calling.
///
/// Ordering is deterministic: global trends first (when the query mentions
/// "trend"), then sector by sector in knowledge-base order, derived trends
/// before roles within a sector. Duplicate keys are dropped, first
/// occurrence wins. A query that matches nothing yields a single
/// [`MatchResult::NoMatch`].
pub fn match_query(query: &str, kb: &KnowledgeBase) -> Vec<MatchResult> {
    let q = query.to_lowercase();
    let wants_trends = q.contains("trend");

    let mut results: Vec<MatchResult> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    if wants_trends {
        for trend in &kb.trends {
            push_unique(
                &mut results,
                &mut seen,
                trend.name.clone(),
                MatchResult::Trend {
                    name: trend.name.clone(),
                    description: trend.description.clone(),
                    impact: trend.impact.clone(),
                },
            );
        }
    }

    for sector in &kb.sectors {
        // Sector gate: any keyword or lowercased interest contained in the query
        let mut candidates: Vec<String> =
            sector.keywords.iter().map(|k| k.to_lowercase()).collect();
        candidates.extend(sector.interests.iter().map(|i| i.to_lowercase()));
        if !candidates.iter().any(|c| q.contains(c.as_str())) {
            continue;
        }

        if wants_trends {
            for trend in &sector.upcoming_ai_trends {
                let name = format!("{} (in {})", trend, sector.name);
                let description = format!(
                    "Emerging AI-driven development reshaping the {} sector.",
                    sector.name
                );
                push_unique(
                    &mut results,
                    &mut seen,
                    name.clone(),
                    MatchResult::DerivedTrend {
                        name,
                        sector: sector.name.clone(),
                        description,
                        impact: DERIVED_TREND_IMPACT.to_string(),
                    },
                );
            }
        }

        // Role inclusion re-checks the sector keywords only; interest strings
        // count toward the sector gate above but not here.
        let keyword_hit = sector
            .keywords
            .iter()
            .any(|k| q.contains(k.to_lowercase().as_str()));
        for role in &sector.emerging_roles {
            if role.interest.to_lowercase().contains(q.as_str()) || keyword_hit {
                push_unique(
                    &mut results,
                    &mut seen,
                    role.title.clone(),
                    MatchResult::Role {
                        sector: sector.name.clone(),
                        role: role.clone(),
                    },
                );
            }
        }
    }

    if results.is_empty() {
        tracing::debug!("no matches for query {:?}", query);
        return vec![MatchResult::NoMatch {
            guidance: NO_MATCH_GUIDANCE.to_string(),
        }];
    }

    tracing::debug!("query {:?} matched {} results", query, results.len());
    results
}

fn push_unique(
    results: &mut Vec<MatchResult>,
    seen: &mut HashSet<String>,
    key: String,
    result: MatchResult,
) {
    // First occurrence wins; later duplicates are dropped silently
    if seen.insert(key) {
        results.push(result);
    }
}
