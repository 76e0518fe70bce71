//! Static career knowledge base: global trends and industry sectors.
//!
//! Loaded once at startup and treated as read-only for the session. The
//! matcher takes it by reference so tests can substitute synthetic data.

use serde::{Deserialize, Serialize};

/// A macro trend independent of any sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub name: String,
    pub description: String,
    pub impact: String,
    pub keywords: Vec<String>,
}

/// A named industry grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub name: String,
    pub overview: String,
    pub keywords: Vec<String>,
    pub interests: Vec<String>,
    pub upcoming_ai_trends: Vec<String>,
    pub emerging_roles: Vec<RoleEntry>,
}

/// A single emerging-job recommendation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    pub title: String,
    /// References one of the owning sector's interest strings.
    pub interest: String,
    pub description: String,
    pub skills: Vec<String>,
    pub salary: SalaryBands,
    pub demand: String,
}

/// Indicative salary ranges by career stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBands {
    pub entry: String,
    pub mid: String,
    pub senior: String,
}

/// The full static collection consumed by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub trends: Vec<TrendEntry>,
    pub sectors: Vec<Sector>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn role(
    title: &str,
    interest: &str,
    description: &str,
    skills: &[&str],
    salary: (&str, &str, &str),
    demand: &str,
) -> RoleEntry {
    RoleEntry {
        title: title.to_string(),
        interest: interest.to_string(),
        description: description.to_string(),
        skills: strings(skills),
        salary: SalaryBands {
            entry: salary.0.to_string(),
            mid: salary.1.to_string(),
            senior: salary.2.to_string(),
        },
        demand: demand.to_string(),
    }
}

impl KnowledgeBase {
    /// The knowledge base shipped with the application.
    pub fn builtin() -> Self {
        Self {
            trends: vec![
                TrendEntry {
                    name: "Generative AI Goes Mainstream".to_string(),
                    description: "Large language models are moving from demos into everyday \
                                  tooling across knowledge work."
                        .to_string(),
                    impact: "Transformative across most white-collar roles".to_string(),
                    keywords: strings(&["ai", "generative", "llm", "automation"]),
                },
                TrendEntry {
                    name: "Green Skills Surge".to_string(),
                    description: "Decarbonization programs are creating demand for \
                                  sustainability-literate engineers and analysts."
                        .to_string(),
                    impact: "High in energy, manufacturing and construction".to_string(),
                    keywords: strings(&["green", "climate", "sustainability", "energy"]),
                },
                TrendEntry {
                    name: "Remote-First Work Matures".to_string(),
                    description: "Distributed teams are now the default for digital roles, \
                                  widening the talent pool across borders."
                        .to_string(),
                    impact: "Moderate, concentrated in digital sectors".to_string(),
                    keywords: strings(&["remote", "distributed", "hybrid"]),
                },
            ],
            sectors: vec![
                Sector {
                    name: "Technology".to_string(),
                    overview: "Software, platforms and infrastructure; the sector where AI \
                               adoption is furthest along."
                        .to_string(),
                    keywords: strings(&["technology", "tech", "software", "developer", "ai"]),
                    interests: strings(&[
                        "Artificial Intelligence",
                        "Cybersecurity",
                        "Cloud Computing",
                        "Data Science",
                    ]),
                    upcoming_ai_trends: strings(&[
                        "Agentic AI Assistants",
                        "AI-Native Software Development",
                        "Edge AI",
                    ]),
                    emerging_roles: vec![
                        role(
                            "AI Engineer",
                            "Artificial Intelligence",
                            "Builds and ships machine-learning features, from fine-tuning to \
                             inference serving.",
                            &["Python", "PyTorch", "MLOps", "Prompt Engineering"],
                            ("$95k-$120k", "$130k-$170k", "$180k-$250k"),
                            "Very High",
                        ),
                        role(
                            "Cloud Security Engineer",
                            "Cloud Computing",
                            "Secures cloud workloads and identities across multi-cloud estates.",
                            &["AWS", "IAM", "Terraform", "Zero Trust"],
                            ("$90k-$115k", "$125k-$160k", "$170k-$220k"),
                            "Very High",
                        ),
                        role(
                            "Security Analyst",
                            "Cybersecurity",
                            "Monitors, triages and responds to threats against corporate \
                             systems.",
                            &["SIEM", "Incident Response", "Threat Intel"],
                            ("$70k-$90k", "$95k-$125k", "$130k-$170k"),
                            "High",
                        ),
                        role(
                            "Data Scientist",
                            "Data Science",
                            "Turns raw product and business data into models and decisions.",
                            &["Python", "SQL", "Statistics", "Experimentation"],
                            ("$85k-$110k", "$120k-$150k", "$160k-$210k"),
                            "High",
                        ),
                    ],
                },
                Sector {
                    name: "Healthcare".to_string(),
                    overview: "Care delivery, devices and life sciences, digitizing fast under \
                               staffing pressure."
                        .to_string(),
                    keywords: strings(&["healthcare", "health", "medical", "medicine", "biotech"]),
                    interests: strings(&["Telemedicine", "Medical Devices", "Genomics"]),
                    upcoming_ai_trends: strings(&[
                        "AI-Assisted Diagnostics",
                        "Drug Discovery Models",
                    ]),
                    emerging_roles: vec![
                        role(
                            "Health Informatics Specialist",
                            "Telemedicine",
                            "Connects clinical workflows with patient-facing digital services.",
                            &["FHIR", "EHR Systems", "Data Privacy"],
                            ("$65k-$85k", "$90k-$115k", "$120k-$150k"),
                            "High",
                        ),
                        role(
                            "Genomics Data Analyst",
                            "Genomics",
                            "Analyzes sequencing output to support diagnostics and research.",
                            &["Bioinformatics", "R", "Python", "Pipelines"],
                            ("$70k-$90k", "$95k-$120k", "$125k-$160k"),
                            "Growing",
                        ),
                    ],
                },
                Sector {
                    name: "Finance & FinTech".to_string(),
                    overview: "Banking, payments and markets, where AI is reshaping risk and \
                               customer products."
                        .to_string(),
                    keywords: strings(&["finance", "fintech", "banking", "investment", "trading"]),
                    interests: strings(&[
                        "Digital Payments",
                        "Blockchain",
                        "Algorithmic Trading",
                    ]),
                    upcoming_ai_trends: strings(&[
                        "AI Credit Risk Scoring",
                        "Fraud Detection Copilots",
                        "Personalized Robo-Advisory",
                    ]),
                    emerging_roles: vec![
                        role(
                            "FinTech Product Engineer",
                            "Digital Payments",
                            "Builds consumer and merchant payment flows end to end.",
                            &["APIs", "PCI Compliance", "Mobile"],
                            ("$80k-$100k", "$110k-$140k", "$150k-$190k"),
                            "High",
                        ),
                        role(
                            "Quantitative Analyst",
                            "Algorithmic Trading",
                            "Designs and validates systematic trading and risk models.",
                            &["Statistics", "C++", "Python", "Market Microstructure"],
                            ("$100k-$130k", "$140k-$190k", "$200k-$300k"),
                            "High",
                        ),
                        role(
                            "Blockchain Developer",
                            "Blockchain",
                            "Implements smart contracts and settlement infrastructure.",
                            &["Solidity", "Rust", "Distributed Systems"],
                            ("$85k-$110k", "$120k-$155k", "$160k-$210k"),
                            "Growing",
                        ),
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_role_interests_reference_sector_interests() {
        let kb = KnowledgeBase::builtin();
        for sector in &kb.sectors {
            for role in &sector.emerging_roles {
                assert!(
                    sector.interests.contains(&role.interest),
                    "{} references unknown interest {:?}",
                    role.title,
                    role.interest
                );
            }
        }
    }

    #[test]
    fn builtin_has_unique_keys() {
        let kb = KnowledgeBase::builtin();
        let mut keys: Vec<&str> = kb.trends.iter().map(|t| t.name.as_str()).collect();
        keys.extend(
            kb.sectors
                .iter()
                .flat_map(|s| s.emerging_roles.iter().map(|r| r.title.as_str())),
        );
        let mut deduped = keys.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }

    #[test]
    fn knowledge_base_serializes() {
        let kb = KnowledgeBase::builtin();
        let json = serde_json::to_string(&kb).unwrap();
        let back: KnowledgeBase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kb);
    }
}
