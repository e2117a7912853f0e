//! Rule type enum driving filter-resolution dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::filter::FilterError;

/// Detection strategy of a rule.
///
/// The set is closed: every consumer matches exhaustively, so a new
/// variant fails to compile until each dispatch site handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RuleType {
    Query,
    SavedQuery,
    ThreatMatch,
    Threshold,
    NewTerms,
    Eql,
    MachineLearning,
}

impl RuleType {
    pub const ALL: [RuleType; 7] = [
        RuleType::Query,
        RuleType::SavedQuery,
        RuleType::ThreatMatch,
        RuleType::Threshold,
        RuleType::NewTerms,
        RuleType::Eql,
        RuleType::MachineLearning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::Query => "query",
            RuleType::SavedQuery => "saved_query",
            RuleType::ThreatMatch => "threat_match",
            RuleType::Threshold => "threshold",
            RuleType::NewTerms => "new_terms",
            RuleType::Eql => "eql",
            RuleType::MachineLearning => "machine_learning",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = FilterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "query" => Ok(RuleType::Query),
            "saved_query" => Ok(RuleType::SavedQuery),
            "threat_match" => Ok(RuleType::ThreatMatch),
            "threshold" => Ok(RuleType::Threshold),
            "new_terms" => Ok(RuleType::NewTerms),
            "eql" => Ok(RuleType::Eql),
            "machine_learning" => Ok(RuleType::MachineLearning),
            other => Err(FilterError::Internal(format!(
                "unexpected rule type: '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for RuleType {
    type Error = FilterError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleType> for String {
    fn from(value: RuleType) -> Self {
        value.as_str().to_string()
    }
}
