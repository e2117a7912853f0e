//! Query languages a rule or saved query can be written in.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryLanguage {
    Kuery,
    Lucene,
    Eql,
}

impl fmt::Display for QueryLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryLanguage::Kuery => write!(f, "kuery"),
            QueryLanguage::Lucene => write!(f, "lucene"),
            QueryLanguage::Eql => write!(f, "eql"),
        }
    }
}
