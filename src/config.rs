use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::Result;

/// A generation request, as read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "designs", default)]
    pub designs: Vec<String>,
    #[serde(rename = "associativity")]
    pub associativity: Option<usize>,
    #[serde(rename = "fast_ways", default)]
    pub fast_ways: Option<usize>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Command-line values take precedence; designs given on the command line
    /// replace the file's list.
    pub fn merge(
        mut self,
        designs: Vec<String>,
        associativity: Option<usize>,
        fast_ways: Option<usize>,
    ) -> Self {
        if !designs.is_empty() {
            self.designs = designs;
        }
        if associativity.is_some() {
            self.associativity = associativity;
        }
        if fast_ways.is_some() {
            self.fast_ways = fast_ways;
        }
        self
    }
}
