use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Latency parameters of one cache level, in simulator cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyProfile {
    #[serde(rename = "tag_latency")]
    pub tag_latency: usize,
    #[serde(rename = "data_latency")]
    pub data_latency: usize,
    /// Write-data latency per way
    #[serde(rename = "wd_latencies")]
    pub wd_latencies: Vec<usize>,
    /// Read-data latency per way
    #[serde(rename = "rd_latencies")]
    pub rd_latencies: Vec<usize>,
    /// Write-tag latency per way
    #[serde(rename = "wt_latencies")]
    pub wt_latencies: Vec<usize>,
    /// Read-tag latency per way
    #[serde(rename = "rt_latencies")]
    pub rt_latencies: Vec<usize>,
}

impl LatencyProfile {
    /// L1D profile shared by every design.
    pub fn base_l1d() -> Self {
        Self {
            tag_latency: 2,
            data_latency: 2,
            wd_latencies: vec![2, 2],
            rd_latencies: vec![2, 2],
            wt_latencies: vec![2, 2],
            rt_latencies: vec![2, 2],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignEntry {
    #[serde(rename = "l1d")]
    pub l1d: LatencyProfile,
    #[serde(rename = "l2")]
    pub l2: LatencyProfile,
}

/// Design name -> latency profiles, in the order names were last supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigTable(IndexMap<String, DesignEntry>);

impl ConfigTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins; the key moves to the end.
    pub fn insert(&mut self, name: String, entry: DesignEntry) {
        self.0.shift_remove(&name);
        self.0.insert(name, entry);
    }

    pub fn get(&self, name: &str) -> Option<&DesignEntry> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DesignEntry> {
        self.0.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DesignEntry)> {
        self.0.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}
