use log::debug;

use crate::{
    bucket::WaySplit,
    error::{DesignError, Result, SUPPORTED_DESIGNS},
    priority::parse_priority,
    profile::{ConfigTable, DesignEntry, LatencyProfile},
};

const CSM_KEYS: [&str; 2] = ["csm", "csm_par"];
const ATOR_KEYS: [&str; 1] = ["ator"];
const ATOR_PAR_KEYS: [&str; 1] = ["ator_par"];

/// A recognized cache design.
///
/// The `*Par` variants only change how the simulator schedules accesses
/// (parallel instead of sequential tag/data lookup); they produce the same
/// latency numbers as their sequential counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Design {
    Csm,
    CsmPar,
    Ator,
    AtorPar,
    /// Sequential ATOR whose first `n` fast ways are priority ways
    AtorPriority(usize),
}

impl Design {
    /// Classify a design name. Matching ignores case and surrounding whitespace.
    pub fn classify(name: &str) -> Result<Self> {
        let key = name.trim().to_lowercase();
        let key = key.as_str();

        if CSM_KEYS.contains(&key) {
            return Ok(if key == "csm" {
                Design::Csm
            } else {
                Design::CsmPar
            });
        }
        if ATOR_KEYS.contains(&key) {
            return Ok(Design::Ator);
        }
        if ATOR_PAR_KEYS.contains(&key) {
            return Ok(Design::AtorPar);
        }
        if let Some(priority) = parse_priority(key) {
            return Ok(Design::AtorPriority(priority));
        }
        Err(DesignError::UnknownDesign {
            design: name.to_string(),
            supported: SUPPORTED_DESIGNS,
        })
    }

    /// Build the L1D/L2 profiles of this design. `name` is only used for error reporting.
    pub fn entry(&self, name: &str, split: &WaySplit) -> Result<DesignEntry> {
        let l2 = match *self {
            Design::Csm | Design::CsmPar => LatencyProfile {
                tag_latency: 10,
                data_latency: 10,
                wd_latencies: split.two_bucket(23, 45),
                rd_latencies: split.two_bucket(6, 10),
                wt_latencies: split.two_bucket(11, 22),
                rt_latencies: split.two_bucket(3, 5),
            },
            // tag access does not depend on the fast/slow split here
            Design::Ator | Design::AtorPar => LatencyProfile {
                tag_latency: 6,
                data_latency: 10,
                wd_latencies: split.two_bucket(23, 45),
                rd_latencies: split.two_bucket(6, 10),
                wt_latencies: split.uniform(11),
                rt_latencies: split.uniform(3),
            },
            Design::AtorPriority(priority) => {
                let capacity = (split.assoc() / 2).min(split.fast());
                if priority > capacity {
                    return Err(DesignError::PriorityExceedsCapacity {
                        design: name.to_string(),
                        priority,
                        capacity,
                        assoc: split.assoc(),
                    });
                }
                LatencyProfile {
                    tag_latency: 6,
                    data_latency: 10,
                    wd_latencies: split.three_bucket(priority, 12, 23, 45),
                    rd_latencies: split.three_bucket(priority, 3, 6, 10),
                    wt_latencies: split.uniform(11),
                    rt_latencies: split.uniform(3),
                }
            }
        };
        Ok(DesignEntry {
            l1d: LatencyProfile::base_l1d(),
            l2,
        })
    }
}

/// Build the latency table for `designs`.
///
/// `fast_ways` defaults to `assoc / 2`. Output keys are the names exactly as
/// given. The first failing design aborts the whole call.
pub fn build_design_configs<S: AsRef<str>>(
    designs: &[S],
    assoc: usize,
    fast_ways: Option<usize>,
) -> Result<ConfigTable> {
    let split = WaySplit::new(assoc, fast_ways)?;
    debug!(
        "assoc = {}, fast ways = {}, slow ways = {}",
        split.assoc(),
        split.fast(),
        split.slow()
    );

    let mut table = ConfigTable::new();
    for name in designs {
        let name = name.as_ref();
        let design = Design::classify(name)?;
        debug!("design {name:?} -> {design:?}");
        table.insert(name.to_string(), design.entry(name, &split)?);
    }
    Ok(table)
}
