use design_configs::{build_design_configs, ConfigTable, DesignError, LatencyProfile};
use serde_json::json;

#[test]
fn table_json_follows_input_order() {
    let designs = ["ATOR_P", "CSM", "ator_par"];
    let table = build_design_configs(&designs, 4, None).unwrap();
    let json = serde_json::to_string(&table).unwrap();

    let ator_p = json.find("\"ATOR_P\"").unwrap();
    let csm = json.find("\"CSM\"").unwrap();
    let ator_par = json.find("\"ator_par\"").unwrap();
    assert!(ator_p < csm && csm < ator_par);
}

#[test]
fn table_json_matches_simulator_layout() {
    let table = build_design_configs(&["ATOR_P"], 4, Some(2)).unwrap();
    let value = serde_json::to_value(&table).unwrap();
    assert_eq!(
        value,
        json!({
            "ATOR_P": {
                "l1d": {
                    "tag_latency": 2,
                    "data_latency": 2,
                    "wd_latencies": [2, 2],
                    "rd_latencies": [2, 2],
                    "wt_latencies": [2, 2],
                    "rt_latencies": [2, 2]
                },
                "l2": {
                    "tag_latency": 6,
                    "data_latency": 10,
                    "wd_latencies": [12, 23, 45, 45],
                    "rd_latencies": [3, 6, 10, 10],
                    "wt_latencies": [11, 11, 11, 11],
                    "rt_latencies": [3, 3, 3, 3]
                }
            }
        })
    );
}

#[test]
fn table_round_trips_through_json() {
    let table = build_design_configs(&["csm", "ator_2p"], 8, Some(3)).unwrap();
    let json = serde_json::to_string(&table).unwrap();
    let back: ConfigTable = serde_json::from_str(&json).unwrap();
    assert_eq!(table, back);
}

#[test]
fn every_l2_sequence_has_assoc_entries() {
    let designs = ["csm", "csm_par", "ator", "ator_par", "ator_p", "ator_1p"];
    for assoc in [2, 4, 8, 16] {
        for fast_ways in 1..=assoc {
            let table = build_design_configs(&designs, assoc, Some(fast_ways)).unwrap();
            for (name, entry) in table.iter() {
                let l2 = &entry.l2;
                for seq in [
                    &l2.wd_latencies,
                    &l2.rd_latencies,
                    &l2.wt_latencies,
                    &l2.rt_latencies,
                ] {
                    assert_eq!(seq.len(), assoc, "{name} assoc={assoc} fast={fast_ways}");
                }
                assert_eq!(entry.l1d, LatencyProfile::base_l1d());
            }
        }
    }
}

#[test]
fn errors_render_their_context() {
    let err = build_design_configs(&["ator_3p"], 4, Some(1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Design 'ator_3p': priorities (3) exceed allowed fast ways (1) for assoc=4"
    );

    let err = build_design_configs(&["csm"], 4, Some(9)).unwrap_err();
    assert_eq!(err, DesignError::InvalidFastWays { fast_ways: 9, assoc: 4 });
    assert_eq!(err.to_string(), "fast_ways must be in [0,4], got 9");

    let err = build_design_configs(&["foo"], 4, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown design 'foo'. Supported: csm, csm_par, ATOR, ATOR_Par, ATOR_P"
    );
}
