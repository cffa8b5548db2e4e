//! Algorithm registry tests.
//!
//! The network server resolves each device profile's ADR algorithm id
//! through the registry, then calls `decide` on the result.

use adr_core::constants::DEFAULT_ALGORITHM_ID;
use adr_core::{AdrAlgorithm, AdrConfig, AdrError, AdrRegistry, AdrRequest, AdrResponse, DefaultAdr};

/// Variant that never spends margin: only nbTrans follows the default.
struct Conservative {
    inner: DefaultAdr,
}

impl AdrAlgorithm for Conservative {
    fn id(&self) -> &str {
        "conservative"
    }

    fn name(&self) -> &str {
        "Conservative (nbTrans only)"
    }

    fn decide(&self, req: &AdrRequest) -> AdrResponse {
        AdrResponse {
            nb_trans: self.inner.decide(req).nb_trans,
            ..AdrResponse::unchanged(req)
        }
    }
}

/// Default engine with a wider margin step, under its own id.
struct WideStep {
    inner: DefaultAdr,
}

impl AdrAlgorithm for WideStep {
    fn id(&self) -> &str {
        "wide_step"
    }

    fn name(&self) -> &str {
        "Default ADR, 6 dB steps"
    }

    fn decide(&self, req: &AdrRequest) -> AdrResponse {
        self.inner.decide(req)
    }
}

fn request() -> AdrRequest {
    AdrRequest {
        adr: true,
        dr: 0,
        tx_power_index: 0,
        nb_trans: 1,
        max_dr: 5,
        max_tx_power_index: 7,
        required_snr_for_dr: 0.0,
        installation_margin: 0.0,
        uplink_history: (0..20)
            .map(|f_cnt| adr_core::UplinkHistoryEntry {
                f_cnt,
                max_snr: 12.0,
                tx_power_index: 0,
            })
            .collect(),
    }
}

fn populated() -> AdrRegistry {
    let mut registry = AdrRegistry::default();
    registry
        .register(Box::new(Conservative {
            inner: DefaultAdr::new(),
        }))
        .unwrap();
    let wide = DefaultAdr::with_config(AdrConfig {
        margin_step_db: 6.0,
        ..AdrConfig::default()
    })
    .unwrap();
    registry.register(Box::new(WideStep { inner: wide })).unwrap();
    registry
}

#[test]
fn dispatches_by_id() {
    let registry = populated();
    let req = request();

    // 12 dB margin: four 3 dB steps, or two 6 dB steps.
    assert_eq!(registry.decide(DEFAULT_ALGORITHM_ID, &req).unwrap().dr, 4);
    assert_eq!(registry.decide("wide_step", &req).unwrap().dr, 2);
    assert_eq!(registry.decide("conservative", &req).unwrap().dr, 0);
}

#[test]
fn unknown_id_is_an_error() {
    let registry = populated();
    let err = registry.decide("lr_fhss", &request()).unwrap_err();
    assert!(matches!(err, AdrError::UnknownAlgorithm(ref id) if id == "lr_fhss"));
    assert_eq!(err.to_string(), "Unknown ADR algorithm: lr_fhss");
}

#[test]
fn duplicate_registration_keeps_original() {
    let mut registry = populated();
    let err = registry
        .register(Box::new(Conservative {
            inner: DefaultAdr::new(),
        }))
        .unwrap_err();
    assert!(matches!(err, AdrError::DuplicateAlgorithm(_)));
    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry.get("conservative").unwrap().name(),
        "Conservative (nbTrans only)"
    );
}

#[test]
fn listing_is_sorted_by_id() {
    let registry = populated();
    // Id order, independent of registration order.
    let ids: Vec<&str> = registry.algorithms().map(|(id, _)| id).collect();
    let names: Vec<&str> = registry.algorithms().map(|(_, name)| name).collect();
    assert_eq!(ids, vec!["conservative", "default", "wide_step"]);
    assert_eq!(names[1], "Default ADR algorithm (LoRa only)");
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(populated());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || registry.decide(DEFAULT_ALGORITHM_ID, &request()).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().dr, 4);
    }
}
