#![no_main]

use std::collections::BTreeMap;

use libfuzzer_sys::fuzz_target;
use serde::Deserialize;

#[derive(Deserialize)]
struct FuzzEntity {
    #[serde(default)]
    networks: Option<Vec<netrecon::RawNetwork>>,
    #[serde(default)]
    sources: BTreeMap<String, netrecon::Source>,
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = serde_json::from_slice::<FuzzEntity>(data) {
        let mut entity = netrecon::Entity::new(netrecon::EntityKind::Server, "fuzz");
        entity.networks = input.networks;
        entity.sources = input.sources;

        // Reconciliation must be total: a report or a typed error
        let reconciler = netrecon::Reconciler::default();
        let first = reconciler.reconcile(&entity).map(|r| serde_json::to_string(&r).ok());
        let second = reconciler.reconcile(&entity).map(|r| serde_json::to_string(&r).ok());
        assert_eq!(first.is_ok(), second.is_ok());
        if let (Ok(a), Ok(b)) = (first, second) {
            assert_eq!(a, b);
        }
    }
});
