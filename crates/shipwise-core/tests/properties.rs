//! Property-based tests for shipping option resolution.

use proptest::prelude::*;

use shipwise_core::impls::{StaticCourier, StaticResponse};
use shipwise_core::{
    FallbackPolicy, LookupError, ServiceabilityQuery, ShippingRate, ShippingResolver,
    ShippingType, assemble_options,
};

const THRESHOLD: u32 = 5000;

fn courier_strategy() -> impl Strategy<Value = Option<ShippingRate>> {
    prop::option::of((0u64..10_000, 1u32..10).prop_map(|(cost, days)| {
        ShippingRate::courier("Express Courier", cost).with_estimated_delivery_days(days)
    }))
}

fn response_strategy() -> impl Strategy<Value = StaticResponse> {
    prop_oneof![
        (0u64..10_000).prop_map(|cost| StaticResponse::Serviceable(ShippingRate::courier("X", cost))),
        Just(StaticResponse::Unserviceable),
        Just(StaticResponse::Failing(LookupError::Upstream("503".into()))),
        Just(StaticResponse::Failing(LookupError::MalformedResponse("<html>".into()))),
    ]
}

fn postal_code_strategy() -> impl Strategy<Value = String> {
    "[0-9]{6}"
}

proptest! {
    /// P1: never empty, never more than two entries
    #[test]
    fn options_have_one_or_two_entries(courier in courier_strategy(), weight in 1u32..100_000) {
        let options = assemble_options(courier, weight, &FallbackPolicy::default());
        prop_assert!((1..=2).contains(&options.len()));
        prop_assert!(!options.is_empty());
    }

    /// P2: the courier entry comes first when both are present
    #[test]
    fn courier_is_listed_first(courier in courier_strategy(), weight in 1u32..100_000) {
        let options = assemble_options(courier, weight, &FallbackPolicy::default());
        if options.len() == 2 {
            prop_assert_eq!(options.as_slice()[0].kind, ShippingType::Courier);
            prop_assert_eq!(options.as_slice()[1].kind, ShippingType::Transport);
        }
    }

    /// P3: heavy parcels get both channels when the courier serves them
    #[test]
    fn heavy_serviceable_parcels_get_both(cost in 0u64..10_000, weight in THRESHOLD..100_000) {
        let courier = ShippingRate::courier("Express Courier", cost);
        let options = assemble_options(Some(courier), weight, &FallbackPolicy::default());
        prop_assert_eq!(options.len(), 2);
        prop_assert!(options.courier().is_some());
        prop_assert!(options.transport().is_some());
    }

    /// P4: light serviceable parcels get the courier only
    #[test]
    fn light_serviceable_parcels_get_courier_only(cost in 0u64..10_000, weight in 1u32..THRESHOLD) {
        let courier = ShippingRate::courier("Express Courier", cost);
        let options = assemble_options(Some(courier), weight, &FallbackPolicy::default());
        prop_assert_eq!(options.len(), 1);
        prop_assert_eq!(options.first().kind, ShippingType::Courier);
        prop_assert_eq!(options.first().cost, cost);
    }

    /// P5: no courier means transport only, whatever the weight
    #[test]
    fn missing_courier_means_transport_only(weight in 1u32..100_000) {
        let options = assemble_options(None, weight, &FallbackPolicy::default());
        prop_assert_eq!(options.len(), 1);
        prop_assert_eq!(options.first().kind, ShippingType::Transport);
    }

    /// P6: transport entries always carry the fixed fallback terms
    #[test]
    fn transport_entries_have_fixed_terms(courier in courier_strategy(), weight in 1u32..100_000) {
        let options = assemble_options(courier, weight, &FallbackPolicy::default());
        for rate in options.iter().filter(|r| r.is_transport()) {
            prop_assert_eq!(rate.cost, 0);
            prop_assert_eq!(rate.handling_fee, 150);
            prop_assert!(rate.is_serviceable);
        }
    }

    /// Every returned rate is serviceable, through the full async path
    #[test]
    fn resolver_only_returns_serviceable_rates(
        response in response_strategy(),
        postal_code in postal_code_strategy(),
        weight in 1u32..100_000,
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let resolver = ShippingResolver::new(StaticCourier::new(response.clone()));
        let query = ServiceabilityQuery::new(&postal_code, weight).unwrap();

        let options = runtime.block_on(resolver.resolve(&query));

        prop_assert!(options.iter().all(|r| r.is_serviceable));
        match response {
            StaticResponse::Serviceable(_) => {
                prop_assert_eq!(options.first().kind, ShippingType::Courier);
                prop_assert_eq!(options.len(), if weight >= THRESHOLD { 2 } else { 1 });
            }
            StaticResponse::Unserviceable | StaticResponse::Failing(_) => {
                prop_assert_eq!(options.len(), 1);
                prop_assert_eq!(options.first().kind, ShippingType::Transport);
            }
        }
    }
}
