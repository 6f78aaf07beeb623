#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use petvitals_core::metrics::{bcs, bmi};
use petvitals_core::{Level, MetricsEngine, Pet, Species};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn arb_species() -> impl Strategy<Value = Species> {
    prop_oneof![Just(Species::Dog), Just(Species::Cat)]
}

fn arb_pet() -> impl Strategy<Value = Pet> {
    (
        arb_species(),
        proptest::option::of(0.1f64..120.0),
        proptest::option::of(0.0f64..150.0),
        proptest::option::of(0i64..8000),
        proptest::collection::vec("[a-z_]{3,12}", 0..5),
    )
        .prop_map(|(species, weight, height, age_days, conditions)| Pet {
            species,
            weight,
            height,
            birthdate: age_days.map(|d| reference() - Duration::days(d)),
            conditions,
            vaccines: Vec::new(),
        })
}

fn severity_rank(level: Level) -> u8 {
    match level {
        Level::Normal => 0,
        Level::Warning => 1,
        Level::Danger => 2,
        Level::Info | Level::Error => u8::MAX,
    }
}

proptest! {
    #[test]
    fn every_metric_is_idempotent(pet in arb_pet(), fallback in proptest::option::of(5.0f64..60.0)) {
        let engine = MetricsEngine::as_of(reference());
        prop_assert_eq!(engine.compute_bmi(&pet), engine.compute_bmi(&pet));
        prop_assert_eq!(engine.compute_bcs(&pet), engine.compute_bcs(&pet));
        prop_assert_eq!(
            engine.assess_disease_risk(Some(&pet), fallback),
            engine.assess_disease_risk(Some(&pet), fallback)
        );
        if pet.weight.is_some() {
            prop_assert_eq!(engine.compute_mer(&pet), engine.compute_mer(&pet));
        }
    }

    #[test]
    fn bmi_and_bcs_agree_on_computability(pet in arb_pet()) {
        let engine = MetricsEngine::as_of(reference());
        prop_assert_eq!(engine.compute_bmi(&pet).is_some(), engine.compute_bcs(&pet).is_some());
    }

    #[test]
    fn bcs_score_stays_on_scale(species in arb_species(), value in 0.0f64..500.0) {
        let s = bcs::score(species, value);
        prop_assert!((1..=9).contains(&s));
    }

    #[test]
    fn heavier_never_looks_healthier(species in arb_species(), a in 1.0f64..60.0, b in 1.0f64..60.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        // above the healthy band, severity is monotone in BMI
        let healthy_floor = bmi::bands(species).underweight_below;
        prop_assume!(lo >= healthy_floor);
        let (_, lo_level) = bmi::classify(species, lo);
        let (_, hi_level) = bmi::classify(species, hi);
        prop_assert!(severity_rank(lo_level) <= severity_rank(hi_level));
        prop_assert!(bcs::score(species, lo) <= bcs::score(species, hi));
    }

    #[test]
    fn mer_is_positive_and_info_when_weighed(pet in arb_pet()) {
        let engine = MetricsEngine::as_of(reference());
        let r = engine.compute_mer(&pet);
        match pet.weight {
            Some(_) => {
                prop_assert_eq!(r.level, Level::Info);
                prop_assert!(r.value.as_f64().unwrap() > 0.0);
            }
            None => prop_assert_eq!(r.level, Level::Error),
        }
    }

    #[test]
    fn each_condition_adds_one_point(pet in arb_pet(), extra in "[a-z]{4,8}") {
        let engine = MetricsEngine::as_of(reference());
        let before = engine.assess_disease_risk(Some(&pet), None).score;
        let after = engine.assess_disease_risk(Some(&pet.clone().with_condition(extra)), None).score;
        prop_assert_eq!(after, before + 1);
    }
}
