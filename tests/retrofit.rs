//! 개보수 추천, ROI 전망, 지속가능성 점수 통합 테스트.
use std::collections::BTreeSet;

use building_energy_toolbox::building::{
    BuildingSettings, HeatPumpType, HeatingSystem, Shading, VentilationType, WindowType,
};
use building_energy_toolbox::config::EconomicsConfig;
use building_energy_toolbox::energy::{compute_energy_consumption, EnergyResult};
use building_energy_toolbox::i18n::Language;
use building_energy_toolbox::retrofit::{
    compute_sustainability_score, project_roi, project_roi_with, recommend_upgrades,
    recommend_upgrades_with, RoiError, ScoreRating, UpgradeKind, UpgradeRecommendation,
};
use pretty_assertions::assert_eq;

fn reference_building() -> BuildingSettings {
    BuildingSettings {
        width: 20.0,
        length: 30.0,
        floors: 3,
        floor_height: 3.0,
        window_type: WindowType::Double,
        wall_insulation_thickness: 200.0,
        ventilation_type: VentilationType::Natural,
        heating_system: HeatingSystem::District,
        building_location: "Stockholm".to_string(),
        windows_per_apartment: 3,
        apartments_per_floor: 2,
        shading: Shading::None,
        building_orientation: 0.0,
        smart_controls: BTreeSet::new(),
        ..BuildingSettings::default()
    }
}

fn kinds(recs: &[UpgradeRecommendation]) -> Vec<UpgradeKind> {
    recs.iter().map(|r| r.kind).collect()
}

#[test]
fn reference_building_gets_ventilation_and_controls() {
    let recs = recommend_upgrades(&reference_building()).expect("recommend");
    assert_eq!(kinds(&recs), vec![UpgradeKind::Ventilation, UpgradeKind::Controls]);

    let ventilation = &recs[0];
    assert_eq!(ventilation.title, "Installera FTX-system");
    assert_eq!(ventilation.annual_savings, 89_813.0);
    assert_eq!(ventilation.upgrade_cost, 300_000.0);
    assert_eq!(ventilation.payback_years, 3);
    assert_eq!(ventilation.co2_reduction, 5_988.0);

    let controls = &recs[1];
    assert_eq!(controls.annual_savings, 9_433.0);
    assert_eq!(controls.upgrade_cost, 30_000.0);
    assert_eq!(controls.payback_years, 3);
    assert_eq!(controls.co2_reduction, 629.0);
}

#[test]
fn recommendations_respect_payback_window_across_buildings() {
    let mut checked = 0;
    for floors in [1, 3, 6] {
        for window_type in [WindowType::Single, WindowType::Double, WindowType::Triple] {
            for ventilation_type in [
                VentilationType::Natural,
                VentilationType::Mechanical,
                VentilationType::Ftx,
            ] {
                for thickness in [50.0, 200.0, 300.0] {
                    let settings = BuildingSettings {
                        floors,
                        window_type,
                        ventilation_type,
                        wall_insulation_thickness: thickness,
                        ..reference_building()
                    };
                    let recs = recommend_upgrades(&settings).expect("recommend");
                    for rec in &recs {
                        assert!(rec.annual_savings > 0.0, "{rec:?}");
                        assert!(rec.upgrade_cost > 0.0, "{rec:?}");
                        assert!((1..=50).contains(&rec.payback_years), "{rec:?}");
                        checked += 1;
                    }
                    let unique: BTreeSet<_> = recs.iter().map(|r| r.kind.as_code()).collect();
                    assert_eq!(unique.len(), recs.len());
                }
            }
        }
    }
    assert!(checked > 0);
}

#[test]
fn already_applied_upgrades_are_not_offered() {
    let settings = BuildingSettings {
        window_type: WindowType::Triple,
        wall_insulation_thickness: 300.0,
        ventilation_type: VentilationType::Ftx,
        heating_system: HeatingSystem::HeatPump,
        heat_pump_type: HeatPumpType::Ground,
        smart_controls: ["thermostat", "weather_compensation"]
            .into_iter()
            .map(String::from)
            .collect(),
        ..reference_building()
    };
    let recs = recommend_upgrades(&settings).expect("recommend");
    assert!(recs.is_empty(), "{recs:?}");
}

#[test]
fn heat_pump_upgrade_is_filtered_out() {
    // 난방 방식은 사용량 모델에 반영되지 않으므로 절감량이 0이다.
    for heating_system in [HeatingSystem::District, HeatingSystem::Electric, HeatingSystem::Gas] {
        let settings = BuildingSettings {
            heating_system,
            ..reference_building()
        };
        let economics = EconomicsConfig {
            energy_price_per_kwh: 100.0,
            ..EconomicsConfig::default()
        };
        let recs = recommend_upgrades_with(&settings, &economics, Language::En).expect("recommend");
        assert!(!kinds(&recs).contains(&UpgradeKind::Heating));
    }
}

#[test]
fn higher_energy_price_makes_envelope_upgrades_viable() {
    let economics = EconomicsConfig {
        energy_price_per_kwh: 20.0,
        ..EconomicsConfig::default()
    };
    let recs =
        recommend_upgrades_with(&reference_building(), &economics, Language::En).expect("recommend");
    assert_eq!(
        kinds(&recs),
        vec![
            UpgradeKind::Window,
            UpgradeKind::Insulation,
            UpgradeKind::Ventilation,
            UpgradeKind::Controls,
        ]
    );
    assert_eq!(recs[0].title, "Upgrade to triple glazing");
    assert!(recs.iter().all(|r| (1..=50).contains(&r.payback_years)));
    // 0.25년 회수는 0이 아니라 1년으로 표시된다
    assert_eq!(recs[2].payback_years, 1);
}

#[test]
fn recommendation_and_projection_report_the_same_payback() {
    for energy_price_per_kwh in [1.5, 5.0, 20.0] {
        let economics = EconomicsConfig {
            energy_price_per_kwh,
            ..EconomicsConfig::default()
        };
        let recs = recommend_upgrades_with(&reference_building(), &economics, Language::Sv)
            .expect("recommend");
        for rec in &recs {
            let projection = project_roi_with(rec, 30, &economics).expect("roi");
            assert_eq!(f64::from(rec.payback_years), projection.simple_payback, "{rec:?}");
        }
    }
}

#[test]
fn roi_projection_accumulates_net_cashflow() {
    let recs = recommend_upgrades(&reference_building()).expect("recommend");
    for rec in &recs {
        let projection = project_roi(rec, 30).expect("roi");
        assert_eq!(projection.years.len(), 30);
        assert_eq!(projection.years[0].year, 1);
        assert_eq!(projection.years[29].year, 30);

        let net_sum: f64 = projection.years.iter().map(|y| y.net_cashflow).sum();
        let last = projection.years.last().expect("years").accumulated;
        assert!((last - (-rec.upgrade_cost + net_sum)).abs() < 1e-6);

        assert!((projection.years[0].energy_savings - rec.annual_savings).abs() < 1e-9);
        assert!(projection.years[1].energy_savings > projection.years[0].energy_savings);
        assert_eq!(projection.lifetime_co2_reduction, rec.co2_reduction * 30.0);
    }
}

#[test]
fn ventilation_replacement_falls_on_twentieth_year() {
    let recs = recommend_upgrades(&reference_building()).expect("recommend");
    let ventilation = recs
        .iter()
        .find(|r| r.kind == UpgradeKind::Ventilation)
        .expect("ventilation");
    let projection = project_roi(ventilation, 30).expect("roi");
    let replaced: Vec<u32> = projection
        .years
        .iter()
        .filter(|y| y.replacement_cost > 0.0)
        .map(|y| y.year)
        .collect();
    assert_eq!(replaced, vec![20]);
    assert_eq!(projection.simple_payback, 3.0);
    assert!(projection.net_savings > 0.0);
}

#[test]
fn roi_rejects_zero_savings_and_cost() {
    let rec = UpgradeRecommendation {
        kind: UpgradeKind::Window,
        title: String::new(),
        annual_savings: 0.0,
        upgrade_cost: 10_000.0,
        payback_years: 1,
        co2_reduction: 0.0,
    };
    assert_eq!(
        project_roi(&rec, 30),
        Err(RoiError::DivisionByZero {
            annual_savings: 0.0,
            upgrade_cost: 10_000.0,
        })
    );

    let free = UpgradeRecommendation {
        annual_savings: 1_000.0,
        upgrade_cost: 0.0,
        ..rec.clone()
    };
    assert!(matches!(project_roi(&free, 30), Err(RoiError::DivisionByZero { .. })));

    let valid = UpgradeRecommendation {
        annual_savings: 1_000.0,
        ..rec
    };
    assert_eq!(project_roi(&valid, 0), Err(RoiError::InvalidHorizon));
}

#[test]
fn flat_economics_yield_flat_savings() {
    let economics = EconomicsConfig {
        energy_price_increase: 0.0,
        inflation_rate: 0.0,
        ..EconomicsConfig::default()
    };
    let rec = UpgradeRecommendation {
        kind: UpgradeKind::Insulation,
        title: String::new(),
        annual_savings: 5_000.0,
        upgrade_cost: 100_000.0,
        payback_years: 20,
        co2_reduction: 10.0,
    };
    let projection = project_roi_with(&rec, 10, &economics).expect("roi");
    // 단열은 유지비가 없고 수명(40년)이 기간보다 길다
    assert!(projection.years.iter().all(|y| y.net_cashflow == 5_000.0));
    assert_eq!(projection.total_savings, 50_000.0);
    assert_eq!(projection.net_savings, -50_000.0);
    assert_eq!(projection.roi, -50.0);
    assert_eq!(projection.simple_payback, 20.0);
}

#[test]
fn reference_building_scores_excellent() {
    let settings = reference_building();
    let result = compute_energy_consumption(&settings).expect("energy");
    let score = compute_sustainability_score(&settings, &result);
    assert_eq!(score, 85);
    assert_eq!(ScoreRating::from_score(score), ScoreRating::Excellent);
}

#[test]
fn score_stays_within_bounds() {
    let best = BuildingSettings {
        window_type: WindowType::Triple,
        wall_insulation_thickness: 400.0,
        ventilation_type: VentilationType::Ftx,
        heating_system: HeatingSystem::HeatPump,
        smart_controls: (0..30).map(|i| format!("control-{i}")).collect(),
        ..reference_building()
    };
    let result = compute_energy_consumption(&best).expect("energy");
    assert_eq!(compute_sustainability_score(&best, &result), 100);

    let worst = BuildingSettings {
        window_type: WindowType::Single,
        wall_insulation_thickness: 0.0,
        ventilation_type: VentilationType::Natural,
        heating_system: HeatingSystem::Electric,
        building_location: "Luleå".to_string(),
        ..reference_building()
    };
    let result = compute_energy_consumption(&worst).expect("energy");
    let score = compute_sustainability_score(&worst, &result);
    assert!(score <= 100);
    assert!(score < 50, "score={score}");
}

/// 에너지 원단위를 중립 구간(50~100)에 고정해 설정 항목별 가감점만 본다.
fn neutral_result() -> EnergyResult {
    let base = compute_energy_consumption(&reference_building()).expect("energy");
    EnergyResult {
        specific_consumption: 75.0,
        ..base
    }
}

#[test]
fn each_setting_moves_the_score_by_its_rule() {
    let result = neutral_result();
    // 기준: 100 - 10(2중창) - 15(자연환기) = 75
    assert_eq!(compute_sustainability_score(&reference_building(), &result), 75);

    let cases: Vec<(&str, BuildingSettings, u8)> = vec![
        ("single window", BuildingSettings { window_type: WindowType::Single, ..reference_building() }, 65),
        ("triple window", BuildingSettings { window_type: WindowType::Triple, ..reference_building() }, 85),
        ("199 mm insulation", BuildingSettings { wall_insulation_thickness: 199.0, ..reference_building() }, 60),
        ("0 mm insulation", BuildingSettings { wall_insulation_thickness: 0.0, ..reference_building() }, 60),
        ("mechanical ventilation", BuildingSettings { ventilation_type: VentilationType::Mechanical, ..reference_building() }, 85),
        ("ftx ventilation", BuildingSettings { ventilation_type: VentilationType::Ftx, ..reference_building() }, 90),
        ("gas heating", BuildingSettings { heating_system: HeatingSystem::Gas, ..reference_building() }, 60),
        ("electric heating", BuildingSettings { heating_system: HeatingSystem::Electric, ..reference_building() }, 55),
        ("heat pump", BuildingSettings { heating_system: HeatingSystem::HeatPump, ..reference_building() }, 75),
        (
            "one control",
            BuildingSettings {
                smart_controls: ["thermostat".to_string()].into_iter().collect(),
                ..reference_building()
            },
            77,
        ),
        (
            "three controls",
            BuildingSettings {
                smart_controls: ["a", "b", "c"].into_iter().map(String::from).collect(),
                ..reference_building()
            },
            81,
        ),
    ];
    for (name, settings, expected) in cases {
        assert_eq!(compute_sustainability_score(&settings, &result), expected, "{name}");
    }
}

#[test]
fn specific_consumption_bands_have_exact_boundaries() {
    let settings = reference_building();
    // 설정 항목만으로 75점
    for (specific, expected) in [
        (151.0, 55),
        (150.0, 65),
        (101.0, 65),
        (100.0, 75),
        (50.0, 75),
        (49.0, 85),
    ] {
        let result = EnergyResult {
            specific_consumption: specific,
            ..neutral_result()
        };
        assert_eq!(
            compute_sustainability_score(&settings, &result),
            expected,
            "specific={specific}"
        );
    }
}
