//! 개보수 후보를 평가해 회수기간이 유효한 항목만 추천한다.
//!
//! 후보는 (적용 조건, 설정 변환, 비용 모델, 절감 모델)의 표로 정의된다.
//! 새 후보는 `UPGRADE_CATALOG`에 항목을 추가하는 것으로 충분하다.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::building::{BuildingSettings, HeatPumpType, HeatingSystem, VentilationType, WindowType};
use crate::config::EconomicsConfig;
use crate::energy::{compute_energy_consumption, EnergyCalcError, EnergyResult};
use crate::i18n::{self, Language};

/// 창 1개 교체 비용 [SEK]
pub const COST_PER_WINDOW: f64 = 15_000.0;
/// 외벽 단열 보강 비용 [SEK/m², 창 포함 외벽 면적 기준]
pub const INSULATION_COST_PER_M2: f64 = 800.0;
/// 세대당 FTX 설치 비용 [SEK]
pub const FTX_COST_PER_APARTMENT: f64 = 50_000.0;
/// 지열 히트펌프 기본 비용 [SEK]
pub const HEAT_PUMP_BASE_COST: f64 = 150_000.0;
/// 지열 히트펌프 세대당 추가 비용 [SEK]
pub const HEAT_PUMP_COST_PER_APARTMENT: f64 = 20_000.0;
/// 세대당 스마트 제어 비용 [SEK]
pub const CONTROLS_COST_PER_APARTMENT: f64 = 5_000.0;
/// 보강 후 외벽 단열 두께 [mm]
pub const UPGRADED_WALL_INSULATION_MM: f64 = 300.0;
/// 스마트 제어 도입 시 켜지는 기본 제어 목록.
pub const DEFAULT_SMART_CONTROLS: &[&str] = &["thermostat", "weather_compensation"];

/// 개보수 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeKind {
    Window,
    Insulation,
    Ventilation,
    Heating,
    Controls,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 5] = [
        UpgradeKind::Window,
        UpgradeKind::Insulation,
        UpgradeKind::Ventilation,
        UpgradeKind::Heating,
        UpgradeKind::Controls,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "window" => Some(UpgradeKind::Window),
            "insulation" => Some(UpgradeKind::Insulation),
            "ventilation" => Some(UpgradeKind::Ventilation),
            "heating" => Some(UpgradeKind::Heating),
            "controls" => Some(UpgradeKind::Controls),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            UpgradeKind::Window => "window",
            UpgradeKind::Insulation => "insulation",
            UpgradeKind::Ventilation => "ventilation",
            UpgradeKind::Heating => "heating",
            UpgradeKind::Controls => "controls",
        }
    }
}

/// 절감량 산정 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SavingsModel {
    /// 변환된 설정으로 에너지를 다시 계산해 차이를 절감량으로 본다.
    Recompute,
    /// 현재 총 사용량에 고정 비율(`controls_saving_fraction`)을 곱한다.
    BaselineFraction,
}

/// 카탈로그의 후보 한 건.
#[derive(Debug, Clone, Copy)]
pub struct UpgradeCandidate {
    pub kind: UpgradeKind,
    /// 이미 개보수된 상태면 false
    pub applies: fn(&BuildingSettings, &EconomicsConfig) -> bool,
    /// 개보수 후 설정
    pub upgrade: fn(&BuildingSettings) -> BuildingSettings,
    /// 투자비 [SEK]
    pub cost: fn(&BuildingSettings) -> f64,
    pub savings: SavingsModel,
}

/// 유효한 개보수 추천.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRecommendation {
    #[serde(rename = "type")]
    pub kind: UpgradeKind,
    pub title: String,
    /// 첫해 절감액 [SEK/yr], 정수 반올림
    pub annual_savings: f64,
    /// 투자비 [SEK], 정수 반올림
    pub upgrade_cost: f64,
    /// 단순 회수기간 [년], 반올림. 항상 1 이상 `max_payback_years` 이하.
    pub payback_years: u32,
    /// 연간 CO2 감축량 [kg/yr]
    pub co2_reduction: f64,
}

pub fn upgrade_catalog() -> &'static [UpgradeCandidate] {
    UPGRADE_CATALOG
}

pub fn find_candidate(kind: UpgradeKind) -> Option<&'static UpgradeCandidate> {
    UPGRADE_CATALOG.iter().find(|c| c.kind == kind)
}

const UPGRADE_CATALOG: &[UpgradeCandidate] = &[
    UpgradeCandidate {
        kind: UpgradeKind::Window,
        applies: |s, _| s.window_type != WindowType::Triple,
        upgrade: |s| BuildingSettings {
            window_type: WindowType::Triple,
            ..s.clone()
        },
        cost: |s| COST_PER_WINDOW * f64::from(s.window_count()),
        savings: SavingsModel::Recompute,
    },
    UpgradeCandidate {
        kind: UpgradeKind::Insulation,
        applies: |s, _| s.wall_insulation_thickness < UPGRADED_WALL_INSULATION_MM,
        upgrade: |s| BuildingSettings {
            wall_insulation_thickness: UPGRADED_WALL_INSULATION_MM,
            ..s.clone()
        },
        cost: |s| INSULATION_COST_PER_M2 * s.gross_wall_area(),
        savings: SavingsModel::Recompute,
    },
    UpgradeCandidate {
        kind: UpgradeKind::Ventilation,
        applies: |s, _| s.ventilation_type != VentilationType::Ftx,
        upgrade: |s| BuildingSettings {
            ventilation_type: VentilationType::Ftx,
            ..s.clone()
        },
        cost: |s| FTX_COST_PER_APARTMENT * f64::from(s.apartment_count()),
        savings: SavingsModel::Recompute,
    },
    UpgradeCandidate {
        kind: UpgradeKind::Heating,
        applies: |s, _| {
            s.heating_system != HeatingSystem::HeatPump && s.heat_pump_type != HeatPumpType::Ground
        },
        upgrade: |s| BuildingSettings {
            heating_system: HeatingSystem::HeatPump,
            heat_pump_type: HeatPumpType::Ground,
            ..s.clone()
        },
        cost: |s| {
            HEAT_PUMP_BASE_COST + HEAT_PUMP_COST_PER_APARTMENT * f64::from(s.apartment_count())
        },
        savings: SavingsModel::Recompute,
    },
    UpgradeCandidate {
        kind: UpgradeKind::Controls,
        applies: |s, econ| s.smart_controls.len() < econ.smart_controls_threshold,
        upgrade: |s| {
            let mut upgraded = s.clone();
            upgraded
                .smart_controls
                .extend(DEFAULT_SMART_CONTROLS.iter().map(|c| c.to_string()));
            upgraded
        },
        cost: |s| CONTROLS_COST_PER_APARTMENT * f64::from(s.apartment_count()),
        savings: SavingsModel::BaselineFraction,
    },
];

/// 절감액과 투자비로 회수기간을 검증한다. 유효하면 회수기간(년, 실수)을 돌려준다.
pub fn valid_payback(annual_savings: f64, upgrade_cost: f64, max_payback_years: f64) -> Option<f64> {
    if !(annual_savings > 0.0) {
        return None;
    }
    let payback = upgrade_cost / annual_savings;
    if !payback.is_finite() || payback <= 0.0 || payback > max_payback_years {
        return None;
    }
    Some(payback)
}

/// 표시용 회수기간 [년]. 반올림하되 1년 미만으로 내려가지 않는다.
pub fn rounded_payback(payback: f64) -> f64 {
    payback.round().max(1.0)
}

/// 기본 경제성 가정과 스웨덴어 제목으로 개보수를 추천한다.
pub fn recommend_upgrades(
    settings: &BuildingSettings,
) -> Result<Vec<UpgradeRecommendation>, EnergyCalcError> {
    recommend_upgrades_with(settings, &EconomicsConfig::default(), Language::Sv)
}

/// 카탈로그의 모든 후보를 평가한다. 유효하지 않은 후보는 오류 없이 제외된다.
#[instrument(skip_all, fields(location = %settings.building_location))]
pub fn recommend_upgrades_with(
    settings: &BuildingSettings,
    economics: &EconomicsConfig,
    lang: Language,
) -> Result<Vec<UpgradeRecommendation>, EnergyCalcError> {
    let baseline = compute_energy_consumption(settings)?;
    let mut recommendations = Vec::new();
    for candidate in UPGRADE_CATALOG {
        if !(candidate.applies)(settings, economics) {
            debug!(kind = candidate.kind.as_code(), "upgrade already applied");
            continue;
        }
        match evaluate_candidate(candidate, settings, &baseline, economics, lang)? {
            Some(rec) => recommendations.push(rec),
            None => debug!(kind = candidate.kind.as_code(), "upgrade rejected by payback filter"),
        }
    }
    Ok(recommendations)
}

/// 후보 한 건을 평가한다. 적용 조건은 검사하지 않는다.
pub fn evaluate_candidate(
    candidate: &UpgradeCandidate,
    settings: &BuildingSettings,
    baseline: &EnergyResult,
    economics: &EconomicsConfig,
    lang: Language,
) -> Result<Option<UpgradeRecommendation>, EnergyCalcError> {
    let saved_kwh = match candidate.savings {
        SavingsModel::Recompute => {
            let upgraded = compute_energy_consumption(&(candidate.upgrade)(settings))?;
            baseline.total_annual - upgraded.total_annual
        }
        SavingsModel::BaselineFraction => baseline.total_annual * economics.controls_saving_fraction,
    };
    let annual_savings = saved_kwh * economics.energy_price_per_kwh;
    let upgrade_cost = (candidate.cost)(settings);

    let Some(payback) = valid_payback(annual_savings, upgrade_cost, economics.max_payback_years)
    else {
        return Ok(None);
    };

    Ok(Some(UpgradeRecommendation {
        kind: candidate.kind,
        title: i18n::upgrade_title(candidate.kind, lang).to_string(),
        annual_savings: annual_savings.round(),
        upgrade_cost: upgrade_cost.round(),
        // 0 < payback <= max 이므로 결과는 1 이상 max 이하
        payback_years: rounded_payback(payback) as u32,
        co2_reduction: (saved_kwh * economics.co2_factor_kg_per_kwh).round(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_kind_once() {
        for kind in UpgradeKind::ALL {
            assert_eq!(upgrade_catalog().iter().filter(|c| c.kind == kind).count(), 1);
        }
    }

    #[test]
    fn payback_filter_edges() {
        assert_eq!(valid_payback(0.0, 100.0, 50.0), None);
        assert_eq!(valid_payback(-5.0, 100.0, 50.0), None);
        assert_eq!(valid_payback(10.0, 0.0, 50.0), None);
        assert_eq!(valid_payback(10.0, 500.0, 50.0), Some(50.0));
        assert_eq!(valid_payback(10.0, 501.0, 50.0), None);
        assert_eq!(valid_payback(f64::NAN, 100.0, 50.0), None);
    }

    #[test]
    fn payback_rounds_to_nearest_year_but_not_below_one() {
        assert_eq!(rounded_payback(3.34), 3.0);
        assert_eq!(rounded_payback(3.5), 4.0);
        assert_eq!(rounded_payback(0.25), 1.0);
        assert_eq!(rounded_payback(49.6), 50.0);
    }

    #[test]
    fn heat_pump_candidate_skips_any_heat_pump_or_ground_source() {
        let candidate = find_candidate(UpgradeKind::Heating).expect("heating");
        let economics = EconomicsConfig::default();
        let applies = |heating_system, heat_pump_type| {
            let s = BuildingSettings {
                heating_system,
                heat_pump_type,
                ..BuildingSettings::default()
            };
            (candidate.applies)(&s, &economics)
        };
        assert!(applies(HeatingSystem::District, HeatPumpType::None));
        assert!(applies(HeatingSystem::Electric, HeatPumpType::AirWater));
        assert!(!applies(HeatingSystem::HeatPump, HeatPumpType::AirWater));
        assert!(!applies(HeatingSystem::HeatPump, HeatPumpType::Ground));
        assert!(!applies(HeatingSystem::District, HeatPumpType::Ground));
    }

    #[test]
    fn controls_upgrade_adds_default_controls() {
        let s = BuildingSettings::default();
        let candidate = find_candidate(UpgradeKind::Controls).expect("controls");
        let upgraded = (candidate.upgrade)(&s);
        assert_eq!(upgraded.smart_controls.len(), DEFAULT_SMART_CONTROLS.len());
    }
}
