//! 외피 열손실(관류 + 환기) 모델.

use serde::Serialize;

use super::climate::ClimateProfile;
use crate::building::{BuildingSettings, InsulationMaterial, VentilationType, WallMaterial, WindowType};

/// 표준 창 한 개의 폭 [m]
pub const UNIT_WINDOW_WIDTH_M: f64 = 1.2;
/// 표준 창 한 개의 높이 [m]
pub const UNIT_WINDOW_HEIGHT_M: f64 = 1.8;
/// 지붕/바닥 단열재 열전도율 [W/m·K]
pub const ROOF_FLOOR_LAMBDA: f64 = 0.037;
/// 지붕/바닥 구조체 기본 열저항 [m²K/W]
pub const ROOF_FLOOR_BASE_RESISTANCE: f64 = 0.2;
/// 환기 횟수 [1/h]
pub const AIR_CHANGE_RATE: f64 = 0.5;
/// 공기 체적비열 [Wh/m³·K]
pub const AIR_HEAT_CAPACITY: f64 = 0.33;
/// 인접 건물로 인한 외벽 손실 저감 계수
pub const ADJACENT_BUILDING_FACTOR: f64 = 0.7;

const HOURS_PER_DAY: f64 = 24.0;
const WH_PER_KWH: f64 = 1000.0;

/// 외피 부위별 면적 [m²]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeAreas {
    /// 창을 제외한 순 외벽 면적 (음수가 되지 않음)
    pub wall: f64,
    pub window: f64,
    pub roof: f64,
    pub floor: f64,
}

/// 부위별 열관류율 [W/m²K]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UValues {
    pub wall: f64,
    pub window: f64,
    pub roof: f64,
    pub floor: f64,
}

pub fn window_area(settings: &BuildingSettings) -> f64 {
    UNIT_WINDOW_WIDTH_M * UNIT_WINDOW_HEIGHT_M * f64::from(settings.window_count())
}

/// 순 외벽 면적. 창 면적이 외벽보다 크면 0으로 본다.
pub fn net_wall_area(settings: &BuildingSettings) -> f64 {
    (settings.gross_wall_area() - window_area(settings)).max(0.0)
}

pub fn envelope_areas(settings: &BuildingSettings) -> EnvelopeAreas {
    let footprint = settings.width * settings.length;
    EnvelopeAreas {
        wall: net_wall_area(settings),
        window: window_area(settings),
        roof: footprint,
        floor: footprint,
    }
}

pub fn window_u_value(window_type: WindowType) -> f64 {
    match window_type {
        WindowType::Single => 5.0,
        WindowType::Double => 1.3,
        WindowType::Triple => 0.8,
    }
}

/// 단열 전 구조재의 열관류율.
pub fn wall_base_u_value(material: WallMaterial) -> f64 {
    match material {
        WallMaterial::Brick => 0.8,
        WallMaterial::Concrete => 0.9,
        WallMaterial::Wood => 0.5,
    }
}

pub fn insulation_lambda(material: InsulationMaterial) -> f64 {
    match material {
        InsulationMaterial::Mineral => 0.037,
        InsulationMaterial::Eps => 0.033,
        InsulationMaterial::Cellulose => 0.040,
    }
}

/// 외벽 열관류율. 구조재와 단열층을 직렬 열저항으로 합산하고,
/// 인접 건물이 있으면 30% 줄인다.
pub fn wall_u_value(settings: &BuildingSettings) -> f64 {
    let base = wall_base_u_value(settings.wall_material);
    let insulation_r = settings.wall_insulation_thickness / 1000.0
        / insulation_lambda(settings.wall_insulation);
    let u = 1.0 / (1.0 / base + insulation_r);
    if settings.shading.has_adjacent_buildings() {
        u * ADJACENT_BUILDING_FACTOR
    } else {
        u
    }
}

/// 지붕/바닥 열관류율. 단열 두께 [mm]만으로 계산한다.
pub fn roof_floor_u_value(insulation_thickness_mm: f64) -> f64 {
    1.0 / (insulation_thickness_mm / 1000.0 / ROOF_FLOOR_LAMBDA + ROOF_FLOOR_BASE_RESISTANCE)
}

pub fn u_values(settings: &BuildingSettings) -> UValues {
    UValues {
        wall: wall_u_value(settings),
        window: window_u_value(settings.window_type),
        roof: roof_floor_u_value(settings.roof_insulation_thickness),
        floor: roof_floor_u_value(settings.floor_insulation_thickness),
    }
}

/// 연간 관류 열손실 [kWh/yr].
///
/// Q = Σ(A·U)·DD·24 / 1000, 외벽과 창 항에만 풍속 노출 계수를 곱한다.
pub fn transmission_loss(areas: &EnvelopeAreas, u: &UValues, climate: &ClimateProfile) -> f64 {
    let exposed = (u.wall * areas.wall + u.window * areas.window) * climate.wind_exposure;
    let sheltered = u.roof * areas.roof + u.floor * areas.floor;
    (exposed + sheltered) * climate.degree_days * HOURS_PER_DAY / WH_PER_KWH
}

/// 환기 방식별 손실 배율. 열회수형일수록 작다.
pub fn ventilation_efficiency(ventilation: VentilationType) -> f64 {
    match ventilation {
        VentilationType::Ftx => 0.2,
        VentilationType::Mechanical => 0.7,
        VentilationType::Natural => 1.0,
    }
}

/// 연간 환기 열손실 [kWh/yr].
pub fn ventilation_loss(settings: &BuildingSettings, climate: &ClimateProfile) -> f64 {
    settings.volume()
        * AIR_CHANGE_RATE
        * AIR_HEAT_CAPACITY
        * climate.degree_days
        * HOURS_PER_DAY
        * ventilation_efficiency(settings.ventilation_type)
        / WH_PER_KWH
}
