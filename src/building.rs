//! 건물 입력 레코드와 설정 코드(enum)를 정의한다.
//!
//! 엔진은 타입을 강제 변환하지 않는다. 누락된 값은 호출 측(설정 파일 로더 등)에서
//! `Default`로 채운 뒤 계산에 넘긴다. 알 수 없는 코드 문자열은 오류 대신
//! 각 enum의 기본 변형으로 폴백한다.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// 문자열 코드 ↔ enum 변환을 묶어 serde 구현을 공유한다.
macro_rules! code_enum {
    ($name:ident, fallback = $fallback:ident, { $($variant:ident => $code:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $name {
            /// 코드 문자열을 변환한다. 알 수 없는 코드는 기본 변형으로 폴백한다.
            pub fn from_code(code: &str) -> Self {
                match code.trim().to_lowercase().as_str() {
                    $($code $(| $alias)* => $name::$variant,)+
                    _ => $name::$fallback,
                }
            }

            pub fn as_code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$fallback
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::from_code(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_code().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_code())
            }
        }
    };
}

/// 외벽 구조재. 미지정 시 벽돌.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WallMaterial {
    Brick,
    Concrete,
    Wood,
}

code_enum!(WallMaterial, fallback = Brick, {
    Brick => "brick",
    Concrete => "concrete",
    Wood => "wood",
});

/// 단열재 종류. 미지정 시 미네랄울.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InsulationMaterial {
    Mineral,
    Eps,
    Cellulose,
}

code_enum!(InsulationMaterial, fallback = Mineral, {
    Mineral => "mineral",
    Eps => "eps",
    Cellulose => "cellulose",
});

/// 창호 유리 구성. 미지정 시 복층.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WindowType {
    Single,
    Double,
    Triple,
}

code_enum!(WindowType, fallback = Double, {
    Single => "single",
    Double => "double",
    Triple => "triple",
});

/// 환기 방식. FTX는 열회수형 급배기 환기. 미지정 시 자연환기.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VentilationType {
    Natural,
    Mechanical,
    Ftx,
}

code_enum!(VentilationType, fallback = Natural, {
    Natural => "natural",
    Mechanical => "mechanical",
    Ftx => "ftx",
});

/// 난방 설비. 미지정 시 지역난방.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeatingSystem {
    District,
    HeatPump,
    Electric,
    Gas,
}

code_enum!(HeatingSystem, fallback = District, {
    District => "district" | "district_heating",
    HeatPump => "heatpump" | "heat_pump",
    Electric => "electric",
    Gas => "gas",
});

/// 히트펌프 열원. 히트펌프가 없으면 `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeatPumpType {
    None,
    Ground,
    AirWater,
    ExhaustAir,
}

code_enum!(HeatPumpType, fallback = None, {
    None => "none",
    Ground => "ground",
    AirWater => "air" | "air_water",
    ExhaustAir => "exhaust" | "exhaust_air",
});

/// 주변 차폐 상태. 인접 건물이 있으면 외벽 손실도 줄어든다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Shading {
    None,
    Trees,
    Buildings,
    Both,
}

code_enum!(Shading, fallback = None, {
    None => "none",
    Trees => "trees",
    Buildings => "buildings",
    Both => "both",
});

impl Shading {
    /// 인접 건물이 외벽을 가리는지 여부.
    pub fn has_adjacent_buildings(&self) -> bool {
        matches!(self, Shading::Buildings | Shading::Both)
    }
}

/// 계산 입력이 되는 건물 설정.
///
/// 수치 필드는 모두 0 이상의 실수(개수는 정수)로 가정한다. 파일에서 읽을 때
/// 빠진 필드는 `Default` 값으로 채워진다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildingSettings {
    /// 건물 폭 [m]
    pub width: f64,
    /// 건물 길이 [m]
    pub length: f64,
    /// 층수
    pub floors: u32,
    /// 층고 [m]
    pub floor_height: f64,
    pub apartments_per_floor: u32,
    pub windows_per_apartment: u32,
    /// 발코니 깊이 [m]
    pub balcony_depth: f64,
    pub has_balconies: bool,

    pub wall_material: WallMaterial,
    pub wall_insulation: InsulationMaterial,
    /// 외벽 단열 두께 [mm]
    pub wall_insulation_thickness: f64,
    pub window_type: WindowType,
    /// 지붕 단열 두께 [mm]
    pub roof_insulation_thickness: f64,
    /// 바닥 단열 두께 [mm]
    pub floor_insulation_thickness: f64,

    pub heating_system: HeatingSystem,
    pub heat_pump_type: HeatPumpType,
    /// 계산에 쓰이지 않고 그대로 전달되는 값
    pub cooling_system: String,
    pub ventilation_type: VentilationType,
    /// 계산에 쓰이지 않고 그대로 전달되는 값
    pub water_heating: String,

    pub building_location: String,
    /// 건물 방위 [deg]
    pub building_orientation: f64,
    pub shading: Shading,

    /// 활성화된 스마트 제어 이름 집합
    pub smart_controls: BTreeSet<String>,
}

impl Default for BuildingSettings {
    fn default() -> Self {
        Self {
            width: 20.0,
            length: 30.0,
            floors: 3,
            floor_height: 3.0,
            apartments_per_floor: 2,
            windows_per_apartment: 3,
            balcony_depth: 1.5,
            has_balconies: false,
            wall_material: WallMaterial::default(),
            wall_insulation: InsulationMaterial::default(),
            wall_insulation_thickness: 200.0,
            window_type: WindowType::default(),
            roof_insulation_thickness: 400.0,
            floor_insulation_thickness: 300.0,
            heating_system: HeatingSystem::default(),
            heat_pump_type: HeatPumpType::default(),
            cooling_system: "none".to_string(),
            ventilation_type: VentilationType::default(),
            water_heating: "district".to_string(),
            building_location: crate::energy::climate::DEFAULT_LOCATION.to_string(),
            building_orientation: 0.0,
            shading: Shading::default(),
            smart_controls: BTreeSet::new(),
        }
    }
}

impl BuildingSettings {
    /// 난방 바닥면적(폭 × 길이 × 층수) [m²]
    pub fn heated_area(&self) -> f64 {
        self.width * self.length * f64::from(self.floors)
    }

    /// 전체 세대 수
    pub fn apartment_count(&self) -> u32 {
        self.floors * self.apartments_per_floor
    }

    /// 전체 창 개수
    pub fn window_count(&self) -> u32 {
        self.apartment_count() * self.windows_per_apartment
    }

    /// 외벽 둘레 [m]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.length)
    }

    /// 창을 빼기 전 외벽 면적 [m²]
    pub fn gross_wall_area(&self) -> f64 {
        self.perimeter() * self.floor_height * f64::from(self.floors)
    }

    /// 난방 체적 [m³]
    pub fn volume(&self) -> f64 {
        self.width * self.length * self.floor_height * f64::from(self.floors)
    }
}
