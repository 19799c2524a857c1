//! 태양 열취득 모델.
//!
//! 방위 계수는 cos 기반의 단순 보정이며 물리적으로 엄밀한 일사 모델이 아니다.

use crate::building::Shading;

use super::climate::ClimateProfile;

/// 차폐 종류별 일사 투과 계수.
pub fn shading_factor(shading: Shading) -> f64 {
    match shading {
        Shading::None => 1.0,
        Shading::Trees => 0.8,
        Shading::Buildings => 0.7,
        Shading::Both => 0.6,
    }
}

/// 방위 계수 = cos(2·(θ mod 180)·π/180)·0.2 + 0.8
///
/// 주기 180°, 0°/180°에서 최대 1.0, 90°에서 최소 0.6. 주기 경계에서 연속이다.
pub fn orientation_factor(orientation_deg: f64) -> f64 {
    // 음수 방위도 같은 주기로 접는다
    let folded = orientation_deg.rem_euclid(180.0);
    (2.0 * folded).to_radians().cos() * 0.2 + 0.8
}

/// 연간 태양 열취득 [kWh/yr].
pub fn solar_gains(
    window_area_m2: f64,
    climate: &ClimateProfile,
    shading: Shading,
    orientation_deg: f64,
) -> f64 {
    window_area_m2
        * climate.solar_radiation
        * shading_factor(shading)
        * orientation_factor(orientation_deg)
}
