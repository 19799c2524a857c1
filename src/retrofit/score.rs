//! 설정과 에너지 결과로 0~100 범위의 지속가능성 점수를 매긴다.

use serde::Serialize;

use crate::building::{BuildingSettings, HeatingSystem, VentilationType, WindowType};
use crate::energy::EnergyResult;

/// 이 두께 [mm] 미만이면 단열 감점.
pub const INSULATION_THRESHOLD_MM: f64 = 200.0;
/// 활성화된 스마트 제어 하나당 가점.
pub const SMART_CONTROL_BONUS: i32 = 2;

/// 점수 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreRating {
    /// 80점 이상
    Excellent,
    /// 60점 이상
    Good,
    /// 40점 이상
    Fair,
    Poor,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreRating::Excellent,
            60..=79 => ScoreRating::Good,
            40..=59 => ScoreRating::Fair,
            _ => ScoreRating::Poor,
        }
    }
}

/// 지속가능성 점수를 계산한다. 100점에서 시작해 설비 등급과 원단위 구간에 따라
/// 가감한 뒤 [0, 100]으로 자른다.
pub fn compute_sustainability_score(settings: &BuildingSettings, result: &EnergyResult) -> u8 {
    let mut score: i32 = 100;

    score -= match settings.window_type {
        WindowType::Single => 20,
        WindowType::Double => 10,
        WindowType::Triple => 0,
    };

    if settings.wall_insulation_thickness < INSULATION_THRESHOLD_MM {
        score -= 15;
    }

    score -= match settings.ventilation_type {
        VentilationType::Natural => 15,
        VentilationType::Mechanical => 5,
        VentilationType::Ftx => 0,
    };

    score -= match settings.heating_system {
        HeatingSystem::Electric => 20,
        HeatingSystem::Gas => 15,
        HeatingSystem::District | HeatingSystem::HeatPump => 0,
    };

    let controls = i32::try_from(settings.smart_controls.len()).unwrap_or(i32::MAX / 4);
    score = score.saturating_add(controls.saturating_mul(SMART_CONTROL_BONUS));

    let specific = result.specific_consumption;
    if specific > 150.0 {
        score -= 20;
    } else if specific > 100.0 {
        score -= 10;
    } else if specific < 50.0 {
        score += 10;
    }

    // clamp 후에는 u8 범위 안이다
    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bands() {
        assert_eq!(ScoreRating::from_score(100), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(80), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(79), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(40), ScoreRating::Fair);
        assert_eq!(ScoreRating::from_score(39), ScoreRating::Poor);
    }
}
