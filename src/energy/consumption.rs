//! 손실과 취득을 합산해 연간 에너지 사용량을 산출한다.
//!
//! 총량 = 관류손실 + 환기손실 − 태양취득. 내부발열 항은 넣지 않으며
//! 결과를 0으로 자르지도 않는다(취득이 손실보다 크면 음수가 될 수 있다).

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use super::climate::{lookup_climate, ClimateProfile};
use super::envelope::{self, EnvelopeAreas, UValues};
use super::gains;
use crate::building::BuildingSettings;

/// 에너지 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnergyCalcError {
    /// 난방면적이 0 이하이거나 유한하지 않음
    #[error("난방면적이 0보다 커야 합니다 (입력값: {heated_area} m²)")]
    InvalidGeometry { heated_area: f64 },
}

/// 연간 에너지 계산 결과. U값을 제외한 값은 정수로 반올림된다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResult {
    /// 연간 총 사용량 [kWh/yr]
    pub total_annual: f64,
    /// 난방면적당 사용량 [kWh/m²·yr]
    pub specific_consumption: f64,
    pub transmission_loss: f64,
    pub ventilation_loss: f64,
    pub solar_gains: f64,
    /// 소수 둘째 자리로 반올림된 U값
    pub u_values: UValues,
    pub climate: ClimateProfile,
}

/// 반올림 전의 중간값. 추천/검증 계산에서 정밀도가 필요할 때 쓴다.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyBalance {
    pub areas: EnvelopeAreas,
    pub u_values: UValues,
    pub transmission_loss: f64,
    pub ventilation_loss: f64,
    pub solar_gains: f64,
    pub total_annual: f64,
    pub heated_area: f64,
    pub climate: ClimateProfile,
}

impl EnergyBalance {
    pub fn specific_consumption(&self) -> f64 {
        self.total_annual / self.heated_area
    }

    /// 표시용으로 반올림한 결과로 변환한다.
    pub fn rounded(&self) -> EnergyResult {
        EnergyResult {
            total_annual: self.total_annual.round(),
            specific_consumption: self.specific_consumption().round(),
            transmission_loss: self.transmission_loss.round(),
            ventilation_loss: self.ventilation_loss.round(),
            solar_gains: self.solar_gains.round(),
            u_values: UValues {
                wall: round2(self.u_values.wall),
                window: round2(self.u_values.window),
                roof: round2(self.u_values.roof),
                floor: round2(self.u_values.floor),
            },
            climate: self.climate,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 반올림 없이 에너지 수지를 계산한다.
pub fn energy_balance(settings: &BuildingSettings) -> Result<EnergyBalance, EnergyCalcError> {
    let heated_area = settings.heated_area();
    if !(heated_area.is_finite() && heated_area > 0.0) {
        return Err(EnergyCalcError::InvalidGeometry { heated_area });
    }

    let climate = lookup_climate(&settings.building_location);
    let areas = envelope::envelope_areas(settings);
    let u_values = envelope::u_values(settings);

    let transmission_loss = envelope::transmission_loss(&areas, &u_values, &climate);
    let ventilation_loss = envelope::ventilation_loss(settings, &climate);
    let solar_gains = gains::solar_gains(
        areas.window,
        &climate,
        settings.shading,
        settings.building_orientation,
    );
    let total_annual = transmission_loss + ventilation_loss - solar_gains;

    Ok(EnergyBalance {
        areas,
        u_values,
        transmission_loss,
        ventilation_loss,
        solar_gains,
        total_annual,
        heated_area,
        climate,
    })
}

/// 건물 설정으로 연간 에너지 사용량을 계산한다.
#[instrument(skip_all, fields(location = %settings.building_location))]
pub fn compute_energy_consumption(
    settings: &BuildingSettings,
) -> Result<EnergyResult, EnergyCalcError> {
    let result = energy_balance(settings)?.rounded();
    debug!(
        total = result.total_annual,
        specific = result.specific_consumption,
        transmission = result.transmission_loss,
        ventilation = result.ventilation_loss,
        solar = result.solar_gains,
        "energy consumption computed"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_floors_is_invalid_geometry() {
        let settings = BuildingSettings {
            floors: 0,
            ..BuildingSettings::default()
        };
        assert!(matches!(
            compute_energy_consumption(&settings),
            Err(EnergyCalcError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn u_values_are_rounded_to_two_decimals() {
        let result = compute_energy_consumption(&BuildingSettings::default()).expect("energy");
        assert_eq!(result.u_values.wall, 0.15);
        assert_eq!(result.u_values.window, 1.3);
        assert_eq!(result.u_values.roof, 0.09);
        assert_eq!(result.u_values.floor, 0.12);
    }

    #[test]
    fn total_is_not_floored_at_zero() {
        // 창이 매우 많고 환기 손실이 작은 경우 태양취득이 손실을 넘는다
        let settings = BuildingSettings {
            windows_per_apartment: 40,
            window_type: crate::building::WindowType::Triple,
            ventilation_type: crate::building::VentilationType::Ftx,
            building_location: "Malmö".to_string(),
            ..BuildingSettings::default()
        };
        let balance = energy_balance(&settings).expect("balance");
        assert!(balance.total_annual < 0.0);
    }
}
