//! 난방 설비에 따른 에너지원별 연간 에너지 비용 추정.

use serde::Serialize;

use crate::building::{BuildingSettings, HeatingSystem};
use crate::energy::EnergyResult;

/// 에너지원.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyCarrier {
    Electricity,
    DistrictHeating,
    Gas,
}

/// 에너지원별 요금.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    /// 단가 [SEK/kWh]
    pub base_price: f64,
    /// 월 기본요금 [SEK/month]
    pub monthly_fee: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyCostEstimate {
    pub carrier: EnergyCarrier,
    pub energy_cost: f64,
    pub fixed_fees: f64,
    pub total: f64,
}

impl EnergyCarrier {
    /// 난방 설비가 사용하는 에너지원. 히트펌프는 전력으로 본다.
    pub fn for_heating(system: HeatingSystem) -> Self {
        match system {
            HeatingSystem::District => EnergyCarrier::DistrictHeating,
            HeatingSystem::Gas => EnergyCarrier::Gas,
            HeatingSystem::Electric | HeatingSystem::HeatPump => EnergyCarrier::Electricity,
        }
    }

    pub fn tariff(&self) -> Tariff {
        match self {
            EnergyCarrier::Electricity => Tariff {
                base_price: 1.5,
                monthly_fee: 200.0,
            },
            EnergyCarrier::DistrictHeating => Tariff {
                base_price: 0.8,
                monthly_fee: 150.0,
            },
            EnergyCarrier::Gas => Tariff {
                base_price: 1.2,
                monthly_fee: 100.0,
            },
        }
    }
}

/// 연간 에너지 비용 [SEK/yr]. 사용량이 음수이면 사용 요금은 0으로 본다.
pub fn annual_energy_cost(settings: &BuildingSettings, result: &EnergyResult) -> EnergyCostEstimate {
    let carrier = EnergyCarrier::for_heating(settings.heating_system);
    let tariff = carrier.tariff();
    let energy_cost = (result.total_annual.max(0.0) * tariff.base_price).round();
    let fixed_fees = tariff.monthly_fee * 12.0;
    EnergyCostEstimate {
        carrier,
        energy_cost,
        fixed_fees,
        total: energy_cost + fixed_fees,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::compute_energy_consumption;

    #[test]
    fn heat_pump_is_billed_as_electricity() {
        let settings = BuildingSettings {
            heating_system: HeatingSystem::HeatPump,
            ..BuildingSettings::default()
        };
        let result = compute_energy_consumption(&settings).expect("energy");
        let cost = annual_energy_cost(&settings, &result);
        assert_eq!(cost.carrier, EnergyCarrier::Electricity);
        assert_eq!(cost.fixed_fees, 2_400.0);
        assert_eq!(cost.energy_cost, (result.total_annual * 1.5).round());
    }

    #[test]
    fn negative_consumption_costs_only_fixed_fees() {
        let mut result = compute_energy_consumption(&BuildingSettings::default()).expect("energy");
        result.total_annual = -500.0;
        let cost = annual_energy_cost(&BuildingSettings::default(), &result);
        assert_eq!(cost.energy_cost, 0.0);
        assert_eq!(cost.total, 1_800.0);
    }
}
