//! 개보수 한 건의 장기 현금흐름과 ROI를 계산한다.
//!
//! 절감액은 에너지 가격 상승률로, 유지/교체 비용은 물가상승률로 매년 복리 증가한다.
//! 할인은 적용하지 않는다.

use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use super::upgrades::{rounded_payback, UpgradeKind, UpgradeRecommendation};
use crate::config::EconomicsConfig;

/// ROI 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoiError {
    /// 절감액 또는 투자비가 0 이하라 회수기간/ROI를 정의할 수 없음
    #[error("0으로 나눌 수 없습니다: 절감액 {annual_savings}, 투자비 {upgrade_cost}")]
    DivisionByZero {
        annual_savings: f64,
        upgrade_cost: f64,
    },
    /// 분석 기간이 0년
    #[error("분석 기간은 1년 이상이어야 합니다.")]
    InvalidHorizon,
}

/// 개보수 종류별 유지/교체 비용.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceCost {
    /// 연간 유지비 [SEK/yr]
    pub yearly: f64,
    /// 기대 수명 [년]. 수명마다 교체 비용이 발생한다.
    pub lifetime_years: u32,
    /// 교체 비용 [SEK]
    pub replacement: f64,
}

pub fn maintenance_cost(kind: UpgradeKind) -> MaintenanceCost {
    match kind {
        UpgradeKind::Window => MaintenanceCost {
            yearly: 500.0,
            lifetime_years: 25,
            replacement: 15_000.0,
        },
        UpgradeKind::Insulation => MaintenanceCost {
            yearly: 0.0,
            lifetime_years: 40,
            replacement: 800.0,
        },
        UpgradeKind::Ventilation => MaintenanceCost {
            yearly: 1_500.0,
            lifetime_years: 20,
            replacement: 50_000.0,
        },
        UpgradeKind::Heating => MaintenanceCost {
            yearly: 2_000.0,
            lifetime_years: 15,
            replacement: 150_000.0,
        },
        UpgradeKind::Controls => MaintenanceCost {
            yearly: 1_000.0,
            lifetime_years: 10,
            replacement: 5_000.0,
        },
    }
}

/// 연도별 현금흐름 [SEK]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyCashflow {
    /// 1부터 시작하는 연차
    pub year: u32,
    pub energy_savings: f64,
    pub maintenance_cost: f64,
    pub replacement_cost: f64,
    pub net_cashflow: f64,
    /// 투자비(음수)에서 시작하는 누적 현금흐름
    pub accumulated: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    #[serde(rename = "type")]
    pub kind: UpgradeKind,
    pub horizon_years: u32,
    pub years: Vec<YearlyCashflow>,
    pub total_savings: f64,
    pub total_maintenance_cost: f64,
    pub total_replacement_cost: f64,
    /// 총 절감액 − (투자비 + 유지비 + 교체비)
    pub net_savings: f64,
    /// 투자비 / 첫해 절감액, 추천의 `payback_years`와 같은 방식으로 반올림
    pub simple_payback: f64,
    /// 순절감액 / 투자비 × 100 [%]
    pub roi: f64,
    /// 분석 기간 동안의 CO2 감축량 [kg]
    pub lifetime_co2_reduction: f64,
}

/// 기본 경제성 가정으로 ROI를 계산한다.
pub fn project_roi(
    recommendation: &UpgradeRecommendation,
    horizon_years: u32,
) -> Result<RoiProjection, RoiError> {
    project_roi_with(recommendation, horizon_years, &EconomicsConfig::default())
}

/// 연도별 현금흐름과 요약 지표를 계산한다. 총계와 ROI는 정수로 반올림한다.
#[instrument(skip_all, fields(kind = recommendation.kind.as_code()))]
pub fn project_roi_with(
    recommendation: &UpgradeRecommendation,
    horizon_years: u32,
    economics: &EconomicsConfig,
) -> Result<RoiProjection, RoiError> {
    let annual_savings = recommendation.annual_savings;
    let upgrade_cost = recommendation.upgrade_cost;
    if !(annual_savings > 0.0 && upgrade_cost > 0.0) {
        return Err(RoiError::DivisionByZero {
            annual_savings,
            upgrade_cost,
        });
    }
    if horizon_years == 0 {
        return Err(RoiError::InvalidHorizon);
    }

    let years = yearly_cashflows(recommendation, horizon_years, economics);
    let total_savings: f64 = years.iter().map(|y| y.energy_savings).sum();
    let total_maintenance: f64 = years.iter().map(|y| y.maintenance_cost).sum();
    let total_replacement: f64 = years.iter().map(|y| y.replacement_cost).sum();
    let net_savings = total_savings - (upgrade_cost + total_maintenance + total_replacement);

    Ok(RoiProjection {
        kind: recommendation.kind,
        horizon_years,
        years,
        total_savings: total_savings.round(),
        total_maintenance_cost: total_maintenance.round(),
        total_replacement_cost: total_replacement.round(),
        net_savings: net_savings.round(),
        simple_payback: rounded_payback(upgrade_cost / annual_savings),
        roi: (net_savings / upgrade_cost * 100.0).round(),
        lifetime_co2_reduction: recommendation.co2_reduction * f64::from(horizon_years),
    })
}

/// 연도별 현금흐름을 만든다. i년차(0부터)에 (1+r)^i 복리를 적용하고,
/// (i+1)이 수명의 배수인 해에 교체 비용을 더한다.
pub fn yearly_cashflows(
    recommendation: &UpgradeRecommendation,
    horizon_years: u32,
    economics: &EconomicsConfig,
) -> Vec<YearlyCashflow> {
    let costs = maintenance_cost(recommendation.kind);
    let mut accumulated = -recommendation.upgrade_cost;
    (0..horizon_years)
        .map(|i| {
            let year = i + 1;
            let exponent = i32::try_from(i).unwrap_or(i32::MAX);
            let price_growth = (1.0 + economics.energy_price_increase).powi(exponent);
            let inflation = (1.0 + economics.inflation_rate).powi(exponent);

            let energy_savings = recommendation.annual_savings * price_growth;
            let maintenance_cost = costs.yearly * inflation;
            let replacement_cost = if costs.lifetime_years > 0 && year % costs.lifetime_years == 0 {
                costs.replacement * inflation
            } else {
                0.0
            };
            let net_cashflow = energy_savings - maintenance_cost - replacement_cost;
            accumulated += net_cashflow;

            YearlyCashflow {
                year,
                energy_savings,
                maintenance_cost,
                replacement_cost,
                net_cashflow,
                accumulated,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(kind: UpgradeKind) -> UpgradeRecommendation {
        UpgradeRecommendation {
            kind,
            title: String::new(),
            annual_savings: 10_000.0,
            upgrade_cost: 50_000.0,
            payback_years: 5,
            co2_reduction: 100.0,
        }
    }

    #[test]
    fn replacement_happens_on_lifetime_multiples() {
        let years = yearly_cashflows(
            &recommendation(UpgradeKind::Controls),
            30,
            &EconomicsConfig::default(),
        );
        let replaced: Vec<u32> = years
            .iter()
            .filter(|y| y.replacement_cost > 0.0)
            .map(|y| y.year)
            .collect();
        assert_eq!(replaced, vec![10, 20, 30]);
    }

    #[test]
    fn first_year_has_no_growth() {
        let years = yearly_cashflows(
            &recommendation(UpgradeKind::Ventilation),
            2,
            &EconomicsConfig::default(),
        );
        assert_eq!(years[0].energy_savings, 10_000.0);
        assert_eq!(years[0].maintenance_cost, 1_500.0);
        assert!((years[1].energy_savings - 10_400.0).abs() < 1e-9);
        assert!((years[1].maintenance_cost - 1_530.0).abs() < 1e-9);
    }
}
