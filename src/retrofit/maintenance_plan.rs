//! 유지보수 계획 항목을 연도/분류별로 집계한다.
//!
//! 항목의 저장과 조회는 외부(영속화 계층)의 일이고, 여기서는 전달받은 목록만 계산한다.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 유지보수 항목 상태. 스웨덴어 코드를 그대로 받는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MaintenanceStatus {
    /// Planerad
    #[default]
    Planned,
    /// Akut
    Urgent,
    /// Genomförd
    Completed,
    /// Efterstatt
    Delayed,
}

impl MaintenanceStatus {
    /// 알 수 없는 코드는 `Planned`로 폴백한다.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "Akut" => MaintenanceStatus::Urgent,
            "Genomförd" => MaintenanceStatus::Completed,
            "Efterstatt" => MaintenanceStatus::Delayed,
            _ => MaintenanceStatus::Planned,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            MaintenanceStatus::Planned => "Planerad",
            MaintenanceStatus::Urgent => "Akut",
            MaintenanceStatus::Completed => "Genomförd",
            MaintenanceStatus::Delayed => "Efterstatt",
        }
    }
}

impl From<String> for MaintenanceStatus {
    fn from(value: String) -> Self {
        MaintenanceStatus::from_code(&value)
    }
}

impl From<MaintenanceStatus> for String {
    fn from(value: MaintenanceStatus) -> Self {
        value.as_code().to_string()
    }
}

/// 유지보수 계획 항목 한 건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceItem {
    pub category: String,
    pub description: String,
    /// 계획 비용 [SEK]
    pub cost: f64,
    pub planned_year: i32,
    pub priority: String,
    #[serde(default)]
    pub status: MaintenanceStatus,
    /// 반복 주기 [년]
    #[serde(default = "default_interval")]
    pub interval_years: u32,
    /// 실제 집행 비용 [SEK]
    #[serde(default)]
    pub actual_cost: Option<f64>,
}

fn default_interval() -> u32 {
    30
}

/// 계획 집계 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("유지보수 항목 {index}번이 올바르지 않습니다: {reason}")]
    InvalidItem { index: usize, reason: &'static str },
    #[error("계획 기간과 면적은 0보다 커야 합니다.")]
    InvalidBasis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// 연도 오름차순 합계
    pub cost_by_year: BTreeMap<i32, f64>,
    pub cost_by_category: BTreeMap<String, f64>,
    pub total_cost: f64,
    /// 계획 기간 평균 연간 비용
    pub average_yearly_cost: f64,
    /// 면적당 연간 비용 [SEK/m²·yr]
    pub cost_per_square_meter: f64,
    /// 실제 비용이 기록된 항목의 계획 대비 차이
    pub deviations: Vec<CostDeviation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostDeviation {
    pub index: usize,
    pub category: String,
    pub description: String,
    pub planned_cost: f64,
    pub actual_cost: f64,
    /// 정수 반올림 [%]
    pub deviation_percent: f64,
}

/// 필수 필드를 검사한다.
pub fn validate_item(index: usize, item: &MaintenanceItem) -> Result<(), PlanError> {
    let reason = if item.category.trim().is_empty() {
        "분류가 비어 있음"
    } else if item.description.trim().is_empty() {
        "설명이 비어 있음"
    } else if !(item.cost > 0.0) {
        "비용은 0보다 커야 함"
    } else if item.planned_year <= 0 {
        "계획 연도가 없음"
    } else if item.priority.trim().is_empty() {
        "우선순위가 비어 있음"
    } else {
        return Ok(());
    };
    Err(PlanError::InvalidItem { index, reason })
}

/// 계획 기간(년)과 면적(m²)을 기준으로 유지보수 비용을 집계한다.
pub fn summarize_plan(
    items: &[MaintenanceItem],
    plan_years: u32,
    area_m2: f64,
) -> Result<PlanSummary, PlanError> {
    if plan_years == 0 || !(area_m2 > 0.0) {
        return Err(PlanError::InvalidBasis);
    }
    let mut cost_by_year = BTreeMap::new();
    let mut cost_by_category = BTreeMap::new();
    for (index, item) in items.iter().enumerate() {
        validate_item(index, item)?;
        *cost_by_year.entry(item.planned_year).or_insert(0.0) += item.cost;
        *cost_by_category.entry(item.category.clone()).or_insert(0.0) += item.cost;
    }
    let deviations = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            Some(CostDeviation {
                deviation_percent: cost_deviation_percent(item)?,
                actual_cost: item.actual_cost?,
                planned_cost: item.cost,
                index,
                category: item.category.clone(),
                description: item.description.clone(),
            })
        })
        .collect();
    let total_cost: f64 = items.iter().map(|i| i.cost).sum();
    let average_yearly_cost = total_cost / f64::from(plan_years);
    Ok(PlanSummary {
        cost_by_year,
        cost_by_category,
        total_cost,
        average_yearly_cost: average_yearly_cost.round(),
        cost_per_square_meter: (average_yearly_cost / area_m2).round(),
        deviations,
    })
}

/// 계획 대비 실제 비용 차이 [%]. 실제 비용이 없으면 None.
pub fn cost_deviation_percent(item: &MaintenanceItem) -> Option<f64> {
    let actual = item.actual_cost?;
    if item.cost > 0.0 {
        Some(((actual - item.cost) / item.cost * 100.0).round())
    } else {
        None
    }
}
