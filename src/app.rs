use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::building::BuildingSettings;
use crate::config::{Config, ConfigError};
use crate::energy::{self, ClimateProfile, EnergyCalcError, EnergyResult};
use crate::i18n::Language;
use crate::retrofit::energy_cost::{annual_energy_cost, EnergyCostEstimate};
use crate::retrofit::maintenance_plan::{summarize_plan, MaintenanceItem, PlanError, PlanSummary};
use crate::retrofit::{
    compute_sustainability_score, project_roi_with, recommend_upgrades_with, RoiError,
    RoiProjection, ScoreRating, UpgradeKind, UpgradeRecommendation,
};

/// 유지보수 계획 집계 기본 면적 [m²]
pub const DEFAULT_PLAN_AREA_M2: f64 = 1000.0;
/// 유지보수 계획 기본 기간 [년]. ROI 분석 기간과는 별개다.
pub const DEFAULT_PLAN_YEARS: u32 = 30;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 건물 설정/계획 파일 파싱 오류
    #[error("입력 파일 파싱 오류 ({path}): {source}")]
    Input {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// JSON 출력 오류
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 에너지 계산 오류
    #[error("에너지 계산 오류: {0}")]
    Energy(#[from] EnergyCalcError),
    /// ROI 계산 오류
    #[error("ROI 계산 오류: {0}")]
    Roi(#[from] RoiError),
    /// 유지보수 계획 오류
    #[error("유지보수 계획 오류: {0}")]
    Plan(#[from] PlanError),
    /// 요청한 개보수가 추천 조건을 통과하지 못함
    #[error("추천되지 않은 개보수: {}", .0.as_code())]
    NotRecommended(UpgradeKind),
}

/// 건물 설정을 공급하는 쪽(입력 폼, 저장된 레코드 등).
pub trait SettingsProvider {
    fn building_settings(&self) -> Result<BuildingSettings, AppError>;
}

/// 계산 결과를 받아 출력/저장하는 쪽.
pub trait ReportSink {
    fn climate(&mut self, profiles: &[ClimateProfile]) -> Result<(), AppError>;
    fn energy(&mut self, report: &EnergyReport) -> Result<(), AppError>;
    fn upgrades(&mut self, reports: &[UpgradeReport]) -> Result<(), AppError>;
    fn roi(&mut self, projection: &RoiProjection) -> Result<(), AppError>;
    fn plan(&mut self, summary: &PlanSummary) -> Result<(), AppError>;
}

/// TOML 파일에서 읽는 건물 설정. 빠진 필드는 기본값으로 채운다.
#[derive(Debug, Clone)]
pub struct TomlSettingsFile {
    pub path: PathBuf,
}

impl SettingsProvider for TomlSettingsFile {
    fn building_settings(&self) -> Result<BuildingSettings, AppError> {
        read_toml(&self.path)
    }
}

impl SettingsProvider for BuildingSettings {
    fn building_settings(&self) -> Result<BuildingSettings, AppError> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyReport {
    pub result: EnergyResult,
    pub score: u8,
    pub rating: ScoreRating,
    pub energy_cost: EnergyCostEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeReport {
    pub recommendation: UpgradeRecommendation,
    pub projection: RoiProjection,
}

#[derive(Debug, serde::Deserialize)]
struct PlanFile {
    #[serde(default, rename = "item")]
    items: Vec<MaintenanceItem>,
}

/// 실행할 명령.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Climate { location: Option<String> },
    Estimate,
    Upgrades,
    Roi { kind: UpgradeKind },
    Plan {
        items: Vec<MaintenanceItem>,
        area_m2: f64,
        plan_years: u32,
    },
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// `[[item]]` 배열로 된 유지보수 계획 파일을 읽는다.
pub fn load_plan_items(path: &Path) -> Result<Vec<MaintenanceItem>, AppError> {
    let file: PlanFile = read_toml(path)?;
    Ok(file.items)
}

/// 에너지 결과, 점수, 비용을 묶는다.
pub fn energy_report(settings: &BuildingSettings) -> Result<EnergyReport, AppError> {
    let result = energy::compute_energy_consumption(settings)?;
    let score = compute_sustainability_score(settings, &result);
    Ok(EnergyReport {
        energy_cost: annual_energy_cost(settings, &result),
        rating: ScoreRating::from_score(score),
        score,
        result,
    })
}

/// 추천 목록과 각 항목의 ROI 전망을 만든다.
pub fn upgrade_reports(
    settings: &BuildingSettings,
    config: &Config,
    lang: Language,
) -> Result<Vec<UpgradeReport>, AppError> {
    let economics = &config.economics;
    recommend_upgrades_with(settings, economics, lang)?
        .into_iter()
        .map(|recommendation| -> Result<UpgradeReport, AppError> {
            let projection =
                project_roi_with(&recommendation, economics.horizon_years, economics)?;
            Ok(UpgradeReport {
                recommendation,
                projection,
            })
        })
        .collect()
}

/// 명령 하나를 실행하고 결과를 sink로 보낸다.
pub fn execute(
    command: Command,
    provider: &dyn SettingsProvider,
    sink: &mut dyn ReportSink,
    config: &Config,
    lang: Language,
) -> Result<(), AppError> {
    match command {
        Command::Climate { location } => {
            info!(?location, "climate lookup");
            match location {
                Some(name) => sink.climate(&[energy::lookup_climate(&name)]),
                None => sink.climate(energy::climate::climate_profiles()),
            }
        }
        Command::Estimate => {
            info!("energy estimate");
            let settings = provider.building_settings()?;
            sink.energy(&energy_report(&settings)?)
        }
        Command::Upgrades => {
            info!("upgrade recommendations");
            let settings = provider.building_settings()?;
            sink.upgrades(&upgrade_reports(&settings, config, lang)?)
        }
        Command::Roi { kind } => {
            info!(kind = kind.as_code(), "roi projection");
            let settings = provider.building_settings()?;
            let economics = &config.economics;
            let recommendation = recommend_upgrades_with(&settings, economics, lang)?
                .into_iter()
                .find(|r| r.kind == kind)
                .ok_or(AppError::NotRecommended(kind))?;
            sink.roi(&project_roi_with(
                &recommendation,
                economics.horizon_years,
                economics,
            )?)
        }
        Command::Plan {
            items,
            area_m2,
            plan_years,
        } => {
            info!(items = items.len(), plan_years, "maintenance plan summary");
            let summary = summarize_plan(&items, plan_years, area_m2)?;
            sink.plan(&summary)
        }
    }
}
