use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 경제성 계산 가정값. 기본값은 스웨덴 주거 건물 기준 추정치이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicsConfig {
    /// 에너지 단가 [SEK/kWh]
    pub energy_price_per_kwh: f64,
    /// 연간 에너지 가격 상승률 (0.04 = 4%)
    pub energy_price_increase: f64,
    /// 유지/교체 비용 물가상승률
    pub inflation_rate: f64,
    /// ROI 분석 기간 [년]
    pub horizon_years: u32,
    /// 추천으로 인정하는 최대 회수기간 [년]
    pub max_payback_years: f64,
    /// 절감량 1 kWh당 CO2 감축량 [kg/kWh]. 보정되지 않은 자리표시 값.
    pub co2_factor_kg_per_kwh: f64,
    /// 스마트 제어 도입 시 예상 절감 비율
    pub controls_saving_fraction: f64,
    /// 이 개수 미만의 제어가 켜져 있으면 스마트 제어를 추천한다.
    pub smart_controls_threshold: usize,
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            energy_price_per_kwh: 1.5,
            energy_price_increase: 0.04,
            inflation_rate: 0.02,
            horizon_years: 30,
            max_payback_years: 50.0,
            co2_factor_kg_per_kwh: 0.1,
            controls_saving_fraction: 0.1,
            smart_controls_threshold: 2,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 출력 언어 코드 (sv, en, auto)
    pub language: String,
    pub economics: EconomicsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            economics: EconomicsConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정 파일을 읽는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_economics_section_keeps_other_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            language = "sv"
            [economics]
            energy_price_per_kwh = 2.0
            "#,
        )
        .expect("parse config");
        assert_eq!(cfg.language, "sv");
        assert_eq!(cfg.economics.energy_price_per_kwh, 2.0);
        assert_eq!(cfg.economics.horizon_years, 30);
        assert_eq!(cfg.economics.max_payback_years, 50.0);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).expect("serialize");
        let back: Config = toml::from_str(&text).expect("parse");
        assert_eq!(back, Config::default());
    }
}
