//! 스웨덴 주요 도시의 정적 기후 계수 테이블과 조회 함수를 제공한다.
//! 값은 간이 추정용이며 실제 설계에는 지역 기상 데이터로 검증해야 한다.

use serde::Serialize;

/// 조회 실패 시 사용하는 기본 지역.
pub const DEFAULT_LOCATION: &str = "Stockholm";

/// 지역별 기후 계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateProfile {
    pub location: &'static str,
    /// 난방 도일 [K·day]
    pub degree_days: f64,
    /// 연간 일사량 [kWh/m²·yr]
    pub solar_radiation: f64,
    /// 연평균 기온 [°C]
    pub average_temp: f64,
    /// 풍속 노출 계수 (무차원, 0 이상)
    pub wind_exposure: f64,
}

impl ClimateProfile {
    const fn new(
        location: &'static str,
        degree_days: f64,
        solar_radiation: f64,
        average_temp: f64,
        wind_exposure: f64,
    ) -> Self {
        Self {
            location,
            degree_days,
            solar_radiation,
            average_temp,
            wind_exposure,
        }
    }
}

pub fn climate_profiles() -> &'static [ClimateProfile] {
    CLIMATE_DATA
}

/// 지역명을 정확히 일치시켜 조회한다. 없으면 기본 지역(Stockholm)을 돌려준다.
pub fn lookup_climate(location: &str) -> ClimateProfile {
    find_climate(location).unwrap_or_else(default_climate)
}

/// 정확히 일치하는 지역만 돌려준다.
pub fn find_climate(location: &str) -> Option<ClimateProfile> {
    CLIMATE_DATA.iter().copied().find(|c| c.location == location)
}

pub fn default_climate() -> ClimateProfile {
    CLIMATE_DATA[0]
}

// 첫 항목이 기본 지역이다.
const CLIMATE_DATA: &[ClimateProfile] = &[
    ClimateProfile::new(DEFAULT_LOCATION, 3500.0, 970.0, 6.6, 1.0),
    ClimateProfile::new("Göteborg", 3200.0, 990.0, 7.7, 1.2),
    ClimateProfile::new("Malmö", 3000.0, 1020.0, 8.4, 1.3),
    ClimateProfile::new("Umeå", 4200.0, 870.0, 3.4, 0.9),
    ClimateProfile::new("Uppsala", 3600.0, 950.0, 5.8, 1.0),
    ClimateProfile::new("Örebro", 3400.0, 960.0, 6.3, 0.9),
    ClimateProfile::new("Linköping", 3300.0, 980.0, 6.8, 1.0),
    ClimateProfile::new("Västerås", 3450.0, 965.0, 6.2, 1.1),
    ClimateProfile::new("Norrköping", 3350.0, 975.0, 6.7, 1.1),
    ClimateProfile::new("Luleå", 4500.0, 850.0, 2.4, 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_ten_distinct_locations() {
        let mut names: Vec<_> = climate_profiles().iter().map(|c| c.location).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn lookup_is_exact_match() {
        // 대소문자가 다르면 기본값으로 폴백
        assert_eq!(lookup_climate("luleå").location, DEFAULT_LOCATION);
        assert_eq!(lookup_climate("Luleå").degree_days, 4500.0);
    }
}
