//! 보고서 문구를 스웨덴어/영어로 제공한다.

use sys_locale::get_locale;

use crate::retrofit::{ScoreRating, UpgradeKind};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ENERGY_HEADING: &str = "energy.heading";
    pub const TOTAL_ANNUAL: &str = "energy.total_annual";
    pub const SPECIFIC: &str = "energy.specific";
    pub const TRANSMISSION: &str = "energy.transmission";
    pub const VENTILATION: &str = "energy.ventilation";
    pub const SOLAR: &str = "energy.solar";
    pub const U_VALUES: &str = "energy.u_values";
    pub const CLIMATE: &str = "energy.climate";
    pub const ENERGY_COST: &str = "energy.cost";
    pub const SCORE: &str = "score.heading";

    pub const UPGRADES_HEADING: &str = "upgrades.heading";
    pub const UPGRADES_NONE: &str = "upgrades.none";
    pub const ANNUAL_SAVINGS: &str = "upgrades.annual_savings";
    pub const UPGRADE_COST: &str = "upgrades.cost";
    pub const PAYBACK: &str = "upgrades.payback";
    pub const CO2: &str = "upgrades.co2";
    pub const NET_SAVINGS: &str = "roi.net_savings";
    pub const ROI: &str = "roi.roi";
    pub const ROI_TABLE_HEADER: &str = "roi.table_header";

    pub const PLAN_HEADING: &str = "plan.heading";
    pub const PLAN_TOTAL: &str = "plan.total";
    pub const PLAN_AVERAGE: &str = "plan.average";
    pub const PLAN_PER_M2: &str = "plan.per_m2";
    pub const PLAN_DEVIATION: &str = "plan.deviation";

    pub const UNIT_KWH_YEAR: &str = "unit.kwh_year";
    pub const UNIT_KWH_M2_YEAR: &str = "unit.kwh_m2_year";
    pub const UNIT_PER_YEAR: &str = "unit.per_year";
    pub const UNIT_YEARS: &str = "unit.years";
    pub const UNIT_KG_YEAR: &str = "unit.kg_year";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Sv,
    En,
}

impl Language {
    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Sv => "sv",
            Language::En => "en",
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: &str) -> Language {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| normalize_lang(config_lang))
        .or_else(detect_system_language)
        .unwrap_or_default()
}

fn normalize_lang(code: &str) -> Option<Language> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("sv") => Some(Language::Sv),
        other if other.starts_with("en") => Some(Language::En),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<Language> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "sv" => Some(Language::Sv),
        "en" => Some(Language::En),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<Language> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// 번역을 가져온다. 영어 번역이 없으면 스웨덴어 문자열로 폴백한다.
pub fn t(lang: Language, key: &str) -> &'static str {
    match lang {
        Language::En => en(key).unwrap_or_else(|| sv(key)),
        Language::Sv => sv(key),
    }
}

pub fn upgrade_title(kind: UpgradeKind, lang: Language) -> &'static str {
    match (lang, kind) {
        (Language::Sv, UpgradeKind::Window) => "Uppgradera till 3-glasfönster",
        (Language::Sv, UpgradeKind::Insulation) => "Förbättra väggisolering",
        (Language::Sv, UpgradeKind::Ventilation) => "Installera FTX-system",
        (Language::Sv, UpgradeKind::Heating) => "Installera bergvärmepump",
        (Language::Sv, UpgradeKind::Controls) => "Installera smart styrning",
        (Language::En, UpgradeKind::Window) => "Upgrade to triple glazing",
        (Language::En, UpgradeKind::Insulation) => "Improve wall insulation",
        (Language::En, UpgradeKind::Ventilation) => "Install FTX heat-recovery ventilation",
        (Language::En, UpgradeKind::Heating) => "Install ground-source heat pump",
        (Language::En, UpgradeKind::Controls) => "Install smart controls",
    }
}

pub fn upgrade_description(kind: UpgradeKind, lang: Language) -> &'static str {
    match (lang, kind) {
        (Language::Sv, UpgradeKind::Window) => {
            "Uppgradering till energieffektiva fönster minskar värmeförluster och ökar komforten."
        }
        (Language::Sv, UpgradeKind::Insulation) => {
            "Förbättrad isolering reducerar energiförluster och ger jämnare inomhusklimat."
        }
        (Language::Sv, UpgradeKind::Ventilation) => {
            "FTX-system återvinner värme från ventilationsluften och förbättrar inomhusklimatet."
        }
        (Language::Sv, UpgradeKind::Heating) => {
            "Modern värmepump ger effektiv uppvärmning med lägre driftskostnader."
        }
        (Language::Sv, UpgradeKind::Controls) => {
            "Smart styrning optimerar energianvändningen efter behov och väder."
        }
        (Language::En, UpgradeKind::Window) => {
            "Energy-efficient windows reduce heat loss and improve comfort."
        }
        (Language::En, UpgradeKind::Insulation) => {
            "Better insulation cuts energy losses and evens out the indoor climate."
        }
        (Language::En, UpgradeKind::Ventilation) => {
            "FTX recovers heat from exhaust air and improves indoor air quality."
        }
        (Language::En, UpgradeKind::Heating) => {
            "A modern heat pump heats efficiently at lower running cost."
        }
        (Language::En, UpgradeKind::Controls) => {
            "Smart controls adapt energy use to demand and weather."
        }
    }
}

pub fn score_message(rating: ScoreRating, lang: Language) -> &'static str {
    match (lang, rating) {
        (Language::Sv, ScoreRating::Excellent) => "Utmärkt! Din byggnad är mycket energieffektiv.",
        (Language::Sv, ScoreRating::Good) => "Bra! Det finns några möjligheter till förbättring.",
        (Language::Sv, ScoreRating::Fair) => "Det finns betydande potential för energibesparingar.",
        (Language::Sv, ScoreRating::Poor) => {
            "Din byggnad behöver omfattande energieffektiviseringsåtgärder."
        }
        (Language::En, ScoreRating::Excellent) => "Excellent! Your building is very energy efficient.",
        (Language::En, ScoreRating::Good) => "Good! There are some opportunities for improvement.",
        (Language::En, ScoreRating::Fair) => "There is significant potential for energy savings.",
        (Language::En, ScoreRating::Poor) => "Your building needs extensive efficiency measures.",
    }
}

fn sv(key: &str) -> &'static str {
    match key {
        keys::ENERGY_HEADING => "Energiberäkning för",
        keys::TOTAL_ANNUAL => "Total årsförbrukning",
        keys::SPECIFIC => "Specifik energianvändning",
        keys::TRANSMISSION => "Transmissionsförluster",
        keys::VENTILATION => "Ventilationsförluster",
        keys::SOLAR => "Solvärmetillskott",
        keys::U_VALUES => "U-värden (vägg/fönster/tak/golv)",
        keys::CLIMATE => "Graddagar/solinstrålning/medeltemp/vind",
        keys::ENERGY_COST => "Årlig energikostnad",
        keys::SCORE => "Hållbarhetspoäng",
        keys::UPGRADES_HEADING => "Rekommenderade åtgärder",
        keys::UPGRADES_NONE => "Inga lönsamma åtgärder hittades.",
        keys::ANNUAL_SAVINGS => "Årlig besparing",
        keys::UPGRADE_COST => "Investering",
        keys::PAYBACK => "Återbetalningstid",
        keys::CO2 => "CO2-minskning",
        keys::NET_SAVINGS => "Nettobesparing",
        keys::ROI => "Avkastning",
        keys::ROI_TABLE_HEADER => "År | Besparing | Underhåll | Utbyte | Netto | Ackumulerat",
        keys::PLAN_HEADING => "Underhållsplan",
        keys::PLAN_TOTAL => "Total kostnad",
        keys::PLAN_AVERAGE => "Kostnad per år",
        keys::PLAN_PER_M2 => "Kostnad per år och m²",
        keys::PLAN_DEVIATION => "Faktisk kostnad",
        keys::UNIT_KWH_YEAR => "kWh/år",
        keys::UNIT_KWH_M2_YEAR => "kWh/m²/år",
        keys::UNIT_PER_YEAR => "/år",
        keys::UNIT_YEARS => "år",
        keys::UNIT_KG_YEAR => "kg/år",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    let text = match key {
        keys::ENERGY_HEADING => "Energy estimate for",
        keys::TOTAL_ANNUAL => "Total annual consumption",
        keys::SPECIFIC => "Specific energy use",
        keys::TRANSMISSION => "Transmission losses",
        keys::VENTILATION => "Ventilation losses",
        keys::SOLAR => "Solar gains",
        keys::U_VALUES => "U-values (wall/window/roof/floor)",
        keys::CLIMATE => "Degree days/solar radiation/mean temp/wind",
        keys::ENERGY_COST => "Annual energy cost",
        keys::SCORE => "Sustainability score",
        keys::UPGRADES_HEADING => "Recommended upgrades",
        keys::UPGRADES_NONE => "No profitable upgrades found.",
        keys::ANNUAL_SAVINGS => "Annual savings",
        keys::UPGRADE_COST => "Investment",
        keys::PAYBACK => "Payback",
        keys::CO2 => "CO2 reduction",
        keys::NET_SAVINGS => "Net savings",
        keys::ROI => "ROI",
        keys::ROI_TABLE_HEADER => "Year | Savings | Maintenance | Replacement | Net | Accumulated",
        keys::PLAN_HEADING => "Maintenance plan",
        keys::PLAN_TOTAL => "Total cost",
        keys::PLAN_AVERAGE => "Cost per year",
        keys::PLAN_PER_M2 => "Cost per year and m²",
        keys::PLAN_DEVIATION => "Actual cost",
        keys::UNIT_KWH_YEAR => "kWh/yr",
        keys::UNIT_KWH_M2_YEAR => "kWh/m²/yr",
        keys::UNIT_PER_YEAR => "/yr",
        keys::UNIT_YEARS => "years",
        keys::UNIT_KG_YEAR => "kg/yr",
        _ => return None,
    };
    Some(text)
}
