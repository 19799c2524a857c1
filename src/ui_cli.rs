use std::io::Write;

use serde::Serialize;

use crate::app::{AppError, EnergyReport, ReportSink, UpgradeReport};
use crate::energy::ClimateProfile;
use crate::i18n::{self, keys, Language};
use crate::retrofit::maintenance_plan::PlanSummary;
use crate::retrofit::RoiProjection;

/// 사람이 읽는 텍스트 보고서를 출력한다.
pub struct TextReport<W: Write> {
    out: W,
    lang: Language,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W, lang: Language) -> Self {
        Self { out, lang }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// 금액을 스웨덴식으로 표시한다. 1000 이상은 tkr, 100만 이상은 Mkr로 줄이고
/// 소수는 최대 한 자리까지 쉼표로 쓴다.
pub fn format_currency(amount: f64) -> String {
    let magnitude = amount.abs();
    if magnitude >= 1_000_000.0 {
        format!("{} Mkr", format_number(amount / 1_000_000.0))
    } else if magnitude >= 1_000.0 {
        format!("{} tkr", format_number(amount / 1_000.0))
    } else {
        format!("{} kr", format_number(amount))
    }
}

/// 천 단위 공백 구분, 소수점 쉼표, 소수 최대 한 자리.
fn format_number(value: f64) -> String {
    let tenths = (value.abs() * 10.0).round() as u64;
    let digits = (tenths / 10).to_string();
    let mut text = String::new();
    if value < 0.0 && tenths > 0 {
        text.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            text.push(' ');
        }
        text.push(ch);
    }
    if tenths % 10 != 0 {
        text.push(',');
        text.push_str(&(tenths % 10).to_string());
    }
    text
}

impl<W: Write> ReportSink for TextReport<W> {
    fn climate(&mut self, profiles: &[ClimateProfile]) -> Result<(), AppError> {
        writeln!(self.out, "{}", i18n::t(self.lang, keys::CLIMATE))?;
        for c in profiles {
            writeln!(
                self.out,
                "  {:<12} {:>6.0} {:>6.0} {:>5.1} {:>4.1}",
                c.location, c.degree_days, c.solar_radiation, c.average_temp, c.wind_exposure
            )?;
        }
        Ok(())
    }

    fn energy(&mut self, report: &EnergyReport) -> Result<(), AppError> {
        let r = &report.result;
        writeln!(self.out, "\n=== {} {} ===", i18n::t(self.lang, keys::ENERGY_HEADING), r.climate.location)?;
        let kwh_year = i18n::t(self.lang, keys::UNIT_KWH_YEAR);
        writeln!(self.out, "{}: {} {kwh_year}", i18n::t(self.lang, keys::TOTAL_ANNUAL), r.total_annual)?;
        writeln!(
            self.out,
            "{}: {} {}",
            i18n::t(self.lang, keys::SPECIFIC),
            r.specific_consumption,
            i18n::t(self.lang, keys::UNIT_KWH_M2_YEAR)
        )?;
        writeln!(self.out, "{}: {} {kwh_year}", i18n::t(self.lang, keys::TRANSMISSION), r.transmission_loss)?;
        writeln!(self.out, "{}: {} {kwh_year}", i18n::t(self.lang, keys::VENTILATION), r.ventilation_loss)?;
        writeln!(self.out, "{}: {} {kwh_year}", i18n::t(self.lang, keys::SOLAR), r.solar_gains)?;
        writeln!(
            self.out,
            "{}: {:.2} / {:.2} / {:.2} / {:.2} W/m²K",
            i18n::t(self.lang, keys::U_VALUES),
            r.u_values.wall,
            r.u_values.window,
            r.u_values.roof,
            r.u_values.floor
        )?;
        writeln!(
            self.out,
            "{}: {} / {} kWh/m² / {}°C / {}",
            i18n::t(self.lang, keys::CLIMATE),
            r.climate.degree_days,
            r.climate.solar_radiation,
            r.climate.average_temp,
            r.climate.wind_exposure
        )?;
        writeln!(
            self.out,
            "{}: {} ({:?})",
            i18n::t(self.lang, keys::ENERGY_COST),
            format_currency(report.energy_cost.total),
            report.energy_cost.carrier
        )?;
        writeln!(
            self.out,
            "{}: {}/100 - {}",
            i18n::t(self.lang, keys::SCORE),
            report.score,
            i18n::score_message(report.rating, self.lang)
        )?;
        Ok(())
    }

    fn upgrades(&mut self, reports: &[UpgradeReport]) -> Result<(), AppError> {
        writeln!(self.out, "\n=== {} ===", i18n::t(self.lang, keys::UPGRADES_HEADING))?;
        if reports.is_empty() {
            writeln!(self.out, "{}", i18n::t(self.lang, keys::UPGRADES_NONE))?;
            return Ok(());
        }
        let years = i18n::t(self.lang, keys::UNIT_YEARS);
        for report in reports {
            let rec = &report.recommendation;
            let roi = &report.projection;
            writeln!(self.out, "\n{}", rec.title)?;
            writeln!(self.out, "  {}", i18n::upgrade_description(rec.kind, self.lang))?;
            writeln!(self.out, "  {}: {}", i18n::t(self.lang, keys::UPGRADE_COST), format_currency(rec.upgrade_cost))?;
            writeln!(
                self.out,
                "  {}: {}{}",
                i18n::t(self.lang, keys::ANNUAL_SAVINGS),
                format_currency(rec.annual_savings),
                i18n::t(self.lang, keys::UNIT_PER_YEAR)
            )?;
            writeln!(self.out, "  {}: {} {years}", i18n::t(self.lang, keys::PAYBACK), rec.payback_years)?;
            writeln!(
                self.out,
                "  {}: {} {}",
                i18n::t(self.lang, keys::CO2),
                rec.co2_reduction,
                i18n::t(self.lang, keys::UNIT_KG_YEAR)
            )?;
            writeln!(
                self.out,
                "  {} ({} {years}): {}, {}: {}%",
                i18n::t(self.lang, keys::NET_SAVINGS),
                roi.horizon_years,
                format_currency(roi.net_savings),
                i18n::t(self.lang, keys::ROI),
                roi.roi
            )?;
        }
        Ok(())
    }

    fn roi(&mut self, projection: &RoiProjection) -> Result<(), AppError> {
        writeln!(
            self.out,
            "\n=== {} ===",
            i18n::upgrade_title(projection.kind, self.lang)
        )?;
        writeln!(self.out, "{}", i18n::t(self.lang, keys::ROI_TABLE_HEADER))?;
        for y in &projection.years {
            writeln!(
                self.out,
                "{:>3} | {:>10.0} | {:>8.0} | {:>8.0} | {:>10.0} | {:>12.0}",
                y.year,
                y.energy_savings,
                y.maintenance_cost,
                y.replacement_cost,
                y.net_cashflow,
                y.accumulated
            )?;
        }
        writeln!(
            self.out,
            "{}: {}, {}: {}%, {}: {} {}",
            i18n::t(self.lang, keys::NET_SAVINGS),
            format_currency(projection.net_savings),
            i18n::t(self.lang, keys::ROI),
            projection.roi,
            i18n::t(self.lang, keys::PAYBACK),
            projection.simple_payback,
            i18n::t(self.lang, keys::UNIT_YEARS)
        )?;
        Ok(())
    }

    fn plan(&mut self, summary: &PlanSummary) -> Result<(), AppError> {
        writeln!(self.out, "\n=== {} ===", i18n::t(self.lang, keys::PLAN_HEADING))?;
        for (year, cost) in &summary.cost_by_year {
            writeln!(self.out, "  {year}: {}", format_currency(*cost))?;
        }
        for (category, cost) in &summary.cost_by_category {
            writeln!(self.out, "  {category}: {}", format_currency(*cost))?;
        }
        writeln!(self.out, "{}: {}", i18n::t(self.lang, keys::PLAN_TOTAL), format_currency(summary.total_cost))?;
        writeln!(
            self.out,
            "{}: {}",
            i18n::t(self.lang, keys::PLAN_AVERAGE),
            format_currency(summary.average_yearly_cost)
        )?;
        writeln!(
            self.out,
            "{}: {}",
            i18n::t(self.lang, keys::PLAN_PER_M2),
            format_currency(summary.cost_per_square_meter)
        )?;
        for d in &summary.deviations {
            writeln!(
                self.out,
                "  {} ({}): {} {} ({:+}%)",
                d.category,
                d.description,
                i18n::t(self.lang, keys::PLAN_DEVIATION),
                format_currency(d.actual_cost),
                d.deviation_percent
            )?;
        }
        Ok(())
    }
}

/// 결과 레코드를 JSON으로 출력한다.
pub struct JsonReport<W: Write> {
    out: W,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), AppError> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn climate(&mut self, profiles: &[ClimateProfile]) -> Result<(), AppError> {
        self.write(profiles)
    }

    fn energy(&mut self, report: &EnergyReport) -> Result<(), AppError> {
        self.write(report)
    }

    fn upgrades(&mut self, reports: &[UpgradeReport]) -> Result<(), AppError> {
        self.write(reports)
    }

    fn roi(&mut self, projection: &RoiProjection) -> Result<(), AppError> {
        self.write(projection)
    }

    fn plan(&mut self, summary: &PlanSummary) -> Result<(), AppError> {
        self.write(summary)
    }
}
