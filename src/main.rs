use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use building_energy_toolbox::app::{self, AppError, Command, ReportSink, TomlSettingsFile};
use building_energy_toolbox::config::{self, DEFAULT_CONFIG_PATH};
use building_energy_toolbox::i18n;
use building_energy_toolbox::retrofit::UpgradeKind;
use building_energy_toolbox::ui_cli::{JsonReport, TextReport};

#[derive(Parser, Debug)]
#[command(name = "building-energy")]
#[command(about = "Building energy estimate and retrofit economics")]
#[command(version)]
struct Args {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 출력 언어 (sv, en, auto)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// 결과를 JSON으로 출력
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// 기후 계수 조회 (지역 생략 시 전체 목록)
    Climate { location: Option<String> },
    /// 연간 에너지 사용량, 점수, 에너지 비용
    Estimate {
        #[arg(long, value_name = "FILE")]
        settings: PathBuf,
    },
    /// 개보수 추천과 ROI 요약
    Upgrades {
        #[arg(long, value_name = "FILE")]
        settings: PathBuf,
    },
    /// 개보수 한 건의 연도별 현금흐름
    Roi {
        #[arg(long, value_name = "FILE")]
        settings: PathBuf,
        /// window, insulation, ventilation, heating, controls
        #[arg(long, value_parser = parse_kind)]
        kind: UpgradeKind,
    },
    /// 유지보수 계획 집계
    Plan {
        #[arg(long, value_name = "FILE")]
        items: PathBuf,
        /// 면적 [m²]
        #[arg(long, default_value_t = app::DEFAULT_PLAN_AREA_M2)]
        area: f64,
        /// 계획 기간 [년]
        #[arg(long, default_value_t = app::DEFAULT_PLAN_YEARS)]
        years: u32,
    },
}

fn parse_kind(s: &str) -> Result<UpgradeKind, String> {
    UpgradeKind::from_code(s).ok_or_else(|| format!("unknown upgrade kind: {s}"))
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match try_run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: Args) -> Result<(), AppError> {
    let cfg = config::load_or_default(&args.config)?;
    let lang = i18n::resolve_language(args.lang.as_deref(), &cfg.language);

    let (command, settings_path) = match args.command {
        Cmd::Climate { location } => (Command::Climate { location }, None),
        Cmd::Estimate { settings } => (Command::Estimate, Some(settings)),
        Cmd::Upgrades { settings } => (Command::Upgrades, Some(settings)),
        Cmd::Roi { settings, kind } => (Command::Roi { kind }, Some(settings)),
        Cmd::Plan { items, area, years } => {
            let items = app::load_plan_items(&items)?;
            let command = Command::Plan {
                items,
                area_m2: area,
                plan_years: years,
            };
            (command, None)
        }
    };
    let provider = TomlSettingsFile {
        path: settings_path.unwrap_or_default(),
    };

    let stdout = io::stdout().lock();
    let mut sink: Box<dyn ReportSink> = if args.json {
        Box::new(JsonReport::new(stdout))
    } else {
        Box::new(TextReport::new(stdout, lang))
    };
    app::execute(command, &provider, sink.as_mut(), &cfg, lang)
}
