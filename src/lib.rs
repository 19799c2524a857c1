//! 건물 에너지 추정과 개보수 경제성 계산을 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.

pub mod app;
pub mod building;
pub mod config;
pub mod energy;
pub mod i18n;
pub mod retrofit;
pub mod ui_cli;
