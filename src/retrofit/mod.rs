//! 개보수 경제성 계산 모듈 모음.
//! 지속가능성 점수, 개보수 추천, ROI 전망, 에너지 비용, 유지보수 계획 집계로 구성한다.

pub mod energy_cost;
pub mod maintenance_plan;
pub mod roi;
pub mod score;
pub mod upgrades;

pub use roi::{project_roi, project_roi_with, RoiError, RoiProjection, YearlyCashflow};
pub use score::{compute_sustainability_score, ScoreRating};
pub use upgrades::{recommend_upgrades, recommend_upgrades_with, UpgradeKind, UpgradeRecommendation};
