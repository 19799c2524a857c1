//! 건물 에너지 사용량 추정 모듈 모음.
//! 기후 조회 → 외피 손실/태양 취득 → 연간 합산 순으로 흐르며 상태를 갖지 않는다.

pub mod climate;
pub mod consumption;
pub mod envelope;
pub mod gains;

pub use climate::{lookup_climate, ClimateProfile};
pub use consumption::*;
pub use envelope::{EnvelopeAreas, UValues};
