// ==========================================
// 차량 물류/판매 대사 시스템 - API 계층
// ==========================================
// 역할: 업로드 검증, 분석 실행, 응답 봉투 생성
// ==========================================

pub mod analysis_api;
pub mod dto;
pub mod error;
pub mod validator;

// 핵심 타입 재노출
pub use analysis_api::{AnalysisApi, AnalysisOutcome};
pub use dto::{AnalysisRequest, AnalysisResponse, UploadedFile};
pub use error::{ApiError, ApiResult};
pub use validator::UploadValidator;
