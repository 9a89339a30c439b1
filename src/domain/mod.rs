// ==========================================
// 차량 물류/판매 대사 시스템 - 도메인 계층
// ==========================================
// 입력 레코드, 분석 결과, 공통 열거형
// ==========================================

pub mod record;
pub mod types;
pub mod variant;

// 핵심 타입 재노출
pub use record::{LogisticsRecord, SalesRecord, SampleRecord, VehicleDescriptor};
pub use types::{
    AssignmentStatus, LogisticsLayout, LogisticsStatusCategory, SortBy, SortOrder, StatusFilter,
};
pub use variant::{AnalysisResult, AnalysisSummary, ModelVariant};
