// ==========================================
// 차량 물류/판매 대사 시스템 - 핵심 라이브러리
// ==========================================
// 입력: 물류 파일 + 판매 파일 (Excel / CSV)
// 출력: 모델 변형별 운송중/배정/대기 수량과 요약 지표
// ==========================================

// 국제화 초기화
rust_i18n::i18n!("locales", fallback = "ko");

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 레코드와 결과 타입
pub mod domain;

// 가져오기 계층 - 파일 디코딩, 레코드 추출
pub mod importer;

// 엔진 계층 - 키 정규화, 대사, 필터/정렬
pub mod engine;

// 내보내기 계층 - xlsx / csv
pub mod export;

// 설정 계층
pub mod config;

// API 계층 - 업로드 검증, 분석 실행
pub mod api;

// 로그 시스템
pub mod logging;

// 국제화
pub mod i18n;

// ==========================================
// 핵심 타입 재노출
// ==========================================

// 도메인
pub use domain::{
    AnalysisResult, AnalysisSummary, AssignmentStatus, LogisticsLayout, LogisticsRecord,
    ModelVariant, SalesRecord, SortBy, SortOrder, StatusFilter,
};

// 엔진
pub use engine::{
    filter_models, generate_model_key, recalculate_summary, sort_models, ModelFilter,
    ReconciliationEngine,
};

// API
pub use api::{AnalysisApi, AnalysisRequest, AnalysisResponse, ApiError, UploadedFile};

// ==========================================
// 상수
// ==========================================

// 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "차량 물류/판매 대사 시스템";
