// ==========================================
// 차량 물류/판매 대사 시스템 - 엔진 계층
// ==========================================
// 역할: 키 정규화, 물류/판매 대사, 필터/정렬, 요약 지표
// 동기 순수 계산. 공유 상태 없음
// ==========================================

pub mod collation;
pub mod filter_sort;
pub mod key_normalizer;
pub mod reconciliation;
pub mod summary;

// 핵심 엔진 재노출
pub use collation::collate;
pub use filter_sort::{filter_models, sort_models, ModelFilter};
pub use key_normalizer::{generate_model_key, key_for, normalize_model_name};
pub use reconciliation::ReconciliationEngine;
pub use summary::{recalculate_summary, SummaryMetrics, VariantRates};
