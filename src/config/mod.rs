// ==========================================
// 차량 물류/판매 대사 시스템 - 설정 계층
// ==========================================
// 역할: 분석 설정 관리 (기본값 / 파일 / 환경 변수)
// ==========================================

pub mod analysis_config;
pub mod config_manager;

// 핵심 설정 타입 재노출
pub use analysis_config::{AnalysisConfig, AnalysisConfigReader};
pub use config_manager::{config_keys, ConfigError, ConfigManager, ConfigResult};
