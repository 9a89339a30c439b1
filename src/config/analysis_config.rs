// ==========================================
// 차량 물류/판매 대사 시스템 - 분석 설정
// ==========================================
// 역할: 업로드 제한, 시간 예산, 시트 이름, 로캘, 로그 형식
// 읽기 전용 Trait 으로 노출 (테스트에서 Mock 주입)
// ==========================================

use crate::config::config_manager::ConfigResult;
use crate::importer::logistics_extractor::DEFAULT_MAX_UNITS_PER_ROW;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 기본 최대 업로드 크기 (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
/// 기본 분석 시간 예산 (초)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// 기본 느린 실행 경고 기준 (초)
pub const DEFAULT_SLOW_WARNING_SECS: u64 = 50;

// ==========================================
// AnalysisConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub max_file_size_bytes: u64,
    pub timeout_secs: u64,
    pub slow_warning_secs: u64,
    /// 물류 파일에서 우선 선택할 시트
    pub logistics_sheet_name: String,
    /// 집계형 물류 행당 최대 합성 대수
    pub max_units_per_row: u64,
    pub locale: String,
    /// "text" | "json"
    pub log_format: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            slow_warning_secs: DEFAULT_SLOW_WARNING_SECS,
            logistics_sheet_name: "Sheet 1".to_string(),
            max_units_per_row: DEFAULT_MAX_UNITS_PER_ROW,
            locale: "ko".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn slow_warning(&self) -> Duration {
        Duration::from_secs(self.slow_warning_secs)
    }

    /// 사용자 메시지용 MB 단위 (내림)
    pub fn max_file_size_mb(&self) -> u64 {
        self.max_file_size_bytes / (1024 * 1024)
    }
}

// ==========================================
// AnalysisConfigReader Trait
// ==========================================
// 구현체: ConfigManager
#[async_trait]
pub trait AnalysisConfigReader: Send + Sync {
    /// 업로드 파일 최대 크기 (바이트)
    ///
    /// # 기본값
    /// - 10 MiB
    async fn get_max_file_size_bytes(&self) -> ConfigResult<u64>;

    /// 분석 시간 예산 (초)
    ///
    /// # 기본값
    /// - 60
    async fn get_timeout_secs(&self) -> ConfigResult<u64>;

    /// 느린 실행 경고 기준 (초)
    ///
    /// # 기본값
    /// - 50
    async fn get_slow_warning_secs(&self) -> ConfigResult<u64>;

    /// 물류 시트 이름
    ///
    /// # 기본값
    /// - "Sheet 1"
    async fn get_logistics_sheet_name(&self) -> ConfigResult<String>;

    /// 집계형 물류 행당 최대 합성 대수
    ///
    /// # 기본값
    /// - 10000
    async fn get_max_units_per_row(&self) -> ConfigResult<u64>;

    /// 사용자 메시지 로캘
    async fn get_locale(&self) -> ConfigResult<String>;

    /// 전체 설정 스냅샷
    async fn get_snapshot(&self) -> ConfigResult<AnalysisConfig> {
        Ok(AnalysisConfig {
            max_file_size_bytes: self.get_max_file_size_bytes().await?,
            timeout_secs: self.get_timeout_secs().await?,
            slow_warning_secs: self.get_slow_warning_secs().await?,
            logistics_sheet_name: self.get_logistics_sheet_name().await?,
            max_units_per_row: self.get_max_units_per_row().await?,
            locale: self.get_locale().await?,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_file_size_bytes, 10_485_760);
        assert_eq!(config.max_file_size_mb(), 10);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.slow_warning(), Duration::from_secs(50));
        assert_eq!(config.logistics_sheet_name, "Sheet 1");
        assert_eq!(config.max_units_per_row, 10_000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.locale, "ko");
    }
}
