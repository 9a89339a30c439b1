// ==========================================
// Mock 설정 구현 - 통합 테스트용
// ==========================================

use async_trait::async_trait;
use logistics_analyzer::config::{AnalysisConfig, AnalysisConfigReader, ConfigError, ConfigResult};

/// Mock 설정
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    pub config: AnalysisConfig,
    /// 설정 읽기 실패 시뮬레이션
    pub fail: bool,
}

impl MockConfig {
    pub fn with_max_size(bytes: u64) -> Self {
        let mut mock = Self::default();
        mock.config.max_file_size_bytes = bytes;
        mock
    }

    pub fn with_locale(locale: &str) -> Self {
        let mut mock = Self::default();
        mock.config.locale = locale.to_string();
        mock
    }

    pub fn with_sheet(sheet_name: &str) -> Self {
        let mut mock = Self::default();
        mock.config.logistics_sheet_name = sheet_name.to_string();
        mock
    }

    pub fn with_max_units_per_row(limit: u64) -> Self {
        let mut mock = Self::default();
        mock.config.max_units_per_row = limit;
        mock
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> ConfigResult<()> {
        if self.fail {
            return Err(ConfigError::InvalidValue {
                key: "mock".to_string(),
                value: "fail".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AnalysisConfigReader for MockConfig {
    async fn get_max_file_size_bytes(&self) -> ConfigResult<u64> {
        self.check()?;
        Ok(self.config.max_file_size_bytes)
    }

    async fn get_timeout_secs(&self) -> ConfigResult<u64> {
        self.check()?;
        Ok(self.config.timeout_secs)
    }

    async fn get_slow_warning_secs(&self) -> ConfigResult<u64> {
        self.check()?;
        Ok(self.config.slow_warning_secs)
    }

    async fn get_logistics_sheet_name(&self) -> ConfigResult<String> {
        self.check()?;
        Ok(self.config.logistics_sheet_name.clone())
    }

    async fn get_max_units_per_row(&self) -> ConfigResult<u64> {
        self.check()?;
        Ok(self.config.max_units_per_row)
    }

    async fn get_locale(&self) -> ConfigResult<String> {
        self.check()?;
        Ok(self.config.locale.clone())
    }
}
