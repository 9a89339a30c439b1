// ==========================================
// 차량 물류/판매 대사 시스템 - 설정 관리자
// ==========================================
// 역할: 설정 로드, 조회
// 우선순위: 기본값 → JSON 파일 → 환경 변수 (LOGISTICS_ANALYZER_*)
// 기본 파일 위치: {config_dir}/logistics-analyzer/config.json
// ==========================================

use crate::config::analysis_config::{AnalysisConfig, AnalysisConfigReader};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 설정 키 / 환경 변수 이름
pub mod config_keys {
    pub const ENV_PREFIX: &str = "LOGISTICS_ANALYZER_";

    pub const MAX_FILE_SIZE_BYTES: &str = "MAX_FILE_SIZE_BYTES";
    pub const TIMEOUT_SECS: &str = "TIMEOUT_SECS";
    pub const SLOW_WARNING_SECS: &str = "SLOW_WARNING_SECS";
    pub const LOGISTICS_SHEET_NAME: &str = "LOGISTICS_SHEET_NAME";
    pub const MAX_UNITS_PER_ROW: &str = "MAX_UNITS_PER_ROW";
    pub const LOCALE: &str = "LOCALE";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// 설정 파일 경로 지정
    pub const CONFIG_PATH: &str = "CONFIG";

    pub fn env_name(key: &str) -> String {
        format!("{}{}", ENV_PREFIX, key)
    }
}

/// 설정 에러
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("설정 파일 읽기 실패: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("설정 파일 형식 오류: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("잘못된 설정 값: {key}={value}")]
    InvalidValue { key: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ConfigManager
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: AnalysisConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 기본값만 사용
    pub fn new() -> Self {
        Self::default()
    }

    /// 이미 구성된 설정으로 생성
    pub fn from_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// 기본 설정 파일 경로
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("logistics-analyzer").join("config.json"))
    }

    /// 기본값 → 설정 파일(있으면) → 환경 변수
    ///
    /// 파일 경로: LOGISTICS_ANALYZER_CONFIG 가 있으면 그 경로, 없으면 기본 경로
    pub fn load() -> ConfigResult<Self> {
        let explicit = std::env::var(config_keys::env_name(config_keys::CONFIG_PATH))
            .ok()
            .map(PathBuf::from);

        let path = explicit.or_else(Self::default_config_path);
        let mut manager = match path {
            Some(p) if p.is_file() => Self::from_file(&p)?,
            _ => Self::new(),
        };

        apply_env_overrides(&mut manager.config, |key| std::env::var(key).ok())?;
        info!(source = ?manager.source, "설정 로드 완료");
        Ok(manager)
    }

    /// JSON 파일에서 로드 (없는 항목은 기본값)
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: AnalysisConfig = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), "설정 파일 적용");

        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 설정 스냅샷 (JSON)
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }
}

fn parse_u64(key: &str, value: &str) -> ConfigResult<u64> {
    value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// 환경 변수 덮어쓰기
///
/// lookup 은 전체 환경 변수 이름을 받아 값을 돌려준다
pub fn apply_env_overrides<F>(config: &mut AnalysisConfig, lookup: F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    use config_keys::*;

    let get = |key: &str| lookup(&env_name(key)).filter(|v| !v.trim().is_empty());

    if let Some(v) = get(MAX_FILE_SIZE_BYTES) {
        config.max_file_size_bytes = parse_u64(MAX_FILE_SIZE_BYTES, &v)?;
    }
    if let Some(v) = get(TIMEOUT_SECS) {
        config.timeout_secs = parse_u64(TIMEOUT_SECS, &v)?;
    }
    if let Some(v) = get(SLOW_WARNING_SECS) {
        config.slow_warning_secs = parse_u64(SLOW_WARNING_SECS, &v)?;
    }
    if let Some(v) = get(LOGISTICS_SHEET_NAME) {
        config.logistics_sheet_name = v;
    }
    if let Some(v) = get(MAX_UNITS_PER_ROW) {
        config.max_units_per_row = parse_u64(MAX_UNITS_PER_ROW, &v)?;
    }
    if let Some(v) = get(LOCALE) {
        config.locale = v.trim().to_string();
    }
    if let Some(v) = get(LOG_FORMAT) {
        config.log_format = v.trim().to_lowercase();
    }
    Ok(())
}

// ==========================================
// AnalysisConfigReader Trait 구현
// ==========================================
#[async_trait]
impl AnalysisConfigReader for ConfigManager {
    async fn get_max_file_size_bytes(&self) -> ConfigResult<u64> {
        Ok(self.config.max_file_size_bytes)
    }

    async fn get_timeout_secs(&self) -> ConfigResult<u64> {
        Ok(self.config.timeout_secs)
    }

    async fn get_slow_warning_secs(&self) -> ConfigResult<u64> {
        Ok(self.config.slow_warning_secs)
    }

    async fn get_logistics_sheet_name(&self) -> ConfigResult<String> {
        Ok(self.config.logistics_sheet_name.clone())
    }

    async fn get_max_units_per_row(&self) -> ConfigResult<u64> {
        Ok(self.config.max_units_per_row)
    }

    async fn get_locale(&self) -> ConfigResult<String> {
        Ok(self.config.locale.clone())
    }

    async fn get_snapshot(&self) -> ConfigResult<AnalysisConfig> {
        Ok(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_env_overrides() {
        let env: HashMap<String, String> = [
            ("LOGISTICS_ANALYZER_TIMEOUT_SECS", "5"),
            ("LOGISTICS_ANALYZER_LOCALE", " en "),
            ("LOGISTICS_ANALYZER_LOG_FORMAT", "JSON"),
            ("LOGISTICS_ANALYZER_SLOW_WARNING_SECS", ""),
            ("LOGISTICS_ANALYZER_MAX_UNITS_PER_ROW", "500"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let mut config = AnalysisConfig::default();
        apply_env_overrides(&mut config, |k| env.get(k).cloned()).unwrap();

        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.locale, "en");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.slow_warning_secs, 50);
        assert_eq!(config.max_units_per_row, 500);
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = AnalysisConfig::default();
        let err = apply_env_overrides(&mut config, |k| {
            (k == "LOGISTICS_ANALYZER_MAX_FILE_SIZE_BYTES").then(|| "ten".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"max_file_size_bytes": 1024, "logistics_sheet_name": "물류"}}"#)
            .unwrap();

        let manager = ConfigManager::from_file(temp_file.path()).unwrap();
        assert_eq!(manager.config().max_file_size_bytes, 1024);
        assert_eq!(manager.config().logistics_sheet_name, "물류");
        assert_eq!(manager.config().timeout_secs, 60);
        assert_eq!(manager.source(), Some(temp_file.path()));
    }

    #[test]
    fn test_from_file_errors() {
        assert!(matches!(
            ConfigManager::from_file("/nonexistent/config.json").unwrap_err(),
            ConfigError::Io { .. }
        ));

        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(temp_file, "not json").unwrap();
        assert!(matches!(
            ConfigManager::from_file(temp_file.path()).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[tokio::test]
    async fn test_reader_snapshot() {
        let manager = ConfigManager::from_config(AnalysisConfig {
            timeout_secs: 3,
            ..Default::default()
        });
        assert_eq!(manager.get_timeout_secs().await.unwrap(), 3);
        assert_eq!(manager.get_snapshot().await.unwrap().timeout_secs, 3);
        assert!(manager.get_config_snapshot().unwrap().contains("\"timeout_secs\": 3"));
    }
}
