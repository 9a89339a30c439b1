// ==========================================
// 차량 물류/판매 대사 시스템 - API 계층 에러 타입
// ==========================================
// 역할: 하위 계층 에러를 분류하고 사용자용 메시지로 변환
// 사용자 메시지에는 내부 상세를 노출하지 않는다
// ==========================================

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::i18n::{t_locale, t_locale_with_args};
use crate::importer::ImportError;
use thiserror::Error;

/// API 계층 에러 타입
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 업로드 검증 에러
    // ==========================================
    #[error("파일 누락: {0}")]
    MissingFile(String),

    #[error("파일 크기 초과: {name} ({size} bytes > {max} bytes)")]
    FileTooLarge { name: String, size: u64, max: u64 },

    #[error("지원되지 않는 파일 형식: {0}")]
    UnsupportedFormat(String),

    // ==========================================
    // 분석 에러
    // ==========================================
    #[error("시트를 찾을 수 없습니다: {0}")]
    SheetNotFound(String),

    #[error("파일 파싱 실패: {0}")]
    ParseFailure(String),

    #[error("분석 시간 초과: {0}초")]
    Timeout(u64),

    #[error("내보내기 실패: {0}")]
    ExportError(String),

    // ==========================================
    // 공통 에러
    // ==========================================
    #[error("내부 오류: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 로캘별 사용자 메시지 (내부 상세 제외)
    pub fn user_message(&self, locale: &str) -> String {
        match self {
            ApiError::MissingFile(_) => t_locale("error.missing_file", locale),
            ApiError::FileTooLarge { name, max, .. } => {
                let max_mb = (max / (1024 * 1024)).to_string();
                t_locale_with_args(
                    "error.file_too_large",
                    locale,
                    &[("max", &max_mb), ("name", name)],
                )
            }
            ApiError::UnsupportedFormat(name) => {
                t_locale_with_args("error.unsupported_format", locale, &[("name", name)])
            }
            ApiError::SheetNotFound(_) => t_locale("error.sheet_not_found", locale),
            ApiError::ParseFailure(_) => t_locale("error.parse_failure", locale),
            ApiError::Timeout(_) => t_locale("error.timeout", locale),
            ApiError::ExportError(_) => t_locale("error.export_failed", locale),
            ApiError::InternalError(_) | ApiError::Other(_) => t_locale("error.internal", locale),
        }
    }

    /// 오류 분류 코드 (로그/JSON 용)
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MissingFile(_) => "MISSING_FILE",
            ApiError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            ApiError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ApiError::SheetNotFound(_) => "SHEET_NOT_FOUND",
            ApiError::ParseFailure(_) => "PARSE_FAILURE",
            ApiError::Timeout(_) => "TIMEOUT",
            ApiError::ExportError(_) => "EXPORT_ERROR",
            ApiError::InternalError(_) | ApiError::Other(_) => "INTERNAL_ERROR",
        }
    }
}

// ==========================================
// ImportError 변환
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::SheetNotFound(name) => ApiError::SheetNotFound(name),
            ImportError::UnsupportedFormat(ext) => ApiError::UnsupportedFormat(ext),
            ImportError::FileNotFound(path) => ApiError::MissingFile(path),
            ImportError::ExcelParseError(msg)
            | ImportError::CsvParseError(msg)
            | ImportError::FileReadError(msg) => ApiError::ParseFailure(msg),
            ImportError::InternalError(msg) => ApiError::InternalError(msg),
            ImportError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;
