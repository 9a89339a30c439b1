// ==========================================
// 차량 물류/판매 대사 시스템 - 가져오기 모듈 에러 타입
// ==========================================
// 도구: thiserror 파생 매크로
// 행 단위 결함은 에러가 아니라 건너뛰기로 처리 (여기 없음)
// ==========================================

use thiserror::Error;

/// 가져오기 모듈 에러 타입
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 파일 관련 에러 =====
    #[error("파일이 존재하지 않습니다: {0}")]
    FileNotFound(String),

    #[error("지원되지 않는 파일 형식: {0} (.xlsx/.xls/.xlsb/.xlsm/.csv 만 지원)")]
    UnsupportedFormat(String),

    #[error("파일 읽기 실패: {0}")]
    FileReadError(String),

    #[error("Excel 파싱 실패: {0}")]
    ExcelParseError(String),

    #[error("CSV 파싱 실패: {0}")]
    CsvParseError(String),

    // ===== 구조 에러 (요청 전체 실패) =====
    #[error("시트를 찾을 수 없습니다: {0}")]
    SheetNotFound(String),

    // ===== 공통 에러 =====
    #[error("내부 오류: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// 구조 에러 여부 (사용자 메시지 분류용)
    pub fn is_structural(&self) -> bool {
        matches!(self, ImportError::SheetNotFound(_))
    }
}

// std::io::Error 변환
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ImportError::FileNotFound(err.to_string()),
            _ => ImportError::FileReadError(err.to_string()),
        }
    }
}

// csv::Error 변환
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// calamine::Error 변환
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ImportResult<T> = Result<T, ImportError>;
