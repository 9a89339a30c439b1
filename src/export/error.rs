// ==========================================
// 차량 물류/판매 대사 시스템 - 내보내기 에러 타입
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("내보낼 데이터가 없습니다: {0}")]
    NoData(String),

    #[error("Excel 쓰기 실패: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV 쓰기 실패: {0}")]
    Csv(#[from] csv::Error),

    #[error("파일 쓰기 실패: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
