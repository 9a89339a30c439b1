// ==========================================
// 차량 물류/판매 대사 시스템 - 내보내기 계층
// ==========================================
// 역할: 분석 결과 → Excel(.xlsx) / CSV 바이트
// ==========================================

pub mod csv_exporter;
pub mod error;
pub mod table;
pub mod xlsx_exporter;

pub use csv_exporter::CsvExporter;
pub use error::{ExportError, ExportResult};
pub use table::{ExportColumn, ExportTable, ExportValue};
pub use xlsx_exporter::{ExportedFile, XlsxExporter};

use std::path::Path;

/// 내보낸 바이트를 파일로 저장
pub fn write_to_path<P: AsRef<Path>>(path: P, bytes: &[u8]) -> ExportResult<()> {
    std::fs::write(path, bytes)?;
    Ok(())
}
