// ==========================================
// 차량 물류/판매 대사 시스템 - CSV 내보내기
// ==========================================
// UTF-8 BOM 포함 (Excel 에서 한글 깨짐 방지)
// 문자열 열은 따옴표로 감싸고 숫자 열은 그대로
// ==========================================

use crate::domain::variant::ModelVariant;
use crate::export::error::{ExportError, ExportResult};
use crate::export::table::ExportTable;
use csv::{QuoteStyle, WriterBuilder};
use tracing::{info, instrument};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct CsvExporter {
    locale: String,
}

impl CsvExporter {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// 기본 10열 CSV 바이트
    #[instrument(skip(self, models), fields(rows = models.len()))]
    pub fn export(&self, models: &[ModelVariant]) -> ExportResult<Vec<u8>> {
        let table = ExportTable::from_models(models, &self.locale);
        let bytes = write_table(&table)?;
        info!(rows = table.len(), bytes = bytes.len(), "CSV 내보내기 완료");
        Ok(bytes)
    }
}

/// 표 → BOM + CSV 바이트
pub fn write_table(table: &ExportTable) -> ExportResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|v| v.as_text()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}
