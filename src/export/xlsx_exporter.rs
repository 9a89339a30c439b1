// ==========================================
// 차량 물류/판매 대사 시스템 - Excel 내보내기
// ==========================================
// 시트 구성:
//   요약 (항목/값 + 주요 지표)
//   상세데이터 (기본 열 + 배정률/가용률)
//   운송중차량 / 배정대기차량 / 미매치모델 (해당 행이 있을 때만)
// 필터 내보내기: 상태 1종 시트 1개, 비어 있으면 에러
// ==========================================

use crate::domain::types::StatusFilter;
use crate::domain::variant::{AnalysisResult, AnalysisSummary, ModelVariant};
use crate::engine::filter_sort::{filter_models, ModelFilter};
use crate::engine::summary::SummaryMetrics;
use crate::export::error::{ExportError, ExportResult};
use crate::export::table::{
    ExportTable, ExportValue, DETAIL_COLUMNS, IN_TRANSIT_COLUMNS, STANDARD_COLUMNS,
    UNASSIGNED_COLUMNS, UNMATCHED_COLUMNS,
};
use crate::i18n::t_locale;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::{info, instrument};

/// 내보내기 결과
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub sheet_count: usize,
    pub record_count: usize,
}

pub struct XlsxExporter {
    locale: String,
}

impl XlsxExporter {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    fn label(&self, key: &str) -> String {
        t_locale(key, &self.locale)
    }

    /// 전체 분석 결과 내보내기 (현재 시각 기준)
    pub fn export(&self, result: &AnalysisResult) -> ExportResult<ExportedFile> {
        self.export_at(result, Local::now().naive_local())
    }

    /// 전체 분석 결과 내보내기
    #[instrument(skip(self, result), fields(models = result.models.len()))]
    pub fn export_at(
        &self,
        result: &AnalysisResult,
        analyzed_at: NaiveDateTime,
    ) -> ExportResult<ExportedFile> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        self.write_summary_sheet(&mut workbook, &result.summary, analyzed_at, &header_format)?;

        let detail = ExportTable::build(&result.models, DETAIL_COLUMNS, &self.locale);
        write_table_sheet(&mut workbook, &self.label("export.sheet.detail"), &detail, &header_format)?;
        let mut sheet_count = 2;

        let models = &result.models;
        let status_sheets: [(&str, Vec<ModelVariant>, &[_]); 3] = [
            (
                "export.sheet.in_transit",
                filter_models(models, &ModelFilter::with_status(StatusFilter::InTransit)),
                IN_TRANSIT_COLUMNS,
            ),
            (
                "export.sheet.unassigned",
                filter_models(models, &ModelFilter::with_status(StatusFilter::PendingUnassigned)),
                UNASSIGNED_COLUMNS,
            ),
            (
                "export.sheet.unmatched",
                models.iter().filter(|m| m.looks_unmatched()).cloned().collect(),
                UNMATCHED_COLUMNS,
            ),
        ];

        for (name_key, subset, columns) in status_sheets.iter() {
            if subset.is_empty() {
                continue;
            }
            let table = ExportTable::build(subset, columns, &self.locale);
            write_table_sheet(&mut workbook, &self.label(name_key), &table, &header_format)?;
            sheet_count += 1;
        }

        let bytes = workbook.save_to_buffer()?;
        let file_name = format!(
            "{}_{}.xlsx",
            self.label("export.file_prefix"),
            analyzed_at.date().format("%Y-%m-%d")
        );
        info!(file_name = %file_name, sheets = sheet_count, "Excel 내보내기 완료");

        Ok(ExportedFile {
            file_name,
            bytes,
            sheet_count,
            record_count: result.models.len(),
        })
    }

    /// 상태별 필터 내보내기 (시트 1개)
    #[instrument(skip(self, models), fields(models = models.len(), status = %status))]
    pub fn export_filtered(
        &self,
        models: &[ModelVariant],
        status: StatusFilter,
        date: NaiveDate,
    ) -> ExportResult<ExportedFile> {
        let subset = filter_models(models, &ModelFilter::with_status(status));
        if subset.is_empty() {
            return Err(ExportError::NoData(status.to_string()));
        }

        let sheet_name = self.label(filtered_sheet_key(status));
        let table = ExportTable::build(&subset, STANDARD_COLUMNS, &self.locale);

        let mut workbook = Workbook::new();
        write_table_sheet(&mut workbook, &sheet_name, &table, &Format::new().set_bold())?;
        let bytes = workbook.save_to_buffer()?;

        let file_name = format!("{}_{}.xlsx", sheet_name, date.format("%Y-%m-%d"));
        info!(file_name = %file_name, records = subset.len(), "필터 내보내기 완료");

        Ok(ExportedFile {
            file_name,
            bytes,
            sheet_count: 1,
            record_count: subset.len(),
        })
    }

    fn write_summary_sheet(
        &self,
        workbook: &mut Workbook,
        summary: &AnalysisSummary,
        analyzed_at: NaiveDateTime,
        header_format: &Format,
    ) -> ExportResult<()> {
        let metrics = SummaryMetrics::from_summary(summary);
        let sheet = workbook.add_worksheet();
        sheet.set_name(self.label("export.sheet.summary"))?;
        sheet.set_column_width(0, 20)?;
        sheet.set_column_width(1, 15)?;

        sheet.write_string_with_format(0, 0, self.label("export.summary.item"), header_format)?;
        sheet.write_string_with_format(0, 1, self.label("export.summary.value"), header_format)?;

        let counts: [(&str, f64); 6] = [
            ("export.summary.total_models", summary.total_models as f64),
            ("export.summary.total_vehicles", summary.total_vehicles as f64),
            ("export.summary.in_transit", summary.in_transit as f64),
            ("export.summary.pending_assigned", summary.pending_assigned as f64),
            ("export.summary.pending_unassigned", summary.pending_unassigned as f64),
            ("export.summary.unmatched_models", summary.unmatched_models as f64),
        ];
        for (i, (key, value)) in counts.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet.write_string(row, 0, self.label(key))?;
            sheet.write_number(row, 1, *value)?;
        }

        // 7행 공백
        sheet.write_string(8, 0, self.label("export.analyzed_at"))?;
        sheet.write_string(8, 1, analyzed_at.format("%Y-%m-%d %H:%M:%S").to_string())?;

        sheet.write_string_with_format(10, 0, self.label("export.key_metrics"), header_format)?;
        let rates = [
            ("export.summary.assignment_rate", metrics.assignment_rate),
            ("export.summary.availability_rate", metrics.availability_rate),
            ("export.summary.matching_rate", metrics.matching_rate),
        ];
        for (i, (key, value)) in rates.iter().enumerate() {
            let row = (11 + i) as u32;
            sheet.write_string(row, 0, self.label(key))?;
            sheet.write_number(row, 1, *value as f64)?;
        }
        Ok(())
    }
}

fn filtered_sheet_key(status: StatusFilter) -> &'static str {
    match status {
        StatusFilter::All => "export.sheet.all",
        StatusFilter::InTransit => "export.sheet.in_transit",
        StatusFilter::PendingAssigned => "export.sheet.assigned",
        StatusFilter::PendingUnassigned => "export.sheet.unassigned",
    }
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, value: &ExportValue) -> ExportResult<()> {
    match value {
        ExportValue::Text(s) => sheet.write_string(row, col, s)?,
        ExportValue::Number(n) => sheet.write_number(row, col, *n)?,
    };
    Ok(())
}

/// 표 하나를 새 시트로 기록 (헤더 굵게, 열 너비 지정)
fn write_table_sheet(
    workbook: &mut Workbook,
    name: &str,
    table: &ExportTable,
    header_format: &Format,
) -> ExportResult<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name)?;

    for (col, (column, header)) in table.columns.iter().zip(&table.headers).enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, column.width())?;
        sheet.write_string_with_format(0, col, header, header_format)?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            write_cell(sheet, r, col as u16, value)?;
        }
    }
    Ok(())
}
