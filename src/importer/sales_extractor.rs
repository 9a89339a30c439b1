// ==========================================
// 차량 물류/판매 대사 시스템 - 판매 레코드 추출기
// ==========================================
// 첫 번째 시트, 헤더 0행, 데이터 1행부터
// 열 위치는 스프레드시트 열 문자로 고정:
//   L 영업사원 | S 커미션번호 | T 모델명 | Y 외장색상 | Z 트림 | AA 연식
// ==========================================

use crate::domain::record::SalesRecord;
use crate::importer::column::{column_to_index, index_to_column};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::RecordExtractor;
use crate::importer::sheet::{cell_at, SheetMatrix, Workbook};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// 판매 파일 열 매핑 (열 문자)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesColumnMapping {
    pub model: &'static str,
    pub color: &'static str,
    pub trim: &'static str,
    pub model_year: &'static str,
    pub commission_number: &'static str,
    pub salesperson: &'static str,
}

impl Default for SalesColumnMapping {
    fn default() -> Self {
        Self {
            model: "T",
            color: "Y",
            trim: "Z",
            model_year: "AA",
            commission_number: "S",
            salesperson: "L",
        }
    }
}

/// 매핑이 고정 상수이므로 변환 실패는 발생하지 않는다
#[derive(Debug, Clone, Copy)]
struct ResolvedColumns {
    model: usize,
    color: usize,
    trim: usize,
    model_year: usize,
    commission_number: usize,
    salesperson: usize,
}

impl SalesColumnMapping {
    fn resolve(&self) -> ImportResult<ResolvedColumns> {
        let idx = |letter: &str| {
            column_to_index(letter)
                .ok_or_else(|| ImportError::InternalError(format!("잘못된 열 문자: {}", letter)))
        };
        Ok(ResolvedColumns {
            model: idx(self.model)?,
            color: idx(self.color)?,
            trim: idx(self.trim)?,
            model_year: idx(self.model_year)?,
            commission_number: idx(self.commission_number)?,
            salesperson: idx(self.salesperson)?,
        })
    }

    /// (필드 이름, 열 문자, 기대 헤더 키워드)
    fn expected_headers(&self) -> [(&'static str, &'static str, &'static [&'static str]); 6] {
        [
            ("model", self.model, &["model", "모델", "차종"]),
            ("color", self.color, &["colour", "color", "색상"]),
            ("trim", self.trim, &["trim", "upholstery", "트림", "내장"]),
            ("model_year", self.model_year, &["year", "yr", "연식"]),
            ("commission_number", self.commission_number, &["comm", "커미션"]),
            ("salesperson", self.salesperson, &["sales", "영업", "담당"]),
        ]
    }
}

/// 헤더 검증 경고 (파일을 거부하지 않음)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderMismatch {
    pub field: String,
    pub column: String,
    pub found: String,
}

/// 고정 열 위치의 헤더가 기대한 필드처럼 보이는지 검사
pub fn verify_sales_header(sheet: &SheetMatrix, mapping: &SalesColumnMapping) -> Vec<HeaderMismatch> {
    let header = sheet.row(0).unwrap_or(&[]);

    mapping
        .expected_headers()
        .iter()
        .filter_map(|(field, letter, keywords)| {
            let col = column_to_index(letter)?;
            let found = cell_at(header, col).trimmed();
            let lower = found.to_lowercase();
            if !found.is_empty() && keywords.iter().any(|k| lower.contains(k)) {
                return None;
            }
            Some(HeaderMismatch {
                field: field.to_string(),
                column: index_to_column(col),
                found,
            })
        })
        .collect()
}

// ==========================================
// SalesExtractor
// ==========================================
#[derive(Default)]
pub struct SalesExtractor {
    mapping: SalesColumnMapping,
}

impl SalesExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mapping(&self) -> &SalesColumnMapping {
        &self.mapping
    }

    /// 시트 하나에서 판매 레코드 추출
    pub fn extract_sheet(&self, sheet: &SheetMatrix) -> ImportResult<Vec<SalesRecord>> {
        let cols = self.mapping.resolve()?;
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for row in sheet.rows().skip(1) {
            if row.is_empty() {
                continue;
            }

            let model = cell_at(row, cols.model).trimmed();
            if model.is_empty() {
                skipped += 1;
                continue;
            }

            records.push(SalesRecord {
                model_description: model,
                exterior_color: cell_at(row, cols.color).trimmed(),
                trim: cell_at(row, cols.trim).trimmed(),
                model_year: cell_at(row, cols.model_year).trimmed(),
                commission_number: cell_at(row, cols.commission_number).trimmed(),
                salesperson: cell_at(row, cols.salesperson).trimmed(),
            });
        }

        debug!(records = records.len(), skipped = skipped, "판매 시트 행 처리");
        Ok(records)
    }
}

impl RecordExtractor for SalesExtractor {
    type Record = SalesRecord;

    #[instrument(skip(self, workbook))]
    fn extract(&self, workbook: &Workbook) -> ImportResult<Vec<SalesRecord>> {
        let (sheet_name, sheet) = workbook
            .first_sheet()
            .ok_or_else(|| ImportError::SheetNotFound("첫 번째 시트".to_string()))?;

        let mismatches = verify_sales_header(sheet, &self.mapping);
        for m in &mismatches {
            warn!(
                field = %m.field,
                column = %m.column,
                found = %m.found,
                "판매 파일 헤더가 예상 열과 다릅니다"
            );
        }

        let records = self.extract_sheet(sheet)?;
        info!(
            sheet_name = %sheet_name,
            records = records.len(),
            header_warnings = mismatches.len(),
            "판매 데이터 추출 완료"
        );
        Ok(records)
    }
}
