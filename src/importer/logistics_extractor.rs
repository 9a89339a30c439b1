// ==========================================
// 차량 물류/판매 대사 시스템 - 물류 레코드 추출기
// ==========================================
// 시트 선택: "Sheet 1" 우선, 없으면 첫 번째 시트
// 레이아웃: layout_detector::detect_layout 결과에 따라 분기
// ==========================================
// 집계형: 헤더 0~1행, 데이터 2행부터. 수량만큼 합성 레코드 생성
// 개별형: 헤더 0행, 데이터 1행부터. 고정 열 + 물류상태 필터
// ==========================================

use crate::domain::record::{parse_leading_int, LogisticsRecord};
use crate::domain::types::LogisticsLayout;
use crate::importer::date_normalizer::normalize_date;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::RecordExtractor;
use crate::importer::layout_detector::detect_layout;
use crate::importer::sheet::{cell_at, Cell, SheetMatrix, Workbook};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// 기본 물류 시트 이름
pub const DEFAULT_LOGISTICS_SHEET: &str = "Sheet 1";

/// 집계형 한 행이 합성할 수 있는 최대 대수 (상태별)
pub const DEFAULT_MAX_UNITS_PER_ROW: u64 = 10_000;

/// 집계형 상태 라벨
pub const STATUS_VPC_INCOMING: &str = "VPC입고";
pub const STATUS_IN_TRANSIT: &str = "운송중";

// 개별형 고정 열 (0 기반)
pub mod individual_columns {
    pub const MODEL: usize = 4; // E
    pub const COLOR: usize = 7; // H
    pub const TRIM: usize = 8; // I
    pub const YEAR: usize = 12; // M
    pub const DELIVERY_DATE: usize = 15; // P
    pub const STATUS: usize = 18; // S
}

// 집계형 고정 열 (0 기반)
pub mod aggregated_columns {
    pub const CLASS: usize = 0; // A
    pub const YEAR: usize = 1; // B
    pub const MODEL: usize = 2; // C
    pub const VPC_INCOMING: usize = 3; // D
    pub const IN_TRANSIT: usize = 4; // E
}

/// 추출 통계 (진단용)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub sheet_name: String,
    pub layout: Option<LogisticsLayout>,
    /// 헤더 제외 데이터 행 수
    pub data_rows: usize,
    /// 모델명/연식 누락 또는 수량 상한 초과로 제외된 행
    pub skipped_rows: usize,
    /// 물류상태 필터로 제외된 행 (개별형만)
    pub filtered_rows: usize,
    /// 생성된 레코드 수
    pub records: usize,
    /// 물류상태별 행 수 (개별형만)
    pub status_counts: BTreeMap<String, usize>,
}

/// 개별형 물류상태 필터
///
/// 소문자 변환 후 "운송중" 포함, 또는 "vpc" 와 "입고" 를 각각 포함하면 통과
/// ("VPC 입고" 처럼 띄어 쓴 표기도 허용)
pub fn passes_status_filter(status: &str) -> bool {
    let lower = status.to_lowercase();
    lower.contains("운송중") || (lower.contains("vpc") && lower.contains("입고"))
}

/// 헤더 문자열이 도착예정일 열인지 판별
pub fn is_delivery_date_header(header: &str) -> bool {
    let compact: String = header
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '.' | '_' | '-'))
        .collect();

    (compact.contains("plan") && compact.contains("deliv"))
        || compact.contains("도착예정")
        || compact.contains("배송예정")
        || (compact.contains("delivery") && compact.contains("date"))
}

/// 집계형 시트에서 도착예정일 열 찾기 (0행 우선, 다음 1행)
pub fn find_delivery_date_column(sheet: &SheetMatrix) -> Option<usize> {
    (0..2).find_map(|row_idx| {
        sheet.row(row_idx).and_then(|row| {
            row.iter()
                .position(|cell| is_delivery_date_header(&cell.as_text()))
        })
    })
}

fn parse_quantity(cell: &Cell) -> u64 {
    parse_leading_int(&cell.as_text())
        .filter(|n| *n > 0)
        .map(|n| n as u64)
        .unwrap_or(0)
}

// ==========================================
// LogisticsExtractor
// ==========================================
pub struct LogisticsExtractor {
    preferred_sheet: String,
    max_units_per_row: u64,
}

impl Default for LogisticsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LogisticsExtractor {
    pub fn new() -> Self {
        Self {
            preferred_sheet: DEFAULT_LOGISTICS_SHEET.to_string(),
            max_units_per_row: DEFAULT_MAX_UNITS_PER_ROW,
        }
    }

    /// 우선 선택할 시트 이름 지정
    pub fn with_preferred_sheet(sheet_name: impl Into<String>) -> Self {
        Self {
            preferred_sheet: sheet_name.into(),
            ..Self::new()
        }
    }

    /// 집계형 행당 최대 합성 대수 지정
    pub fn max_units_per_row(mut self, limit: u64) -> Self {
        self.max_units_per_row = limit;
        self
    }

    /// 레코드와 추출 통계를 함께 반환
    #[instrument(skip(self, workbook), fields(sheets = workbook.sheet_names().len()))]
    pub fn extract_with_stats(
        &self,
        workbook: &Workbook,
    ) -> ImportResult<(Vec<LogisticsRecord>, ExtractionStats)> {
        let (sheet_name, sheet) = workbook
            .preferred_or_first(&self.preferred_sheet)
            .ok_or_else(|| ImportError::SheetNotFound(self.preferred_sheet.clone()))?;
        debug!(sheet_name = %sheet_name, rows = sheet.len(), "물류 시트 선택");

        let (records, mut stats) = self.extract_sheet(sheet);
        stats.sheet_name = sheet_name.to_string();

        info!(
            layout = ?stats.layout,
            data_rows = stats.data_rows,
            skipped = stats.skipped_rows,
            filtered = stats.filtered_rows,
            records = stats.records,
            "물류 데이터 추출 완료"
        );
        Ok((records, stats))
    }

    /// 시트 하나를 레이아웃 판별 후 추출
    pub fn extract_sheet(&self, sheet: &SheetMatrix) -> (Vec<LogisticsRecord>, ExtractionStats) {
        let layout = detect_layout(sheet);
        debug!(layout = %layout, "물류 파일 레이아웃 판별");

        let (records, mut stats) = match layout {
            LogisticsLayout::Aggregated => self.extract_aggregated(sheet),
            LogisticsLayout::Individual => self.extract_individual(sheet),
        };
        stats.layout = Some(layout);
        stats.records = records.len();
        (records, stats)
    }

    /// 집계형: 행마다 VPC입고 N대 + 운송중 M대 합성
    fn extract_aggregated(&self, sheet: &SheetMatrix) -> (Vec<LogisticsRecord>, ExtractionStats) {
        let mut stats = ExtractionStats::default();
        let mut records = Vec::new();

        let date_column = find_delivery_date_column(sheet);
        debug!(delivery_date_column = ?date_column, "도착예정일 열 탐색");

        for row in sheet.rows().skip(2) {
            if row.is_empty() {
                continue;
            }
            stats.data_rows += 1;

            let model = cell_at(row, aggregated_columns::MODEL).trimmed();
            let year = cell_at(row, aggregated_columns::YEAR).trimmed();
            if model.is_empty() || year.is_empty() {
                stats.skipped_rows += 1;
                continue;
            }

            let delivery_date = date_column
                .map(|col| normalize_date(cell_at(row, col)))
                .unwrap_or_default();
            let vpc_count = parse_quantity(cell_at(row, aggregated_columns::VPC_INCOMING));
            let transit_count = parse_quantity(cell_at(row, aggregated_columns::IN_TRANSIT));
            if vpc_count > self.max_units_per_row || transit_count > self.max_units_per_row {
                warn!(
                    model = %model,
                    vpc_count,
                    transit_count,
                    limit = self.max_units_per_row,
                    "집계형 수량이 행당 상한을 초과하여 제외"
                );
                stats.skipped_rows += 1;
                continue;
            }

            let synthesize = |status: &str| LogisticsRecord {
                model_description: model.clone(),
                exterior_color: String::new(),
                trim: String::new(),
                model_year: year.clone(),
                delivery_date: delivery_date.clone(),
                logistics_status: status.to_string(),
            };

            records.extend(std::iter::repeat_with(|| synthesize(STATUS_VPC_INCOMING)).take(vpc_count as usize));
            records.extend(std::iter::repeat_with(|| synthesize(STATUS_IN_TRANSIT)).take(transit_count as usize));
        }

        (records, stats)
    }

    /// 개별형: 고정 열 + 물류상태 필터
    fn extract_individual(&self, sheet: &SheetMatrix) -> (Vec<LogisticsRecord>, ExtractionStats) {
        use individual_columns as col;

        let mut stats = ExtractionStats::default();
        let mut records = Vec::new();

        for row in sheet.rows().skip(1) {
            if row.is_empty() {
                continue;
            }
            stats.data_rows += 1;

            let model = cell_at(row, col::MODEL).trimmed();
            if model.is_empty() {
                stats.skipped_rows += 1;
                continue;
            }

            let status = cell_at(row, col::STATUS).trimmed();
            let status_key = if status.is_empty() {
                "(빈값)".to_string()
            } else {
                status.clone()
            };
            *stats.status_counts.entry(status_key).or_insert(0) += 1;

            if !passes_status_filter(&status) {
                stats.filtered_rows += 1;
                continue;
            }

            records.push(LogisticsRecord {
                model_description: model,
                exterior_color: cell_at(row, col::COLOR).trimmed(),
                trim: cell_at(row, col::TRIM).trimmed(),
                model_year: cell_at(row, col::YEAR).trimmed(),
                delivery_date: normalize_date(cell_at(row, col::DELIVERY_DATE)),
                logistics_status: status,
            });
        }

        debug!(status_counts = ?stats.status_counts, "물류상태별 행 수");
        (records, stats)
    }
}

impl RecordExtractor for LogisticsExtractor {
    type Record = LogisticsRecord;

    fn extract(&self, workbook: &Workbook) -> ImportResult<Vec<LogisticsRecord>> {
        self.extract_with_stats(workbook).map(|(records, _)| records)
    }
}
