// ==========================================
// 차량 물류/판매 대사 시스템 - 파일 디코더 구현
// ==========================================
// 지원: Excel (.xlsx/.xls/.xlsb/.xlsm/.ods) / CSV (.csv)
// 입력: 업로드된 파일 바이트 (경로 입력은 decode_path)
// 출력: Workbook (시트 이름 + 셀 행렬)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::WorkbookDecoder;
use crate::importer::sheet::{Cell, SheetMatrix, Workbook};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, instrument};

/// calamine 으로 읽는 확장자
pub const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsb", "xlsm", "ods"];

/// CSV 확장자
pub const CSV_EXTENSION: &str = "csv";

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// 파일 이름의 확장자 (소문자, 점 제외)
pub fn file_extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("Sheet1")
        .to_string()
}

// ==========================================
// Excel Decoder 구현
// ==========================================
pub struct ExcelDecoder;

impl ExcelDecoder {
    /// calamine 셀 → Cell
    ///
    /// 날짜 서식 셀은 날짜로 바로 변환한다
    /// 일련번호 규칙(date_normalizer)은 서식 없는 숫자 셀에만 적용
    fn convert_cell(data: &Data) -> Cell {
        match data {
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::String(s) => Cell::from(s.as_str()),
            Data::Int(i) => Cell::from(*i),
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) if dt.is_datetime() => dt
                .as_datetime()
                .map(|d| Cell::Date(d.date()))
                .unwrap_or(Cell::Number(dt.as_f64())),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) => s
                .get(..10)
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
                .map(Cell::Date)
                .unwrap_or_else(|| Cell::from(s.as_str())),
            Data::DurationIso(s) => Cell::from(s.as_str()),
        }
    }

    /// Range → SheetMatrix
    ///
    /// Range 는 첫 번째 비어 있지 않은 셀부터 시작하므로
    /// 시작 위치만큼 빈 행/열을 채워 절대 좌표를 유지한다
    fn convert_range(range: &Range<Data>) -> SheetMatrix {
        let (row_offset, col_offset) = range
            .start()
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or((0, 0));

        let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
        for data_row in range.rows() {
            let mut row = vec![Cell::Empty; col_offset];
            row.extend(data_row.iter().map(Self::convert_cell));
            rows.push(row);
        }
        SheetMatrix::from_rows(rows)
    }
}

impl WorkbookDecoder for ExcelDecoder {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    fn decode(&self, file_name: &str, bytes: &[u8]) -> ImportResult<Workbook> {
        let mut sheets = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| ImportError::ExcelParseError(format!("{}: {}", file_name, e)))?;

        let mut workbook = Workbook::new();
        for name in sheets.sheet_names() {
            let range = sheets.worksheet_range(&name)?;
            let matrix = Self::convert_range(&range);
            debug!(sheet = %name, rows = matrix.len(), "시트 디코딩");
            workbook.push_sheet(name, matrix);
        }

        Ok(workbook)
    }
}

// ==========================================
// CSV Decoder 구현
// ==========================================
// 시트 1개, 이름은 파일 이름(확장자 제외). 헤더도 일반 행으로 보존
pub struct CsvDecoder;

impl WorkbookDecoder for CsvDecoder {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    fn decode(&self, file_name: &str, bytes: &[u8]) -> ImportResult<Workbook> {
        let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 행 길이 불일치 허용
            .from_reader(content);

        let mut rows = Vec::new();
        for result in reader.byte_records() {
            let record = result?;
            let row: Vec<Cell> = record
                .iter()
                .map(|field| Cell::from(String::from_utf8_lossy(field).into_owned()))
                .collect();
            rows.push(row);
        }

        debug!(rows = rows.len(), "CSV 디코딩");
        Ok(Workbook::single(&file_stem(file_name), SheetMatrix::from_rows(rows)))
    }
}

// ==========================================
// 범용 디코더 (확장자로 자동 선택)
// ==========================================
pub struct UniversalDecoder;

impl WorkbookDecoder for UniversalDecoder {
    fn decode(&self, file_name: &str, bytes: &[u8]) -> ImportResult<Workbook> {
        let ext = file_extension(file_name);

        match ext.as_str() {
            CSV_EXTENSION => CsvDecoder.decode(file_name, bytes),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelDecoder.decode(file_name, bytes),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

/// 디스크의 파일을 읽어 디코딩
pub fn decode_path<P: AsRef<Path>>(path: P) -> ImportResult<Workbook> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ImportError::FileNotFound(path.display().to_string()),
        _ => ImportError::from(e),
    })?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    UniversalDecoder.decode(file_name, &bytes)
}
