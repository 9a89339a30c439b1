// ==========================================
// 차량 물류/판매 대사 시스템 - 시트 행렬
// ==========================================
// 디코더가 만든 2차원 셀 배열. 추출기는 이 구조만 본다.
// ==========================================

use chrono::NaiveDate;

// ==========================================
// Cell - 디코딩된 셀 값
// ==========================================
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

static EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    /// 문자열 표현 (숫자는 정수면 소수점 없이)
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format_number(*n),
            Cell::Bool(b) => b.to_string(),
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// 앞뒤 공백 제거한 문자열
    pub fn trimmed(&self) -> String {
        match self {
            Cell::Text(s) => s.trim().to_string(),
            other => other.as_text(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 유한한 숫자로 해석 가능한 경우 값 반환 (빈 값은 숫자가 아님)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value)
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Number(f64::from(value))
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Cell::Date(value)
    }
}

// ==========================================
// SheetMatrix - 시트 하나의 행 목록
// ==========================================
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetMatrix {
    rows: Vec<Vec<Cell>>,
}

impl SheetMatrix {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// 범위 밖 셀은 Empty
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    pub fn text(&self, row: usize, col: usize) -> String {
        self.cell(row, col).trimmed()
    }
}

/// 행 슬라이스에서 셀 조회 (범위 밖은 Empty)
pub fn cell_at(row: &[Cell], col: usize) -> &Cell {
    row.get(col).unwrap_or(&EMPTY_CELL)
}

// ==========================================
// Workbook - 이름 있는 시트 목록 (순서 유지)
// ==========================================
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    sheets: Vec<(String, SheetMatrix)>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sheets(sheets: Vec<(String, SheetMatrix)>) -> Self {
        Self { sheets }
    }

    /// 시트 하나짜리 통합 문서
    pub fn single(name: &str, sheet: SheetMatrix) -> Self {
        Self {
            sheets: vec![(name.to_string(), sheet)],
        }
    }

    pub fn push_sheet(&mut self, name: impl Into<String>, sheet: SheetMatrix) {
        self.sheets.push((name.into(), sheet));
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetMatrix> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, sheet)| sheet)
    }

    pub fn first_sheet(&self) -> Option<(&str, &SheetMatrix)> {
        self.sheets
            .first()
            .map(|(name, sheet)| (name.as_str(), sheet))
    }

    /// 이름이 일치하는 시트를 우선 선택하고, 없으면 첫 번째 시트
    pub fn preferred_or_first(&self, preferred: &str) -> Option<(&str, &SheetMatrix)> {
        self.sheets
            .iter()
            .find(|(n, _)| n == preferred)
            .map(|(name, sheet)| (name.as_str(), sheet))
            .or_else(|| self.first_sheet())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_text_has_no_trailing_zero() {
        assert_eq!(Cell::Number(2024.0).as_text(), "2024");
        assert_eq!(Cell::Number(2.5).as_text(), "2.5");
    }

    #[test]
    fn test_numeric_detection() {
        assert!(Cell::Text(" 12 ".to_string()).is_numeric());
        assert!(Cell::Number(0.0).is_numeric());
        assert!(!Cell::Empty.is_numeric());
        assert!(!Cell::Text("".to_string()).is_numeric());
        assert!(!Cell::Text("abc".to_string()).is_numeric());
        assert!(!Cell::Text("NaN".to_string()).is_numeric());
    }

    #[test]
    fn test_out_of_range_cell_is_empty() {
        let sheet = SheetMatrix::from_rows(vec![vec![Cell::from("a")]]);
        assert_eq!(sheet.cell(0, 0), &Cell::Text("a".to_string()));
        assert_eq!(sheet.cell(0, 5), &Cell::Empty);
        assert_eq!(sheet.cell(9, 0), &Cell::Empty);
    }

    #[test]
    fn test_preferred_sheet_selection() {
        let mut wb = Workbook::new();
        wb.push_sheet("요약", SheetMatrix::default());
        wb.push_sheet("Sheet 1", SheetMatrix::from_rows(vec![vec![Cell::from("x")]]));

        let (name, _) = wb.preferred_or_first("Sheet 1").unwrap();
        assert_eq!(name, "Sheet 1");

        let (name, _) = wb.preferred_or_first("Sheet 9").unwrap();
        assert_eq!(name, "요약");

        assert!(Workbook::new().preferred_or_first("Sheet 1").is_none());
    }
}
