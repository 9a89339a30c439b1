// ==========================================
// 파일 픽스처 - rust_xlsxwriter 로 실제 xlsx 생성
// ==========================================

use logistics_analyzer::importer::Cell;
use chrono::Datelike;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

/// 시트 목록을 xlsx 바이트로 기록
pub fn xlsx_bytes(sheets: &[(&str, Vec<Vec<Cell>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match cell {
                    Cell::Empty => {}
                    Cell::Text(s) => {
                        sheet.write_string(r, c, s.as_str()).unwrap();
                    }
                    Cell::Number(n) => {
                        sheet.write_number(r, c, *n).unwrap();
                    }
                    Cell::Bool(b) => {
                        sheet.write_boolean(r, c, *b).unwrap();
                    }
                    Cell::Date(d) => {
                        let date = ExcelDateTime::from_ymd(d.year() as u16, d.month() as u8, d.day() as u8).unwrap();
                        sheet.write_datetime_with_format(r, c, &date, &date_format).unwrap();
                    }
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// 지정 열에만 값이 있는 행
pub fn sparse_row(width: usize, cells: &[(usize, Cell)]) -> Vec<Cell> {
    let mut row = vec![Cell::Empty; width];
    for (idx, cell) in cells {
        row[*idx] = cell.clone();
    }
    row
}

/// 개별형 물류 행 (E 모델, H 색상, I 트림, M 연식, P 도착예정일, S 물류상태)
pub fn individual_logistics_row(model: &str, color: &str, trim: &str, year: f64, date: Cell, status: &str) -> Vec<Cell> {
    sparse_row(
        19,
        &[
            (4, Cell::from(model)),
            (7, Cell::from(color)),
            (8, Cell::from(trim)),
            (12, Cell::Number(year)),
            (15, date),
            (18, Cell::from(status)),
        ],
    )
}

/// 판매 헤더 행 (L, S, T, Y, Z, AA 열 제목 포함)
pub fn sales_header_row() -> Vec<Cell> {
    sparse_row(
        27,
        &[
            (11, Cell::from("Salesman")),
            (18, Cell::from("Commission No")),
            (19, Cell::from("Model")),
            (24, Cell::from("Colour")),
            (25, Cell::from("Upholstery")),
            (26, Cell::from("Model Year")),
        ],
    )
}

/// 판매 행 (L 영업사원, S 커미션 번호, T 모델, Y 색상, Z 트림, AA 연식)
pub fn sales_row(model: &str, color: &str, trim: &str, year: f64, commission: &str, salesperson: &str) -> Vec<Cell> {
    sparse_row(
        27,
        &[
            (11, Cell::from(salesperson)),
            (18, Cell::from(commission)),
            (19, Cell::from(model)),
            (24, Cell::from(color)),
            (25, Cell::from(trim)),
            (26, Cell::Number(year)),
        ],
    )
}
