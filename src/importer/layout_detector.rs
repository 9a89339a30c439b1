// ==========================================
// 차량 물류/판매 대사 시스템 - 물류 파일 레이아웃 판별
// ==========================================
// 3번째 행(인덱스 2)의 내용으로 집계형/개별형 판별
// 집계형 열 구성: A 클래스 | B 연식 | C 모델명 | D VPC입고 | E 운송중
// ==========================================

use crate::domain::types::LogisticsLayout;
use crate::importer::sheet::{cell_at, SheetMatrix};

/// 집계형 판별에 쓰는 브랜드/클래스 토큰
pub const BRAND_CLASS_TOKENS: &[&str] = &["amg", "mercedes", "maybach"];

/// 판별 기준 행 인덱스
pub const SAMPLE_ROW_INDEX: usize = 2;

/// 물류 시트 레이아웃 판별 (순수 함수)
pub fn detect_layout(sheet: &SheetMatrix) -> LogisticsLayout {
    if sheet.len() <= SAMPLE_ROW_INDEX {
        return LogisticsLayout::Individual;
    }

    let row = match sheet.row(SAMPLE_ROW_INDEX) {
        Some(row) => row,
        None => return LogisticsLayout::Individual,
    };

    let class_field = cell_at(row, 0).as_text().to_lowercase();
    let has_brand = BRAND_CLASS_TOKENS
        .iter()
        .any(|token| class_field.contains(token));
    let year_numeric = cell_at(row, 1).is_numeric();
    let has_model = !cell_at(row, 2).is_blank();
    let has_quantity = cell_at(row, 3).is_numeric() || cell_at(row, 4).is_numeric();

    if has_brand && year_numeric && has_model && has_quantity {
        LogisticsLayout::Aggregated
    } else {
        LogisticsLayout::Individual
    }
}
