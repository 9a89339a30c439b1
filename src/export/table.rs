// ==========================================
// 차량 물류/판매 대사 시스템 - 내보내기 표
// ==========================================
// ModelVariant 목록 → 헤더 + 행 (CSV/Excel 공용)
// 빈 도착예정일은 "미정", 영업사원 없음은 "없음" (로캘별)
// ==========================================

use crate::domain::variant::ModelVariant;
use crate::engine::summary::VariantRates;
use crate::i18n::t_locale;

/// 셀 값
#[derive(Debug, Clone, PartialEq)]
pub enum ExportValue {
    Text(String),
    Number(f64),
}

impl ExportValue {
    pub fn as_text(&self) -> String {
        match self {
            ExportValue::Text(s) => s.clone(),
            ExportValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for ExportValue {
    fn from(value: &str) -> Self {
        ExportValue::Text(value.to_string())
    }
}

impl From<String> for ExportValue {
    fn from(value: String) -> Self {
        ExportValue::Text(value)
    }
}

impl From<i64> for ExportValue {
    fn from(value: i64) -> Self {
        ExportValue::Number(value as f64)
    }
}

impl From<u32> for ExportValue {
    fn from(value: u32) -> Self {
        ExportValue::Number(f64::from(value))
    }
}

impl From<i32> for ExportValue {
    fn from(value: i32) -> Self {
        ExportValue::Number(f64::from(value))
    }
}

// ==========================================
// 열 정의
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportColumn {
    Model,
    Color,
    ShortColor,
    Trim,
    ShortTrim,
    Year,
    DeliveryDate,
    InTransit,
    PendingAssigned,
    PendingUnassigned,
    TotalCount,
    Salespeople,
    AssignmentRate,
    AvailabilityRate,
    InTransitQty,
    UnassignedQty,
    NoSalesStatus,
}

/// 기본 10열 (CSV, 필터 내보내기)
pub const STANDARD_COLUMNS: &[ExportColumn] = &[
    ExportColumn::Model,
    ExportColumn::Color,
    ExportColumn::Trim,
    ExportColumn::Year,
    ExportColumn::DeliveryDate,
    ExportColumn::InTransit,
    ExportColumn::PendingAssigned,
    ExportColumn::PendingUnassigned,
    ExportColumn::TotalCount,
    ExportColumn::Salespeople,
];

/// 상세 시트 (기본 + 비율)
pub const DETAIL_COLUMNS: &[ExportColumn] = &[
    ExportColumn::Model,
    ExportColumn::Color,
    ExportColumn::Trim,
    ExportColumn::Year,
    ExportColumn::DeliveryDate,
    ExportColumn::InTransit,
    ExportColumn::PendingAssigned,
    ExportColumn::PendingUnassigned,
    ExportColumn::TotalCount,
    ExportColumn::Salespeople,
    ExportColumn::AssignmentRate,
    ExportColumn::AvailabilityRate,
];

pub const IN_TRANSIT_COLUMNS: &[ExportColumn] = &[
    ExportColumn::Model,
    ExportColumn::ShortColor,
    ExportColumn::ShortTrim,
    ExportColumn::Year,
    ExportColumn::DeliveryDate,
    ExportColumn::InTransitQty,
];

pub const UNASSIGNED_COLUMNS: &[ExportColumn] = &[
    ExportColumn::Model,
    ExportColumn::ShortColor,
    ExportColumn::ShortTrim,
    ExportColumn::Year,
    ExportColumn::UnassignedQty,
    ExportColumn::Salespeople,
];

pub const UNMATCHED_COLUMNS: &[ExportColumn] = &[
    ExportColumn::Model,
    ExportColumn::ShortColor,
    ExportColumn::ShortTrim,
    ExportColumn::Year,
    ExportColumn::DeliveryDate,
    ExportColumn::InTransitQty,
    ExportColumn::NoSalesStatus,
];

impl ExportColumn {
    fn header_key(self) -> &'static str {
        match self {
            ExportColumn::Model => "export.header.model",
            ExportColumn::Color => "export.header.color",
            ExportColumn::ShortColor => "export.header.short_color",
            ExportColumn::Trim => "export.header.trim",
            ExportColumn::ShortTrim => "export.header.short_trim",
            ExportColumn::Year => "export.header.year",
            ExportColumn::DeliveryDate => "export.header.delivery_date",
            ExportColumn::InTransit => "export.header.in_transit",
            ExportColumn::PendingAssigned => "export.header.pending_assigned",
            ExportColumn::PendingUnassigned => "export.header.pending_unassigned",
            ExportColumn::TotalCount => "export.header.total_count",
            ExportColumn::Salespeople => "export.header.salespeople",
            ExportColumn::AssignmentRate => "export.header.assignment_rate",
            ExportColumn::AvailabilityRate => "export.header.availability_rate",
            ExportColumn::InTransitQty => "export.header.in_transit_qty",
            ExportColumn::UnassignedQty => "export.header.unassigned_qty",
            ExportColumn::NoSalesStatus => "export.header.status",
        }
    }

    /// Excel 열 너비 (문자 수)
    pub fn width(self) -> f64 {
        match self {
            ExportColumn::Model => 25.0,
            ExportColumn::Color
            | ExportColumn::ShortColor
            | ExportColumn::Trim
            | ExportColumn::ShortTrim
            | ExportColumn::NoSalesStatus => 15.0,
            ExportColumn::DeliveryDate
            | ExportColumn::AssignmentRate
            | ExportColumn::AvailabilityRate
            | ExportColumn::InTransitQty
            | ExportColumn::UnassignedQty => 12.0,
            ExportColumn::Salespeople => 20.0,
            ExportColumn::Year
            | ExportColumn::InTransit
            | ExportColumn::PendingAssigned
            | ExportColumn::PendingUnassigned
            | ExportColumn::TotalCount => 10.0,
        }
    }

    pub fn header(self, locale: &str) -> String {
        t_locale(self.header_key(), locale)
    }

    pub fn value(self, variant: &ModelVariant, locale: &str) -> ExportValue {
        match self {
            ExportColumn::Model => variant.model.as_str().into(),
            ExportColumn::Color | ExportColumn::ShortColor => variant.color.as_str().into(),
            ExportColumn::Trim | ExportColumn::ShortTrim => variant.trim.as_str().into(),
            ExportColumn::Year => variant.year.into(),
            ExportColumn::DeliveryDate => delivery_date_label(variant, locale).into(),
            ExportColumn::InTransit | ExportColumn::InTransitQty => variant.in_transit_count.into(),
            ExportColumn::PendingAssigned => variant.assigned_count.into(),
            ExportColumn::PendingUnassigned | ExportColumn::UnassignedQty => {
                variant.unassigned_count.into()
            }
            ExportColumn::TotalCount => variant.total_count.into(),
            ExportColumn::Salespeople => salespeople_label(variant, locale).into(),
            ExportColumn::AssignmentRate => VariantRates::from_variant(variant).assignment_rate.into(),
            ExportColumn::AvailabilityRate => {
                VariantRates::from_variant(variant).availability_rate.into()
            }
            ExportColumn::NoSalesStatus => t_locale("export.no_sales_data", locale).into(),
        }
    }
}

/// 도착예정일 표시값
pub fn delivery_date_label(variant: &ModelVariant, locale: &str) -> String {
    if variant.delivery_date.is_empty() {
        t_locale("export.tbd", locale)
    } else {
        variant.delivery_date.clone()
    }
}

/// 영업사원 표시값 (", " 구분)
pub fn salespeople_label(variant: &ModelVariant, locale: &str) -> String {
    if variant.salespeople.is_empty() {
        t_locale("export.none", locale)
    } else {
        variant.salespeople.join(", ")
    }
}

// ==========================================
// ExportTable
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub columns: Vec<ExportColumn>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<ExportValue>>,
}

impl ExportTable {
    /// 지정한 열 구성으로 표 생성
    pub fn build(models: &[ModelVariant], columns: &[ExportColumn], locale: &str) -> Self {
        Self {
            columns: columns.to_vec(),
            headers: columns.iter().map(|c| c.header(locale)).collect(),
            rows: models
                .iter()
                .map(|m| columns.iter().map(|c| c.value(m, locale)).collect())
                .collect(),
        }
    }

    /// 기본 10열 표
    pub fn from_models(models: &[ModelVariant], locale: &str) -> Self {
        Self::build(models, STANDARD_COLUMNS, locale)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g63() -> ModelVariant {
        ModelVariant {
            model: "G 63".to_string(),
            color: "Black".to_string(),
            trim: "AMG Line".to_string(),
            year: 2024,
            delivery_date: "2024-06-01".to_string(),
            in_transit_count: 2,
            unassigned_count: 1,
            total_count: 1,
            salespeople: vec!["Kim".to_string(), "Lee".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_standard_table() {
        let table = ExportTable::from_models(&[g63()], "ko");

        assert_eq!(table.headers.len(), 10);
        assert_eq!(table.headers[0], "모델명");
        assert_eq!(table.headers[9], "담당영업사원");

        let row = &table.rows[0];
        assert_eq!(row[0], ExportValue::Text("G 63".to_string()));
        assert_eq!(row[3], ExportValue::Number(2024.0));
        assert_eq!(row[4], ExportValue::Text("2024-06-01".to_string()));
        assert_eq!(row[8], ExportValue::Number(1.0));
        assert_eq!(row[9], ExportValue::Text("Kim, Lee".to_string()));
    }

    #[test]
    fn test_placeholders_by_locale() {
        let mut variant = g63();
        variant.delivery_date.clear();
        variant.salespeople.clear();

        assert_eq!(delivery_date_label(&variant, "ko"), "미정");
        assert_eq!(salespeople_label(&variant, "ko"), "없음");
        assert_eq!(delivery_date_label(&variant, "en"), "TBD");
        assert_eq!(salespeople_label(&variant, "en"), "None");
    }

    #[test]
    fn test_detail_columns_include_rates() {
        let table = ExportTable::build(&[g63()], DETAIL_COLUMNS, "en");
        assert_eq!(table.headers.len(), 12);
        // 배정률: 0/(0+1), 가용률: 2/3
        assert_eq!(table.rows[0][10], ExportValue::Number(0.0));
        assert_eq!(table.rows[0][11], ExportValue::Number(67.0));
    }

    #[test]
    fn test_empty_models() {
        let table = ExportTable::from_models(&[], "ko");
        assert!(table.is_empty());
        assert_eq!(table.headers.len(), 10);
    }
}
