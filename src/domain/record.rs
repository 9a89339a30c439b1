// ==========================================
// 차량 물류/판매 대사 시스템 - 입력 레코드
// ==========================================
// 물류 파일 1행(또는 집계 수량 1대) = LogisticsRecord
// 판매 파일 1행 = SalesRecord
// 두 레코드 모두 분석 요청 1회 동안만 존재 (영속화 없음)
// ==========================================

use crate::domain::types::{AssignmentStatus, LogisticsStatusCategory};
use serde::{Deserialize, Serialize};

// ==========================================
// VehicleDescriptor - 대사 키를 구성하는 공통 필드
// ==========================================
pub trait VehicleDescriptor {
    fn model_description(&self) -> &str;
    fn exterior_color(&self) -> &str;
    fn trim(&self) -> &str;
    fn model_year(&self) -> &str;
}

/// 문자열 앞부분의 정수만 읽는다 ("2024.0" → 2024, "3대" → 3, "abc" → None)
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

// ==========================================
// LogisticsRecord - 입고/운송중 차량 1대
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogisticsRecord {
    pub model_description: String,
    pub exterior_color: String,
    pub trim: String,
    pub model_year: String,
    /// YYYY-MM-DD 또는 빈 문자열 (Plan.Deliv.Date)
    pub delivery_date: String,
    pub logistics_status: String,
}

impl LogisticsRecord {
    pub fn status_category(&self) -> LogisticsStatusCategory {
        LogisticsStatusCategory::categorize(&self.logistics_status)
    }

    pub fn is_in_transit(&self) -> bool {
        self.status_category() == LogisticsStatusCategory::InTransit
    }
}

impl VehicleDescriptor for LogisticsRecord {
    fn model_description(&self) -> &str {
        &self.model_description
    }

    fn exterior_color(&self) -> &str {
        &self.exterior_color
    }

    fn trim(&self) -> &str {
        &self.trim
    }

    fn model_year(&self) -> &str {
        &self.model_year
    }
}

// ==========================================
// SalesRecord - 판매 오더 1건
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalesRecord {
    pub model_description: String,
    pub exterior_color: String,
    pub trim: String,
    pub model_year: String,
    /// 비어 있지 않으면 배정 완료
    pub commission_number: String,
    pub salesperson: String,
}

impl SalesRecord {
    pub fn assignment_status(&self) -> AssignmentStatus {
        AssignmentStatus::from_commission_number(&self.commission_number)
    }

    pub fn is_assigned(&self) -> bool {
        self.assignment_status() == AssignmentStatus::Assigned
    }
}

impl VehicleDescriptor for SalesRecord {
    fn model_description(&self) -> &str {
        &self.model_description
    }

    fn exterior_color(&self) -> &str {
        &self.exterior_color
    }

    fn trim(&self) -> &str {
        &self.trim
    }

    fn model_year(&self) -> &str {
        &self.model_year
    }
}

// ==========================================
// SampleRecord - 변형(variant) 표시 정보의 출처
// ==========================================
// 우선순위: 물류 레코드 > 판매 레코드
#[derive(Debug, Clone, Copy)]
pub enum SampleRecord<'a> {
    Logistics(&'a LogisticsRecord),
    Sales(&'a SalesRecord),
}

impl<'a> SampleRecord<'a> {
    /// 그룹의 첫 레코드를 선택 (물류 우선)
    pub fn select(
        first_logistics: Option<&'a LogisticsRecord>,
        first_sales: Option<&'a SalesRecord>,
    ) -> Option<Self> {
        first_logistics
            .map(SampleRecord::Logistics)
            .or_else(|| first_sales.map(SampleRecord::Sales))
    }

    fn descriptor(&self) -> &dyn VehicleDescriptor {
        match self {
            SampleRecord::Logistics(r) => *r,
            SampleRecord::Sales(r) => *r,
        }
    }
}

impl VehicleDescriptor for SampleRecord<'_> {
    fn model_description(&self) -> &str {
        self.descriptor().model_description()
    }

    fn exterior_color(&self) -> &str {
        self.descriptor().exterior_color()
    }

    fn trim(&self) -> &str {
        self.descriptor().trim()
    }

    fn model_year(&self) -> &str {
        self.descriptor().model_year()
    }
}
