// ==========================================
// 차량 물류/판매 대사 시스템 - 도메인 타입 정의
// ==========================================
// 물류 파일 레이아웃, 상태 분류, 필터/정렬 옵션
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 물류 파일 레이아웃 (Logistics Layout)
// ==========================================
// 3번째 행 내용으로 판별
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogisticsLayout {
    Aggregated, // 집계형: 행 하나가 (클래스, 연식, 모델, 수량) 묶음
    Individual, // 개별형: 행 하나가 차량 한 대
}

impl fmt::Display for LogisticsLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogisticsLayout::Aggregated => write!(f, "aggregated"),
            LogisticsLayout::Individual => write!(f, "individual"),
        }
    }
}

// ==========================================
// 물류 상태 분류 (Logistics Status Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogisticsStatusCategory {
    InTransit, // 운송중 / VPC입고
    Unknown,
}

impl LogisticsStatusCategory {
    /// 물류 상태 텍스트 분류
    ///
    /// 소문자 변환 후 "운송중", "vpc입고", "transit" 중 하나를 포함하면 InTransit
    pub fn categorize(status: &str) -> Self {
        let lower = status.to_lowercase();
        if lower.contains("운송중") || lower.contains("vpc입고") || lower.contains("transit") {
            LogisticsStatusCategory::InTransit
        } else {
            LogisticsStatusCategory::Unknown
        }
    }
}

impl fmt::Display for LogisticsStatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogisticsStatusCategory::InTransit => write!(f, "in_transit"),
            LogisticsStatusCategory::Unknown => write!(f, "unknown"),
        }
    }
}

// ==========================================
// 배정 상태 (Assignment Status)
// ==========================================
// 커미션 번호가 비어 있지 않으면 배정 완료
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Assigned,
    Unassigned,
}

impl AssignmentStatus {
    pub fn from_commission_number(commission_number: &str) -> Self {
        if commission_number.trim().is_empty() {
            AssignmentStatus::Unassigned
        } else {
            AssignmentStatus::Assigned
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentStatus::Assigned => write!(f, "assigned"),
            AssignmentStatus::Unassigned => write!(f, "unassigned"),
        }
    }
}

// ==========================================
// 상태 필터 (Status Filter)
// ==========================================
// 직렬화 형식: snake_case (프런트엔드 필터 값과 동일)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    InTransit,
    PendingAssigned,
    PendingUnassigned,
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::InTransit => write!(f, "in_transit"),
            StatusFilter::PendingAssigned => write!(f, "pending_assigned"),
            StatusFilter::PendingUnassigned => write!(f, "pending_unassigned"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(StatusFilter::All),
            "in_transit" => Ok(StatusFilter::InTransit),
            "pending_assigned" => Ok(StatusFilter::PendingAssigned),
            "pending_unassigned" => Ok(StatusFilter::PendingUnassigned),
            other => Err(format!("알 수 없는 상태 필터: {}", other)),
        }
    }
}

// ==========================================
// 정렬 기준 / 정렬 방향
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Model,
    TotalCount,
    DeliveryDate,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Model => write!(f, "model"),
            SortBy::TotalCount => write!(f, "total_count"),
            SortBy::DeliveryDate => write!(f, "delivery_date"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_status() {
        assert_eq!(
            LogisticsStatusCategory::categorize("운송중"),
            LogisticsStatusCategory::InTransit
        );
        assert_eq!(
            LogisticsStatusCategory::categorize("VPC입고"),
            LogisticsStatusCategory::InTransit
        );
        assert_eq!(
            LogisticsStatusCategory::categorize("In Transit"),
            LogisticsStatusCategory::InTransit
        );
        assert_eq!(
            LogisticsStatusCategory::categorize("해외발송대기"),
            LogisticsStatusCategory::Unknown
        );
    }

    #[test]
    fn test_assignment_status() {
        assert_eq!(
            AssignmentStatus::from_commission_number("C12345"),
            AssignmentStatus::Assigned
        );
        assert_eq!(
            AssignmentStatus::from_commission_number("   "),
            AssignmentStatus::Unassigned
        );
    }

    #[test]
    fn test_status_filter_from_str() {
        assert_eq!("in_transit".parse::<StatusFilter>(), Ok(StatusFilter::InTransit));
        assert_eq!("ALL".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert!("shipped".parse::<StatusFilter>().is_err());
    }
}
