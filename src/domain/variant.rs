// ==========================================
// 차량 물류/판매 대사 시스템 - 분석 결과 모델
// ==========================================
// JSON 필드명은 기존 대시보드 소비자와 호환되도록 고정
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ModelVariant - 정규화 키 1개당 1건
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelVariant {
    pub model: String,
    pub color: String,
    pub trim: String,
    pub year: i32,

    /// 운송중 도착예정일 목록(", " 구분) 또는 가장 빠른 도착예정일
    pub delivery_date: String,

    #[serde(rename = "in_transit")]
    pub in_transit_count: u32,

    #[serde(rename = "pending_assigned")]
    pub assigned_count: u32,

    #[serde(rename = "pending_unassigned")]
    pub unassigned_count: u32,

    /// 운송중 + 배정완료 - 배정대기 (음수 허용)
    pub total_count: i64,

    /// 배정대기 오더의 담당 영업사원 (중복 제거)
    #[serde(rename = "salesmen")]
    pub salespeople: Vec<String>,
}

impl ModelVariant {
    /// 부호 있는 총 수량 계산
    pub fn signed_total(in_transit: u32, assigned: u32, unassigned: u32) -> i64 {
        i64::from(in_transit) + i64::from(assigned) - i64::from(unassigned)
    }

    /// 판매 데이터 없이 물류만 존재하는 것으로 보이는지 (필터된 목록용)
    pub fn looks_unmatched(&self) -> bool {
        self.in_transit_count > 0 && self.assigned_count == 0 && self.unassigned_count == 0
    }
}

// ==========================================
// AnalysisSummary - 전체 집계
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_models: usize,
    pub total_vehicles: i64,
    pub in_transit: u64,
    pub pending_assigned: u64,
    pub pending_unassigned: u64,
    pub unmatched_models: usize,
}

// ==========================================
// AnalysisResult - 엔진 출력
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub models: Vec<ModelVariant>,
    pub summary: AnalysisSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_total_negative() {
        assert_eq!(ModelVariant::signed_total(0, 0, 3), -3);
        assert_eq!(ModelVariant::signed_total(2, 1, 1), 2);
    }

    #[test]
    fn test_variant_json_field_names() {
        let variant = ModelVariant {
            model: "G 63".to_string(),
            year: 2024,
            in_transit_count: 2,
            unassigned_count: 1,
            total_count: 1,
            salespeople: vec!["Kim".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&variant).unwrap();
        assert_eq!(json["in_transit"], 2);
        assert_eq!(json["pending_assigned"], 0);
        assert_eq!(json["pending_unassigned"], 1);
        assert_eq!(json["total_count"], 1);
        assert_eq!(json["salesmen"][0], "Kim");
        assert!(json.get("in_transit_count").is_none());
    }

    #[test]
    fn test_summary_json_field_names() {
        let summary = AnalysisSummary {
            total_models: 3,
            total_vehicles: -1,
            in_transit: 4,
            pending_assigned: 1,
            pending_unassigned: 6,
            unmatched_models: 1,
        };
        let json = serde_json::to_value(summary).unwrap();
        for key in [
            "totalModels",
            "totalVehicles",
            "inTransit",
            "pendingAssigned",
            "pendingUnassigned",
            "unmatchedModels",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["totalVehicles"], -1);
    }
}
