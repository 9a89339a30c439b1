// ==========================================
// 차량 물류/판매 대사 시스템 - 요약 재계산 / 지표
// ==========================================
// 필터된 목록의 요약 재계산과 내보내기용 비율 지표
// 비율은 정수 백분율 (반올림), 분모가 0 이하이면 0
// ==========================================

use crate::domain::variant::{AnalysisSummary, ModelVariant};
use crate::engine::reconciliation::summarize;
use serde::Serialize;

/// 필터된 변형 목록의 요약 재계산
///
/// 원본 그룹이 없으므로 미매치는 "운송중 > 0 이고 판매 수량 0" 으로 추정
pub fn recalculate_summary(models: &[ModelVariant]) -> AnalysisSummary {
    let mut summary = summarize(models);
    summary.unmatched_models = models.iter().filter(|m| m.looks_unmatched()).count();
    summary
}

/// 정수 백분율 (0.5 는 올림)
pub fn percent(numerator: f64, denominator: f64) -> i64 {
    if denominator <= 0.0 {
        return 0;
    }
    (numerator / denominator * 100.0 + 0.5).floor() as i64
}

/// 전체 요약 지표
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    /// 배정완료 / (배정완료 + 배정대기)
    pub assignment_rate: i64,
    /// (운송중 + 배정완료) / 총 차량 수
    pub availability_rate: i64,
    /// (총 모델 - 미매치) / 총 모델
    pub matching_rate: i64,
}

impl SummaryMetrics {
    pub fn from_summary(summary: &AnalysisSummary) -> Self {
        let assigned = summary.pending_assigned as f64;
        let unassigned = summary.pending_unassigned as f64;
        let in_transit = summary.in_transit as f64;
        let total_models = summary.total_models as f64;

        Self {
            assignment_rate: percent(assigned, assigned + unassigned),
            availability_rate: percent(in_transit + assigned, summary.total_vehicles as f64),
            matching_rate: percent(
                total_models - summary.unmatched_models as f64,
                total_models,
            ),
        }
    }
}

/// 변형 1건의 비율 지표 (상세 시트 열)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRates {
    pub assignment_rate: i64,
    pub availability_rate: i64,
}

impl VariantRates {
    pub fn from_variant(variant: &ModelVariant) -> Self {
        let in_transit = f64::from(variant.in_transit_count);
        let assigned = f64::from(variant.assigned_count);
        let unassigned = f64::from(variant.unassigned_count);

        Self {
            assignment_rate: percent(assigned, assigned + unassigned),
            availability_rate: percent(in_transit + assigned, in_transit + assigned + unassigned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(in_transit: u32, assigned: u32, unassigned: u32) -> ModelVariant {
        ModelVariant {
            model: "G 63".to_string(),
            in_transit_count: in_transit,
            assigned_count: assigned,
            unassigned_count: unassigned,
            total_count: ModelVariant::signed_total(in_transit, assigned, unassigned),
            ..Default::default()
        }
    }

    #[test]
    fn test_recalculate_summary_for_subset() {
        let models = vec![variant(2, 0, 0), variant(1, 1, 0), variant(0, 0, 3)];
        let summary = recalculate_summary(&models);

        assert_eq!(summary.total_models, 3);
        assert_eq!(summary.total_vehicles, 2 + 2 - 3);
        assert_eq!(summary.in_transit, 3);
        assert_eq!(summary.pending_assigned, 1);
        assert_eq!(summary.pending_unassigned, 3);
        assert_eq!(summary.unmatched_models, 1);
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(1.0, 3.0), 33);
        assert_eq!(percent(2.0, 3.0), 67);
        assert_eq!(percent(1.0, 8.0), 13); // 12.5 → 13
        assert_eq!(percent(5.0, 0.0), 0);
        assert_eq!(percent(5.0, -2.0), 0);
    }

    #[test]
    fn test_summary_metrics() {
        let summary = AnalysisSummary {
            total_models: 4,
            total_vehicles: 5,
            in_transit: 3,
            pending_assigned: 3,
            pending_unassigned: 1,
            unmatched_models: 1,
        };
        let metrics = SummaryMetrics::from_summary(&summary);
        assert_eq!(metrics.assignment_rate, 75);
        assert_eq!(metrics.availability_rate, 120);
        assert_eq!(metrics.matching_rate, 75);
    }

    #[test]
    fn test_metrics_zero_denominators() {
        let metrics = SummaryMetrics::from_summary(&AnalysisSummary::default());
        assert_eq!(metrics, SummaryMetrics::default());

        let negative = AnalysisSummary {
            total_vehicles: -2,
            pending_unassigned: 2,
            ..Default::default()
        };
        assert_eq!(SummaryMetrics::from_summary(&negative).availability_rate, 0);
    }

    #[test]
    fn test_variant_rates() {
        let rates = VariantRates::from_variant(&variant(2, 1, 1));
        assert_eq!(rates.assignment_rate, 50);
        assert_eq!(rates.availability_rate, 75);
        assert_eq!(VariantRates::from_variant(&variant(0, 0, 0)), VariantRates::default());
    }
}
