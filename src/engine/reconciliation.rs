// ==========================================
// 차량 물류/판매 대사 시스템 - 대사 엔진
// ==========================================
// 입력: 물류 레코드 + 판매 레코드
// 출력: AnalysisResult { models, summary }
// ==========================================
// 1. 두 입력을 정규화 키로 그룹화 (물류 최초 등장 순, 이어서 판매 전용 키)
// 2. 키 합집합마다 ModelVariant 1건 생성
// 3. 모델명 한국어 정렬 후 요약 집계
// 행 단위 결함으로 실패하지 않는다 (시트 누락은 추출기에서 처리)
// ==========================================

use crate::domain::record::{
    parse_leading_int, LogisticsRecord, SalesRecord, SampleRecord, VehicleDescriptor,
};
use crate::domain::variant::{AnalysisResult, AnalysisSummary, ModelVariant};
use crate::engine::collation::collate;
use crate::engine::key_normalizer::key_for;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info, instrument};

/// 여러 운송중 도착예정일 구분자
pub const DELIVERY_DATE_SEPARATOR: &str = ", ";

// ==========================================
// 키별 레코드 그룹
// ==========================================
#[derive(Default)]
struct KeyGroup<'a> {
    logistics: Vec<&'a LogisticsRecord>,
    sales: Vec<&'a SalesRecord>,
}

/// 최초 등장 순서를 유지하는 키 → 그룹 맵
#[derive(Default)]
struct GroupedRecords<'a> {
    order: Vec<String>,
    groups: HashMap<String, KeyGroup<'a>>,
}

impl<'a> GroupedRecords<'a> {
    fn entry(&mut self, key: String) -> &mut KeyGroup<'a> {
        if !self.groups.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.groups.entry(key).or_default()
    }

    fn build(logistics: &'a [LogisticsRecord], sales: &'a [SalesRecord]) -> Self {
        let mut grouped = Self::default();
        for record in logistics {
            grouped.entry(key_for(record)).logistics.push(record);
        }
        for record in sales {
            grouped.entry(key_for(record)).sales.push(record);
        }
        grouped
    }

    fn into_groups(mut self) -> impl Iterator<Item = (String, KeyGroup<'a>)> {
        let order = std::mem::take(&mut self.order);
        order.into_iter().filter_map(move |key| {
            let group = self.groups.remove(&key)?;
            Some((key, group))
        })
    }
}

// ==========================================
// ReconciliationEngine
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct ReconciliationEngine;

impl ReconciliationEngine {
    pub fn new() -> Self {
        Self
    }

    /// 물류/판매 레코드 대사
    #[instrument(skip_all, fields(logistics = logistics.len(), sales = sales.len()))]
    pub fn reconcile(&self, logistics: &[LogisticsRecord], sales: &[SalesRecord]) -> AnalysisResult {
        let grouped = GroupedRecords::build(logistics, sales);
        debug!(keys = grouped.order.len(), "키 그룹화 완료");

        let mut unmatched_models = 0usize;
        let mut models = Vec::with_capacity(grouped.order.len());

        for (key, group) in grouped.into_groups() {
            if !group.logistics.is_empty() && group.sales.is_empty() {
                unmatched_models += 1;
            }
            match build_variant(&group) {
                Some(variant) => models.push(variant),
                None => debug!(key = %key, "빈 그룹 건너뜀"),
            }
        }

        models.sort_by(|a, b| collate(&a.model, &b.model));

        let mut summary = summarize(&models);
        summary.unmatched_models = unmatched_models;

        info!(
            total_models = summary.total_models,
            total_vehicles = summary.total_vehicles,
            in_transit = summary.in_transit,
            pending_assigned = summary.pending_assigned,
            pending_unassigned = summary.pending_unassigned,
            unmatched_models = summary.unmatched_models,
            "대사 분석 완료"
        );

        AnalysisResult { models, summary }
    }
}

/// 변형 목록의 수량 합계 (unmatched_models 제외)
pub(crate) fn summarize(models: &[ModelVariant]) -> AnalysisSummary {
    models.iter().fold(
        AnalysisSummary {
            total_models: models.len(),
            ..Default::default()
        },
        |mut acc, m| {
            acc.total_vehicles += m.total_count;
            acc.in_transit += u64::from(m.in_transit_count);
            acc.pending_assigned += u64::from(m.assigned_count);
            acc.pending_unassigned += u64::from(m.unassigned_count);
            acc
        },
    )
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn build_variant(group: &KeyGroup<'_>) -> Option<ModelVariant> {
    let sample = SampleRecord::select(
        group.logistics.first().copied(),
        group.sales.first().copied(),
    )?;

    let in_transit: Vec<&LogisticsRecord> = group
        .logistics
        .iter()
        .copied()
        .filter(|r| r.is_in_transit())
        .collect();
    let (assigned, unassigned): (Vec<&SalesRecord>, Vec<&SalesRecord>) =
        group.sales.iter().copied().partition(|r| r.is_assigned());

    let in_transit_count = count_u32(in_transit.len());
    let assigned_count = count_u32(assigned.len());
    let unassigned_count = count_u32(unassigned.len());

    Some(ModelVariant {
        model: sample.model_description().to_string(),
        color: sample.exterior_color().to_string(),
        trim: sample.trim().to_string(),
        year: parse_leading_int(sample.model_year())
            .and_then(|y| i32::try_from(y).ok())
            .unwrap_or(0),
        delivery_date: resolve_delivery_date(&in_transit, &group.logistics),
        in_transit_count,
        assigned_count,
        unassigned_count,
        total_count: ModelVariant::signed_total(in_transit_count, assigned_count, unassigned_count),
        salespeople: collect_salespeople(&unassigned),
    })
}

fn has_date(record: &LogisticsRecord) -> bool {
    let date = record.delivery_date.trim();
    !date.is_empty() && date != "undefined" && date != "null"
}

/// 표시용 도착예정일
///
/// 운송중 차량의 고유 날짜(오름차순) 전부, 없으면 전체 물류 중 가장 빠른 날짜
fn resolve_delivery_date(in_transit: &[&LogisticsRecord], all: &[&LogisticsRecord]) -> String {
    let transit_dates: BTreeSet<&str> = in_transit
        .iter()
        .filter(|r| has_date(r))
        .map(|r| r.delivery_date.as_str())
        .collect();

    if !transit_dates.is_empty() {
        return transit_dates
            .into_iter()
            .collect::<Vec<_>>()
            .join(DELIVERY_DATE_SEPARATOR);
    }

    all.iter()
        .filter(|r| has_date(r))
        .map(|r| r.delivery_date.as_str())
        .min()
        .unwrap_or_default()
        .to_string()
}

/// 배정대기 오더의 영업사원 (빈 이름 제외, 최초 등장 순 중복 제거)
fn collect_salespeople(unassigned: &[&SalesRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in unassigned {
        let name = record.salesperson.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logistics(model: &str, date: &str, status: &str) -> LogisticsRecord {
        LogisticsRecord {
            model_description: model.to_string(),
            exterior_color: "Black".to_string(),
            trim: "AMG Line".to_string(),
            model_year: "2024".to_string(),
            delivery_date: date.to_string(),
            logistics_status: status.to_string(),
        }
    }

    fn sales(model: &str, comm_no: &str, salesperson: &str) -> SalesRecord {
        SalesRecord {
            model_description: model.to_string(),
            exterior_color: "black".to_string(),
            trim: "amg line".to_string(),
            model_year: "2024".to_string(),
            commission_number: comm_no.to_string(),
            salesperson: salesperson.to_string(),
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let l = vec![
            logistics("Mercedes-AMG G 63", "2024-06-01", "운송중"),
            logistics("G 63", "2024-06-01", "운송중"),
        ];
        let s = vec![sales("G 63", "", "Kim")];

        let result = ReconciliationEngine::new().reconcile(&l, &s);

        assert_eq!(result.models.len(), 1);
        let g63 = &result.models[0];
        assert_eq!(g63.model, "Mercedes-AMG G 63");
        assert_eq!(g63.year, 2024);
        assert_eq!(g63.in_transit_count, 2);
        assert_eq!(g63.assigned_count, 0);
        assert_eq!(g63.unassigned_count, 1);
        assert_eq!(g63.total_count, 1);
        assert_eq!(g63.salespeople, vec!["Kim".to_string()]);
        assert_eq!(g63.delivery_date, "2024-06-01");
        assert_eq!(result.summary.unmatched_models, 0);
    }

    #[test]
    fn test_join_completeness() {
        let l = vec![logistics("G 63", "", "운송중"), logistics("S 580", "", "운송중")];
        let s = vec![sales("G 63", "C1", "Lee"), sales("EQE 350", "", "Park")];

        let result = ReconciliationEngine::new().reconcile(&l, &s);

        let models: Vec<_> = result.models.iter().map(|m| m.model.as_str()).collect();
        assert_eq!(models, vec!["EQE 350", "G 63", "S 580"]);
        assert_eq!(result.summary.total_models, 3);

        let eqe = &result.models[0];
        assert_eq!(eqe.in_transit_count, 0);
        assert_eq!(eqe.unassigned_count, 1);
        // 판매 데이터만 있는 변형은 판매 레코드 표시값 사용
        assert_eq!(eqe.color, "black");
    }

    #[test]
    fn test_negative_total_not_clamped() {
        let s = vec![
            sales("GLC 300", "", "Kim"),
            sales("GLC 300", "", "Kim"),
            sales("GLC 300", "", "Choi"),
        ];
        let result = ReconciliationEngine::new().reconcile(&[], &s);

        let glc = &result.models[0];
        assert_eq!(glc.total_count, -3);
        assert_eq!(glc.salespeople, vec!["Kim".to_string(), "Choi".to_string()]);
        assert_eq!(result.summary.total_vehicles, -3);
    }

    #[test]
    fn test_unmatched_count() {
        let l = vec![
            logistics("G 63", "", "운송중"),
            logistics("S 680", "", "해외발송대기"),
            logistics("E 200", "", "운송중"),
        ];
        let s = vec![sales("E 200", "C9", "")];

        let result = ReconciliationEngine::new().reconcile(&l, &s);
        assert_eq!(result.summary.unmatched_models, 2);

        // 운송중이 아닌 물류 레코드는 수량에 포함되지 않는다
        let s680 = result.models.iter().find(|m| m.model == "S 680").unwrap();
        assert_eq!(s680.in_transit_count, 0);
        assert_eq!(s680.total_count, 0);
    }

    #[test]
    fn test_salespeople_only_from_unassigned() {
        let s = vec![
            sales("A 220", "C1", "Assigned Guy"),
            sales("A 220", "", " "),
            sales("A 220", "", "Yoon"),
        ];
        let result = ReconciliationEngine::new().reconcile(&[], &s);
        assert_eq!(result.models[0].salespeople, vec!["Yoon".to_string()]);
        assert_eq!(result.models[0].total_count, 1 - 2);
    }

    #[test]
    fn test_delivery_dates_from_in_transit() {
        let l = vec![
            logistics("G 63", "2024-07-01", "운송중"),
            logistics("G 63", "2024-06-01", "VPC입고"),
            logistics("G 63", "2024-07-01", "in transit"),
            logistics("G 63", "2024-01-01", "해외발송대기"),
        ];
        let result = ReconciliationEngine::new().reconcile(&l, &[]);
        assert_eq!(result.models[0].delivery_date, "2024-06-01, 2024-07-01");
        assert_eq!(result.models[0].in_transit_count, 3);
    }

    #[test]
    fn test_delivery_date_falls_back_to_earliest() {
        let l = vec![
            logistics("G 63", "2024-09-01", "통관대기"),
            logistics("G 63", "2024-08-15", "통관대기"),
            logistics("G 63", "", "운송중"),
        ];
        let result = ReconciliationEngine::new().reconcile(&l, &[]);
        assert_eq!(result.models[0].delivery_date, "2024-08-15");

        let none = ReconciliationEngine::new().reconcile(&[logistics("G 63", "", "x")], &[]);
        assert_eq!(none.models[0].delivery_date, "");
    }

    #[test]
    fn test_spaced_vpc_status_not_counted_in_transit() {
        let l = vec![logistics("G 63", "", "VPC 입고")];
        let result = ReconciliationEngine::new().reconcile(&l, &[]);
        assert_eq!(result.models[0].in_transit_count, 0);
    }

    #[test]
    fn test_year_fallback_zero() {
        let mut record = logistics("G 63", "", "운송중");
        record.model_year = "MY".to_string();
        let result = ReconciliationEngine::new().reconcile(&[record], &[]);
        assert_eq!(result.models[0].year, 0);
    }

    #[test]
    fn test_summary_totals() {
        let l = vec![logistics("G 63", "", "운송중"), logistics("G 63", "", "운송중")];
        let s = vec![sales("G 63", "C1", ""), sales("G 63", "", "Kim")];
        let result = ReconciliationEngine::new().reconcile(&l, &s);

        assert_eq!(result.summary.in_transit, 2);
        assert_eq!(result.summary.pending_assigned, 1);
        assert_eq!(result.summary.pending_unassigned, 1);
        assert_eq!(result.summary.total_vehicles, 2);
    }

    #[test]
    fn test_empty_inputs() {
        let result = ReconciliationEngine::new().reconcile(&[], &[]);
        assert!(result.models.is_empty());
        assert_eq!(result.summary, AnalysisSummary::default());
    }
}
