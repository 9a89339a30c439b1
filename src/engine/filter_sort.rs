// ==========================================
// 차량 물류/판매 대사 시스템 - 결과 필터/정렬
// ==========================================
// 대시보드와 내보내기에서 사용하는 순수 함수
// 입력 목록은 변경하지 않고 새 목록을 반환
// ==========================================

use crate::domain::types::{SortBy, SortOrder, StatusFilter};
use crate::domain::variant::ModelVariant;
use crate::engine::collation::collate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 필터 조건 (모든 조건 AND, 빈 조건은 무시)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelFilter {
    pub model: Option<String>,
    pub color: Option<String>,
    pub trim: Option<String>,
    pub status: StatusFilter,
    pub search_query: Option<String>,
}

impl ModelFilter {
    pub fn with_status(status: StatusFilter) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn matches(&self, variant: &ModelVariant) -> bool {
        contains_ci(&variant.model, self.model.as_deref())
            && contains_ci(&variant.color, self.color.as_deref())
            && contains_ci(&variant.trim, self.trim.as_deref())
            && matches_status(variant, self.status)
            && matches_search(variant, self.search_query.as_deref())
    }
}

/// 대소문자 무시 부분 문자열 (조건이 비어 있으면 통과)
fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(n) if !n.is_empty() => haystack.to_lowercase().contains(&n.to_lowercase()),
        _ => true,
    }
}

fn matches_status(variant: &ModelVariant, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::InTransit => variant.in_transit_count > 0,
        StatusFilter::PendingAssigned => variant.assigned_count > 0,
        StatusFilter::PendingUnassigned => variant.unassigned_count > 0,
    }
}

fn matches_search(variant: &ModelVariant, query: Option<&str>) -> bool {
    let query = match query {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return true,
    };

    variant.model.to_lowercase().contains(&query)
        || variant.color.to_lowercase().contains(&query)
        || variant.trim.to_lowercase().contains(&query)
        || variant.year.to_string().contains(&query)
}

/// 조건에 맞는 변형만 반환
pub fn filter_models(models: &[ModelVariant], filter: &ModelFilter) -> Vec<ModelVariant> {
    models.iter().filter(|m| filter.matches(m)).cloned().collect()
}

/// 안정 정렬
pub fn sort_models(models: &[ModelVariant], sort_by: SortBy, order: SortOrder) -> Vec<ModelVariant> {
    let mut sorted = models.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort_by);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by(a: &ModelVariant, b: &ModelVariant, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Model => collate(&a.model, &b.model),
        SortBy::TotalCount => a.total_count.cmp(&b.total_count),
        SortBy::DeliveryDate => a.delivery_date.cmp(&b.delivery_date),
    }
}
