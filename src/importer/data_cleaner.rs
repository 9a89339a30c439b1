// ==========================================
// 차량 물류/판매 대사 시스템 - 레코드 정리
// ==========================================
// 역할: 모델명 없는 레코드 제거, 키 필드 공백 정리
// 추출기 출력에 다시 적용해도 결과가 같다 (멱등)
// ==========================================

use crate::domain::record::{LogisticsRecord, SalesRecord};
use tracing::debug;

/// 정리 대상 레코드
pub trait CleanableRecord {
    fn model_is_empty(&self) -> bool;
    fn trim_key_fields(&mut self);
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

impl CleanableRecord for LogisticsRecord {
    fn model_is_empty(&self) -> bool {
        self.model_description.trim().is_empty()
    }

    fn trim_key_fields(&mut self) {
        trim_in_place(&mut self.model_description);
        trim_in_place(&mut self.exterior_color);
        trim_in_place(&mut self.trim);
    }
}

impl CleanableRecord for SalesRecord {
    fn model_is_empty(&self) -> bool {
        self.model_description.trim().is_empty()
    }

    fn trim_key_fields(&mut self) {
        trim_in_place(&mut self.model_description);
        trim_in_place(&mut self.exterior_color);
        trim_in_place(&mut self.trim);
    }
}

/// 모델명이 빈 레코드를 제거하고 모델/색상/트림을 trim
pub fn clean_records<R: CleanableRecord>(records: Vec<R>) -> Vec<R> {
    let before = records.len();
    let cleaned: Vec<R> = records
        .into_iter()
        .filter(|r| !r.model_is_empty())
        .map(|mut r| {
            r.trim_key_fields();
            r
        })
        .collect();

    if cleaned.len() != before {
        debug!(removed = before - cleaned.len(), "모델명 없는 레코드 제거");
    }
    cleaned
}
