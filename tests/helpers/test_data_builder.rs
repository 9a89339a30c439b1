// ==========================================
// 테스트 데이터 빌더 - 통합 테스트용
// ==========================================

use logistics_analyzer::domain::{LogisticsRecord, SalesRecord};

// ==========================================
// LogisticsRecord 빌더
// ==========================================

pub struct LogisticsBuilder {
    record: LogisticsRecord,
}

impl LogisticsBuilder {
    pub fn new(model: &str) -> Self {
        Self {
            record: LogisticsRecord {
                model_description: model.to_string(),
                exterior_color: "Black".to_string(),
                trim: "AMG Line".to_string(),
                model_year: "2024".to_string(),
                delivery_date: String::new(),
                logistics_status: "운송중".to_string(),
            },
        }
    }

    pub fn color(mut self, color: &str) -> Self {
        self.record.exterior_color = color.to_string();
        self
    }

    pub fn trim(mut self, trim: &str) -> Self {
        self.record.trim = trim.to_string();
        self
    }

    pub fn year(mut self, year: &str) -> Self {
        self.record.model_year = year.to_string();
        self
    }

    pub fn delivery(mut self, date: &str) -> Self {
        self.record.delivery_date = date.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.record.logistics_status = status.to_string();
        self
    }

    pub fn build(self) -> LogisticsRecord {
        self.record
    }

    /// 같은 레코드 n건
    pub fn repeat(self, n: usize) -> Vec<LogisticsRecord> {
        vec![self.record; n]
    }
}

// ==========================================
// SalesRecord 빌더
// ==========================================

pub struct SalesBuilder {
    record: SalesRecord,
}

impl SalesBuilder {
    pub fn new(model: &str) -> Self {
        Self {
            record: SalesRecord {
                model_description: model.to_string(),
                exterior_color: "Black".to_string(),
                trim: "AMG Line".to_string(),
                model_year: "2024".to_string(),
                commission_number: String::new(),
                salesperson: String::new(),
            },
        }
    }

    pub fn color(mut self, color: &str) -> Self {
        self.record.exterior_color = color.to_string();
        self
    }

    pub fn trim(mut self, trim: &str) -> Self {
        self.record.trim = trim.to_string();
        self
    }

    pub fn year(mut self, year: &str) -> Self {
        self.record.model_year = year.to_string();
        self
    }

    /// 커미션 번호 지정 (배정 완료)
    pub fn commission(mut self, number: &str) -> Self {
        self.record.commission_number = number.to_string();
        self
    }

    pub fn salesperson(mut self, name: &str) -> Self {
        self.record.salesperson = name.to_string();
        self
    }

    pub fn build(self) -> SalesRecord {
        self.record
    }
}
