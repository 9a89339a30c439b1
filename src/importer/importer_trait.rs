// ==========================================
// 차량 물류/판매 대사 시스템 - 가져오기 Trait
// ==========================================
// 디코더: 파일 바이트 → Workbook
// 추출기: Workbook → 레코드 목록
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::sheet::Workbook;

// ==========================================
// WorkbookDecoder Trait
// ==========================================
// 구현체: ExcelDecoder, CsvDecoder, UniversalDecoder
pub trait WorkbookDecoder: Send + Sync {
    /// 파일 바이트를 시트 행렬 목록으로 디코딩
    ///
    /// # 인자
    /// - file_name: 확장자 판별 및 CSV 시트 이름에 사용
    /// - bytes: 파일 전체 내용
    fn decode(&self, file_name: &str, bytes: &[u8]) -> ImportResult<Workbook>;
}

// ==========================================
// RecordExtractor Trait
// ==========================================
// 구현체: LogisticsExtractor, SalesExtractor
pub trait RecordExtractor: Send + Sync {
    type Record;

    /// 통합 문서에서 레코드 추출
    ///
    /// # 반환
    /// - Ok(Vec<Record>): 필수 필드가 없는 행은 조용히 제외됨
    /// - Err(SheetNotFound): 대상 시트를 찾을 수 없음
    fn extract(&self, workbook: &Workbook) -> ImportResult<Vec<Self::Record>>;
}
