// ==========================================
// 차량 물류/판매 대사 시스템 - 가져오기 계층
// ==========================================
// 역할: 업로드 파일 디코딩, 물류/판매 레코드 추출
// 지원: Excel (calamine), CSV
// ==========================================

// 모듈 선언
pub mod column;
pub mod data_cleaner;
pub mod date_normalizer;
pub mod error;
pub mod file_parser;
pub mod importer_trait;
pub mod layout_detector;
pub mod logistics_extractor;
pub mod sales_extractor;
pub mod sheet;

// 핵심 타입 재노출
pub use column::{column_to_index, index_to_column};
pub use data_cleaner::clean_records;
pub use date_normalizer::{normalize_date, normalize_date_str};
pub use error::{ImportError, ImportResult};
pub use file_parser::{decode_path, CsvDecoder, ExcelDecoder, UniversalDecoder};
pub use layout_detector::detect_layout;
pub use logistics_extractor::{ExtractionStats, LogisticsExtractor};
pub use sales_extractor::{verify_sales_header, HeaderMismatch, SalesExtractor};
pub use sheet::{Cell, SheetMatrix, Workbook};

// Trait 인터페이스 재노출
pub use importer_trait::{RecordExtractor, WorkbookDecoder};
