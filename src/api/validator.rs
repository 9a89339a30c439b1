// ==========================================
// 차량 물류/판매 대사 시스템 - 업로드 검증
// ==========================================
// 디코딩 전에 파일 존재, 크기, 확장자 검사
// ==========================================

use crate::api::dto::UploadedFile;
use crate::api::error::{ApiError, ApiResult};
use crate::importer::file_parser::{file_extension, CSV_EXTENSION};

/// 업로드 허용 Excel 확장자
pub const ALLOWED_EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsb", "xlsm"];

/// 업로드 검증기
#[derive(Debug, Clone, Copy)]
pub struct UploadValidator {
    max_file_size_bytes: u64,
}

impl UploadValidator {
    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
        }
    }

    pub fn is_allowed_extension(file_name: &str) -> bool {
        let ext = file_extension(file_name);
        ext == CSV_EXTENSION || ALLOWED_EXCEL_EXTENSIONS.contains(&ext.as_str())
    }

    /// 파일 1개 검증
    ///
    /// # 반환
    /// - Err(MissingFile): 파일 없음 또는 빈 파일
    /// - Err(FileTooLarge): 최대 크기 초과
    /// - Err(UnsupportedFormat): 허용되지 않은 확장자
    pub fn validate<'a>(&self, role: &str, file: Option<&'a UploadedFile>) -> ApiResult<&'a UploadedFile> {
        let file = file
            .filter(|f| !f.bytes.is_empty())
            .ok_or_else(|| ApiError::MissingFile(role.to_string()))?;

        if file.size() > self.max_file_size_bytes {
            return Err(ApiError::FileTooLarge {
                name: file.name.clone(),
                size: file.size(),
                max: self.max_file_size_bytes,
            });
        }

        if !Self::is_allowed_extension(&file.name) {
            return Err(ApiError::UnsupportedFormat(file.name.clone()));
        }

        Ok(file)
    }
}
