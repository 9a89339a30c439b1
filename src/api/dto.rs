// ==========================================
// 차량 물류/판매 대사 시스템 - API 요청/응답 구조
// ==========================================

use crate::domain::variant::AnalysisResult;
use serde::{Deserialize, Serialize};

/// 업로드된 파일 1개
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// 디스크 파일을 업로드 형태로 읽기
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        Ok(Self {
            name,
            bytes: std::fs::read(path)?,
        })
    }
}

/// 분석 요청 (물류 + 판매)
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub logistics: Option<UploadedFile>,
    pub sales: Option<UploadedFile>,
}

impl AnalysisRequest {
    pub fn new(logistics: UploadedFile, sales: UploadedFile) -> Self {
        Self {
            logistics: Some(logistics),
            sales: Some(sales),
        }
    }
}

/// 분석 응답 봉투
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalysisResponse {
    pub fn ok(data: AnalysisResult, message: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message),
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_envelope_omits_data() {
        let json = serde_json::to_value(AnalysisResponse::failure("x".to_string())).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "x");
        assert!(json.get("data").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_success_envelope_shape() {
        let response = AnalysisResponse::ok(AnalysisResult::default(), "done".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"]["summary"]["totalModels"], 0);
        assert!(json["data"]["models"].as_array().unwrap().is_empty());
    }
}
