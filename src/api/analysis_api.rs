// ==========================================
// 차량 물류/판매 대사 시스템 - 분석 API
// ==========================================
// 역할: 업로드 검증 → 디코딩 → 레코드 추출 → 대사 → 응답 봉투
// 실행: spawn_blocking + 시간 예산 (tokio::time::timeout)
// ==========================================

use crate::api::dto::{AnalysisRequest, AnalysisResponse, UploadedFile};
use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::UploadValidator;
use crate::config::{AnalysisConfig, AnalysisConfigReader};
use crate::domain::{AnalysisResult, LogisticsRecord, SalesRecord};
use crate::engine::ReconciliationEngine;
use crate::i18n::{resolve_locale, t_locale_with_args};
use crate::importer::{
    clean_records, ImportResult, LogisticsExtractor, RecordExtractor, SalesExtractor,
    UniversalDecoder, WorkbookDecoder,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// 분석 1회 실행 결과
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis_id: String,
    pub result: AnalysisResult,
    pub elapsed: Duration,
    pub logistics_records: usize,
    pub sales_records: usize,
}

impl AnalysisOutcome {
    /// 소수점 1자리 초 단위 문자열
    pub fn elapsed_label(&self) -> String {
        format!("{:.1}", self.elapsed.as_secs_f64())
    }
}

/// 분석 API
pub struct AnalysisApi<C: AnalysisConfigReader> {
    config: Arc<C>,
}

impl<C: AnalysisConfigReader + 'static> AnalysisApi<C> {
    pub fn new(config: Arc<C>) -> Self {
        Self { config }
    }

    /// 분석 실행
    ///
    /// # 반환
    /// - Ok(AnalysisOutcome): 분석 결과와 처리 시간
    /// - Err(ApiError): 검증 실패, 시트 누락, 파싱 실패, 시간 초과
    #[instrument(skip_all)]
    pub async fn analyze(&self, request: AnalysisRequest) -> ApiResult<AnalysisOutcome> {
        let config = self.config.get_snapshot().await?;
        let validator = UploadValidator::new(config.max_file_size_bytes);

        let logistics = validator.validate("logistics", request.logistics.as_ref())?.clone();
        let sales = validator.validate("sales", request.sales.as_ref())?.clone();

        let analysis_id = Uuid::new_v4().to_string();
        info!(
            analysis_id = %analysis_id,
            logistics_file = %logistics.name,
            logistics_size = logistics.size(),
            sales_file = %sales.name,
            sales_size = sales.size(),
            "분석 시작"
        );

        let started = Instant::now();
        let pipeline_config = config.clone();
        let task = tokio::task::spawn_blocking(move || run_pipeline(&logistics, &sales, &pipeline_config));

        let pipeline = match tokio::time::timeout(config.timeout(), task).await {
            Ok(Ok(result)) => result?,
            Ok(Err(join_err)) => {
                error!(analysis_id = %analysis_id, error = %join_err, "분석 작업 비정상 종료");
                return Err(ApiError::InternalError(join_err.to_string()));
            }
            Err(_) => {
                error!(analysis_id = %analysis_id, timeout_secs = config.timeout_secs, "분석 시간 초과");
                return Err(ApiError::Timeout(config.timeout_secs));
            }
        };

        let elapsed = started.elapsed();
        if elapsed > config.slow_warning() {
            warn!(
                analysis_id = %analysis_id,
                elapsed_ms = elapsed.as_millis() as u64,
                threshold_secs = config.slow_warning_secs,
                "분석 처리 시간이 경고 기준을 초과"
            );
        }
        info!(
            analysis_id = %analysis_id,
            elapsed_ms = elapsed.as_millis() as u64,
            total_models = pipeline.result.summary.total_models,
            total_vehicles = pipeline.result.summary.total_vehicles,
            "분석 완료"
        );

        Ok(AnalysisOutcome {
            analysis_id,
            result: pipeline.result,
            elapsed,
            logistics_records: pipeline.logistics_records,
            sales_records: pipeline.sales_records,
        })
    }

    /// 분석 실행 후 응답 봉투로 변환
    ///
    /// 실패 시 로캘별 사용자 메시지만 담는다
    pub async fn respond(&self, request: AnalysisRequest) -> AnalysisResponse {
        let locale = self.locale().await;
        match self.analyze(request).await {
            Ok(outcome) => {
                let message = t_locale_with_args(
                    "analysis.success",
                    locale,
                    &[("seconds", &outcome.elapsed_label())],
                );
                AnalysisResponse::ok(outcome.result, message)
            }
            Err(err) => {
                warn!(code = err.code(), error = %err, "분석 요청 실패");
                AnalysisResponse::failure(err.user_message(locale))
            }
        }
    }

    /// 경로 두 개로 분석 (CLI 용)
    pub async fn analyze_paths(&self, logistics: &str, sales: &str) -> ApiResult<AnalysisOutcome> {
        let logistics = UploadedFile::from_path(logistics)
            .map_err(|e| ApiError::MissingFile(format!("{}: {}", logistics, e)))?;
        let sales = UploadedFile::from_path(sales)
            .map_err(|e| ApiError::MissingFile(format!("{}: {}", sales, e)))?;
        self.analyze(AnalysisRequest::new(logistics, sales)).await
    }

    /// 설정 로캘 (읽기 실패 시 기본 로캘)
    pub async fn locale(&self) -> &'static str {
        match self.config.get_locale().await {
            Ok(locale) => resolve_locale(&locale),
            Err(_) => resolve_locale(&AnalysisConfig::default().locale),
        }
    }
}

struct PipelineOutput {
    result: AnalysisResult,
    logistics_records: usize,
    sales_records: usize,
}

/// 디코딩부터 대사까지 동기 실행
fn run_pipeline(
    logistics: &UploadedFile,
    sales: &UploadedFile,
    config: &AnalysisConfig,
) -> ImportResult<PipelineOutput> {
    let decoder = UniversalDecoder;

    let logistics_book = decoder.decode(&logistics.name, &logistics.bytes)?;
    let logistics_records: Vec<LogisticsRecord> = clean_records(
        LogisticsExtractor::with_preferred_sheet(config.logistics_sheet_name.as_str())
            .max_units_per_row(config.max_units_per_row)
            .extract(&logistics_book)?,
    );

    let sales_book = decoder.decode(&sales.name, &sales.bytes)?;
    let sales_records: Vec<SalesRecord> =
        clean_records(SalesExtractor::new().extract(&sales_book)?);

    let result = ReconciliationEngine::new().reconcile(&logistics_records, &sales_records);
    Ok(PipelineOutput {
        result,
        logistics_records: logistics_records.len(),
        sales_records: sales_records.len(),
    })
}
