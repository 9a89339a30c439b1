// ==========================================
// 차량 물류/판매 대사 시스템 - CLI 진입점
// ==========================================
// 사용법:
//   logistics-analyzer <물류파일> <판매파일> [--json] [--export <out.xlsx|out.csv>]
//                      [--status all|in_transit|pending_assigned|pending_unassigned]
//                      [--locale ko|en]
// ==========================================

use anyhow::{bail, Context};
use chrono::Local;
use clap::Parser;
use logistics_analyzer::config::{AnalysisConfig, ConfigManager};
use logistics_analyzer::engine::{filter_models, recalculate_summary, ModelFilter, SummaryMetrics};
use logistics_analyzer::export::{write_to_path, CsvExporter, XlsxExporter};
use logistics_analyzer::i18n::{resolve_locale, t_locale};
use logistics_analyzer::logging::{self, LogFormat};
use logistics_analyzer::{AnalysisApi, StatusFilter, APP_NAME, VERSION};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "logistics-analyzer")]
#[command(about = "차량 물류/판매 데이터 대사 및 가용 현황 집계")]
#[command(version)]
struct CliArgs {
    /// 물류 파일 (xlsx/xls/xlsb/xlsm/csv)
    logistics: String,

    /// 판매 파일 (xlsx/xls/xlsb/xlsm/csv)
    sales: String,

    /// 분석 결과를 JSON 으로 출력
    #[arg(long)]
    json: bool,

    /// 내보내기 경로 (.csv 이면 CSV, 그 외 xlsx)
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// 상태 필터: all, in_transit, pending_assigned, pending_unassigned
    #[arg(long, default_value = "all")]
    status: StatusFilter,

    /// 표시 로캘 (ko, en)
    #[arg(long)]
    locale: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliArgs::parse();

    let loaded = ConfigManager::load().context("설정 로드 실패")?;
    let mut config: AnalysisConfig = loaded.config().clone();
    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
    }
    let locale = resolve_locale(&config.locale);
    logging::init_with_format(LogFormat::from_config(&config.log_format));

    tracing::info!("{} v{}", APP_NAME, VERSION);

    let api = AnalysisApi::new(Arc::new(ConfigManager::from_config(config)));
    let outcome = match api.analyze_paths(&cli.logistics, &cli.sales).await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(code = err.code(), error = %err, "분석 실패");
            bail!(err.user_message(locale));
        }
    };

    let models = filter_models(&outcome.result.models, &ModelFilter::with_status(cli.status));

    if cli.json {
        let mut result = outcome.result.clone();
        if cli.status != StatusFilter::All {
            result.summary = recalculate_summary(&models);
            result.models = models.clone();
        }
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let summary = recalculate_summary(&models);
        let metrics = SummaryMetrics::from_summary(&summary);
        let label = |key: &str| t_locale(key, locale);
        println!("{}: {}", label("export.summary.total_models"), summary.total_models);
        println!("{}: {}", label("export.summary.total_vehicles"), summary.total_vehicles);
        println!("{}: {}", label("export.summary.in_transit"), summary.in_transit);
        println!("{}: {}", label("export.summary.pending_assigned"), summary.pending_assigned);
        println!("{}: {}", label("export.summary.pending_unassigned"), summary.pending_unassigned);
        println!("{}: {}", label("export.summary.unmatched_models"), summary.unmatched_models);
        println!("{}: {}", label("export.summary.assignment_rate"), metrics.assignment_rate);
        println!("{}: {}", label("export.summary.availability_rate"), metrics.availability_rate);
        println!("{}: {}", label("export.summary.matching_rate"), metrics.matching_rate);
        println!("({}s)", outcome.elapsed_label());
    }

    if let Some(path) = cli.export {
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        let bytes = if is_csv {
            CsvExporter::new(locale).export(&models)?
        } else if cli.status == StatusFilter::All {
            XlsxExporter::new(locale).export(&outcome.result)?.bytes
        } else {
            XlsxExporter::new(locale)
                .export_filtered(&outcome.result.models, cli.status, Local::now().date_naive())?
                .bytes
        };
        write_to_path(&path, &bytes)?;
        tracing::info!(path = %path.display(), size = bytes.len(), "내보내기 파일 저장");
    }

    Ok(())
}
