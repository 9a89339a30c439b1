// ==========================================
// 차량 물류/판매 대사 시스템 - 날짜 정규화
// ==========================================
// 셀 값(날짜/일련번호/각종 텍스트 형식) → "YYYY-MM-DD" 또는 ""
// 어떤 입력에도 실패하지 않는다 (파싱 불가 → 빈 문자열)
// ==========================================
// 규칙 (순서대로, 먼저 일치하는 규칙 적용):
// 1. 구조화된 날짜 → 그대로 포맷
// 2. 빈 값 / "undefined" / "null" → ""
// 3. [1, 73050] 범위 숫자 → 일련번호 (기준일 1899-12-31, 60 이상은 -1일 보정)
// 4. YYYY-MM-DD → 그대로
// 5. YYYY.MM.DD → 0 채움
// 6. MM/DD/YYYY → 재배열 (앞자리가 12 초과면 DD/MM/YYYY)
// 7. YYYY년 MM월 DD일 → 재배열
// 8. YYYYMMDD (8자리) → 분할
// 9. 일반 날짜 문자열 파싱 시도
// ==========================================

use crate::importer::sheet::Cell;
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// 일련번호 허용 범위 (대략 1900년 ~ 2100년)
pub const MIN_SERIAL: f64 = 1.0;
pub const MAX_SERIAL: f64 = 73050.0;

static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static DOT_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})\.(\d{1,2})\.(\d{1,2})$").unwrap());
static SLASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap());
static KOREAN_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})년\s*(\d{1,2})월\s*(\d{1,2})일").unwrap());
static COMPACT_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{8}$").unwrap());

const FALLBACK_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y. %m. %d.",
    "%Y. %m. %d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%a %b %d %Y",
];

/// 셀 값을 정규화
pub fn normalize_date(value: &Cell) -> String {
    match value {
        Cell::Date(date) => format_date(*date),
        Cell::Empty => String::new(),
        other => normalize_date_str(&other.as_text()),
    }
}

/// 텍스트 날짜를 정규화
pub fn normalize_date_str(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "undefined" || trimmed == "null" {
        return String::new();
    }

    // 일련번호
    if let Ok(serial) = trimmed.parse::<f64>() {
        if serial.is_finite() && (MIN_SERIAL..=MAX_SERIAL).contains(&serial) {
            if let Some(date) = serial_to_date(serial) {
                return format_date(date);
            }
        }
    }

    if ISO_DATE.is_match(trimmed) {
        return trimmed.to_string();
    }

    if let Some(caps) = DOT_DATE.captures(trimmed) {
        return join_parts(&caps[1], &caps[2], &caps[3]);
    }

    if let Some(caps) = SLASH_DATE.captures(trimmed) {
        let first: u32 = caps[1].parse().unwrap_or(0);
        let second: u32 = caps[2].parse().unwrap_or(0);
        // 앞자리가 월이 될 수 없으면 DD/MM/YYYY
        return if first > 12 && second <= 12 {
            join_parts(&caps[3], &caps[2], &caps[1])
        } else {
            join_parts(&caps[3], &caps[1], &caps[2])
        };
    }

    if let Some(caps) = KOREAN_DATE.captures(trimmed) {
        return join_parts(&caps[1], &caps[2], &caps[3]);
    }

    if COMPACT_DATE.is_match(trimmed) {
        return format!("{}-{}-{}", &trimmed[0..4], &trimmed[4..6], &trimmed[6..8]);
    }

    parse_generic(trimmed).map(format_date).unwrap_or_default()
}

/// 일련번호 → 날짜
///
/// 기준일 1899-12-31 (일련번호 1 = 1899-12-31).
/// 60 이상은 1900년 윤년 오산 관례를 보정하기 위해 하루를 뺀다.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(MIN_SERIAL..=MAX_SERIAL).contains(&serial) {
        return None;
    }

    let whole = serial.floor() as u64;
    let adjusted = if whole >= 60 { whole - 1 } else { whole };

    NaiveDate::from_ymd_opt(1899, 12, 31)?.checked_add_days(Days::new(adjusted - 1))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn join_parts(year: &str, month: &str, day: &str) -> String {
    format!("{}-{:0>2}-{:0>2}", year, month, day)
}

fn parse_generic(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    FALLBACK_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            FALLBACK_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        })
}
