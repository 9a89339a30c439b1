// ==========================================
// 차량 물류/판매 대사 시스템 - 대사 키 정규화
// ==========================================
// 물류/판매 파일의 자유 입력 모델명·색상·트림·연식을
// 동일한 조인 키로 변환
// 키 형식: "{모델}_{색상}_{트림}_{연식}"
// ==========================================

use crate::domain::record::VehicleDescriptor;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// 제거 대상 브랜드 접두어 (순서대로 각각 최대 1회 제거)
pub const BRAND_PREFIXES: &[&str] = &[
    "mercedes-amg",
    "mercedes-maybach",
    "mercedes-benz",
    "mercedes",
];

static FOUR_MATIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b4matic\b").unwrap());
static COUPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bcoup[eé]\b").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// 결합 분음 부호 블록 (U+0300..U+036F)
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// 악센트 제거 후 재조합 (한글 음절은 그대로 유지)
pub fn strip_accents(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

fn strip_brand_prefix(value: &str) -> &str {
    BRAND_PREFIXES.iter().fold(value, |current, prefix| {
        match current.strip_prefix(prefix) {
            Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
            _ => current,
        }
    })
}

/// 모델명 정규화
///
/// 1. trim + 소문자
/// 2. 브랜드 접두어 순차 제거 ("mercedes-amg mercedes g 63" → "g 63")
/// 3. 악센트 제거
/// 4. "4matic" → "4m", "coupé"/"coupe" → "coupe"
/// 5. 연속 공백 축약
pub fn normalize_model_name(model: &str) -> String {
    let lowered = model.trim().to_lowercase();
    let without_brand = strip_brand_prefix(&lowered);
    let unaccented = strip_accents(without_brand);

    let replaced = FOUR_MATIC.replace_all(&unaccented, "4m");
    let replaced = COUPE.replace_all(&replaced, "coupe");

    WHITESPACE.replace_all(&replaced, " ").trim().to_string()
}

/// 색상/트림/연식 정규화
pub fn normalize_attribute(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 대사 키 생성
pub fn generate_model_key(model: &str, color: &str, trim: &str, year: &str) -> String {
    format!(
        "{}_{}_{}_{}",
        normalize_model_name(model),
        normalize_attribute(color),
        normalize_attribute(trim),
        normalize_attribute(year)
    )
}

/// 레코드에서 바로 키 생성
pub fn key_for<R: VehicleDescriptor + ?Sized>(record: &R) -> String {
    generate_model_key(
        record.model_description(),
        record.exterior_color(),
        record.trim(),
        record.model_year(),
    )
}
