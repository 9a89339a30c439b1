// ==========================================
// 국제화 (i18n) 모듈
// ==========================================
// rust-i18n 사용
// 한국어(기본)와 영어 지원
// ==========================================
// 참고: rust_i18n::i18n! 매크로는 lib.rs 에서 초기화
// ==========================================

/// 지원 로캘
pub const SUPPORTED_LOCALES: &[&str] = &["ko", "en"];

/// 기본 로캘
pub const DEFAULT_LOCALE: &str = "ko";

/// 현재 로캘
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 로캘 설정 (지원하지 않는 값은 기본 로캘로)
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(resolve_locale(locale));
}

/// 지원 로캘로 정규화 ("en-US" → "en", 그 외 → "ko")
pub fn resolve_locale(locale: &str) -> &'static str {
    let lang = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|l| *l == lang)
        .unwrap_or(DEFAULT_LOCALE)
}

fn fill_args(mut message: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        message = message.replace(&placeholder, v);
    }
    message
}

/// 메시지 번역 (현재 로캘)
///
/// # 예시
/// ```no_run
/// use logistics_analyzer::i18n::t;
/// let msg = t("error.timeout");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 메시지 번역 (인자 포함)
///
/// # 예시
/// ```no_run
/// use logistics_analyzer::i18n::t_with_args;
/// let msg = t_with_args("analysis.success", &[("seconds", "1.2")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    fill_args(t(key), args)
}

/// 지정 로캘로 번역 (전역 로캘을 바꾸지 않음)
pub fn t_locale(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = resolve_locale(locale)).to_string()
}

/// 지정 로캘로 번역 (인자 포함)
pub fn t_locale_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    fill_args(t_locale(key, locale), args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 로캘은 전역 상태이고 테스트는 병렬 실행되므로 직렬화
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(current_locale(), "en");

        set_locale("fr");
        assert_eq!(current_locale(), "ko");
    }

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("en-US"), "en");
        assert_eq!(resolve_locale("ko_KR"), "ko");
        assert_eq!(resolve_locale("EN"), "en");
        assert_eq!(resolve_locale(""), "ko");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ko");
        assert_eq!(t("export.tbd"), "미정");

        set_locale("en");
        assert_eq!(t("export.tbd"), "TBD");

        set_locale("ko");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("ko");
        let msg = t_with_args("analysis.success", &[("seconds", "1.5")]);
        assert!(msg.contains("1.5"));
        assert!(msg.contains("분석이 완료"));
    }

    #[test]
    fn test_translate_explicit_locale() {
        assert_eq!(t_locale("export.none", "en"), "None");
        assert_eq!(t_locale("export.none", "ko"), "없음");

        let msg = t_locale_with_args("error.file_too_large", "en", &[("max", "10"), ("name", "a.xlsx")]);
        assert!(msg.contains("10MB"));
        assert!(msg.contains("a.xlsx"));
    }
}
