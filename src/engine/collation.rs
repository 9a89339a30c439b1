// ==========================================
// 차량 물류/판매 대사 시스템 - 한국어 정렬 비교
// ==========================================
// CLDR 한국어(ko) 정렬 규칙 (icu_collator)
// 한글이 라틴보다 앞, 대소문자/악센트는 하위 단계에서 비교
// 정렬 동률이면 원문 코드포인트로 확정
// ==========================================

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use std::cmp::Ordering;

thread_local! {
    // Collator 는 Sync 가 아니므로 스레드별로 보관
    static KOREAN_COLLATOR: Option<Collator> =
        Collator::try_new(&locale!("ko").into(), CollatorOptions::new()).ok();
}

/// 한국어 로캘 정렬 비교
pub fn collate(a: &str, b: &str) -> Ordering {
    KOREAN_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangul_before_latin() {
        assert_eq!(collate("벤츠", "G 63"), Ordering::Less);
        assert_eq!(collate("G 63", "GLE 450"), Ordering::Less);

        let mut names = vec!["G 63", "GLE 450", "벤츠"];
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(names, vec!["벤츠", "G 63", "GLE 450"]);
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(collate("a", "B"), Ordering::Less);
        assert_eq!(collate("b", "A"), Ordering::Greater);
        assert_eq!(collate("a", "A"), Ordering::Less);
    }

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(collate("190 E", "A 200"), Ordering::Less);
    }

    #[test]
    fn test_accent_is_secondary() {
        assert_eq!(collate("Coupé", "Coupe"), Ordering::Greater);
        assert_eq!(collate("Coupé", "Coupf"), Ordering::Less);
    }

    #[test]
    fn test_hangul_dictionary_order() {
        let mut names = vec!["하", "GLC", "가", "나"];
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(names, vec!["가", "나", "하", "GLC"]);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(collate("EQS 450", "EQS 450"), Ordering::Equal);
    }
}
