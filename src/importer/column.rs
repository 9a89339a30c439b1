// ==========================================
// 열 문자 ↔ 0 기반 인덱스 변환
// ==========================================
// A=0, B=1, ..., Z=25, AA=26, ...
// ==========================================

/// 열 문자를 0 기반 인덱스로 변환 (대소문자 무시, 문자 외 입력은 None)
pub fn column_to_index(column: &str) -> Option<usize> {
    let column = column.trim();
    if column.is_empty() {
        return None;
    }

    let mut result: usize = 0;
    for ch in column.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let value = (ch.to_ascii_uppercase() as u8 - b'A' + 1) as usize;
        result = result.checked_mul(26)?.checked_add(value)?;
    }
    Some(result - 1)
}

/// 0 기반 인덱스를 열 문자로 변환
pub fn index_to_column(index: usize) -> String {
    let mut result = Vec::new();
    let mut n = index;
    loop {
        result.push((b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result.iter().rev().collect()
}
