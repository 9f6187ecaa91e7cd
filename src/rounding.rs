//! 출력 경계에서만 적용하는 반올림 규약.
//! 내부 계산은 항상 f64 전체 정밀도로 수행하고, 결과 구조체를 만드는
//! 시점에만 통화 2자리 / 비율 1자리로 반올림한다.

/// 통화 금액을 소수 2자리로 반올림한다.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 비율(%)·시간 KPI를 소수 1자리로 반올림한다.
pub fn round_ratio(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// 통화 금액을 천 단위 구분 기호를 포함한 문자열로 만든다.
/// 보고서 프롬프트에 들어가는 표기 규약이므로 계산에는 사용하지 않는다.
pub fn format_currency(value: f64) -> String {
    let rounded = round_currency(value);
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    // u64 범위를 넘는 금액은 표기 대상이 아니다 (as 캐스트는 포화됨)
    debug_assert!(abs < u64::MAX as f64, "금액이 u64 표현 범위를 벗어남: {abs}");
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;
    // 100.0센트로 올라가는 부동소수 경계 보정
    let (whole, cents) = if cents >= 100 {
        (whole + 1, cents - 100)
    } else {
        (whole, cents)
    };

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{cents:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_rounds_half_up() {
        assert_eq!(round_currency(18_750.005), 18_750.01);
        assert_eq!(round_currency(11.249), 11.25);
    }

    #[test]
    #[should_panic]
    fn format_rejects_magnitudes_beyond_u64() {
        format_currency(1e300);
    }

    #[test]
    fn format_groups_thousands() {
        assert_eq!(format_currency(18750.0), "18,750.00");
        assert_eq!(format_currency(1_234_567.891), "1,234,567.89");
        assert_eq!(format_currency(-42.5), "-42.50");
        assert_eq!(format_currency(999.999), "1,000.00");
    }
}
