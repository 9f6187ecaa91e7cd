//! 두 엔진(시나리오 평가, 2단계 파이프라인)이 공유하는 단일 공식 세트.
//! 원 구현에는 서로 다른 두 벌의 공식이 존재했으나, 여기서는 이 모듈이
//! 유일한 정본이고 엔진들은 이 공식을 조합만 한다.

use crate::cost_model::ModelPrice;

/// 토큰 비용 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct TokenCostInput {
    /// 월간 처리 건수 [건/월]
    pub monthly_volume: f64,
    /// 건당 입력 토큰 수 [tok/건]
    pub tokens_in_per_unit: f64,
    /// 건당 출력 토큰 수 [tok/건]
    pub tokens_out_per_unit: f64,
    /// 모델 토큰 단가 [USD/1M tok]
    pub price: ModelPrice,
    /// 환율 [현지통화/USD]
    pub usd_rate: f64,
}

/// 토큰 비용 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct TokenCostResult {
    /// 건당 토큰 비용 [USD/건]
    pub unit_cost_usd: f64,
    /// 월간 토큰 비용 [USD/월]
    pub monthly_cost_usd: f64,
    /// 월간 토큰 비용 [현지통화/월]
    pub monthly_cost_local: f64,
}

/// 토큰 소비량과 단가로 월간 토큰 비용을 계산한다.
/// 공식: (tok_in × 단가_in + tok_out × 단가_out) / 1,000,000 × V × 환율
pub fn token_cost(input: TokenCostInput) -> TokenCostResult {
    let unit_cost_usd = (input.tokens_in_per_unit * input.price.input_usd_per_mtok
        + input.tokens_out_per_unit * input.price.output_usd_per_mtok)
        / 1_000_000.0;
    let monthly_cost_usd = unit_cost_usd * input.monthly_volume;
    TokenCostResult {
        unit_cost_usd,
        monthly_cost_usd,
        monthly_cost_local: monthly_cost_usd * input.usd_rate,
    }
}

/// 토큰 외 건당 부대비용(OCR 등)의 월 합계를 계산한다 [현지통화/월].
pub fn ancillary_cost(monthly_volume: f64, unit_cost: f64, units_per_item: f64) -> f64 {
    monthly_volume * unit_cost * units_per_item
}

/// 사람 검수(HITL) 비용 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct ReviewCostInput {
    /// 월간 처리 건수 [건/월]
    pub monthly_volume: f64,
    /// 검수 대상 비율 (0~100) [%]
    pub review_rate_percent: f64,
    /// 건당 검수 시간 [분/건]
    pub review_minutes_per_unit: f64,
    /// 검수 인력 시급 [현지통화/h]
    pub hourly_wage: f64,
}

/// 사람 검수 비용 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct ReviewCostResult {
    /// 월간 검수 시간 [h/월]
    pub review_hours: f64,
    /// 월간 검수 비용 [현지통화/월]
    pub review_cost: f64,
}

/// AI 출력의 사람 검수 시간과 비용을 계산한다.
pub fn review_cost(input: ReviewCostInput) -> ReviewCostResult {
    let rate = input.review_rate_percent / 100.0;
    let review_hours =
        input.monthly_volume * rate * input.review_minutes_per_unit / 60.0;
    ReviewCostResult {
        review_hours,
        review_cost: review_hours * input.hourly_wage,
    }
}

/// ROI(%)를 계산한다. 총비용이 0이면 나눗셈 대신 정의된 폴백을 쓴다:
/// 이득이 0 이하이면 0, 양수이면 `roi_sentinel`(무한 상방 표시 값).
pub fn roi_percent(total_gain: f64, total_cost: f64, roi_sentinel: f64) -> f64 {
    if total_cost > 0.0 {
        (total_gain - total_cost) / total_cost * 100.0
    } else if total_gain > 0.0 {
        roi_sentinel
    } else {
        0.0
    }
}

/// 회수기간[개월]을 계산한다. 순절감이 0 이하이면 유한한 회수 시점이
/// 없다는 뜻의 센티널을 반환한다.
pub fn payback_months(capex: f64, net_saving_per_month: f64, sentinel_months: f64) -> f64 {
    if net_saving_per_month > 0.0 {
        capex / net_saving_per_month
    } else {
        sentinel_months
    }
}

/// 지연시간 개선율(%)을 계산한다. 사람 처리 시간이 0이면 0으로 정의한다.
pub fn latency_improvement_percent(human_seconds: f64, ai_seconds: f64) -> f64 {
    if human_seconds > 0.0 {
        (human_seconds - ai_seconds) / human_seconds * 100.0
    } else {
        0.0
    }
}
