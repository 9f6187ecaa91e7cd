use crate::config::{Policy, ViabilityWeights};
use crate::cost_model::CostModelTable;
use crate::costing;
use crate::pipeline::human_cost::HumanCostResult;

/// AI 솔루션(TO-BE) 비용·리스크 계산 입력.
/// 검증 경계를 통과한 음수 없는 값을 전제한다.
#[derive(Debug, Clone)]
pub struct AiCostInput {
    /// 월간 처리 건수 [건/월]
    pub monthly_volume: f64,
    /// 선택한 모델 식별자
    pub model: String,
    /// 건당 입력 토큰 수 [tok/건]
    pub tokens_in_per_unit: f64,
    /// 건당 출력 토큰 수 [tok/건]
    pub tokens_out_per_unit: f64,
    /// 고정 호스팅/인프라 비용 [현지통화/월]
    pub fixed_infra_cost: f64,
    /// 건당 부대비용 단위 수 (예: 문서 1건당 OCR 페이지 수)
    pub ancillary_units_per_item: f64,
    /// 검수 대상 비율 (0~100) [%]
    pub review_rate_percent: f64,
    /// 건당 검수 시간 [분/건]
    pub review_minutes_per_unit: f64,
    /// 검수 인력 시급 [현지통화/h] (AS-IS와 동일 인력 가정)
    pub hourly_wage: f64,
    /// AI 오류율 (0~100) [%]
    pub error_rate_percent: f64,
    /// 건당 사람 처리 시간 [s/건] (지연 개선율 기준)
    pub human_seconds_per_unit: f64,
    /// 건당 AI 응답 지연 [s/건]
    pub ai_seconds_per_unit: f64,
    /// 컴플라이언스 점수 (1~10)
    pub compliance_score: f64,
}

/// TO-BE 비용·리스크 계산 결과. 전 항목 반올림 없는 내부 정밀도.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiCostResult {
    /// 월간 토큰 비용 [USD/월]
    pub token_cost_usd: f64,
    /// 월간 토큰 비용 [현지통화/월]
    pub token_cost_local: f64,
    /// 월간 부대비용(OCR 등) [현지통화/월]
    pub ancillary_cost: f64,
    /// 실행 비용 = 토큰 + 부대 + 인프라 [현지통화/월]
    pub execution_cost: f64,
    /// 월간 검수 시간 [h/월]
    pub review_hours: f64,
    /// 사람 검수(HITL) 비용 [현지통화/월]
    pub review_cost: f64,
    /// AI 총 운영비 [현지통화/월]
    pub total_ai_cost: f64,
    /// 총 화폐화 이득 = AS-IS 비용 + 회피 오류 손실 [현지통화/월]
    pub total_gain: f64,
    /// ROI [%]
    pub roi_percent: f64,
    /// 지연시간 개선율 [%]
    pub latency_improvement_percent: f64,
    /// 기술 타당성 종합 점수 (0~100, 극단 입력 시 100 초과 가능)
    pub viability_score: f64,
    /// 모델 단가가 폴백(0)으로 처리되었는지 여부
    pub price_is_fallback: bool,
}

/// TO-BE 총비용과 ROI, 기술 타당성 점수를 계산한다.
///
/// 타당성 점수는 (100 − 오류율), 지연 개선율, 컴플라이언스 점수×10을
/// 설정된 가중치(기본 0.40/0.40/0.20)로 합산한다. 점수 상한은 두지
/// 않는다. 극단 입력에서 100을 넘을 수 있고, 이는 의도된 동작이다.
pub fn ai_cost(
    input: &AiCostInput,
    baseline: &HumanCostResult,
    table: &CostModelTable,
    policy: &Policy,
    weights: &ViabilityWeights,
) -> AiCostResult {
    let lookup = table.price_for(&input.model);

    let tokens = costing::token_cost(costing::TokenCostInput {
        monthly_volume: input.monthly_volume,
        tokens_in_per_unit: input.tokens_in_per_unit,
        tokens_out_per_unit: input.tokens_out_per_unit,
        price: lookup.price,
        usd_rate: table.usd_rate,
    });

    let ancillary = costing::ancillary_cost(
        input.monthly_volume,
        table.ancillary.ocr_unit_cost,
        input.ancillary_units_per_item,
    );

    let execution_cost = tokens.monthly_cost_local + ancillary + input.fixed_infra_cost;

    let review = costing::review_cost(costing::ReviewCostInput {
        monthly_volume: input.monthly_volume,
        review_rate_percent: input.review_rate_percent,
        review_minutes_per_unit: input.review_minutes_per_unit,
        hourly_wage: input.hourly_wage,
    });

    let total_ai_cost = execution_cost + review.review_cost;
    let total_gain = baseline.monthly_cost + baseline.avoided_error_cost;
    let roi = costing::roi_percent(total_gain, total_ai_cost, policy.roi_sentinel);

    let latency = costing::latency_improvement_percent(
        input.human_seconds_per_unit,
        input.ai_seconds_per_unit,
    );

    let viability_score = weights.error_quality * (100.0 - input.error_rate_percent)
        + weights.latency * latency
        + weights.compliance * (input.compliance_score * 10.0);

    AiCostResult {
        token_cost_usd: tokens.monthly_cost_usd,
        token_cost_local: tokens.monthly_cost_local,
        ancillary_cost: ancillary,
        execution_cost,
        review_hours: review.review_hours,
        review_cost: review.review_cost,
        total_ai_cost,
        total_gain,
        roi_percent: roi,
        latency_improvement_percent: latency,
        viability_score,
        price_is_fallback: lookup.is_fallback,
    }
}
