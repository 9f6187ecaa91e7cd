use crate::costing::ReviewCostResult;

/// 자동화(백오피스) 모드 가치 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct AutomationValueInput {
    /// 월간 처리 건수 [건/월]
    pub monthly_volume: f64,
    /// 건당 수작업 시간 [분/건]
    pub minutes_per_unit: f64,
    /// 담당 인력 시급 [현지통화/h]
    pub hourly_wage: f64,
}

/// 자동화 모드 가치 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct AutomationValueResult {
    /// AS-IS 월간 수작업 시간 [h/월]
    pub as_is_hours: f64,
    /// AS-IS 월간 비용 [현지통화/월]
    pub as_is_cost: f64,
    /// 월간 창출 가치 = 제거되는 기존 비용 [현지통화/월]
    pub value_generated: f64,
    /// 순해방 시간 = AS-IS 시간 − 검수 시간 [h/월]
    pub hours_freed: f64,
}

/// 자동화 모드의 가치를 계산한다. 창출 가치는 팀이 더 이상 쓰지 않는
/// 수작업 비용 전액이고, 검수에 재투입되는 시간만큼 해방 시간이 줄어든다.
pub fn automation_value(
    input: AutomationValueInput,
    review: &ReviewCostResult,
) -> AutomationValueResult {
    let as_is_hours = input.monthly_volume * input.minutes_per_unit / 60.0;
    let as_is_cost = as_is_hours * input.hourly_wage;
    AutomationValueResult {
        as_is_hours,
        as_is_cost,
        value_generated: as_is_cost,
        hours_freed: as_is_hours - review.review_hours,
    }
}
