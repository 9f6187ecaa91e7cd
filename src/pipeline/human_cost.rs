use crate::config::{ConfigError, Policy};

/// 현재(AS-IS) 수작업 비용 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct HumanCostInput {
    /// 월간 처리 건수 [건/월]
    pub monthly_volume: f64,
    /// 건당 수작업 시간 [분/건]
    pub minutes_per_unit: f64,
    /// 담당 인력 시급 [현지통화/h]
    pub hourly_wage: f64,
    /// 수작업 오류율 (0~100) [%]
    pub error_rate_percent: f64,
    /// 치명 오류 1건당 손실 [현지통화/건]
    pub cost_per_critical_error: f64,
}

/// AS-IS 비용 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumanCostResult {
    /// 월간 총 수작업 시간 [h/월]
    pub total_hours: f64,
    /// 월간 수작업 비용 [현지통화/월]
    pub monthly_cost: f64,
    /// 해방되는 FTE 수 [인]
    pub fte_freed: f64,
    /// 오류 제거로 회피되는 손실 [현지통화/월]
    pub avoided_error_cost: f64,
}

/// AS-IS 수작업 비용과 오류 손실을 계산한다.
/// FTE 월 근무시간이 0 이하이면 0 나누기 대신 설정 오류로 실패한다.
pub fn human_cost(input: HumanCostInput, policy: &Policy) -> Result<HumanCostResult, ConfigError> {
    if !(policy.fte_hours_per_month > 0.0) {
        return Err(ConfigError::InvalidFteHours(policy.fte_hours_per_month));
    }

    let total_hours = input.monthly_volume * input.minutes_per_unit / 60.0;
    let monthly_cost = total_hours * input.hourly_wage;
    let avoided_error_cost =
        input.monthly_volume * (input.error_rate_percent / 100.0) * input.cost_per_critical_error;

    Ok(HumanCostResult {
        total_hours,
        monthly_cost,
        fte_freed: total_hours / policy.fte_hours_per_month,
        avoided_error_cost,
    })
}
