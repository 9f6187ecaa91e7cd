/// 디플렉션(FAQ/프런트오피스) 모드 가치 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct DeflectionValueInput {
    /// 월간 문의 건수 [건/월]
    pub monthly_volume: f64,
    /// 사람 처리 티켓 1건당 비용 [현지통화/건]
    pub cost_per_ticket: f64,
    /// AI 단독 해결 비율 (0~100) [%]
    pub retention_percent: f64,
    /// 티켓 1건당 가정 처리 시간 [분/건] (정책 상수, 기본 10분)
    pub ticket_minutes: f64,
}

/// 디플렉션 모드 가치 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct DeflectionValueResult {
    /// AS-IS 비용 = 전 건을 사람이 처리할 때의 비용 [현지통화/월]
    pub as_is_cost: f64,
    /// 디플렉션된 티켓 수 [건/월]
    pub tickets_deflected: f64,
    /// 월간 창출 가치 = 디플렉션 티켓 × 건당 비용 [현지통화/월]
    pub value_generated: f64,
    /// 회피된 응대 시간 추정치 [h/월]
    pub hours_avoided: f64,
}

/// 디플렉션 모드의 가치를 계산한다. 시간 KPI는 실측이 아니라
/// 티켓당 가정 시간에 기반한 추정치다.
pub fn deflection_value(input: DeflectionValueInput) -> DeflectionValueResult {
    let retention = input.retention_percent / 100.0;
    let tickets_deflected = input.monthly_volume * retention;
    DeflectionValueResult {
        as_is_cost: input.monthly_volume * input.cost_per_ticket,
        tickets_deflected,
        value_generated: tickets_deflected * input.cost_per_ticket,
        hours_avoided: tickets_deflected * input.ticket_minutes / 60.0,
    }
}
