//! 시나리오 평가 엔진: 프로젝트 유형 플래그에 따라 자동화(FTE 절감)
//! 가치 모델과 디플렉션(티켓 회피) 가치 모델 중 하나를 선택하고,
//! 공통 꼬리(운영비 집계 → ROI → 회수기간)를 붙인다.
//! "모드"는 분기일 뿐이며 상태 기계는 없다.

pub mod automation;
pub mod deflection;

use serde::Serialize;

use crate::config::Config;
use crate::cost_model::CostModelTable;
use crate::costing::{self, ReviewCostResult};
use crate::i18n::keys;
use crate::rounding::{round_currency, round_ratio};
use crate::validation::{ValidationError, ValidationWarning, Validator};

pub use automation::{automation_value, AutomationValueInput};
pub use deflection::{deflection_value, DeflectionValueInput};

/// 프로젝트 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectKind {
    /// 백오피스 수작업 대체 (가치 = FTE 시간 절감)
    Automation,
    /// 프런트오피스 FAQ/챗봇 (가치 = 티켓 디플렉션)
    Deflection,
}

/// 가치 동인 블록. 모드에 따라 쓰이는 필드가 다르다.
#[derive(Debug, Clone, Default)]
pub struct ValueDrivers {
    /// 월간 처리/문의 건수 [건/월]
    pub monthly_volume: Option<f64>,
    /// 건당 수작업 시간 [분/건] (자동화 모드)
    pub minutes_per_unit: Option<f64>,
    /// 담당 인력 시급 [현지통화/h] (자동화 모드)
    pub hourly_wage: Option<f64>,
    /// 티켓 1건당 비용 [현지통화/건] (디플렉션 모드)
    pub cost_per_ticket: Option<f64>,
    /// AI 단독 해결 비율 (0~100) [%] (디플렉션 모드)
    pub retention_percent: Option<f64>,
}

/// 아키텍처·비용 블록.
#[derive(Debug, Clone, Default)]
pub struct ArchitectureCosts {
    /// 모델 식별자
    pub model: String,
    /// 건당 입력 토큰 수 [tok/건]
    pub tokens_in_per_unit: Option<f64>,
    /// 건당 출력 토큰 수 [tok/건]
    pub tokens_out_per_unit: Option<f64>,
    /// 고정 인프라 비용 [현지통화/월]
    pub monthly_infra_cost: Option<f64>,
    /// 1회성 구축비(CAPEX) [현지통화]
    pub implementation_capex: Option<f64>,
}

/// 리스크/HITL 블록. 디플렉션 모드에서는 누락 시 경고 없이 0으로
/// 본다 (오류는 미디플렉션 티켓으로 이미 가치에 반영되어 있음).
#[derive(Debug, Clone, Default)]
pub struct RiskInputs {
    /// 검수 대상 비율 (0~100) [%]
    pub review_rate_percent: Option<f64>,
    /// 건당 검수 시간 [분/건]
    pub review_minutes_per_unit: Option<f64>,
}

/// 시나리오 평가 원시 입력 (3개 블록 + 유형 플래그).
#[derive(Debug, Clone)]
pub struct ScenarioInput {
    pub kind: ProjectKind,
    pub value: ValueDrivers,
    pub architecture: ArchitectureCosts,
    pub risk: RiskInputs,
}

/// 현재 상태(AS-IS) 묶음. 통화 2자리 반올림 적용.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AsIs {
    /// 현재 월간 비용 [현지통화/월]
    pub total_cost: f64,
    /// 현재 월간 수작업 시간 [h/월] (디플렉션 모드는 0)
    pub total_hours: f64,
}

/// AI 도입 후(TO-BE) 비용 분해. 통화 2자리 반올림 적용.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToBe {
    /// 고정 인프라 [현지통화/월]
    pub infra: f64,
    /// 토큰 비용 [현지통화/월]
    pub tokens: f64,
    /// 사람 검수(HITL) 비용 [현지통화/월]
    pub review: f64,
    /// AI 총 운영비 [현지통화/월]
    pub total: f64,
}

/// 결과 해설에 쓰는 정성 메모. 표시 계층이 언어별 문구로 렌더링한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Note {
    /// 전체 건수 중 사람 검수 비율
    HumanReviewShare { percent: f64 },
    /// AI 단독 해결 목표 비율
    RetentionTarget { percent: f64 },
}

/// 최종 성과 묶음.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// 월간 창출 가치(총 이득) [현지통화/월]
    pub value_generated: f64,
    /// 월간 순절감 = 가치 − AI 운영비 [현지통화/월]
    pub net_saving: f64,
    /// ROI [%] (비용 0이면 정책 센티널)
    pub roi_percent: f64,
    /// 회수기간 [개월] (순절감 ≤ 0이면 정책 센티널)
    pub payback_months: f64,
    /// 가치 동인 라벨의 i18n 키
    pub value_label_key: &'static str,
    /// 해방/회피 시간 [h/월]
    pub hours_freed: f64,
    /// 시간 KPI 라벨의 i18n 키
    pub hours_label_key: &'static str,
    /// 정성 메모
    pub note: Note,
}

/// 시나리오 평가 결과 묶음. 호출마다 새로 만들어지는 값 타입이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub kind: ProjectKind,
    pub as_is: AsIs,
    pub to_be: ToBe,
    pub outcome: Outcome,
}

/// 시나리오를 평가한다. 경계 검증 → 토큰 비용 → 모드별 가치 모델 →
/// 공통 꼬리(운영비, 순절감, ROI, 회수기간) 순서로 진행한다.
pub fn evaluate(
    input: &ScenarioInput,
    table: &CostModelTable,
    config: &Config,
) -> Result<(ScenarioResult, Vec<ValidationWarning>), ValidationError> {
    let mut v = Validator::new();

    let monthly_volume = v.non_negative("monthly_volume", input.value.monthly_volume)?;
    let tokens_in = v.non_negative("tokens_in_per_unit", input.architecture.tokens_in_per_unit)?;
    let tokens_out =
        v.non_negative("tokens_out_per_unit", input.architecture.tokens_out_per_unit)?;
    let infra = v.non_negative("monthly_infra_cost", input.architecture.monthly_infra_cost)?;
    let capex = v.non_negative("implementation_capex", input.architecture.implementation_capex)?;

    let lookup = table.price_for(&input.architecture.model);
    if lookup.is_fallback {
        v.warn_unknown_model(&input.architecture.model);
    }
    let tokens = costing::token_cost(costing::TokenCostInput {
        monthly_volume,
        tokens_in_per_unit: tokens_in,
        tokens_out_per_unit: tokens_out,
        price: lookup.price,
        usd_rate: table.usd_rate,
    });

    let (as_is, review, value_generated, hours_freed, labels, note) = match input.kind {
        ProjectKind::Automation => {
            let minutes_per_unit = v.non_negative("minutes_per_unit", input.value.minutes_per_unit)?;
            let hourly_wage = v.non_negative("hourly_wage", input.value.hourly_wage)?;
            let review_rate = v.percent("review_rate_percent", input.risk.review_rate_percent)?;
            let review_minutes =
                v.non_negative("review_minutes_per_unit", input.risk.review_minutes_per_unit)?;

            let review = costing::review_cost(costing::ReviewCostInput {
                monthly_volume,
                review_rate_percent: review_rate,
                review_minutes_per_unit: review_minutes,
                hourly_wage,
            });
            let mode = automation_value(
                AutomationValueInput {
                    monthly_volume,
                    minutes_per_unit,
                    hourly_wage,
                },
                &review,
            );
            (
                AsIs {
                    total_cost: mode.as_is_cost,
                    total_hours: mode.as_is_hours,
                },
                review,
                mode.value_generated,
                mode.hours_freed,
                (keys::LABEL_VALUE_FTE_SAVINGS, keys::LABEL_KPI_HOURS_FREED),
                Note::HumanReviewShare {
                    percent: review_rate,
                },
            )
        }
        ProjectKind::Deflection => {
            let cost_per_ticket = v.non_negative("cost_per_ticket", input.value.cost_per_ticket)?;
            let retention = v.percent("retention_percent", input.value.retention_percent)?;
            // 디플렉션 모드의 검수 입력은 누락 시 경고 없이 0으로 본다.
            let review_rate = match input.risk.review_rate_percent {
                Some(_) => v.percent("review_rate_percent", input.risk.review_rate_percent)?,
                None => 0.0,
            };
            let review_minutes = match input.risk.review_minutes_per_unit {
                Some(_) => {
                    v.non_negative("review_minutes_per_unit", input.risk.review_minutes_per_unit)?
                }
                None => 0.0,
            };
            let hourly_wage = match input.value.hourly_wage {
                Some(_) => v.non_negative("hourly_wage", input.value.hourly_wage)?,
                None => 0.0,
            };

            let review = costing::review_cost(costing::ReviewCostInput {
                monthly_volume,
                review_rate_percent: review_rate,
                review_minutes_per_unit: review_minutes,
                hourly_wage,
            });
            let mode = deflection_value(DeflectionValueInput {
                monthly_volume,
                cost_per_ticket,
                retention_percent: retention,
                ticket_minutes: config.policy.ticket_minutes,
            });
            (
                AsIs {
                    total_cost: mode.as_is_cost,
                    total_hours: 0.0,
                },
                review,
                mode.value_generated,
                mode.hours_avoided,
                (
                    keys::LABEL_VALUE_TICKET_DEFLECTION,
                    keys::LABEL_KPI_HOURS_AVOIDED,
                ),
                Note::RetentionTarget { percent: retention },
            )
        }
    };

    let result = assemble(
        input.kind,
        as_is,
        infra,
        tokens.monthly_cost_local,
        &review,
        value_generated,
        hours_freed,
        capex,
        labels,
        note,
        config,
    );
    Ok((result, v.finish()))
}

/// 공통 꼬리: 운영비 집계와 ROI/회수기간을 계산하고 출력 경계
/// 반올림을 적용해 결과 묶음을 만든다.
#[allow(clippy::too_many_arguments)]
fn assemble(
    kind: ProjectKind,
    as_is: AsIs,
    infra: f64,
    token_cost_local: f64,
    review: &ReviewCostResult,
    value_generated: f64,
    hours_freed: f64,
    capex: f64,
    labels: (&'static str, &'static str),
    note: Note,
    config: &Config,
) -> ScenarioResult {
    let total_ai_cost = infra + token_cost_local + review.review_cost;
    let net_saving = value_generated - total_ai_cost;
    let roi = costing::roi_percent(value_generated, total_ai_cost, config.policy.roi_sentinel);
    let payback =
        costing::payback_months(capex, net_saving, config.policy.payback_sentinel_months);

    ScenarioResult {
        kind,
        as_is: AsIs {
            total_cost: round_currency(as_is.total_cost),
            total_hours: round_ratio(as_is.total_hours),
        },
        to_be: ToBe {
            infra: round_currency(infra),
            tokens: round_currency(token_cost_local),
            review: round_currency(review.review_cost),
            total: round_currency(total_ai_cost),
        },
        outcome: Outcome {
            value_generated: round_currency(value_generated),
            net_saving: round_currency(net_saving),
            roi_percent: round_ratio(roi),
            payback_months: round_ratio(payback),
            value_label_key: labels.0,
            hours_freed: round_ratio(hours_freed),
            hours_label_key: labels.1,
            note,
        },
    }
}
