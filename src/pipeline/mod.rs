//! 2단계 파이프라인 엔진: AS-IS 수작업 비용 계산 → TO-BE AI 비용·리스크
//! 계산을 순서대로 합성한다. 각 단계는 단발성 순수 함수이고 상태를
//! 남기지 않는다.

pub mod ai_cost;
pub mod human_cost;

use serde::Serialize;

use crate::config::{Config, ConfigError};
use crate::cost_model::CostModelTable;
use crate::rounding::{round_currency, round_ratio};
use crate::validation::{ValidationError, ValidationWarning, Validator};

pub use ai_cost::{ai_cost, AiCostInput, AiCostResult};
pub use human_cost::{human_cost, HumanCostInput, HumanCostResult};

/// 파이프라인 원시 입력. 누락 가능한 필드는 `Option`으로 받고,
/// 검증 경계에서 0 보정 + 경고로 처리된다.
#[derive(Debug, Clone, Default)]
pub struct PipelineInput {
    /// 월간 처리 건수 [건/월]
    pub monthly_volume: Option<f64>,
    /// 건당 수작업 시간 [분/건]
    pub minutes_per_unit: Option<f64>,
    /// 담당 인력 시급 [현지통화/h]
    pub hourly_wage: Option<f64>,
    /// 수작업 오류율 (0~100) [%]
    pub human_error_rate_percent: Option<f64>,
    /// 치명 오류 1건당 손실 [현지통화/건]
    pub cost_per_critical_error: Option<f64>,

    /// 모델 식별자
    pub model: String,
    /// 건당 입력 토큰 수 [tok/건]
    pub tokens_in_per_unit: Option<f64>,
    /// 건당 출력 토큰 수 [tok/건]
    pub tokens_out_per_unit: Option<f64>,
    /// 고정 인프라 비용 [현지통화/월]
    pub fixed_infra_cost: Option<f64>,
    /// 건당 부대비용 단위 수
    pub ancillary_units_per_item: Option<f64>,
    /// 검수 대상 비율 (0~100) [%]
    pub review_rate_percent: Option<f64>,
    /// 건당 검수 시간 [분/건]
    pub review_minutes_per_unit: Option<f64>,
    /// AI 오류율 (0~100) [%]
    pub ai_error_rate_percent: Option<f64>,
    /// 건당 AI 응답 지연 [s/건]
    pub ai_seconds_per_unit: Option<f64>,
    /// 컴플라이언스 점수 (1~10). 누락 시 기여도 0으로 처리 + 경고.
    pub compliance_score: Option<f64>,
}

/// 파이프라인 실행 오류.
#[derive(Debug)]
pub enum PipelineError {
    /// 경계 검증 실패
    Validation(ValidationError),
    /// 정책 상수 결함 (FTE 시간 0 등)
    Config(ConfigError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Validation(e) => write!(f, "입력 검증 오류: {e}"),
            PipelineError::Config(e) => write!(f, "설정 오류: {e}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<ValidationError> for PipelineError {
    fn from(value: ValidationError) -> Self {
        PipelineError::Validation(value)
    }
}

impl From<ConfigError> for PipelineError {
    fn from(value: ConfigError) -> Self {
        PipelineError::Config(value)
    }
}

/// 두 단계의 전체 결과. 내부 정밀도 그대로 담고, 출력 경계 반올림은
/// `summary()`에서만 적용한다.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    pub baseline: HumanCostResult,
    pub ai: AiCostResult,
}

/// 보고·표시용 요약 (통화 2자리, 비율 1자리 반올림).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipelineSummary {
    pub as_is_cost: f64,
    pub as_is_hours: f64,
    pub fte_freed: f64,
    pub avoided_error_cost: f64,
    pub token_cost_local: f64,
    pub ancillary_cost: f64,
    pub execution_cost: f64,
    pub review_cost: f64,
    pub total_ai_cost: f64,
    pub roi_percent: f64,
    pub latency_improvement_percent: f64,
    pub viability_score: f64,
}

impl PipelineResult {
    pub fn summary(&self) -> PipelineSummary {
        PipelineSummary {
            as_is_cost: round_currency(self.baseline.monthly_cost),
            as_is_hours: round_ratio(self.baseline.total_hours),
            fte_freed: round_ratio(self.baseline.fte_freed),
            avoided_error_cost: round_currency(self.baseline.avoided_error_cost),
            token_cost_local: round_currency(self.ai.token_cost_local),
            ancillary_cost: round_currency(self.ai.ancillary_cost),
            execution_cost: round_currency(self.ai.execution_cost),
            review_cost: round_currency(self.ai.review_cost),
            total_ai_cost: round_currency(self.ai.total_ai_cost),
            roi_percent: round_ratio(self.ai.roi_percent),
            latency_improvement_percent: round_ratio(self.ai.latency_improvement_percent),
            viability_score: round_ratio(self.ai.viability_score),
        }
    }
}

/// 원시 입력을 검증한 뒤 AS-IS → TO-BE 두 단계를 순서대로 실행한다.
pub fn run(
    input: &PipelineInput,
    table: &CostModelTable,
    config: &Config,
) -> Result<(PipelineResult, Vec<ValidationWarning>), PipelineError> {
    let mut v = Validator::new();

    let monthly_volume = v.non_negative("monthly_volume", input.monthly_volume)?;
    let minutes_per_unit = v.non_negative("minutes_per_unit", input.minutes_per_unit)?;
    let hourly_wage = v.non_negative("hourly_wage", input.hourly_wage)?;
    let human_error_rate =
        v.percent("human_error_rate_percent", input.human_error_rate_percent)?;
    let cost_per_error =
        v.non_negative("cost_per_critical_error", input.cost_per_critical_error)?;

    let tokens_in = v.non_negative("tokens_in_per_unit", input.tokens_in_per_unit)?;
    let tokens_out = v.non_negative("tokens_out_per_unit", input.tokens_out_per_unit)?;
    let fixed_infra = v.non_negative("fixed_infra_cost", input.fixed_infra_cost)?;
    let ancillary_units =
        v.non_negative("ancillary_units_per_item", input.ancillary_units_per_item)?;
    let review_rate = v.percent("review_rate_percent", input.review_rate_percent)?;
    let review_minutes =
        v.non_negative("review_minutes_per_unit", input.review_minutes_per_unit)?;
    let ai_error_rate = v.percent("ai_error_rate_percent", input.ai_error_rate_percent)?;
    let ai_seconds = v.non_negative("ai_seconds_per_unit", input.ai_seconds_per_unit)?;
    let compliance = match input.compliance_score {
        Some(score) => v.compliance(score)?,
        None => {
            // 점수 누락 시 타당성 항 기여도 0 (fail-soft)
            v.non_negative("compliance_score", None)?
        }
    };

    let baseline = human_cost(
        HumanCostInput {
            monthly_volume,
            minutes_per_unit,
            hourly_wage,
            error_rate_percent: human_error_rate,
            cost_per_critical_error: cost_per_error,
        },
        &config.policy,
    )?;

    let ai_input = AiCostInput {
        monthly_volume,
        model: input.model.clone(),
        tokens_in_per_unit: tokens_in,
        tokens_out_per_unit: tokens_out,
        fixed_infra_cost: fixed_infra,
        ancillary_units_per_item: ancillary_units,
        review_rate_percent: review_rate,
        review_minutes_per_unit: review_minutes,
        hourly_wage,
        error_rate_percent: ai_error_rate,
        human_seconds_per_unit: minutes_per_unit * 60.0,
        ai_seconds_per_unit: ai_seconds,
        compliance_score: compliance,
    };

    let ai = ai_cost(
        &ai_input,
        &baseline,
        table,
        &config.policy,
        &config.viability_weights,
    );
    if ai.price_is_fallback {
        v.warn_unknown_model(&input.model);
    }

    Ok((PipelineResult { baseline, ai }, v.finish()))
}
