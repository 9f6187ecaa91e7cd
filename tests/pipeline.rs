//! 2단계 파이프라인(AS-IS → TO-BE) 회귀 테스트.
use genai_viability_toolbox::config::{Config, ConfigError, Policy};
use genai_viability_toolbox::cost_model::builtin_table;
use genai_viability_toolbox::pipeline::{self, human_cost, HumanCostInput, PipelineInput};
use genai_viability_toolbox::validation::ValidationWarning;

fn pipeline_input() -> PipelineInput {
    PipelineInput {
        monthly_volume: Some(5000.0),
        minutes_per_unit: Some(5.0),
        hourly_wage: Some(45.0),
        human_error_rate_percent: Some(2.0),
        cost_per_critical_error: Some(100.0),
        model: "gemini-2.5-flash".to_string(),
        tokens_in_per_unit: Some(2000.0),
        tokens_out_per_unit: Some(500.0),
        fixed_infra_cost: Some(200.0),
        ancillary_units_per_item: Some(0.0),
        review_rate_percent: Some(20.0),
        review_minutes_per_unit: Some(1.0),
        ai_error_rate_percent: Some(10.0),
        ai_seconds_per_unit: Some(30.0),
        compliance_score: Some(8.0),
    }
}

#[test]
fn baseline_stage_matches_reference_case() {
    let result = human_cost(
        HumanCostInput {
            monthly_volume: 5000.0,
            minutes_per_unit: 5.0,
            hourly_wage: 45.0,
            error_rate_percent: 2.0,
            cost_per_critical_error: 100.0,
        },
        &Policy::default(),
    )
    .expect("human cost");
    assert!((result.total_hours - 416.6667).abs() < 1e-3);
    assert!((result.monthly_cost - 18_750.0).abs() < 1e-9);
    // 416.67h / 160h = 2.604 FTE
    assert!((result.fte_freed - 2.6042).abs() < 1e-3);
    // 5000 * 2% * 100 = 10,000
    assert!((result.avoided_error_cost - 10_000.0).abs() < 1e-9);
}

#[test]
fn zero_fte_hours_is_a_configuration_error() {
    let mut policy = Policy::default();
    policy.fte_hours_per_month = 0.0;
    let err = human_cost(
        HumanCostInput {
            monthly_volume: 100.0,
            minutes_per_unit: 1.0,
            hourly_wage: 10.0,
            error_rate_percent: 0.0,
            cost_per_critical_error: 0.0,
        },
        &policy,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidFteHours(_)));
}

#[test]
fn token_cost_stage_matches_reference_prices() {
    let (result, _) =
        pipeline::run(&pipeline_input(), &builtin_table(), &Config::default()).expect("run");
    // (2000*0.075 + 500*0.30)/1e6 * 5000 = 1.5 USD => 9.0 현지통화
    assert!((result.ai.token_cost_usd - 1.5).abs() < 1e-9);
    assert!((result.ai.token_cost_local - 9.0).abs() < 1e-9);
}

#[test]
fn latency_improvement_uses_manual_time_as_denominator() {
    let (result, _) =
        pipeline::run(&pipeline_input(), &builtin_table(), &Config::default()).expect("run");
    // 사람 5분 = 300s, AI 30s => (300-30)/300 = 90%
    assert!((result.ai.latency_improvement_percent - 90.0).abs() < 1e-9);
}

#[test]
fn latency_improvement_is_zero_when_manual_time_is_zero() {
    let mut input = pipeline_input();
    input.minutes_per_unit = Some(0.0);
    let (result, _) = pipeline::run(&input, &builtin_table(), &Config::default()).expect("run");
    assert_eq!(result.ai.latency_improvement_percent, 0.0);
}

#[test]
fn viability_score_blends_weighted_terms() {
    let (result, _) =
        pipeline::run(&pipeline_input(), &builtin_table(), &Config::default()).expect("run");
    // 0.4*(100-10) + 0.4*90 + 0.2*(8*10) = 36 + 36 + 16 = 88
    assert!((result.ai.viability_score - 88.0).abs() < 1e-9);
}

#[test]
fn viability_score_is_not_clamped_above_100() {
    let mut cfg = Config::default();
    cfg.viability_weights.error_quality = 1.0;
    cfg.viability_weights.latency = 1.0;
    cfg.viability_weights.compliance = 1.0;
    let (result, _) = pipeline::run(&pipeline_input(), &builtin_table(), &cfg).expect("run");
    assert!(result.ai.viability_score > 100.0);
}

#[test]
fn zero_total_cost_with_positive_gain_hits_roi_sentinel() {
    let mut input = pipeline_input();
    input.tokens_in_per_unit = Some(0.0);
    input.tokens_out_per_unit = Some(0.0);
    input.fixed_infra_cost = Some(0.0);
    input.review_rate_percent = Some(0.0);
    let (result, _) = pipeline::run(&input, &builtin_table(), &Config::default()).expect("run");
    assert_eq!(result.ai.total_ai_cost, 0.0);
    assert!(result.ai.total_gain > 0.0);
    assert_eq!(result.ai.roi_percent, 9999.0);
}

#[test]
fn zero_cost_and_zero_gain_yields_zero_roi() {
    let mut input = pipeline_input();
    input.monthly_volume = Some(0.0);
    input.fixed_infra_cost = Some(0.0);
    let (result, _) = pipeline::run(&input, &builtin_table(), &Config::default()).expect("run");
    assert_eq!(result.ai.total_ai_cost, 0.0);
    assert_eq!(result.ai.roi_percent, 0.0);
}

#[test]
fn cost_subtotals_never_negative() {
    let (result, _) =
        pipeline::run(&pipeline_input(), &builtin_table(), &Config::default()).expect("run");
    assert!(result.ai.token_cost_local >= 0.0);
    assert!(result.ai.ancillary_cost >= 0.0);
    assert!(result.ai.execution_cost >= 0.0);
    assert!(result.ai.review_cost >= 0.0);
    assert!(result.ai.total_ai_cost >= 0.0);
}

#[test]
fn run_is_idempotent() {
    let table = builtin_table();
    let cfg = Config::default();
    let (first, _) = pipeline::run(&pipeline_input(), &table, &cfg).expect("run");
    let (second, _) = pipeline::run(&pipeline_input(), &table, &cfg).expect("run");
    assert_eq!(first, second);
}

#[test]
fn compliance_score_out_of_range_is_rejected() {
    let mut input = pipeline_input();
    input.compliance_score = Some(11.0);
    assert!(pipeline::run(&input, &builtin_table(), &Config::default()).is_err());
}

#[test]
fn missing_compliance_contributes_zero_with_warning() {
    let mut input = pipeline_input();
    input.compliance_score = None;
    let (result, warnings) =
        pipeline::run(&input, &builtin_table(), &Config::default()).expect("run");
    // 0.4*90 + 0.4*90 + 0.2*0 = 72
    assert!((result.ai.viability_score - 72.0).abs() < 1e-9);
    assert!(warnings.iter().any(|w| matches!(
        w,
        ValidationWarning::MissingDefaultedToZero { field } if *field == "compliance_score"
    )));
}

#[test]
fn summary_rounds_at_the_output_boundary() {
    let (result, _) =
        pipeline::run(&pipeline_input(), &builtin_table(), &Config::default()).expect("run");
    let summary = result.summary();
    assert!((summary.as_is_hours - 416.7).abs() < 1e-9);
    assert!((summary.fte_freed - 2.6).abs() < 1e-9);
    // 내부 값은 반올림 전 정밀도를 유지
    assert!((result.baseline.total_hours - 416.6667).abs() < 1e-3);
}
