//! 시나리오 엔진(자동화/디플렉션) 회귀 테스트.
use genai_viability_toolbox::config::Config;
use genai_viability_toolbox::cost_model::{builtin_table, CostProvider, StaticCostProvider};
use genai_viability_toolbox::scenario::{
    evaluate, ArchitectureCosts, ProjectKind, RiskInputs, ScenarioInput, ValueDrivers,
};
use genai_viability_toolbox::validation::{ValidationError, ValidationWarning};

fn automation_input() -> ScenarioInput {
    ScenarioInput {
        kind: ProjectKind::Automation,
        value: ValueDrivers {
            monthly_volume: Some(5000.0),
            minutes_per_unit: Some(5.0),
            hourly_wage: Some(45.0),
            ..ValueDrivers::default()
        },
        architecture: ArchitectureCosts {
            model: "gemini-2.5-flash".to_string(),
            tokens_in_per_unit: Some(2000.0),
            tokens_out_per_unit: Some(500.0),
            monthly_infra_cost: Some(200.0),
            implementation_capex: Some(10_000.0),
        },
        risk: RiskInputs {
            review_rate_percent: Some(20.0),
            review_minutes_per_unit: Some(1.0),
        },
    }
}

fn deflection_input(retention_percent: f64) -> ScenarioInput {
    ScenarioInput {
        kind: ProjectKind::Deflection,
        value: ValueDrivers {
            monthly_volume: Some(5000.0),
            cost_per_ticket: Some(25.0),
            retention_percent: Some(retention_percent),
            ..ValueDrivers::default()
        },
        architecture: ArchitectureCosts {
            model: "gemini-2.5-flash".to_string(),
            tokens_in_per_unit: Some(2000.0),
            tokens_out_per_unit: Some(500.0),
            monthly_infra_cost: Some(200.0),
            implementation_capex: Some(10_000.0),
        },
        risk: RiskInputs::default(),
    }
}

#[test]
fn automation_baseline_matches_reference_case() {
    // V=5000, 5분/건, 시급 45 => 416.7h, 18,750
    let (result, warnings) =
        evaluate(&automation_input(), &builtin_table(), &Config::default()).expect("evaluate");
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert!((result.as_is.total_hours - 416.7).abs() < 1e-9);
    assert!((result.as_is.total_cost - 18_750.0).abs() < 1e-9);
    assert!((result.outcome.value_generated - 18_750.0).abs() < 1e-9);
}

#[test]
fn automation_hours_freed_subtracts_review_hours() {
    // 검수 시간 = 5000 * 0.2 * 1 / 60 = 16.67h => 416.67 - 16.67 = 400.0
    let (result, _) =
        evaluate(&automation_input(), &builtin_table(), &Config::default()).expect("evaluate");
    assert!((result.outcome.hours_freed - 400.0).abs() < 1e-9);
}

#[test]
fn automation_zero_review_frees_all_baseline_hours() {
    let mut input = automation_input();
    input.risk.review_rate_percent = Some(0.0);
    let (result, _) = evaluate(&input, &builtin_table(), &Config::default()).expect("evaluate");
    assert_eq!(result.outcome.hours_freed, result.as_is.total_hours);
}

#[test]
fn token_cost_converts_reference_prices() {
    // (2000*0.075 + 500*0.30)/1e6 * 5000 = 1.5 USD => * 6.0 = 9.0 현지통화
    let (result, _) =
        evaluate(&automation_input(), &builtin_table(), &Config::default()).expect("evaluate");
    assert!((result.to_be.tokens - 9.0).abs() < 1e-9, "tokens={}", result.to_be.tokens);
}

#[test]
fn deflection_value_is_retained_tickets_times_unit_cost() {
    // 5000 * 30% * 25 = 37,500 / 회피 시간 = 1500건 * 10분 / 60 = 250h
    let (result, _) =
        evaluate(&deflection_input(30.0), &builtin_table(), &Config::default()).expect("evaluate");
    assert!((result.outcome.value_generated - 37_500.0).abs() < 1e-9);
    assert!((result.as_is.total_cost - 125_000.0).abs() < 1e-9);
    assert!((result.outcome.hours_freed - 250.0).abs() < 1e-9);
    assert_eq!(result.as_is.total_hours, 0.0);
}

#[test]
fn deflection_zero_retention_generates_no_value() {
    let (result, _) =
        evaluate(&deflection_input(0.0), &builtin_table(), &Config::default()).expect("evaluate");
    assert_eq!(result.outcome.value_generated, 0.0);
    // 가치 0, 운영비 양수 => 순절감 음수 => 회수기간 센티널
    assert!(result.outcome.net_saving < 0.0);
    assert_eq!(result.outcome.payback_months, 999.0);
}

#[test]
fn zero_ai_cost_with_positive_value_hits_roi_sentinel() {
    let mut input = automation_input();
    input.architecture.tokens_in_per_unit = Some(0.0);
    input.architecture.tokens_out_per_unit = Some(0.0);
    input.architecture.monthly_infra_cost = Some(0.0);
    input.risk.review_rate_percent = Some(0.0);
    let (result, _) = evaluate(&input, &builtin_table(), &Config::default()).expect("evaluate");
    assert_eq!(result.to_be.total, 0.0);
    assert_eq!(result.outcome.roi_percent, 9999.0);
}

#[test]
fn configured_ticket_minutes_drive_hours_estimate() {
    let mut cfg = Config::default();
    cfg.policy.ticket_minutes = 20.0;
    let (result, _) = evaluate(&deflection_input(30.0), &builtin_table(), &cfg).expect("evaluate");
    assert!((result.outcome.hours_freed - 500.0).abs() < 1e-9);
}

#[test]
fn monetary_subtotals_never_negative() {
    let (result, _) =
        evaluate(&automation_input(), &builtin_table(), &Config::default()).expect("evaluate");
    assert!(result.as_is.total_cost >= 0.0);
    assert!(result.to_be.infra >= 0.0);
    assert!(result.to_be.tokens >= 0.0);
    assert!(result.to_be.review >= 0.0);
    assert!(result.to_be.total >= 0.0);
    assert!(result.outcome.value_generated >= 0.0);
}

#[test]
fn evaluation_is_idempotent() {
    let table = builtin_table();
    let cfg = Config::default();
    let (first, _) = evaluate(&automation_input(), &table, &cfg).expect("evaluate");
    let (second, _) = evaluate(&automation_input(), &table, &cfg).expect("evaluate");
    assert_eq!(first, second);
}

#[test]
fn negative_volume_is_rejected_at_the_boundary() {
    let mut input = automation_input();
    input.value.monthly_volume = Some(-1.0);
    let err = evaluate(&input, &builtin_table(), &Config::default()).unwrap_err();
    assert!(matches!(err, ValidationError::NegativeField { field, .. } if field == "monthly_volume"));
}

#[test]
fn negative_review_wage_in_deflection_mode_is_rejected() {
    let mut input = deflection_input(30.0);
    input.value.hourly_wage = Some(-45.0);
    input.risk.review_rate_percent = Some(20.0);
    input.risk.review_minutes_per_unit = Some(1.0);
    let err = evaluate(&input, &builtin_table(), &Config::default()).unwrap_err();
    assert!(matches!(err, ValidationError::NegativeField { field, .. } if field == "hourly_wage"));
}

#[test]
fn missing_volume_defaults_to_zero_with_warning() {
    let mut input = automation_input();
    input.value.monthly_volume = None;
    let (result, warnings) =
        evaluate(&input, &builtin_table(), &Config::default()).expect("evaluate");
    assert_eq!(result.as_is.total_cost, 0.0);
    assert!(warnings.iter().any(|w| matches!(
        w,
        ValidationWarning::MissingDefaultedToZero { field } if *field == "monthly_volume"
    )));
}

#[test]
fn injected_table_overrides_builtin_fx_rate() {
    let mut table = builtin_table();
    table.usd_rate = 12.0;
    let provider = StaticCostProvider { table };
    let (result, _) = evaluate(
        &automation_input(),
        &provider.cost_table(),
        &Config::default(),
    )
    .expect("evaluate");
    // 1.5 USD * 12.0 = 18.0 현지통화
    assert!((result.to_be.tokens - 18.0).abs() < 1e-9);
}

#[test]
fn unknown_model_falls_back_to_zero_price_with_warning() {
    let mut input = automation_input();
    input.architecture.model = "modelo-misterioso".to_string();
    let (result, warnings) =
        evaluate(&input, &builtin_table(), &Config::default()).expect("evaluate");
    assert_eq!(result.to_be.tokens, 0.0);
    assert!(warnings
        .iter()
        .any(|w| matches!(w, ValidationWarning::UnknownModel { .. })));
}
