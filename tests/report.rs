//! 보고서 협력자 경계(재시도 정책, 복구 가능성) 테스트.
use std::cell::Cell;

use genai_viability_toolbox::config::Config;
use genai_viability_toolbox::cost_model::builtin_table;
use genai_viability_toolbox::i18n::Translator;
use genai_viability_toolbox::report::{
    default_system_prompt, generate_with_retry, LocalTemplateGenerator, ReportContext,
    ReportError, ReportGenerator,
};
use genai_viability_toolbox::scenario::{
    evaluate, ArchitectureCosts, ProjectKind, RiskInputs, ScenarioInput, ValueDrivers,
};

/// 처음 `failures`번은 실패하고 그 뒤에는 성공하는 스크립트 제공자.
struct FlakyGenerator {
    failures: Cell<u32>,
}

impl ReportGenerator for FlakyGenerator {
    fn generate(&self, _system: &str, _prompt: &str) -> Result<String, ReportError> {
        if self.failures.get() > 0 {
            self.failures.set(self.failures.get() - 1);
            Err(ReportError::Timeout)
        } else {
            Ok("relatório".to_string())
        }
    }
}

fn sample_result() -> genai_viability_toolbox::scenario::ScenarioResult {
    let input = ScenarioInput {
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
    };
    let (result, _) = evaluate(&input, &builtin_table(), &Config::default()).expect("evaluate");
    result
}

#[test]
fn one_failure_is_absorbed_by_the_retry() {
    let generator = FlakyGenerator {
        failures: Cell::new(1),
    };
    let text = generate_with_retry(&generator, "sys", "prompt").expect("retried ok");
    assert_eq!(text, "relatório");
}

#[test]
fn two_failures_exhaust_the_policy() {
    let generator = FlakyGenerator {
        failures: Cell::new(2),
    };
    let err = generate_with_retry(&generator, "sys", "prompt").unwrap_err();
    match err {
        ReportError::Exhausted { attempts, last } => {
            assert_eq!(attempts, 2);
            // 마지막 실패의 구조화된 변형이 보존되어야 한다
            assert_eq!(*last, ReportError::Timeout);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn prompt_contains_formatted_financials() {
    let result = sample_result();
    let tr = Translator::new("en");
    let context = ReportContext::from_scenario(&result, "gemini-2.5-flash", &tr);
    let prompt = context.build_prompt();
    assert!(prompt.contains("18,750.00"), "prompt:\n{prompt}");
    assert!(prompt.contains("gemini-2.5-flash"));
    assert!(prompt.contains("FTE savings"));
}

#[test]
fn saving_percent_is_zero_when_as_is_cost_is_zero() {
    let mut input = ScenarioInput {
        kind: ProjectKind::Automation,
        value: ValueDrivers::default(),
        architecture: ArchitectureCosts {
            model: "gemini-2.5-flash".to_string(),
            ..ArchitectureCosts::default()
        },
        risk: RiskInputs {
            review_rate_percent: Some(0.0),
            review_minutes_per_unit: Some(0.0),
        },
    };
    input.value.monthly_volume = Some(0.0);
    input.value.minutes_per_unit = Some(0.0);
    input.value.hourly_wage = Some(0.0);
    let (result, _) = evaluate(&input, &builtin_table(), &Config::default()).expect("evaluate");
    let tr = Translator::new("en");
    let context = ReportContext::from_scenario(&result, "gemini-2.5-flash", &tr);
    assert_eq!(context.saving_percent, 0.0);
}

#[test]
fn local_template_generator_never_fails() {
    let result = sample_result();
    let tr = Translator::new("ko");
    let context = ReportContext::from_scenario(&result, "gemini-2.5-flash", &tr);
    let text = LocalTemplateGenerator
        .generate(default_system_prompt(), &context.build_prompt())
        .expect("local render");
    assert!(text.starts_with("# Viability Report"));
}
