use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::cost_model::CostModelTable;
use crate::i18n::{keys, Translator};
use crate::pipeline::{self, PipelineInput};
use crate::report::{
    default_system_prompt, generate_with_retry, LocalTemplateGenerator, ReportContext,
};
use crate::rounding::format_currency;
use crate::scenario::{
    self, ArchitectureCosts, ProjectKind, RiskInputs, ScenarioInput, ScenarioResult, ValueDrivers,
};
use crate::validation::ValidationWarning;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Automation,
    Deflection,
    Pipeline,
    CostTable,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_AUTOMATION));
    println!("{}", tr.t(keys::MAIN_MENU_DEFLECTION));
    println!("{}", tr.t(keys::MAIN_MENU_PIPELINE));
    println!("{}", tr.t(keys::MAIN_MENU_COST_TABLE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Automation),
            "2" => return Ok(MenuChoice::Deflection),
            "3" => return Ok(MenuChoice::Pipeline),
            "4" => return Ok(MenuChoice::CostTable),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 자동화 시나리오 메뉴를 처리한다.
pub fn handle_automation(
    tr: &Translator,
    cfg: &Config,
    table: &CostModelTable,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::AUTOMATION_HEADING));
    let monthly_volume = read_f64(tr, keys::PROMPT_VOLUME)?;
    let minutes_per_unit = read_f64(tr, keys::PROMPT_MINUTES_PER_UNIT)?;
    let hourly_wage = read_f64(tr, keys::PROMPT_HOURLY_WAGE)?;
    let architecture = read_architecture(tr)?;
    let review_rate = read_f64(tr, keys::PROMPT_REVIEW_RATE)?;
    let review_minutes = read_f64(tr, keys::PROMPT_REVIEW_MINUTES)?;

    let input = ScenarioInput {
        kind: ProjectKind::Automation,
        value: ValueDrivers {
            monthly_volume: Some(monthly_volume),
            minutes_per_unit: Some(minutes_per_unit),
            hourly_wage: Some(hourly_wage),
            ..ValueDrivers::default()
        },
        architecture,
        risk: RiskInputs {
            review_rate_percent: Some(review_rate),
            review_minutes_per_unit: Some(review_minutes),
        },
    };

    let (result, warnings) = scenario::evaluate(&input, table, cfg)?;
    print_warnings(tr, &warnings);
    print_scenario(tr, &result);
    offer_report(tr, &result, &input.architecture.model)?;
    Ok(())
}

/// 디플렉션 시나리오 메뉴를 처리한다.
pub fn handle_deflection(
    tr: &Translator,
    cfg: &Config,
    table: &CostModelTable,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DEFLECTION_HEADING));
    let monthly_volume = read_f64(tr, keys::PROMPT_VOLUME)?;
    let cost_per_ticket = read_f64(tr, keys::PROMPT_COST_PER_TICKET)?;
    let retention = read_f64(tr, keys::PROMPT_RETENTION)?;
    let architecture = read_architecture(tr)?;

    let input = ScenarioInput {
        kind: ProjectKind::Deflection,
        value: ValueDrivers {
            monthly_volume: Some(monthly_volume),
            cost_per_ticket: Some(cost_per_ticket),
            retention_percent: Some(retention),
            ..ValueDrivers::default()
        },
        architecture,
        risk: RiskInputs::default(),
    };

    let (result, warnings) = scenario::evaluate(&input, table, cfg)?;
    print_warnings(tr, &warnings);
    print_scenario(tr, &result);
    offer_report(tr, &result, &input.architecture.model)?;
    Ok(())
}

/// 2단계 파이프라인 메뉴를 처리한다.
pub fn handle_pipeline(
    tr: &Translator,
    cfg: &Config,
    table: &CostModelTable,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PIPELINE_HEADING));
    let input = PipelineInput {
        monthly_volume: Some(read_f64(tr, keys::PROMPT_VOLUME)?),
        minutes_per_unit: Some(read_f64(tr, keys::PROMPT_MINUTES_PER_UNIT)?),
        hourly_wage: Some(read_f64(tr, keys::PROMPT_HOURLY_WAGE)?),
        human_error_rate_percent: Some(read_f64(tr, keys::PROMPT_HUMAN_ERROR_RATE)?),
        cost_per_critical_error: Some(read_f64(tr, keys::PROMPT_COST_PER_ERROR)?),
        model: read_line(&tr.t(keys::PROMPT_MODEL))?.trim().to_string(),
        tokens_in_per_unit: Some(read_f64(tr, keys::PROMPT_TOKENS_IN)?),
        tokens_out_per_unit: Some(read_f64(tr, keys::PROMPT_TOKENS_OUT)?),
        fixed_infra_cost: Some(read_f64(tr, keys::PROMPT_INFRA)?),
        ancillary_units_per_item: Some(read_f64(tr, keys::PROMPT_OCR_UNITS)?),
        review_rate_percent: Some(read_f64(tr, keys::PROMPT_REVIEW_RATE)?),
        review_minutes_per_unit: Some(read_f64(tr, keys::PROMPT_REVIEW_MINUTES)?),
        ai_error_rate_percent: Some(read_f64(tr, keys::PROMPT_AI_ERROR_RATE)?),
        ai_seconds_per_unit: Some(read_f64(tr, keys::PROMPT_AI_LATENCY)?),
        compliance_score: Some(read_f64(tr, keys::PROMPT_COMPLIANCE)?),
    };

    let (result, warnings) = pipeline::run(&input, table, cfg)?;
    print_warnings(tr, &warnings);
    let s = result.summary();
    println!("{} {}", tr.t(keys::RESULT_AS_IS_COST), format_currency(s.as_is_cost));
    println!("{} {:.1}", tr.t(keys::RESULT_AS_IS_HOURS), s.as_is_hours);
    println!("{} {:.1}", tr.t(keys::RESULT_FTE), s.fte_freed);
    println!(
        "{} {}",
        tr.t(keys::RESULT_AVOIDED_ERROR),
        format_currency(s.avoided_error_cost)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_TO_BE_TOKENS),
        format_currency(s.token_cost_local)
    );
    println!("{} {}", tr.t(keys::RESULT_TO_BE_REVIEW), format_currency(s.review_cost));
    println!("{} {}", tr.t(keys::RESULT_TO_BE_TOTAL), format_currency(s.total_ai_cost));
    println!("{} {:.1}", tr.t(keys::RESULT_ROI), s.roi_percent);
    println!(
        "{} {:.1}",
        tr.t(keys::RESULT_LATENCY_IMPROVEMENT),
        s.latency_improvement_percent
    );
    println!("{} {:.1}", tr.t(keys::RESULT_VIABILITY), s.viability_score);
    Ok(())
}

/// 비용 참조 테이블을 표시한다.
pub fn handle_cost_table(tr: &Translator, table: &CostModelTable) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COST_TABLE_HEADING));
    println!("{} {:.2}", tr.t(keys::COST_TABLE_USD_RATE), table.usd_rate);
    println!(
        "{} {:.4}",
        tr.t(keys::COST_TABLE_OCR_UNIT),
        table.ancillary.ocr_unit_cost
    );
    for model in table.known_models() {
        let lookup = table.price_for(model);
        println!(
            "  {model}: in {:.3} / out {:.3} [USD/1M tok]",
            lookup.price.input_usd_per_mtok, lookup.price.output_usd_per_mtok
        );
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let lang = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            match lang.trim() {
                "ko" | "en" => cfg.language = Some(lang.trim().to_string()),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "2" => {
            let hours = read_f64(tr, keys::SETTINGS_PROMPT_FTE_HOURS)?;
            if hours > 0.0 {
                cfg.policy.fte_hours_per_month = hours;
            } else {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
        }
        "3" => {
            let minutes = read_f64(tr, keys::SETTINGS_PROMPT_TICKET_MINUTES)?;
            if minutes >= 0.0 {
                cfg.policy.ticket_minutes = minutes;
            } else {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_architecture(tr: &Translator) -> Result<ArchitectureCosts, AppError> {
    Ok(ArchitectureCosts {
        model: read_line(&tr.t(keys::PROMPT_MODEL))?.trim().to_string(),
        tokens_in_per_unit: Some(read_f64(tr, keys::PROMPT_TOKENS_IN)?),
        tokens_out_per_unit: Some(read_f64(tr, keys::PROMPT_TOKENS_OUT)?),
        monthly_infra_cost: Some(read_f64(tr, keys::PROMPT_INFRA)?),
        implementation_capex: Some(read_f64(tr, keys::PROMPT_CAPEX)?),
    })
}

fn print_warnings(tr: &Translator, warnings: &[ValidationWarning]) {
    for w in warnings {
        eprintln!("{}: {w}", tr.t(keys::WARNING_PREFIX));
    }
}

fn print_scenario(tr: &Translator, result: &ScenarioResult) {
    println!(
        "{} {}",
        tr.t(keys::RESULT_AS_IS_COST),
        format_currency(result.as_is.total_cost)
    );
    println!("{} {:.1}", tr.t(keys::RESULT_AS_IS_HOURS), result.as_is.total_hours);
    println!(
        "{} {}",
        tr.t(keys::RESULT_TO_BE_INFRA),
        format_currency(result.to_be.infra)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_TO_BE_TOKENS),
        format_currency(result.to_be.tokens)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_TO_BE_REVIEW),
        format_currency(result.to_be.review)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_TO_BE_TOTAL),
        format_currency(result.to_be.total)
    );
    println!(
        "{} {} ({})",
        tr.t(keys::RESULT_VALUE_GENERATED),
        format_currency(result.outcome.value_generated),
        tr.t(result.outcome.value_label_key)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_NET_SAVING),
        format_currency(result.outcome.net_saving)
    );
    println!("{} {:.1}", tr.t(keys::RESULT_ROI), result.outcome.roi_percent);
    println!("{} {:.1}", tr.t(keys::RESULT_PAYBACK), result.outcome.payback_months);
    println!(
        "{}: {:.1}",
        tr.t(result.outcome.hours_label_key),
        result.outcome.hours_freed
    );
}

fn offer_report(tr: &Translator, result: &ScenarioResult, model: &str) -> Result<(), AppError> {
    let answer = read_line(&tr.t(keys::PROMPT_GENERATE_REPORT))?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }
    let context = ReportContext::from_scenario(result, model, tr);
    let generator = LocalTemplateGenerator;
    match generate_with_retry(&generator, default_system_prompt(), &context.build_prompt()) {
        Ok(text) => {
            println!("{}", tr.t(keys::REPORT_HEADING));
            println!("{text}");
        }
        Err(err) => {
            // 보고서 실패는 복구 가능: 수치 결과는 이미 표시됨
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            println!("{}", tr.t(keys::REPORT_FAILED));
        }
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(&tr.t(prompt_key))?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
