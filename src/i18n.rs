use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_AUTOMATION: &str = "main_menu.automation";
    pub const MAIN_MENU_DEFLECTION: &str = "main_menu.deflection";
    pub const MAIN_MENU_PIPELINE: &str = "main_menu.pipeline";
    pub const MAIN_MENU_COST_TABLE: &str = "main_menu.cost_table";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const AUTOMATION_HEADING: &str = "automation.heading";
    pub const DEFLECTION_HEADING: &str = "deflection.heading";
    pub const PIPELINE_HEADING: &str = "pipeline.heading";
    pub const COST_TABLE_HEADING: &str = "cost_table.heading";
    pub const COST_TABLE_USD_RATE: &str = "cost_table.usd_rate";
    pub const COST_TABLE_OCR_UNIT: &str = "cost_table.ocr_unit";
    pub const SETTINGS_HEADING: &str = "settings.heading";

    pub const PROMPT_VOLUME: &str = "prompt.volume";
    pub const PROMPT_MINUTES_PER_UNIT: &str = "prompt.minutes_per_unit";
    pub const PROMPT_HOURLY_WAGE: &str = "prompt.hourly_wage";
    pub const PROMPT_COST_PER_TICKET: &str = "prompt.cost_per_ticket";
    pub const PROMPT_RETENTION: &str = "prompt.retention";
    pub const PROMPT_MODEL: &str = "prompt.model";
    pub const PROMPT_TOKENS_IN: &str = "prompt.tokens_in";
    pub const PROMPT_TOKENS_OUT: &str = "prompt.tokens_out";
    pub const PROMPT_INFRA: &str = "prompt.infra";
    pub const PROMPT_CAPEX: &str = "prompt.capex";
    pub const PROMPT_REVIEW_RATE: &str = "prompt.review_rate";
    pub const PROMPT_REVIEW_MINUTES: &str = "prompt.review_minutes";
    pub const PROMPT_HUMAN_ERROR_RATE: &str = "prompt.human_error_rate";
    pub const PROMPT_COST_PER_ERROR: &str = "prompt.cost_per_error";
    pub const PROMPT_AI_ERROR_RATE: &str = "prompt.ai_error_rate";
    pub const PROMPT_AI_LATENCY: &str = "prompt.ai_latency";
    pub const PROMPT_COMPLIANCE: &str = "prompt.compliance";
    pub const PROMPT_OCR_UNITS: &str = "prompt.ocr_units";
    pub const PROMPT_GENERATE_REPORT: &str = "prompt.generate_report";

    pub const RESULT_AS_IS_COST: &str = "result.as_is_cost";
    pub const RESULT_AS_IS_HOURS: &str = "result.as_is_hours";
    pub const RESULT_TO_BE_INFRA: &str = "result.to_be_infra";
    pub const RESULT_TO_BE_TOKENS: &str = "result.to_be_tokens";
    pub const RESULT_TO_BE_REVIEW: &str = "result.to_be_review";
    pub const RESULT_TO_BE_TOTAL: &str = "result.to_be_total";
    pub const RESULT_VALUE_GENERATED: &str = "result.value_generated";
    pub const RESULT_NET_SAVING: &str = "result.net_saving";
    pub const RESULT_ROI: &str = "result.roi";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const RESULT_FTE: &str = "result.fte";
    pub const RESULT_AVOIDED_ERROR: &str = "result.avoided_error";
    pub const RESULT_LATENCY_IMPROVEMENT: &str = "result.latency_improvement";
    pub const RESULT_VIABILITY: &str = "result.viability";

    pub const LABEL_VALUE_FTE_SAVINGS: &str = "label.value_fte_savings";
    pub const LABEL_VALUE_TICKET_DEFLECTION: &str = "label.value_ticket_deflection";
    pub const LABEL_KPI_HOURS_FREED: &str = "label.kpi_hours_freed";
    pub const LABEL_KPI_HOURS_AVOIDED: &str = "label.kpi_hours_avoided";
    pub const NOTE_REVIEW_SHARE: &str = "note.review_share";
    pub const NOTE_RETENTION_TARGET: &str = "note.retention_target";

    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_FTE_HOURS: &str = "settings.prompt_fte_hours";
    pub const SETTINGS_PROMPT_TICKET_MINUTES: &str = "settings.prompt_ticket_minutes";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_FAILED: &str = "report.failed";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 내장 영어 → 내장 한국어 순으로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return v.clone();
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)).to_string(),
            Language::Ko => ko(key).to_string(),
        }
    }

    /// "{percent}" 자리 표시자를 채운 번역 문자열을 만든다.
    pub fn t_percent(&self, key: &str, percent: f64) -> String {
        self.t(key).replace("{percent}", &format!("{percent:.0}"))
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        WARNING_PREFIX => "경고",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== GenAI Viability Toolbox ===",
        MAIN_MENU_AUTOMATION => "1) 자동화 시나리오 분석 (FTE 절감)",
        MAIN_MENU_DEFLECTION => "2) 디플렉션 시나리오 분석 (FAQ/티켓 회피)",
        MAIN_MENU_PIPELINE => "3) 2단계 파이프라인 (AS-IS → TO-BE 타당성)",
        MAIN_MENU_COST_TABLE => "4) 비용 테이블 조회",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        AUTOMATION_HEADING => "\n-- 자동화 시나리오 (백오피스) --",
        DEFLECTION_HEADING => "\n-- 디플렉션 시나리오 (프런트오피스) --",
        PIPELINE_HEADING => "\n-- 2단계 타당성 파이프라인 --",
        COST_TABLE_HEADING => "\n-- 비용 참조 테이블 --",
        COST_TABLE_USD_RATE => "환율 [현지통화/USD]:",
        COST_TABLE_OCR_UNIT => "OCR 건당 단가:",
        SETTINGS_HEADING => "\n-- 설정 --",
        PROMPT_VOLUME => "월간 건수: ",
        PROMPT_MINUTES_PER_UNIT => "건당 수작업 시간 [분]: ",
        PROMPT_HOURLY_WAGE => "담당 인력 시급: ",
        PROMPT_COST_PER_TICKET => "티켓 1건당 비용: ",
        PROMPT_RETENTION => "AI 단독 해결 비율 [%]: ",
        PROMPT_MODEL => "모델 식별자 (ex: gemini-2.5-flash): ",
        PROMPT_TOKENS_IN => "건당 입력 토큰 수: ",
        PROMPT_TOKENS_OUT => "건당 출력 토큰 수: ",
        PROMPT_INFRA => "고정 인프라 비용 [월]: ",
        PROMPT_CAPEX => "1회성 구축비(CAPEX): ",
        PROMPT_REVIEW_RATE => "사람 검수 비율 [%]: ",
        PROMPT_REVIEW_MINUTES => "건당 검수 시간 [분]: ",
        PROMPT_HUMAN_ERROR_RATE => "수작업 오류율 [%]: ",
        PROMPT_COST_PER_ERROR => "치명 오류 1건당 손실: ",
        PROMPT_AI_ERROR_RATE => "AI 오류율 [%]: ",
        PROMPT_AI_LATENCY => "건당 AI 응답 지연 [초]: ",
        PROMPT_COMPLIANCE => "컴플라이언스 점수 (1~10): ",
        PROMPT_OCR_UNITS => "건당 OCR 단위 수 (없으면 0): ",
        PROMPT_GENERATE_REPORT => "보고서를 생성할까요? (y/n): ",
        RESULT_AS_IS_COST => "AS-IS 월간 비용:",
        RESULT_AS_IS_HOURS => "AS-IS 월간 시간 [h]:",
        RESULT_TO_BE_INFRA => "TO-BE 인프라:",
        RESULT_TO_BE_TOKENS => "TO-BE 토큰:",
        RESULT_TO_BE_REVIEW => "TO-BE 검수(HITL):",
        RESULT_TO_BE_TOTAL => "TO-BE 총 운영비:",
        RESULT_VALUE_GENERATED => "월간 창출 가치:",
        RESULT_NET_SAVING => "월간 순절감:",
        RESULT_ROI => "ROI [%]:",
        RESULT_PAYBACK => "회수기간 [개월]:",
        RESULT_FTE => "해방 FTE [인]:",
        RESULT_AVOIDED_ERROR => "회피 오류 손실:",
        RESULT_LATENCY_IMPROVEMENT => "지연 개선율 [%]:",
        RESULT_VIABILITY => "기술 타당성 점수:",
        LABEL_VALUE_FTE_SAVINGS => "FTE 절감",
        LABEL_VALUE_TICKET_DEFLECTION => "티켓 디플렉션",
        LABEL_KPI_HOURS_FREED => "해방된 인시",
        LABEL_KPI_HOURS_AVOIDED => "회피된 응대 시간",
        NOTE_REVIEW_SHARE => "전체 건수의 {percent}%를 사람이 검수",
        NOTE_RETENTION_TARGET => "AI 단독 해결 목표 {percent}%",
        SETTINGS_OPTIONS => "1) 언어(ko/en)  2) FTE 월 근무시간  3) 티켓당 가정 시간(분)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (ko/en): ",
        SETTINGS_PROMPT_FTE_HOURS => "FTE 월 근무시간 [h]: ",
        SETTINGS_PROMPT_TICKET_MINUTES => "티켓당 가정 시간 [분]: ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        REPORT_HEADING => "\n-- 경영 보고서 --",
        REPORT_FAILED => "보고서 생성에 실패했습니다. 계산 결과는 위 수치 그대로 유효합니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        WARNING_PREFIX => "Warning",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== GenAI Viability Toolbox ===",
        MAIN_MENU_AUTOMATION => "1) Automation scenario (FTE savings)",
        MAIN_MENU_DEFLECTION => "2) Deflection scenario (FAQ/ticket avoidance)",
        MAIN_MENU_PIPELINE => "3) Two-stage pipeline (AS-IS → TO-BE viability)",
        MAIN_MENU_COST_TABLE => "4) Cost reference table",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        AUTOMATION_HEADING => "\n-- Automation scenario (backoffice) --",
        DEFLECTION_HEADING => "\n-- Deflection scenario (frontoffice) --",
        PIPELINE_HEADING => "\n-- Two-stage viability pipeline --",
        COST_TABLE_HEADING => "\n-- Cost reference table --",
        COST_TABLE_USD_RATE => "FX rate [local/USD]:",
        COST_TABLE_OCR_UNIT => "OCR unit cost:",
        SETTINGS_HEADING => "\n-- Settings --",
        PROMPT_VOLUME => "Monthly volume: ",
        PROMPT_MINUTES_PER_UNIT => "Manual minutes per unit: ",
        PROMPT_HOURLY_WAGE => "Hourly wage: ",
        PROMPT_COST_PER_TICKET => "Cost per ticket: ",
        PROMPT_RETENTION => "AI retention rate [%]: ",
        PROMPT_MODEL => "Model id (ex: gemini-2.5-flash): ",
        PROMPT_TOKENS_IN => "Input tokens per unit: ",
        PROMPT_TOKENS_OUT => "Output tokens per unit: ",
        PROMPT_INFRA => "Fixed infra cost [monthly]: ",
        PROMPT_CAPEX => "One-time implementation cost (CAPEX): ",
        PROMPT_REVIEW_RATE => "Human review rate [%]: ",
        PROMPT_REVIEW_MINUTES => "Review minutes per unit: ",
        PROMPT_HUMAN_ERROR_RATE => "Manual error rate [%]: ",
        PROMPT_COST_PER_ERROR => "Cost per critical error: ",
        PROMPT_AI_ERROR_RATE => "AI error rate [%]: ",
        PROMPT_AI_LATENCY => "AI latency per unit [s]: ",
        PROMPT_COMPLIANCE => "Compliance score (1-10): ",
        PROMPT_OCR_UNITS => "OCR units per item (0 if none): ",
        PROMPT_GENERATE_REPORT => "Generate narrative report? (y/n): ",
        RESULT_AS_IS_COST => "AS-IS monthly cost:",
        RESULT_AS_IS_HOURS => "AS-IS monthly hours:",
        RESULT_TO_BE_INFRA => "TO-BE infra:",
        RESULT_TO_BE_TOKENS => "TO-BE tokens:",
        RESULT_TO_BE_REVIEW => "TO-BE review (HITL):",
        RESULT_TO_BE_TOTAL => "TO-BE total operating cost:",
        RESULT_VALUE_GENERATED => "Monthly value generated:",
        RESULT_NET_SAVING => "Monthly net saving:",
        RESULT_ROI => "ROI [%]:",
        RESULT_PAYBACK => "Payback [months]:",
        RESULT_FTE => "FTE freed:",
        RESULT_AVOIDED_ERROR => "Avoided error cost:",
        RESULT_LATENCY_IMPROVEMENT => "Latency improvement [%]:",
        RESULT_VIABILITY => "Technical viability score:",
        LABEL_VALUE_FTE_SAVINGS => "FTE savings",
        LABEL_VALUE_TICKET_DEFLECTION => "Ticket deflection",
        LABEL_KPI_HOURS_FREED => "Person-hours freed",
        LABEL_KPI_HOURS_AVOIDED => "Support hours avoided",
        NOTE_REVIEW_SHARE => "Human review on {percent}% of cases",
        NOTE_RETENTION_TARGET => "AI retention target of {percent}%",
        SETTINGS_OPTIONS => "1) Language (ko/en)  2) FTE monthly hours  3) Minutes per ticket",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (ko/en): ",
        SETTINGS_PROMPT_FTE_HOURS => "FTE monthly hours: ",
        SETTINGS_PROMPT_TICKET_MINUTES => "Assumed minutes per ticket: ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        REPORT_HEADING => "\n-- Executive report --",
        REPORT_FAILED => "Report generation failed. The computed metrics above remain valid.",
        _ => return None,
    })
}
