//! 계산 결과를 서술형 보고서로 바꾸는 협력자 경계.
//! 텍스트 생성 제공자는 차단형 요청/응답 계약(`ReportGenerator`)으로만
//! 추상화한다. 제공자 실패는 복구 가능한 오류이며, 계산 결과 자체는
//! 보고서 없이도 그대로 유효하다.

use crate::i18n::{keys, Translator};
use crate::rounding::format_currency;
use crate::scenario::{Note, ScenarioResult};

/// 보고서 생성 실패. 호출자는 부분 결과(수치만) 표시 여부를 결정한다.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportError {
    /// 제공자 내부 오류 (네트워크, 인증 등 구현체가 보고한 메시지)
    Provider(String),
    /// 제공자 측 시간 초과
    Timeout,
    /// 재시도까지 소진함. 마지막 실패를 원형 그대로 담는다.
    Exhausted {
        attempts: u32,
        last: Box<ReportError>,
    },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Provider(msg) => write!(f, "보고서 제공자 오류: {msg}"),
            ReportError::Timeout => write!(f, "보고서 제공자 시간 초과"),
            ReportError::Exhausted { attempts, last } => {
                write!(f, "{attempts}회 시도 후 실패: {last}")
            }
        }
    }
}

impl std::error::Error for ReportError {}

/// 텍스트 생성 제공자 계약. 시스템 지시문과 포맷된 프롬프트를 받아
/// 자유 텍스트를 반환한다. 시간 초과 처리는 구현체 책임이다.
pub trait ReportGenerator {
    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, ReportError>;
}

/// 1회 재시도 후 실패 정책. 첫 시도가 실패하면 한 번만 더 시도하고,
/// 그래도 실패하면 마지막 오류를 담아 반환한다.
pub fn generate_with_retry<G: ReportGenerator>(
    generator: &G,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<String, ReportError> {
    match generator.generate(system_prompt, user_prompt) {
        Ok(text) => Ok(text),
        Err(_) => match generator.generate(system_prompt, user_prompt) {
            Ok(text) => Ok(text),
            Err(last) => Err(ReportError::Exhausted {
                attempts: 2,
                last: Box::new(last),
            }),
        },
    }
}

/// 프롬프트에 들어가는 포맷 완료 데이터 묶음.
/// 수치는 전부 문자열로 변환해 담는다 (통화는 천 단위 구분 + 2자리).
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub project_label: String,
    pub model: String,
    pub as_is_cost: String,
    pub to_be_total: String,
    pub infra: String,
    pub tokens: String,
    pub review: String,
    pub net_saving: String,
    /// AS-IS 대비 절감 비율 [%]. AS-IS 비용 0이면 0으로 정의.
    pub saving_percent: f64,
    pub hours_freed: f64,
    pub hours_label: String,
    pub roi_percent: f64,
    pub payback_months: f64,
    pub note: String,
}

impl ReportContext {
    /// 시나리오 결과에서 보고서 컨텍스트를 만든다.
    pub fn from_scenario(result: &ScenarioResult, model: &str, tr: &Translator) -> Self {
        let saving_percent = if result.as_is.total_cost > 0.0 {
            result.outcome.net_saving / result.as_is.total_cost * 100.0
        } else {
            0.0
        };
        let note = match result.outcome.note {
            Note::HumanReviewShare { percent } => tr.t_percent(keys::NOTE_REVIEW_SHARE, percent),
            Note::RetentionTarget { percent } => {
                tr.t_percent(keys::NOTE_RETENTION_TARGET, percent)
            }
        };

        Self {
            project_label: tr.t(result.outcome.value_label_key),
            model: model.to_string(),
            as_is_cost: format_currency(result.as_is.total_cost),
            to_be_total: format_currency(result.to_be.total),
            infra: format_currency(result.to_be.infra),
            tokens: format_currency(result.to_be.tokens),
            review: format_currency(result.to_be.review),
            net_saving: format_currency(result.outcome.net_saving),
            saving_percent: (saving_percent * 10.0).round() / 10.0,
            hours_freed: result.outcome.hours_freed,
            hours_label: tr.t(result.outcome.hours_label_key),
            roi_percent: result.outcome.roi_percent,
            payback_months: result.outcome.payback_months,
            note,
        }
    }

    /// 경영 보고서 생성용 사용자 프롬프트를 만든다.
    pub fn build_prompt(&self) -> String {
        format!(
            "Generate the executive viability report.\n\
             \n\
             CONTEXT:\n\
             - Value driver: {label}\n\
             - Model: {model}\n\
             - Note: {note}\n\
             \n\
             CALCULATED FINANCIALS (monthly, local currency):\n\
             - AS-IS cost: {as_is}\n\
             - TO-BE total cost: {to_be}\n\
             - TO-BE breakdown: infra {infra}, tokens {tokens}, human review {review}\n\
             \n\
             SUCCESS KPIS:\n\
             - Net saving: {saving} ({saving_pct}% of AS-IS)\n\
             - Hours KPI: {hours} ({hours_label})\n\
             - ROI: {roi}%\n\
             - Payback: {payback} months\n",
            label = self.project_label,
            model = self.model,
            note = self.note,
            as_is = self.as_is_cost,
            to_be = self.to_be_total,
            infra = self.infra,
            tokens = self.tokens,
            review = self.review,
            saving = self.net_saving,
            saving_pct = self.saving_percent,
            hours = self.hours_freed,
            hours_label = self.hours_label,
            roi = self.roi_percent,
            payback = self.payback_months,
        )
    }
}

/// 기본 시스템 지시문. 외부 제공자를 붙일 때 그대로 쓰거나 교체한다.
pub fn default_system_prompt() -> &'static str {
    "You are a senior viability engineer for generative-AI projects. \
     Write a skeptical, data-driven executive report from the supplied metrics. \
     Structure: verdict first, then AS-IS vs TO-BE comparison, cost breakdown, \
     risks, and a go/no-go recommendation. Do not invent numbers."
}

/// 외부 제공자 없이 동작하는 로컬 템플릿 렌더러.
/// 프롬프트 데이터를 그대로 마크다운 보고서로 펼친다. 실패하지 않는다.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTemplateGenerator;

impl ReportGenerator for LocalTemplateGenerator {
    fn generate(&self, _system_prompt: &str, user_prompt: &str) -> Result<String, ReportError> {
        Ok(format!("# Viability Report\n\n{user_prompt}"))
    }
}
