use crate::config::Config;
use crate::cost_model::{BuiltinCostProvider, CostProvider};
use crate::i18n::{self, Translator};
use crate::pipeline::PipelineError;
use crate::report::ReportError;
use crate::ui_cli::{self, MenuChoice};
use crate::validation::ValidationError;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 입력 검증 오류
    Validation(ValidationError),
    /// 파이프라인 실행 오류
    Pipeline(PipelineError),
    /// 보고서 생성 오류 (복구 가능, 상위에서 수치만 표시)
    Report(ReportError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Validation(e) => write!(f, "입력 검증 오류: {e}"),
            AppError::Pipeline(e) => write!(f, "파이프라인 오류: {e}"),
            AppError::Report(e) => write!(f, "보고서 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        AppError::Validation(value)
    }
}

impl From<PipelineError> for AppError {
    fn from(value: PipelineError) -> Self {
        AppError::Pipeline(value)
    }
}

impl From<ReportError> for AppError {
    fn from(value: ReportError) -> Self {
        AppError::Report(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 비용 테이블은 매 분석마다 공급자에서 새로 조회한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let provider = BuiltinCostProvider;
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Automation => {
                let table = provider.cost_table();
                ui_cli::handle_automation(tr, config, &table)?;
            }
            MenuChoice::Deflection => {
                let table = provider.cost_table();
                ui_cli::handle_deflection(tr, config, &table)?;
            }
            MenuChoice::Pipeline => {
                let table = provider.cost_table();
                ui_cli::handle_pipeline(tr, config, &table)?;
            }
            MenuChoice::CostTable => {
                let table = provider.cost_table();
                ui_cli::handle_cost_table(tr, &table)?;
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
