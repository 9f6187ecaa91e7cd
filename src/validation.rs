//! 입력 검증 경계. 계산 코어는 음수 없는 잘 정의된 입력을 전제하므로
//! 음수·범위 초과는 여기서 오류로 거부하고, 누락값은 0으로 보정하되
//! 경고로 남겨 호출자가 노출할 수 있게 한다 (fail-soft 정책).

/// 경계에서 거부되는 입력 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// 음수가 허용되지 않는 필드
    NegativeField { field: &'static str, value: f64 },
    /// 0~100 범위를 벗어난 백분율
    PercentOutOfRange { field: &'static str, value: f64 },
    /// 1~10 범위를 벗어난 컴플라이언스 점수
    ComplianceOutOfRange { value: f64 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NegativeField { field, value } => {
                write!(f, "'{field}' 값은 음수일 수 없습니다: {value}")
            }
            ValidationError::PercentOutOfRange { field, value } => {
                write!(f, "'{field}' 백분율은 0~100 범위여야 합니다: {value}")
            }
            ValidationError::ComplianceOutOfRange { value } => {
                write!(f, "컴플라이언스 점수는 1~10 범위여야 합니다: {value}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// 계산은 계속 진행하되 호출자가 사용자에게 알려야 하는 경고.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    /// 누락값을 0으로 보정함 (의미 있는 계산이 0이 될 수 있음)
    MissingDefaultedToZero { field: &'static str },
    /// 미등록 모델이라 토큰 단가가 0으로 폴백됨 (비용 과소평가 위험)
    UnknownModel { model: String },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::MissingDefaultedToZero { field } => {
                write!(f, "'{field}' 값이 없어 0으로 처리했습니다")
            }
            ValidationWarning::UnknownModel { model } => {
                write!(
                    f,
                    "모델 '{model}'의 단가가 테이블에 없어 0으로 처리했습니다 (비용 과소평가 주의)"
                )
            }
        }
    }
}

/// 필드 단위 검증을 모아 수행하고 경고를 축적하는 헬퍼.
#[derive(Debug, Default)]
pub struct Validator {
    warnings: Vec<ValidationWarning>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필수 음수 금지 필드. 누락이면 0 보정 + 경고.
    pub fn non_negative(
        &mut self,
        field: &'static str,
        value: Option<f64>,
    ) -> Result<f64, ValidationError> {
        match value {
            Some(v) if v < 0.0 => Err(ValidationError::NegativeField { field, value: v }),
            Some(v) => Ok(v),
            None => {
                self.warnings
                    .push(ValidationWarning::MissingDefaultedToZero { field });
                Ok(0.0)
            }
        }
    }

    /// 0~100 백분율 필드. 누락이면 0 보정 + 경고.
    pub fn percent(
        &mut self,
        field: &'static str,
        value: Option<f64>,
    ) -> Result<f64, ValidationError> {
        match value {
            Some(v) if !(0.0..=100.0).contains(&v) => {
                Err(ValidationError::PercentOutOfRange { field, value: v })
            }
            Some(v) => Ok(v),
            None => {
                self.warnings
                    .push(ValidationWarning::MissingDefaultedToZero { field });
                Ok(0.0)
            }
        }
    }

    /// 1~10 컴플라이언스 점수.
    pub fn compliance(&mut self, value: f64) -> Result<f64, ValidationError> {
        if (1.0..=10.0).contains(&value) {
            Ok(value)
        } else {
            Err(ValidationError::ComplianceOutOfRange { value })
        }
    }

    /// 단가 조회가 폴백이었음을 경고로 기록한다.
    pub fn warn_unknown_model(&mut self, model: &str) {
        self.warnings.push(ValidationWarning::UnknownModel {
            model: model.to_string(),
        });
    }

    /// 축적된 경고를 반환하고 검증을 마친다.
    pub fn finish(self) -> Vec<ValidationWarning> {
        self.warnings
    }
}
