use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 계산에 쓰이는 정책 상수 모음. 코드에 박아두지 않고 설정으로 노출해서
/// 재빌드 없이 튜닝·테스트할 수 있게 한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// FTE 1인의 월 표준 근무시간 [h/월]
    pub fte_hours_per_month: f64,
    /// 디플렉션 모드에서 티켓 1건당 가정하는 처리 시간 [분/건]
    pub ticket_minutes: f64,
    /// AI 비용이 0이고 이득이 양수일 때 반환하는 ROI 센티널 [%]
    pub roi_sentinel: f64,
    /// 순절감이 0 이하일 때 반환하는 회수기간 센티널 [개월]
    pub payback_sentinel_months: f64,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            fte_hours_per_month: 160.0,
            ticket_minutes: 10.0,
            roi_sentinel: 9999.0,
            payback_sentinel_months: 999.0,
        }
    }
}

/// 기술 타당성 점수의 가중치. 오류 품질/지연 개선/컴플라이언스 순이며
/// 합이 1.0이 되는 40/40/20 배분을 기본값으로 한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViabilityWeights {
    pub error_quality: f64,
    pub latency: f64,
    pub compliance: f64,
}

impl Default for ViabilityWeights {
    fn default() -> Self {
        Self {
            error_quality: 0.40,
            latency: 0.40,
            compliance: 0.20,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CLI 언어 코드 (ko/en). 비우면 시스템 로케일을 따른다.
    pub language: Option<String>,
    pub policy: Policy,
    pub viability_weights: ViabilityWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            policy: Policy::default(),
            viability_weights: ViabilityWeights::default(),
        }
    }
}

/// 설정 로드/저장/검증 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// FTE 월 근무시간이 0 이하 (0으로 나누기 방지)
    InvalidFteHours(f64),
    /// 티켓당 가정 시간이 음수
    InvalidTicketMinutes(f64),
    /// 타당성 가중치에 음수가 있거나 합이 0
    InvalidViabilityWeights,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
            ConfigError::InvalidFteHours(v) => {
                write!(f, "FTE 월 근무시간은 0보다 커야 합니다: {v}")
            }
            ConfigError::InvalidTicketMinutes(v) => {
                write!(f, "티켓당 가정 시간은 음수일 수 없습니다: {v}")
            }
            ConfigError::InvalidViabilityWeights => {
                write!(f, "타당성 가중치는 음수가 아니어야 하고 합이 0보다 커야 합니다")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
/// 로드 직후 정책 상수를 검증해 0 나누기 같은 결함을 조기에 차단한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    let cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str::<Config>(&content)?
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        cfg
    };
    cfg.validate()?;
    Ok(cfg)
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }

    /// 정책 상수와 가중치의 유효성을 검사한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.policy.fte_hours_per_month > 0.0) {
            return Err(ConfigError::InvalidFteHours(self.policy.fte_hours_per_month));
        }
        if self.policy.ticket_minutes < 0.0 {
            return Err(ConfigError::InvalidTicketMinutes(self.policy.ticket_minutes));
        }
        let w = &self.viability_weights;
        let sum = w.error_quality + w.latency + w.compliance;
        if w.error_quality < 0.0 || w.latency < 0.0 || w.compliance < 0.0 || !(sum > 0.0) {
            return Err(ConfigError::InvalidViabilityWeights);
        }
        Ok(())
    }
}
