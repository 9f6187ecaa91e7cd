//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 다른
//! 프런트엔드(웹 API, GUI)로의 확장도 쉽게 한다.

pub mod app;
pub mod config;
pub mod cost_model;
pub mod costing;
pub mod i18n;
pub mod pipeline;
pub mod report;
pub mod rounding;
pub mod scenario;
pub mod ui_cli;
pub mod validation;
