//! 모델별 토큰 단가·환율·부대비용 단가를 담는 참조 테이블.
//! 값은 참고용 기본치이며 실제 분석 시에는 외부 조회(Provider)로
//! 호출 시점마다 갱신된 테이블을 주입해야 한다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 모델 토큰 단가 [USD / 100만 토큰].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPrice {
    /// 입력 토큰 단가 [USD/1M tok]
    pub input_usd_per_mtok: f64,
    /// 출력 토큰 단가 [USD/1M tok]
    pub output_usd_per_mtok: f64,
}

impl ModelPrice {
    pub const fn new(input_usd_per_mtok: f64, output_usd_per_mtok: f64) -> Self {
        Self {
            input_usd_per_mtok,
            output_usd_per_mtok,
        }
    }

    /// 단가가 모두 0인 폴백 값. 미등록 모델 조회 시 사용된다.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// 단가 조회 결과. 테이블에 없는 모델이면 0 단가로 폴백하되
/// `is_fallback`으로 표시해 호출자가 경고를 내보낼 수 있게 한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceLookup {
    pub price: ModelPrice,
    pub is_fallback: bool,
}

/// 부대비용 단가(토큰 외 가변비). 예: 문서 1건당 OCR 비용.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AncillaryPrices {
    /// OCR 1회 처리 단가 [현지통화/건]
    pub ocr_unit_cost: f64,
}

/// 호출 시점 기준의 비용 참조 데이터 묶음.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModelTable {
    /// 환율 [현지통화 / USD]
    pub usd_rate: f64,
    /// 모델 식별자 -> 토큰 단가
    pub models: BTreeMap<String, ModelPrice>,
    /// 고정 부대비용 단가
    pub ancillary: AncillaryPrices,
}

impl CostModelTable {
    /// 모델 단가를 조회한다. 미등록 모델은 0 단가 폴백으로 처리한다.
    pub fn price_for(&self, model: &str) -> PriceLookup {
        match self.models.get(model) {
            Some(price) => PriceLookup {
                price: *price,
                is_fallback: false,
            },
            None => PriceLookup {
                price: ModelPrice::zero(),
                is_fallback: true,
            },
        }
    }

    pub fn known_models(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }
}

/// 비용 테이블을 공급하는 주입 지점. 실서비스에서는 환율 API·가격표
/// 크롤러 등이 이 트레이트를 구현하고, 기본 구현은 내장 참조 테이블을
/// 반환한다.
pub trait CostProvider {
    fn cost_table(&self) -> CostModelTable;
}

/// 내장 참조 테이블을 그대로 반환하는 기본 공급자.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCostProvider;

impl CostProvider for BuiltinCostProvider {
    fn cost_table(&self) -> CostModelTable {
        builtin_table()
    }
}

/// 고정 테이블을 반환하는 공급자. 테스트와 오프라인 분석에 쓴다.
#[derive(Debug, Clone)]
pub struct StaticCostProvider {
    pub table: CostModelTable,
}

impl CostProvider for StaticCostProvider {
    fn cost_table(&self) -> CostModelTable {
        self.table.clone()
    }
}

/// 내장 참조 단가 테이블 (2024-2025 공표 단가 근사치).
pub fn builtin_table() -> CostModelTable {
    let mut models = BTreeMap::new();
    models.insert("gpt-4o".to_string(), ModelPrice::new(2.50, 10.00));
    models.insert("gpt-4o-mini".to_string(), ModelPrice::new(0.15, 0.60));
    models.insert("gemini-2.5-flash".to_string(), ModelPrice::new(0.075, 0.30));
    models.insert("gemini-1.5-flash".to_string(), ModelPrice::new(0.075, 0.30));
    models.insert("gemini-1.5-pro".to_string(), ModelPrice::new(1.25, 5.00));

    CostModelTable {
        usd_rate: 6.0,
        models,
        ancillary: AncillaryPrices {
            ocr_unit_cost: 0.005,
        },
    }
}
