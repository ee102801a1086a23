use crate::error::{Result, ScratchError};
use crate::prize::{PrizeAllocator, PrizeTable};
use crate::symbol::SymbolAssigner;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub symbol_pool: Vec<String>,
    pub winning_symbols: [String; 2],
    pub winning_symbol_rate: f64,
    pub clamp_rate: f64,
    pub sizing_table: PrizeTable,
    pub decoy_days: Vec<u32>,
    pub reveal_threshold: f64,
    pub brush_radius: f64,
    pub celebration_ms: u64,
}

const DEFAULT_POOL: [&str; 30] = [
    "禄", "寿", "喜", "吉", "安", "康", "宁", "顺", "旺", "兴", "隆", "昌", "盛", "发", "达",
    "乐", "和", "美", "满", "祥", "瑞", "庆", "贺", "悦", "欢", "泰", "春", "金", "玉", "鑫",
];

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbol_pool: DEFAULT_POOL.iter().map(|s| s.to_string()).collect(),
            winning_symbols: ["福".to_string(), "财".to_string()],
            winning_symbol_rate: 0.02,
            clamp_rate: 0.95,
            sizing_table: PrizeTable::sizing(),
            decoy_days: vec![1, 2, 3, 5, 7, 10],
            reveal_threshold: 0.5,
            brush_radius: 20.0,
            celebration_ms: 1500,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn celebration_duration(&self) -> Duration {
        Duration::from_millis(self.celebration_ms)
    }

    pub fn symbol_assigner(&self) -> SymbolAssigner {
        SymbolAssigner::new(
            self.symbol_pool.clone(),
            self.winning_symbols.clone(),
            self.winning_symbol_rate,
        )
    }

    pub fn prize_allocator(&self) -> PrizeAllocator {
        PrizeAllocator::new(self.clamp_rate, self.sizing_table.clone())
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol_pool.is_empty() {
            return Err(ScratchError::config("Symbol pool cannot be empty"));
        }

        let [first, second] = &self.winning_symbols;
        if first == second {
            return Err(ScratchError::config("Winning symbols must be distinct"));
        }

        if let Some(glyph) = self
            .symbol_pool
            .iter()
            .find(|g| self.winning_symbols.contains(*g))
        {
            return Err(ScratchError::config(format!(
                "Symbol pool contains winning symbol '{}'",
                glyph
            )));
        }

        for (name, rate) in [
            ("winning_symbol_rate", self.winning_symbol_rate),
            ("clamp_rate", self.clamp_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ScratchError::config(format!(
                    "{} must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }

        self.sizing_table.validate()?;

        if self.decoy_days.is_empty() {
            return Err(ScratchError::config("Decoy day list cannot be empty"));
        }

        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(ScratchError::config(format!(
                "Reveal threshold must be within (0, 1], got {}",
                self.reveal_threshold
            )));
        }

        if !(self.brush_radius.is_finite() && self.brush_radius > 0.0) {
            return Err(ScratchError::config("Brush radius must be greater than 0"));
        }

        Ok(())
    }
}
