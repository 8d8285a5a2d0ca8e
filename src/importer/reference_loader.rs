// ==========================================
// 户型评分系统 - 参考数据加载（价格表 / 分区规则表）
// ==========================================
// 价格表: .json（材料 → 单价对象）或 .csv（表头 material,price）
// 分区规则表: .json（房间类型 → {"zone": ...}）
// 容错: 单价缺失（null / 空 / 非数值）按"无数据"跳过，负价报错
// ==========================================

use crate::domain::{CostTable, ZoneRules};
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use serde_json::Value as JsonValue;
use std::fs::{self, File};
use std::path::Path;
use tracing::debug;

/// 加载价格表（按扩展名分派）
pub fn load_cost_table(path: &Path) -> ImportResult<CostTable> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "json" => load_cost_table_json(path),
        "csv" => load_cost_table_csv(path),
        other => Err(ImportError::UnsupportedFormat(other.to_string())),
    }
}

/// 加载分区规则表
pub fn load_zone_rules(path: &Path) -> ImportResult<ZoneRules> {
    let raw = read_file(path)?;
    serde_json::from_str(&raw).map_err(|e| ImportError::JsonParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// 从 JSON 对象解析价格表
///
/// 非数值条目（如 timestamp、null）视为缺失数据跳过。
pub fn parse_cost_table_json(raw: &str, origin: &str) -> ImportResult<CostTable> {
    let value: JsonValue = serde_json::from_str(raw).map_err(|e| ImportError::JsonParseError {
        path: origin.to_string(),
        message: e.to_string(),
    })?;
    let object = value.as_object().ok_or_else(|| ImportError::JsonParseError {
        path: origin.to_string(),
        message: "价格表必须是 JSON 对象".to_string(),
    })?;

    let mut table = CostTable::new();
    for (material, price) in object {
        match price.as_f64() {
            Some(p) => {
                check_price(material, p)?;
                table.insert(material.clone(), p);
            }
            None => debug!("跳过无单价条目: {}", material),
        }
    }
    Ok(table)
}

fn load_cost_table_json(path: &Path) -> ImportResult<CostTable> {
    let raw = read_file(path)?;
    parse_cost_table_json(&raw, &path.display().to_string())
}

fn load_cost_table_csv(path: &Path) -> ImportResult<CostTable> {
    let file = File::open(path).map_err(|e| ImportError::FileReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // 允许行长度不一致
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut table = CostTable::new();
    for (row_idx, result) in reader.records().enumerate() {
        // 行号从 2 开始（第 1 行为表头）
        let row = row_idx + 2;
        let record = result.map_err(|e| ImportError::CsvParseError {
            row,
            message: e.to_string(),
        })?;

        let material = record.get(0).unwrap_or("");
        if material.is_empty() {
            continue;
        }
        let price_raw = record.get(1).unwrap_or("");
        if price_raw.is_empty() {
            debug!("跳过无单价条目: {}", material);
            continue;
        }

        let price: f64 = price_raw.parse().map_err(|_| ImportError::CsvParseError {
            row,
            message: format!("单价不是数值: {}", price_raw),
        })?;
        check_price(material, price)?;
        table.insert(material, price);
    }

    Ok(table)
}

fn check_price(material: &str, price: f64) -> ImportResult<()> {
    if !(price.is_finite() && price >= 0.0) {
        return Err(ImportError::InvalidPrice {
            material: material.to_string(),
            value: price,
        });
    }
    Ok(())
}

fn read_file(path: &Path) -> ImportResult<String> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    fs::read_to_string(path).map_err(|e| ImportError::FileReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
