//! 表单数据模型
//!
//! 定义五个交易字段（Open / High / Low / Close / Volume）及表单状态

use serde::{Deserialize, Serialize};
use std::fmt;

/// 表单字段
///
/// 顺序固定，与模型训练时的列顺序一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl Field {
    /// 按模型列顺序排列的全部字段
    pub const ALL: [Field; 5] = [
        Field::Open,
        Field::High,
        Field::Low,
        Field::Close,
        Field::Volume,
    ];

    /// 字段名（同时也是模型特征名）
    pub fn name(&self) -> &'static str {
        match self {
            Field::Open => "Open",
            Field::High => "High",
            Field::Low => "Low",
            Field::Close => "Close",
            Field::Volume => "Volume",
        }
    }

    /// 页面元素 id 前缀，如 `open`
    pub fn id_stem(&self) -> &'static str {
        match self {
            Field::Open => "open",
            Field::High => "high",
            Field::Low => "low",
            Field::Close => "close",
            Field::Volume => "volume",
        }
    }

    /// 输入框 id，如 `open-input`
    pub fn input_id(&self) -> String {
        format!("{}-input", self.id_stem())
    }

    /// 校验消息 id，如 `open-val-msg`
    pub fn message_id(&self) -> String {
        format!("{}-val-msg", self.id_stem())
    }

    /// 从路径参数解析字段，大小写不敏感
    pub fn parse(s: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 表单状态
///
/// 每个字段为数值或缺失（None）；JSON 中缺少的键或 null 均视为缺失
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(rename = "Open", default)]
    pub open: Option<f64>,
    #[serde(rename = "High", default)]
    pub high: Option<f64>,
    #[serde(rename = "Low", default)]
    pub low: Option<f64>,
    #[serde(rename = "Close", default)]
    pub close: Option<f64>,
    #[serde(rename = "Volume", default)]
    pub volume: Option<f64>,
}

impl FormState {
    /// 页面初始状态：所有字段为 0
    pub fn initial() -> Self {
        Self {
            open: Some(0.0),
            high: Some(0.0),
            low: Some(0.0),
            close: Some(0.0),
            volume: Some(0.0),
        }
    }

    /// 读取指定字段的当前值
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Open => self.open,
            Field::High => self.high,
            Field::Low => self.low,
            Field::Close => self.close,
            Field::Volume => self.volume,
        }
    }

    /// 写入指定字段的值
    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Open => &mut self.open,
            Field::High => &mut self.high,
            Field::Low => &mut self.low,
            Field::Close => &mut self.close,
            Field::Volume => &mut self.volume,
        };
        *slot = value;
    }

    /// 按模型列顺序组装单行特征记录
    pub fn to_record(&self) -> FeatureRecord {
        FeatureRecord {
            values: Field::ALL.map(|f| self.value(f)),
        }
    }
}

/// 送入模型的单行特征记录，列顺序即 [`Field::ALL`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    values: [Option<f64>; 5],
}

impl FeatureRecord {
    /// 按列顺序遍历 (字段, 值)
    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<f64>)> + '_ {
        Field::ALL.into_iter().zip(self.values.iter().copied())
    }
}

/// 字段描述，供页面渲染表单
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldInfo {
    /// 字段名
    pub name: Field,
    /// 输入框 id
    pub input_id: String,
    /// 校验消息 id
    pub message_id: String,
    /// 初始值
    pub initial_value: Option<f64>,
}

impl FieldInfo {
    pub fn all() -> Vec<FieldInfo> {
        let initial = FormState::initial();
        Field::ALL
            .into_iter()
            .map(|f| FieldInfo {
                name: f,
                input_id: f.input_id(),
                message_id: f.message_id(),
                initial_value: initial.value(f),
            })
            .collect()
    }
}
