//! 字段校验结果模型

use serde::{Deserialize, Serialize};

use super::Field;

/// 字段校验消息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMessage {
    /// 字段没有值
    MissingValue,
    /// 字段为负数
    NegativeValue,
    /// 无错误
    None,
}

impl ValidationMessage {
    /// 页面上显示的文本，无错误时为空串
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMessage::MissingValue => "All inputs must have a value",
            ValidationMessage::NegativeValue => "All numeric inputs must be non-negative.",
            ValidationMessage::None => "",
        }
    }
}

/// 单字段校验接口的请求体
#[derive(Debug, Deserialize)]
pub struct FieldValueRequest {
    #[serde(default)]
    pub value: Option<f64>,
}

/// 单个字段的校验结果
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldValidation {
    /// 字段名
    pub field: Field,
    /// 消息显示位置的元素 id
    pub message_id: String,
    /// 消息类型
    pub kind: ValidationMessage,
    /// 消息文本
    pub message: String,
}
