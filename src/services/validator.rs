//! 字段校验服务
//!
//! 每个字段独立校验，消息只取决于该字段自身的值，不做跨字段检查

use crate::models::{Field, FieldValidation, FormState, ValidationMessage};

/// 校验单个值
///
/// - 缺失 → MissingValue
/// - 小于 0 → NegativeValue
/// - 其余（包括 0）→ None
pub fn validate(value: Option<f64>) -> ValidationMessage {
    match value {
        None => ValidationMessage::MissingValue,
        Some(v) if v < 0.0 => ValidationMessage::NegativeValue,
        Some(_) => ValidationMessage::None,
    }
}

/// 校验表单中的指定字段
pub fn validate_field(form: &FormState, field: Field) -> FieldValidation {
    let kind = validate(form.value(field));
    log::debug!("校验字段 {}: {:?}", field, kind);

    FieldValidation {
        field,
        message_id: field.message_id(),
        kind,
        message: kind.as_str().to_string(),
    }
}

/// 按列顺序校验全部字段
pub fn validate_form(form: &FormState) -> Vec<FieldValidation> {
    Field::ALL
        .into_iter()
        .map(|field| validate_field(form, field))
        .collect()
}
