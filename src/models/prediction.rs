//! 预测结果模型

use serde::{Deserialize, Serialize};

/// 预测结果展示
///
/// 成功时 `value` 有值，`text` 为 `Prediction: <value>`；
/// 失败时 `value` 为空，`text` 为错误提示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionView {
    pub value: Option<f64>,
    pub text: String,
}
