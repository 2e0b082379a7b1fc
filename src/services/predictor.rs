//! 市值预测服务
//!
//! 将表单当前值按固定列顺序交给模型推理，并对结果取负后返回。
//! 预测前不做字段校验，字段缺失等问题由模型调用报错，再统一转换为
//! `Prediction unavailable: invalid input`。

use std::sync::Arc;
use thiserror::Error;

use super::model::{ModelError, RegressionModel};
use crate::models::{FormState, PredictionView};

/// 预测失败时页面显示的文本
pub const PREDICTION_UNAVAILABLE: &str = "Prediction unavailable: invalid input";

/// 预测错误
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Prediction unavailable: invalid input")]
    InvalidInput(#[from] ModelError),
}

/// 预测器
///
/// 持有启动时加载的只读模型，可被多个工作线程共享
#[derive(Clone)]
pub struct Predictor {
    model: Arc<dyn RegressionModel>,
}

impl Predictor {
    pub fn new(model: Arc<dyn RegressionModel>) -> Self {
        Self { model }
    }

    /// 预测市值
    pub fn predict(&self, form: &FormState) -> Result<f64, PredictionError> {
        let record = form.to_record();
        let raw = self.model.predict(&record)?;

        // 模型原始输出取负后才是展示值。这一约定沿用自模型的使用方，原因未知，不要改动。
        Ok(-raw)
    }

    /// 预测并生成页面展示内容
    ///
    /// 失败时 `value` 为空，`text` 为 [`PREDICTION_UNAVAILABLE`]
    pub fn render(&self, form: &FormState) -> PredictionView {
        match self.predict(form) {
            Ok(value) => PredictionView {
                value: Some(value),
                // 与 Python 浮点数显示一致，整数值保留 `.0`
                text: format!("Prediction: {:?}", value),
            },
            Err(e) => {
                log::warn!("预测失败: {:?}", e);
                PredictionView {
                    value: None,
                    text: PREDICTION_UNAVAILABLE.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeatureRecord;
    use crate::services::model::LinearRegressionModel;

    /// 固定输出的模型
    struct ConstantModel(f64);

    impl RegressionModel for ConstantModel {
        fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelError> {
            for (field, value) in record.iter() {
                value.ok_or(ModelError::MissingFeature(field))?;
            }
            Ok(self.0)
        }
    }

    fn scenario_form() -> FormState {
        FormState {
            open: Some(10.0),
            high: Some(20.0),
            low: Some(5.0),
            close: Some(15.0),
            volume: Some(1000.0),
        }
    }

    #[test]
    fn test_prediction_is_negated() {
        let predictor = Predictor::new(Arc::new(ConstantModel(100.0)));
        assert_eq!(predictor.predict(&scenario_form()).unwrap(), -100.0);
    }

    #[test]
    fn test_negation_of_linear_model() {
        let model = LinearRegressionModel::new([0.5, -0.25, 2.0, 1.0, 0.001], 3.0).unwrap();
        let raw = model.predict(&scenario_form().to_record()).unwrap();
        let predictor = Predictor::new(Arc::new(model));

        assert_eq!(predictor.predict(&scenario_form()).unwrap(), -raw);
    }

    #[test]
    fn test_predict_is_idempotent() {
        let model = LinearRegressionModel::new([1.5, 2.5, -0.5, 0.75, 0.002], -7.0).unwrap();
        let predictor = Predictor::new(Arc::new(model));
        let form = scenario_form();

        let first = predictor.predict(&form).unwrap();
        let second = predictor.predict(&form).unwrap();
        assert_eq!(first, second);
    }

    /// 负数不会被拦截，照常交给模型
    #[test]
    fn test_negative_inputs_reach_model() {
        let predictor = Predictor::new(Arc::new(ConstantModel(1.0)));
        let mut form = scenario_form();
        form.volume = Some(-5.0);
        assert_eq!(predictor.predict(&form).unwrap(), -1.0);
    }

    #[test]
    fn test_missing_open_fails() {
        let predictor = Predictor::new(Arc::new(ConstantModel(100.0)));
        let form = FormState {
            open: None,
            high: Some(0.0),
            low: Some(0.0),
            close: Some(0.0),
            volume: Some(0.0),
        };

        let err = predictor.predict(&form).unwrap_err();
        assert!(matches!(err, PredictionError::InvalidInput(_)));
        assert_eq!(err.to_string(), PREDICTION_UNAVAILABLE);
    }

    #[test]
    fn test_render_success() {
        let predictor = Predictor::new(Arc::new(ConstantModel(100.0)));
        let view = predictor.render(&scenario_form());
        assert_eq!(view.value, Some(-100.0));
        assert_eq!(view.text, "Prediction: -100.0");
    }

    /// 非整数结果按原样显示
    #[test]
    fn test_render_fractional_value() {
        let predictor = Predictor::new(Arc::new(ConstantModel(-1234.5)));
        let view = predictor.render(&scenario_form());
        assert_eq!(view.text, "Prediction: 1234.5");
    }

    #[test]
    fn test_render_failure() {
        let predictor = Predictor::new(Arc::new(ConstantModel(100.0)));
        let view = predictor.render(&FormState::default());
        assert_eq!(view.value, None);
        assert_eq!(view.text, PREDICTION_UNAVAILABLE);
    }
}
