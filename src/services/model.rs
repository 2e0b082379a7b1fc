//! 回归模型
//!
//! 预测服务只依赖 [`RegressionModel`] 接口：输入固定列顺序的单行记录，输出一个标量。
//! 默认实现为从 JSON 文件加载的线性回归模型。
//!
//! 模型文件格式：
//! ```json
//! {
//!   "features": ["Open", "High", "Low", "Close", "Volume"],
//!   "coefficients": [0.1, 0.2, 0.3, 0.4, 0.5],
//!   "intercept": -1.0
//! }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{FeatureRecord, Field};

/// 模型文件相对项目根目录的位置
pub const MODEL_ARTIFACT_PATH: &str = "artifacts/model.json";

/// 模型错误
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("读取模型文件 {} 失败: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析模型文件失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("模型特征列不匹配: 期望 {expected:?}, 实际 {actual:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("模型系数数量错误: 期望 {expected}, 实际 {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("模型参数无效: {0}")]
    InvalidParameter(String),

    #[error("特征 {0} 缺失")]
    MissingFeature(Field),

    #[error("模型输出不是有限数值: {0}")]
    NonFiniteOutput(f64),
}

/// 预训练回归模型接口
///
/// 推理无状态、无副作用，可在多个工作线程间共享
pub trait RegressionModel: Send + Sync {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelError>;
}

/// 模型文件的原始结构
#[derive(Debug, Deserialize)]
struct LinearModelArtifact {
    features: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

/// 线性回归模型：`intercept + Σ coefficient * value`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionModel {
    coefficients: [f64; 5],
    intercept: f64,
}

impl LinearRegressionModel {
    pub fn new(coefficients: [f64; 5], intercept: f64) -> Result<Self, ModelError> {
        if let Some(c) = coefficients.iter().find(|c| !c.is_finite()) {
            return Err(ModelError::InvalidParameter(format!("系数 {}", c)));
        }
        if !intercept.is_finite() {
            return Err(ModelError::InvalidParameter(format!("截距 {}", intercept)));
        }
        Ok(Self { coefficients, intercept })
    }

    /// 从 JSON 字符串解析模型
    pub fn from_json(content: &str) -> Result<Self, ModelError> {
        let artifact: LinearModelArtifact = serde_json::from_str(content)?;

        let expected: Vec<String> = Field::ALL.iter().map(|f| f.name().to_string()).collect();
        if artifact.features != expected {
            return Err(ModelError::FeatureMismatch {
                expected,
                actual: artifact.features,
            });
        }

        let coefficients: [f64; 5] = artifact
            .coefficients
            .as_slice()
            .try_into()
            .map_err(|_| ModelError::ShapeMismatch {
                expected: Field::ALL.len(),
                actual: artifact.coefficients.len(),
            })?;

        Self::new(coefficients, artifact.intercept)
    }

    /// 从文件加载模型
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

impl RegressionModel for LinearRegressionModel {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelError> {
        let mut output = self.intercept;
        for ((field, value), coefficient) in record.iter().zip(self.coefficients.iter()) {
            let value = value.ok_or(ModelError::MissingFeature(field))?;
            output += coefficient * value;
        }

        if !output.is_finite() {
            return Err(ModelError::NonFiniteOutput(output));
        }
        Ok(output)
    }
}

/// 模型文件的绝对路径（项目根目录下的固定位置）
pub fn default_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(MODEL_ARTIFACT_PATH)
}

/// 启动时加载模型
pub fn load_model(path: &Path) -> Result<LinearRegressionModel, ModelError> {
    let model = LinearRegressionModel::from_file(path)?;
    log::info!("从 {} 加载模型成功", path.display());
    Ok(model)
}
