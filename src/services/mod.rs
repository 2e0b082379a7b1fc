//! 业务逻辑服务模块
//!
//! 字段校验与市值预测，两者互不调用

pub mod model;      // 回归模型加载与推理
pub mod predictor;  // 市值预测
pub mod validator;  // 字段校验
