//! 通用 API 响应模型
//!
//! 所有接口返回统一的 JSON 信封

use serde::{Deserialize, Serialize};
use chrono::Utc;
use chrono_tz::Asia::Shanghai;

/// 获取北京时间字符串（ISO 8601 格式，带+08:00时区）
fn get_beijing_time() -> String {
    Utc::now().with_timezone(&Shanghai).to_rfc3339()
}

/// 统一 API 响应结构
///
/// - success: 请求是否成功
/// - data: 响应数据
/// - message: 响应消息
/// - timestamp: 响应时间戳（北京时间）
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: "Success".to_string(),
            timestamp: get_beijing_time(),
        }
    }

    /// 创建错误响应
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message,
            timestamp: get_beijing_time(),
        }
    }

    /// 创建带数据的错误响应（页面仍需要展示 data 中的内容）
    pub fn error_with_data(message: String, data: T) -> Self {
        Self {
            success: false,
            data: Some(data),
            message,
            timestamp: get_beijing_time(),
        }
    }
}
