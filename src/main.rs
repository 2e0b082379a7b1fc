//! 市值预测服务
//!
//! 提供 Open / High / Low / Close / Volume 五个字段的表单页面，
//! 逐字段校验输入，并在点击 Predict 时调用预训练回归模型给出市值预测

mod config;     // 配置加载
mod handlers;   // HTTP 请求处理器
mod models;     // 数据模型定义
mod services;   // 校验与预测服务

use actix_web::{web, App, HttpServer, middleware::Logger};
use anyhow::Context;
use env_logger::Env;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::model;
use crate::services::predictor::Predictor;

/// 应用程序入口
///
/// 启动时加载一次模型，之后所有请求共享同一个只读实例
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();

    // 初始化日志系统，RUST_LOG 优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(loaded.config.log.level.as_str()));
    loaded.log_outcome();
    let config = loaded.config;

    let model_path = model::default_model_path();
    let model = model::load_model(&model_path)
        .with_context(|| format!("无法加载模型 {}", model_path.display()))?;
    let predictor = web::Data::new(Predictor::new(Arc::new(model)));

    let bind_addr = config.bind_addr();
    log::info!("启动市值预测服务，监听 {}", bind_addr);

    // 创建并启动 HTTP 服务器
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(predictor.clone())
            .configure(handlers::config)  // 配置路由
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_addr)?.run().await?;
    Ok(())
}
