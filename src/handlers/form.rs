//! 表单接口处理器
//!
//! ## API 列表
//! - GET /fields - 获取字段列表及初始值
//! - POST /fields/{field}/validate - 校验单个字段（字段编辑时调用）
//! - POST /validate - 校验全部字段
//! - POST /predict - 预测市值（点击 Predict 按钮时调用）

use actix_web::{
    error::{InternalError, JsonPayloadError},
    web, HttpRequest, HttpResponse, Result,
};
use crate::models::{
    ApiResponse, Field, FieldInfo, FieldValidation, FieldValueRequest, FormState, PredictionView,
};
use crate::services::predictor::{Predictor, PREDICTION_UNAVAILABLE};
use crate::services::validator;

/// 请求体无法解析时仍返回统一响应格式（400）
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("请求体解析失败: {}", err);
    let response = ApiResponse::<()>::error(format!("请求体格式错误: {}", err));
    InternalError::from_response(err, HttpResponse::BadRequest().json(response)).into()
}

/// 预测请求体无法解析时按预测失败处理（422）
fn predict_json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("预测请求体解析失败: {}", err);
    let view = PredictionView {
        value: None,
        text: PREDICTION_UNAVAILABLE.to_string(),
    };
    let response = ApiResponse::error_with_data(PREDICTION_UNAVAILABLE.to_string(), view);
    InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(response)).into()
}

/// 获取字段列表
///
/// GET /api/v1/fields
pub async fn list_fields() -> Result<HttpResponse> {
    let response = ApiResponse::success(FieldInfo::all());
    Ok(HttpResponse::Ok().json(response))
}

/// 校验单个字段
///
/// POST /api/v1/fields/{field}/validate
///
/// 校验消息只是提示，即使有错误也返回 200
pub async fn validate_field(
    path: web::Path<String>,
    body: web::Json<FieldValueRequest>,
) -> Result<HttpResponse> {
    let name = path.into_inner();

    let Some(field) = Field::parse(&name) else {
        let response = ApiResponse::<FieldValidation>::error(format!("未知字段: {}", name));
        return Ok(HttpResponse::NotFound().json(response));
    };

    let mut form = FormState::default();
    form.set(field, body.value);

    let response = ApiResponse::success(validator::validate_field(&form, field));
    Ok(HttpResponse::Ok().json(response))
}

/// 校验全部字段
///
/// POST /api/v1/validate
pub async fn validate_form(body: web::Json<FormState>) -> Result<HttpResponse> {
    let response = ApiResponse::success(validator::validate_form(&body));
    Ok(HttpResponse::Ok().json(response))
}

/// 预测市值
///
/// POST /api/v1/predict
///
/// 不检查校验结果，直接使用当前表单值
pub async fn predict(
    predictor: web::Data<Predictor>,
    body: web::Json<FormState>,
) -> Result<HttpResponse> {
    let view = predictor.render(&body);

    if view.value.is_some() {
        let response = ApiResponse::success(view);
        Ok(HttpResponse::Ok().json(response))
    } else {
        let response = ApiResponse::<PredictionView>::error_with_data(view.text.clone(), view);
        Ok(HttpResponse::UnprocessableEntity().json(response))
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/fields", web::get().to(list_fields))
        .route("/fields/{field}/validate", web::post().to(validate_field))
        .route("/validate", web::post().to(validate_form))
        .service(
            web::resource("/predict")
                .app_data(web::JsonConfig::default().error_handler(predict_json_error))
                .route(web::post().to(predict)),
        );
}
