//! 表单页面
//!
//! 页面本身只负责展示，字段编辑和按钮点击分别调用校验与预测接口

use actix_web::{http::header::ContentType, web, HttpResponse, Result};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
pub async fn index() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_index_page() {
        let app = test::init_service(App::new().configure(config)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("Market Cap Prediction"));
        for id in ["open-input", "high-input", "low-input", "close-input", "volume-input"] {
            assert!(html.contains(id), "页面缺少 {}", id);
        }
        assert!(html.contains("predict-button"));
    }

    /// 页面脚本按字段记录请求序号，过期的校验响应不会覆盖新的消息
    #[actix_web::test]
    async fn test_index_page_drops_stale_responses() {
        let app = test::init_service(App::new().configure(config)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();

        assert!(html.contains("const seq = ++latestSeq[field];"));
        assert!(html.contains("if (seq !== latestSeq[field])"));
        assert!(html.contains("if (seq !== latestPredictSeq)"));
    }
}
