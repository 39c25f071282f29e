//! Embedded frontend bundle.
//!
//! `build.rs` copies the trunk output into `static/dist`, which is compiled
//! into the binary. Unknown paths fall back to `index.html` so client-side
//! URLs such as `/?site=JSBHQ` always load the page.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let file_path = resolve_asset_path(req.path());

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file(INDEX) {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

/// Maps a request path onto a path inside the bundle.
pub fn resolve_asset_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() || path.ends_with('/') {
        INDEX
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use actix_web::{http::StatusCode, web, App};

    #[test]
    fn root_maps_to_index() {
        assert_eq!(resolve_asset_path("/"), "index.html");
        assert_eq!(resolve_asset_path(""), "index.html");
        assert_eq!(resolve_asset_path("/nested/"), "index.html");
    }

    #[test]
    fn file_paths_lose_leading_slash() {
        assert_eq!(resolve_asset_path("/induction-content.html"), "induction-content.html");
        assert_eq!(resolve_asset_path("/frontend_bg.wasm"), "frontend_bg.wasm");
    }

    #[actix_web::test]
    async fn missing_asset_never_errors() {
        let app = actix_test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;
        let req = actix_test::TestRequest::get().uri("/does-not-exist.js").to_request();
        let resp = actix_test::call_service(&app, req).await;
        // Either the SPA fallback or a plain 404 when no bundle was embedded.
        assert!(matches!(resp.status(), StatusCode::OK | StatusCode::NOT_FOUND));
    }
}
