#![allow(dead_code)]

use std::path::PathBuf;

use api::build_app;
use api::config::AppConfig;
use auth::InMemoryUserRepository;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use posts::InMemoryPostRepository;
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "X-BLOG-ADMIN-TEST-BOUNDARY";

pub struct TestApp {
    pub router: Router,
    pub upload_dir: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(&[])
}

/// App over fresh in-memory stores and a private upload directory
pub fn create_test_app_with(extra: &[(&str, &str)]) -> TestApp {
    let upload_dir = std::env::temp_dir().join(format!("blog-admin-test-{}", uuid::Uuid::new_v4()));
    let upload_dir_str = upload_dir.to_string_lossy().into_owned();

    let config = AppConfig::from_lookup(|key| {
        if key == "UPLOAD_DIR" {
            return Some(upload_dir_str.clone());
        }
        extra
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
    .unwrap();

    let router = build_app(
        &config,
        InMemoryUserRepository::new(),
        InMemoryPostRepository::new(),
    );

    TestApp { router, upload_dir }
}

/// A file part for a multipart body
pub struct FilePart<'a> {
    pub field: &'a str,
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

pub fn multipart_body(fields: &[(&str, &str)], file: Option<FilePart<'_>>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some(file) = file {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                file.field, file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn register_multipart(&self, body: Vec<u8>) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri("/register")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    pub async fn register(&self, username: &str, password: &str) -> Response<Body> {
        self.register_multipart(multipart_body(
            &[("username", username), ("password", password)],
            None,
        ))
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri("/admin")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!(
                    "username={}&password={}",
                    username, password
                )))
                .unwrap(),
        )
        .await
    }

    /// Register, log in, and return the `Cookie` header value to send back
    pub async fn sign_up_and_login(&self, username: &str, password: &str) -> String {
        let res = self.register(username, password).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = self.login(username, password).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        session_cookie(&res)
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        self.send(request("GET", uri, cookie, None)).await
    }

    pub async fn create_post(&self, cookie: &str, title: &str, body: &str) -> Response<Body> {
        self.send(request(
            "POST",
            "/add-post",
            Some(cookie),
            Some(format!("title={}&body={}", title, body)),
        ))
        .await
    }

    pub async fn update_post(
        &self,
        cookie: &str,
        id: &str,
        title: &str,
        body: &str,
    ) -> Response<Body> {
        self.send(request(
            "PUT",
            &format!("/edit-post/{}", id),
            Some(cookie),
            Some(format!("title={}&body={}", title, body)),
        ))
        .await
    }

    pub async fn delete_post(&self, cookie: &str, id: &str) -> Response<Body> {
        self.send(request(
            "DELETE",
            &format!("/delete-post/{}", id),
            Some(cookie),
            None,
        ))
        .await
    }

    /// Posts on the dashboard, newest first
    pub async fn list_posts(&self, cookie: &str) -> Vec<Value> {
        let res = self.get("/dashboard", Some(cookie)).await;
        assert_eq!(res.status(), StatusCode::OK);
        let page = json_body(res).await;
        assert_eq!(page["view"], "admin/dashboard");
        page["data"].as_array().cloned().unwrap_or_default()
    }

    /// Create a post and return its id as listed on the dashboard
    pub async fn create_post_id(&self, cookie: &str, title: &str, body: &str) -> String {
        let res = self.create_post(cookie, title, body).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);

        self.list_posts(cookie)
            .await
            .into_iter()
            .find(|p| p["title"] == title)
            .and_then(|p| p["id"].as_str().map(str::to_string))
            .unwrap()
    }
}

pub fn request(method: &str, uri: &str, cookie: Option<&str>, form: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    match form {
        Some(form) => builder
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// The `name=value` pair of the response's Set-Cookie header
pub fn session_cookie<B>(res: &Response<B>) -> String {
    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().trim().to_string()
}

pub fn location<B>(res: &Response<B>) -> &str {
    res.headers().get(header::LOCATION).unwrap().to_str().unwrap()
}

pub async fn json_body(res: Response<Body>) -> Value {
    let body = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
