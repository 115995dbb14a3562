use std::{fs, sync::Arc, time::Duration};

use menu_nutrition::{fetcher::HttpPageSource, service::NutritionService};
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/nutrition/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

pub async fn serve_menu(server: &MockServer, location: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(format!("/locations-menus/{location}/menu")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(html.into_bytes())
                .insert_header("Content-Type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

pub fn service_for(server: &MockServer) -> NutritionService {
    let source = HttpPageSource::new(Duration::from_secs(5), Duration::ZERO)
        .expect("Failed to build page source");
    NutritionService::new(
        Arc::new(source),
        Url::parse(&server.uri()).expect("mock server uri"),
    )
}
