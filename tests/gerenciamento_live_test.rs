use escola::gerenciamento::{GerenciamentoClient, GerenciamentoHttpClient};

#[tokio::test]
#[ignore] // Run with: GERENCIAMENTO_URL=http://127.0.0.1:5000 cargo test -- --ignored
async fn test_live_gerenciamento_lookup() {
    dotenvy::dotenv().ok();

    let base_url = std::env::var("GERENCIAMENTO_URL").expect("GERENCIAMENTO_URL is not set");
    let client = GerenciamentoHttpClient::new(base_url).expect("Failed to create client");

    // ids are never negative, so this one must be reported as missing
    let exists = client
        .exists("turmas", -1)
        .await
        .expect("Gerenciamento lookup failed");
    assert!(!exists);
}
