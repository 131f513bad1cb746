mod common;

use axum::http::StatusCode;
use serde_json::json;

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_book_success() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/api/books")
        .json(&common::book_json(
            "Aventuras de Jhonson",
            "James Jhonson",
            "123456789",
        ))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert!(json["id"].is_i64());
    assert_eq!(json["title"], "Aventuras de Jhonson");
    assert_eq!(json["author"], "James Jhonson");
    assert_eq!(json["isbn"], "123456789");
}

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let server = common::make_server(common::create_test_state());
    let id = common::create_book(&server, "Dom Casmurro", "Machado de Assis", "9788535910").await;

    let response = server.get(&format!("/api/books/{id}")).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], id);
    assert_eq!(json["title"], "Dom Casmurro");
    assert_eq!(json["author"], "Machado de Assis");
    assert_eq!(json["isbn"], "9788535910");
}

#[tokio::test]
async fn test_create_duplicate_isbn() {
    let server = common::make_server(common::create_test_state());
    common::create_book(&server, "Aventuras de Jhonson", "James Jhonson", "123456789").await;

    let response = server
        .post("/api/books")
        .json(&common::book_json("Outro título", "Outro autor", "123456789"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "errors": ["Isbn já cadastrado."] }));

    let all = server.get("/api/books").await.json::<serde_json::Value>();
    assert_eq!(all["totalElements"], 1);
}

#[tokio::test]
async fn test_create_duplicate_title() {
    let server = common::make_server(common::create_test_state());
    common::create_book(&server, "Aventuras de Jhonson", "James Jhonson", "123456789").await;

    let response = server
        .post("/api/books")
        .json(&common::book_json("Aventuras de Jhonson", "Outro autor", "987654321"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "errors": ["Título já cadastrado."] }));
}

#[tokio::test]
async fn test_create_duplicate_isbn_and_title_reports_isbn_only() {
    let server = common::make_server(common::create_test_state());
    common::create_book(&server, "Aventuras de Jhonson", "James Jhonson", "123456789").await;

    let response = server
        .post("/api/books")
        .json(&common::book_json("Aventuras de Jhonson", "James Jhonson", "123456789"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "errors": ["Isbn já cadastrado."] }));
}

#[tokio::test]
async fn test_create_missing_fields() {
    let server = common::make_server(common::create_test_state());

    let response = server.post("/api/books").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "errors": [
            "Autor é obrigatório.",
            "Isbn é obrigatório.",
            "Título é obrigatório."
        ]
    }));
}

#[tokio::test]
async fn test_create_empty_title() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/api/books")
        .json(&common::book_json("", "James Jhonson", "123456789"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "errors": ["Título é obrigatório."] }));
}

#[tokio::test]
async fn test_create_wrong_field_type() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/api/books")
        .json(&json!({ "title": 5, "author": "James Jhonson", "isbn": "123456789" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_create_malformed_body() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/api/books")
        .bytes("{\"title\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_book_not_found() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/api/books/999").await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_book_success() {
    let server = common::make_server(common::create_test_state());
    let id = common::create_book(&server, "Título antigo", "Autor antigo", "111").await;

    let response = server
        .put(&format!("/api/books/{id}"))
        .json(&json!({ "title": "Título novo", "author": "Washington", "isbn": "999" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], id);
    assert_eq!(json["title"], "Título novo");
    assert_eq!(json["author"], "Washington");
    assert_eq!(json["isbn"], "111");

    let stored = server
        .get(&format!("/api/books/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stored, json);
}

#[tokio::test]
async fn test_update_book_keeps_absent_fields() {
    let server = common::make_server(common::create_test_state());
    let id = common::create_book(&server, "Título", "Autor", "111").await;

    let response = server
        .put(&format!("/api/books/{id}"))
        .json(&json!({ "author": "Washington" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["title"], "Título");
    assert_eq!(json["author"], "Washington");
}

#[tokio::test]
async fn test_update_empty_title_is_rejected() {
    let server = common::make_server(common::create_test_state());
    let id = common::create_book(&server, "Título", "Autor", "111").await;

    let response = server
        .put(&format!("/api/books/{id}"))
        .json(&json!({ "title": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "errors": ["Título é obrigatório."] }));

    let stored = server
        .get(&format!("/api/books/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stored["title"], "Título");
    assert_eq!(stored["author"], "Autor");
}

#[tokio::test]
async fn test_update_empty_title_and_author_are_rejected() {
    let server = common::make_server(common::create_test_state());
    let id = common::create_book(&server, "Título", "Autor", "111").await;

    let response = server
        .put(&format!("/api/books/{id}"))
        .json(&json!({ "title": "", "author": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "errors": ["Autor é obrigatório.", "Título é obrigatório."]
    }));
}

#[tokio::test]
async fn test_update_to_existing_title_is_rejected() {
    let server = common::make_server(common::create_test_state());
    common::create_book(&server, "Dom Casmurro", "Machado de Assis", "111").await;
    let id = common::create_book(&server, "Memórias Póstumas", "Machado de Assis", "222").await;

    let response = server
        .put(&format!("/api/books/{id}"))
        .json(&json!({ "title": "Dom Casmurro" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "errors": ["Título já cadastrado."] }));

    let stored = server
        .get(&format!("/api/books/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stored["title"], "Memórias Póstumas");
}

#[tokio::test]
async fn test_update_wrong_field_type() {
    let server = common::make_server(common::create_test_state());
    let id = common::create_book(&server, "Título", "Autor", "111").await;

    let response = server
        .put(&format!("/api/books/{id}"))
        .json(&json!({ "author": ["Washington"] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["errors"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_update_book_not_found() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .put("/api/books/999")
        .json(&json!({ "title": "Título", "author": "Autor" }))
        .await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_book_success() {
    let server = common::make_server(common::create_test_state());
    let id = common::create_book(&server, "Título", "Autor", "111").await;

    let response = server.delete(&format!("/api/books/{id}")).await;

    response.assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/books/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_book_not_found() {
    let server = common::make_server(common::create_test_state());

    let response = server.delete("/api/books/999").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_book_with_loans() {
    let server = common::make_server(common::create_test_state());
    let id = common::create_book(&server, "Título", "Autor", "159736482").await;
    server
        .post("/api/loans")
        .json(&json!({ "isbn": "159736482", "customer": "Stive" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.delete(&format!("/api/books/{id}")).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "errors": ["Livro possui empréstimos registrados."] }));
    server
        .get(&format!("/api/books/{id}"))
        .await
        .assert_status_ok();
}

// ─── SEARCH ──────────────────────────────────────────────────────────────────

async fn seed(server: &axum_test::TestServer) {
    common::create_book(server, "As Aventuras de James", "James Jhonson", "1").await;
    common::create_book(server, "Novas aventuras", "Maria Silva", "2").await;
    common::create_book(server, "Dom Casmurro", "Machado de Assis", "3").await;
}

#[tokio::test]
async fn test_search_without_filters_returns_all() {
    let server = common::make_server(common::create_test_state());
    seed(&server).await;

    let response = server.get("/api/books").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["content"].as_array().unwrap().len(), 3);
    assert_eq!(json["totalElements"], 3);
    assert_eq!(json["totalPages"], 1);
    assert_eq!(json["pageable"]["pageNumber"], 0);
    assert_eq!(json["pageable"]["pageSize"], 20);
    assert_eq!(json["first"], true);
    assert_eq!(json["last"], true);
}

#[tokio::test]
async fn test_search_with_empty_params_returns_all() {
    let server = common::make_server(common::create_test_state());
    seed(&server).await;

    let response = server.get("/api/books?title=&author=&page=&size=").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["totalElements"], 3);
}

#[tokio::test]
async fn test_search_with_non_numeric_paging_uses_defaults() {
    let server = common::make_server(common::create_test_state());
    seed(&server).await;

    let response = server.get("/api/books?page=abc&size=x").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["totalElements"], 3);
    assert_eq!(json["number"], 0);
    assert_eq!(json["size"], 20);
}

#[tokio::test]
async fn test_search_by_partial_title_is_case_insensitive() {
    let server = common::make_server(common::create_test_state());
    seed(&server).await;

    let response = server.get("/api/books?title=AVENTURAS").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let titles: Vec<_> = json["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["As Aventuras de James", "Novas aventuras"]);
}

#[tokio::test]
async fn test_search_by_title_and_author() {
    let server = common::make_server(common::create_test_state());
    seed(&server).await;

    let response = server.get("/api/books?title=aventuras&author=maria").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["totalElements"], 1);
    assert_eq!(json["content"][0]["author"], "Maria Silva");
}

#[tokio::test]
async fn test_search_pagination() {
    let server = common::make_server(common::create_test_state());
    seed(&server).await;

    let response = server.get("/api/books?page=1&size=2").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["content"].as_array().unwrap().len(), 1);
    assert_eq!(json["content"][0]["title"], "Dom Casmurro");
    assert_eq!(json["totalElements"], 3);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["number"], 1);
    assert_eq!(json["size"], 2);
    assert_eq!(json["numberOfElements"], 1);
    assert_eq!(json["pageable"]["offset"], 2);
    assert_eq!(json["first"], false);
    assert_eq!(json["last"], true);
}

#[tokio::test]
async fn test_search_no_match_is_empty_page() {
    let server = common::make_server(common::create_test_state());
    seed(&server).await;

    let response = server.get("/api/books?author=tolkien").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["totalElements"], 0);
    assert_eq!(json["empty"], true);
    assert!(json["content"].as_array().unwrap().is_empty());
}
