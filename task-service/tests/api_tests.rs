mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "name": "Juan",
            "email": "juan@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Usuario creado");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/register")
        .json(&json!({
            "name": "Juan",
            "email": "juan@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Second registration with the same email must be rejected.
    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "name": "Otro",
            "email": "juan@example.com",
            "password": "other_password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "El usuario ya existe");

    // The first registration is unaffected: its credentials still log in.
    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "juan@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "name": "Juan",
            "email": "not-an-email",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/register")
        .json(&json!({
            "name": "Juan",
            "email": "juan@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "juan@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Login exitoso");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/register")
        .json(&json!({
            "name": "Juan",
            "email": "juan@example.com",
            "password": "Correct_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "juan@example.com",
            "password": "Wrong_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Credenciales inválidas");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "nadie@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Usuario no encontrado");
}

#[tokio::test]
async fn test_profile_flow() {
    let app = TestApp::spawn().await;

    let (user_id, token) = app
        .register_and_login("Juan", "juan@example.com", "pass_word!")
        .await;

    let response = app
        .get_authenticated("/api/auth/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], user_id.as_str());
    assert_eq!(body["name"], "Juan");
    assert_eq!(body["email"], "juan@example.com");
    // The password hash must never appear in any projection.
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_gate_missing_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/profile")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Token requerido");
}

#[tokio::test]
async fn test_gate_header_without_token() {
    let app = TestApp::spawn().await;

    // A scheme word alone carries no token segment.
    let response = app
        .get("/api/auth/profile")
        .header("Authorization", "Bearer")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Token inválido");
}

#[tokio::test]
async fn test_gate_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/auth/profile", "garbage.token.value")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Token expirado o inválido");
}

#[tokio::test]
async fn test_gate_expired_token() {
    // Tokens issued by this instance are already expired.
    let app = TestApp::spawn_with_token_lifetime(-1).await;

    let (_, token) = app
        .register_and_login("Juan", "juan@example.com", "pass_word!")
        .await;

    let response = app
        .get_authenticated("/api/auth/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Token expirado o inválido");
}

#[tokio::test]
async fn test_create_user_duplicate_email_wording() {
    let app = TestApp::spawn().await;

    app.post("/api/user")
        .json(&json!({
            "name": "Juan",
            "email": "juan@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/user")
        .json(&json!({
            "name": "Otro",
            "email": "juan@example.com",
            "password": "other_password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "El correo ya está registrado");
}

#[tokio::test]
async fn test_find_user_by_email() {
    let app = TestApp::spawn().await;

    let (user_id, _) = app
        .register_and_login("Juan", "juan@example.com", "pass_word!")
        .await;

    let response = app
        .post("/api/user/email")
        .json(&json!({ "email": "juan@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], user_id.as_str());
    assert!(body.get("password_hash").is_none());

    // Unknown address
    let response = app
        .post("/api/user/email")
        .json(&json!({ "email": "nadie@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/user")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users() {
    let app = TestApp::spawn().await;

    let (_, token) = app
        .register_and_login("Juan", "juan@example.com", "pass_word!")
        .await;
    app.post("/api/auth/register")
        .json(&json!({
            "name": "Ana",
            "email": "ana@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .get_authenticated("/api/user", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let users = body.as_array().expect("Expected an array");
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = TestApp::spawn().await;

    let (user_id, token) = app
        .register_and_login("Juan", "juan@example.com", "pass_word!")
        .await;

    let response = app
        .get_authenticated(&format!("/api/user/{}", user_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], user_id.as_str());
    assert_eq!(body["name"], "Juan");

    // Malformed id
    let response = app
        .get_authenticated("/api/user/not-a-uuid", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown id
    let fake_uuid = uuid::Uuid::new_v4().to_string();
    let response = app
        .get_authenticated(&format!("/api/user/{}", fake_uuid), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_task_crud_flow() {
    let app = TestApp::spawn().await;

    let (user_id, token) = app
        .register_and_login("Juan", "juan@example.com", "pass_word!")
        .await;

    // 1. Create
    let response = app
        .post_authenticated("/api/task", &token)
        .json(&json!({
            "title": "Comprar leche",
            "description": "Ir al supermercado",
            "due_date": "2025-09-15"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Tarea creada");
    let task_id = body["id"].as_str().unwrap().to_string();

    // 2. Read back: fresh tasks start pending and belong to the creator
    let response = app
        .get_authenticated(&format!("/api/task/{}", task_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Comprar leche");
    assert_eq!(body["description"], "Ir al supermercado");
    assert_eq!(body["due_date"], "2025-09-15");
    assert_eq!(body["status"], "pendiente");
    assert_eq!(body["user_id"], user_id.as_str());

    // 3. Partial update
    let response = app
        .put_authenticated(&format!("/api/task/{}", task_id), &token)
        .json(&json!({
            "title": "Comprar huevos",
            "status": "completada"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Tarea actualizada");

    let response = app
        .get_authenticated(&format!("/api/task/{}", task_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Comprar huevos");
    // Untouched fields survive the update.
    assert_eq!(body["description"], "Ir al supermercado");
    assert_eq!(body["status"], "completada");

    // 4. Delete
    let response = app
        .delete_authenticated(&format!("/api/task/{}", task_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Tarea eliminada");

    // 5. Gone
    let response = app
        .get_authenticated(&format!("/api/task/{}", task_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_task_not_found() {
    let app = TestApp::spawn().await;

    let (_, token) = app
        .register_and_login("Juan", "juan@example.com", "pass_word!")
        .await;

    let fake_uuid = uuid::Uuid::new_v4().to_string();
    let response = app
        .get_authenticated(&format!("/api/task/{}", fake_uuid), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Tarea no encontrada");
}

#[tokio::test]
async fn test_delete_task_twice() {
    let app = TestApp::spawn().await;

    let (_, token) = app
        .register_and_login("Juan", "juan@example.com", "pass_word!")
        .await;

    let response = app
        .post_authenticated("/api/task", &token)
        .json(&json!({ "title": "Comprar leche" }))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let task_id = body["id"].as_str().unwrap().to_string();

    let response = app
        .delete_authenticated(&format!("/api/task/{}", task_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    // Deleting an already-deleted task is a not-found, not a silent success.
    let response = app
        .delete_authenticated(&format!("/api/task/{}", task_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Tarea no encontrada");
}

#[tokio::test]
async fn test_update_task_invalid_status() {
    let app = TestApp::spawn().await;

    let (_, token) = app
        .register_and_login("Juan", "juan@example.com", "pass_word!")
        .await;

    let response = app
        .post_authenticated("/api/task", &token)
        .json(&json!({ "title": "Comprar leche" }))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let task_id = body["id"].as_str().unwrap().to_string();

    let response = app
        .put_authenticated(&format!("/api/task/{}", task_id), &token)
        .json(&json!({ "status": "archivada" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_user_tasks_scoped_to_subject() {
    let app = TestApp::spawn().await;

    let (_, juan_token) = app
        .register_and_login("Juan", "juan@example.com", "pass_word!")
        .await;
    let (_, ana_token) = app
        .register_and_login("Ana", "ana@example.com", "pass_word!")
        .await;

    app.post_authenticated("/api/task", &juan_token)
        .json(&json!({ "title": "Tarea de Juan" }))
        .send()
        .await
        .expect("Failed to execute request");

    app.post_authenticated("/api/task", &ana_token)
        .json(&json!({ "title": "Tarea de Ana" }))
        .send()
        .await
        .expect("Failed to execute request");

    // The owner filter comes from the token, not from a parameter.
    let response = app
        .get_authenticated("/api/task/user", &ana_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let tasks = body.as_array().expect("Expected an array");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Tarea de Ana");

    // The unscoped listing still returns everything.
    let response = app
        .get_authenticated("/api/task", &ana_token)
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().expect("Expected an array").len(), 2);
}

#[tokio::test]
async fn test_tasks_require_auth() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/task")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .post("/api/task")
        .json(&json!({ "title": "Comprar leche" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
