//! REST API Bindings
//!
//! One async wrapper per backend endpoint. Each call attaches the
//! bearer token where required, parses the JSON body on success and
//! maps failures to the message the UI shows. Nothing here touches
//! shared state; callers decide what to do with the result.

use gloo_net::http::Request;
use serde::Serialize;

use crate::models::{ActionResponse, AuthResponse, Sweet, SweetListResponse, SweetPayload};

/// Backend base path.
pub const API_URL: &str = "http://localhost:8000/api";

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    password_confirm: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct AmountBody {
    amount: u32,
}

// ========================
// Auth Endpoints
// ========================

/// Register a new account. The backend expects the password twice;
/// the confirmation is filled from the same field.
///
/// Validation failures come back as a field-keyed structure, which is
/// surfaced verbatim (serialized) as the error string.
pub async fn register(username: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    let body = RegisterBody {
        username,
        email,
        password,
        password_confirm: password,
    };
    let resp = Request::post(&format!("{API_URL}/auth/register/"))
        .json(&body)
        .map_err(|_| "Registration failed".to_string())?
        .send()
        .await
        .map_err(|_| "Registration failed".to_string())?;
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(validation_errors(&text));
    }
    resp.json().await.map_err(|_| "Registration failed".to_string())
}

pub async fn login(username: &str, password: &str) -> Result<AuthResponse, String> {
    let resp = Request::post(&format!("{API_URL}/auth/login/"))
        .json(&LoginBody { username, password })
        .map_err(|_| "Login failed".to_string())?
        .send()
        .await
        .map_err(|_| "Login failed".to_string())?;
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(error_field_or(&text, "Login failed"));
    }
    resp.json().await.map_err(|_| "Login failed".to_string())
}

// ========================
// Sweet Endpoints
// ========================

pub async fn list_sweets(token: &str) -> Result<Vec<Sweet>, String> {
    let resp = Request::get(&format!("{API_URL}/sweets/"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Failed to fetch sweets".to_string())?;
    if !resp.ok() {
        return Err("Failed to fetch sweets".to_string());
    }
    resp.json::<SweetListResponse>()
        .await
        .map(SweetListResponse::into_vec)
        .map_err(|_| "Failed to fetch sweets".to_string())
}

/// Server-side search. The query string carries only the non-empty
/// filter fields; callers fall back to [`list_sweets`] when the
/// filter is empty.
pub async fn search_sweets(token: &str, query: &str) -> Result<Vec<Sweet>, String> {
    let resp = Request::get(&format!("{API_URL}/sweets/search/?{query}"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Search failed".to_string())?;
    if !resp.ok() {
        return Err("Search failed".to_string());
    }
    resp.json::<SweetListResponse>()
        .await
        .map(SweetListResponse::into_vec)
        .map_err(|_| "Search failed".to_string())
}

pub async fn create_sweet(token: &str, payload: &SweetPayload) -> Result<Sweet, String> {
    let resp = Request::post(&format!("{API_URL}/sweets/"))
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|_| "Failed to create sweet".to_string())?
        .send()
        .await
        .map_err(|_| "Failed to create sweet".to_string())?;
    if !resp.ok() {
        return Err("Failed to create sweet".to_string());
    }
    resp.json().await.map_err(|_| "Failed to create sweet".to_string())
}

/// Full-replace update of one sweet.
pub async fn update_sweet(token: &str, id: &str, payload: &SweetPayload) -> Result<Sweet, String> {
    let resp = Request::put(&format!("{API_URL}/sweets/{id}/"))
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|_| "Failed to update sweet".to_string())?
        .send()
        .await
        .map_err(|_| "Failed to update sweet".to_string())?;
    if !resp.ok() {
        return Err("Failed to update sweet".to_string());
    }
    resp.json().await.map_err(|_| "Failed to update sweet".to_string())
}

/// Delete reports only whether the backend answered 2xx; the server
/// sends no body. Err is reserved for transport failures.
pub async fn delete_sweet(token: &str, id: &str) -> Result<bool, String> {
    let resp = Request::delete(&format!("{API_URL}/sweets/{id}/"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(resp.ok())
}

/// Purchase decrements stock server-side; the backend rejects the
/// call when not enough stock remains.
pub async fn purchase_sweet(token: &str, id: &str, amount: u32) -> Result<ActionResponse, String> {
    let resp = Request::post(&format!("{API_URL}/sweets/{id}/purchase/"))
        .header("Authorization", &bearer(token))
        .json(&AmountBody { amount })
        .map_err(|_| "Purchase failed".to_string())?
        .send()
        .await
        .map_err(|_| "Purchase failed".to_string())?;
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(error_field_or(&text, "Purchase failed"));
    }
    resp.json().await.map_err(|_| "Purchase failed".to_string())
}

/// Restock increments stock server-side (admin only).
pub async fn restock_sweet(token: &str, id: &str, amount: u32) -> Result<ActionResponse, String> {
    let resp = Request::post(&format!("{API_URL}/sweets/{id}/restock/"))
        .header("Authorization", &bearer(token))
        .json(&AmountBody { amount })
        .map_err(|_| "Restock failed".to_string())?
        .send()
        .await
        .map_err(|_| "Restock failed".to_string())?;
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(error_field_or(&text, "Restock failed"));
    }
    resp.json().await.map_err(|_| "Restock failed".to_string())
}

// ========================
// Error Body Mapping
// ========================

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pull the `error` field out of a JSON error body, falling back to
/// the operation's generic message.
fn error_field_or(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| fallback.to_string())
}

/// Registration errors are a field-keyed validation structure; keep
/// it intact so the form can show which fields were rejected.
fn validation_errors(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .map(|value| value.to_string())
        .unwrap_or_else(|| "Registration failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer("abc123"), "Bearer abc123");
    }

    #[test]
    fn test_error_field_extracted() {
        let body = r#"{"error": "Invalid credentials"}"#;
        assert_eq!(error_field_or(body, "Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_error_field_fallback_on_missing_field() {
        let body = r#"{"detail": "Not found"}"#;
        assert_eq!(error_field_or(body, "Purchase failed"), "Purchase failed");
    }

    #[test]
    fn test_error_field_fallback_on_garbage() {
        assert_eq!(error_field_or("<html>502</html>", "Restock failed"), "Restock failed");
        assert_eq!(error_field_or("", "Login failed"), "Login failed");
    }

    #[test]
    fn test_validation_errors_keep_structure() {
        let body = r#"{"password": ["Password fields didn't match."]}"#;
        let message = validation_errors(body);
        assert!(message.contains("password"));
        assert!(message.contains("didn't match"));
    }

    #[test]
    fn test_validation_errors_fallback() {
        assert_eq!(validation_errors("not json"), "Registration failed");
    }
}
