//! REST API helpers for the eventos backend.
//!
//! Browser builds (feature `csr`): real HTTP calls via `gloo-net`.
//! Host builds: stubs returning an error, so unit tests of the pure helpers
//! compile and run without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-OK responses surface the
//! backend's `{"error": "..."}` body field when present; pages collapse the
//! error into their own inline message, optionally preferring the backend
//! text via [`ApiError::display_or`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    Empresa, EmpresaPayload, EmpresaUpdatePayload, Evento, EventoPayload, Inscripcion,
    InscripcionPayload, LoginResponse, RegistroEvento, Usuario, UsuarioPayload,
};

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport, serialization, or decode failure.
    #[error("network error: {0}")]
    Network(String),
    /// Non-OK HTTP status; `message` carries the backend's `error` body field
    /// when one was sent.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
}

impl ApiError {
    #[cfg(not(feature = "csr"))]
    fn unavailable() -> Self {
        ApiError::Network("not available outside the browser".to_owned())
    }

    /// The backend-provided error message, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message: Some(message), .. } => Some(message),
            _ => None,
        }
    }

    /// The backend-provided message, or `fallback` for transport failures and
    /// bodies without one.
    pub fn display_or(&self, fallback: &str) -> String {
        self.backend_message().map_or_else(|| fallback.to_owned(), str::to_owned)
    }
}

const DEFAULT_API_BASE: &str = "https://api-eventos-445r.onrender.com/api";

/// Backend base URL; override at compile time with `EVENTOS_API_BASE`.
fn api_base() -> &'static str {
    option_env!("EVENTOS_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

fn login_endpoint() -> String {
    endpoint("/auth/login")
}

fn register_endpoint() -> String {
    endpoint("/auth/register")
}

fn listar_usuarios_endpoint() -> String {
    endpoint("/users/listar-usuarios")
}

fn actualizar_usuario_endpoint(id: i64) -> String {
    endpoint(&format!("/users/actualizar-usuario/{id}"))
}

fn eliminar_usuario_endpoint(id: i64) -> String {
    endpoint(&format!("/users/eliminar-usuario/{id}"))
}

fn listar_empresas_endpoint() -> String {
    endpoint("/empresas/listar-empresas")
}

fn actualizar_empresa_endpoint(id: i64) -> String {
    endpoint(&format!("/empresas/actualizar-empresa/{id}"))
}

fn eliminar_empresa_endpoint(id: i64) -> String {
    endpoint(&format!("/empresas/eliminar-empresa/{id}"))
}

fn listar_eventos_endpoint() -> String {
    endpoint("/eventos/listar-eventos")
}

fn crear_evento_endpoint() -> String {
    endpoint("/eventos/crear-evento")
}

fn actualizar_evento_endpoint(id: i64) -> String {
    endpoint(&format!("/eventos/actualizar-evento/{id}"))
}

fn eliminar_evento_endpoint(id: i64) -> String {
    endpoint(&format!("/eventos/eliminar-evento/{id}"))
}

fn listar_registros_endpoint() -> String {
    endpoint("/registro-evento/listar-registros")
}

fn listar_registros_usuario_endpoint() -> String {
    endpoint("/registro-evento/listar-registros-usuario")
}

fn registrar_evento_endpoint() -> String {
    endpoint("/registro-evento/registrar-evento")
}

fn eliminar_registro_endpoint(id: i64) -> String {
    endpoint(&format!("/registro-evento/eliminar-registro/{id}"))
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-OK response to an [`ApiError::Status`], extracting the backend's
/// `error` body field when the body is JSON of that shape.
#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(|m| m.as_str()).map(str::to_owned));
    ApiError::Status { status, message }
}

#[cfg(feature = "csr")]
fn builder(method: &str, url: &str, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let builder = match method {
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url),
    };
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn send(
    method: &str,
    url: String,
    token: Option<String>,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    let builder = builder(method, &url, token.as_deref());
    let request = match body {
        Some(body) => builder.json(&body).map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        Ok(resp)
    } else {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let err = status_error(status, &body);
        log::warn!("{method} {url} failed: {err}");
        Err(err)
    }
}

/// Issue a request and decode the JSON response body.
async fn request_json<T: DeserializeOwned>(
    method: &'static str,
    url: String,
    token: Option<String>,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = send(method, url, token, body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (method, url, token, body);
        Err(ApiError::unavailable())
    }
}

/// Issue a request and discard the response body.
async fn request_unit(
    method: &'static str,
    url: String,
    token: Option<String>,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send(method, url, token, body).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (method, url, token, body);
        Err(ApiError::unavailable())
    }
}

fn json_body<B: serde::Serialize>(payload: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Network(e.to_string()))
}

/// `POST /auth/login` with the account credentials.
pub async fn login(correo: &str, contrasena: &str) -> Result<LoginResponse, ApiError> {
    let body = serde_json::json!({ "correo": correo, "contraseña": contrasena });
    request_json("POST", login_endpoint(), None, Some(body)).await
}

/// `POST /auth/register` for an end-user account. The public registration
/// page passes no token; the admin page passes its session token.
pub async fn registrar_usuario(token: Option<&str>, payload: &UsuarioPayload) -> Result<(), ApiError> {
    let body = json_body(payload)?;
    request_unit("POST", register_endpoint(), token.map(str::to_owned), Some(body)).await
}

/// `POST /auth/register` for a company account.
pub async fn registrar_empresa(token: &str, payload: &EmpresaPayload) -> Result<(), ApiError> {
    let body = json_body(payload)?;
    request_unit("POST", register_endpoint(), Some(token.to_owned()), Some(body)).await
}

/// `GET /users/listar-usuarios`.
pub async fn listar_usuarios(token: &str) -> Result<Vec<Usuario>, ApiError> {
    request_json("GET", listar_usuarios_endpoint(), Some(token.to_owned()), None).await
}

/// `PUT /users/actualizar-usuario/{id}`.
pub async fn actualizar_usuario(token: &str, id: i64, payload: &UsuarioPayload) -> Result<(), ApiError> {
    let body = json_body(payload)?;
    request_unit("PUT", actualizar_usuario_endpoint(id), Some(token.to_owned()), Some(body)).await
}

/// `DELETE /users/eliminar-usuario/{id}`.
pub async fn eliminar_usuario(token: &str, id: i64) -> Result<(), ApiError> {
    request_unit("DELETE", eliminar_usuario_endpoint(id), Some(token.to_owned()), None).await
}

/// `GET /empresas/listar-empresas`.
pub async fn listar_empresas(token: &str) -> Result<Vec<Empresa>, ApiError> {
    request_json("GET", listar_empresas_endpoint(), Some(token.to_owned()), None).await
}

/// `PUT /empresas/actualizar-empresa/{id}`.
pub async fn actualizar_empresa(
    token: &str,
    id: i64,
    payload: &EmpresaUpdatePayload,
) -> Result<(), ApiError> {
    let body = json_body(payload)?;
    request_unit("PUT", actualizar_empresa_endpoint(id), Some(token.to_owned()), Some(body)).await
}

/// `DELETE /empresas/eliminar-empresa/{id}`.
pub async fn eliminar_empresa(token: &str, id: i64) -> Result<(), ApiError> {
    request_unit("DELETE", eliminar_empresa_endpoint(id), Some(token.to_owned()), None).await
}

/// `GET /eventos/listar-eventos`. The home page lists events without a
/// session, so the bearer header is attached only when a token exists.
pub async fn listar_eventos(token: Option<&str>) -> Result<Vec<Evento>, ApiError> {
    request_json("GET", listar_eventos_endpoint(), token.map(str::to_owned), None).await
}

/// `POST /eventos/crear-evento`.
pub async fn crear_evento(token: &str, payload: &EventoPayload) -> Result<(), ApiError> {
    let body = json_body(payload)?;
    request_unit("POST", crear_evento_endpoint(), Some(token.to_owned()), Some(body)).await
}

/// `PUT /eventos/actualizar-evento/{id}`.
pub async fn actualizar_evento(token: &str, id: i64, payload: &EventoPayload) -> Result<(), ApiError> {
    let body = json_body(payload)?;
    request_unit("PUT", actualizar_evento_endpoint(id), Some(token.to_owned()), Some(body)).await
}

/// `DELETE /eventos/eliminar-evento/{id}`.
pub async fn eliminar_evento(token: &str, id: i64) -> Result<(), ApiError> {
    request_unit("DELETE", eliminar_evento_endpoint(id), Some(token.to_owned()), None).await
}

/// `GET /registro-evento/listar-registros` (company view).
pub async fn listar_registros(token: &str) -> Result<Vec<RegistroEvento>, ApiError> {
    request_json("GET", listar_registros_endpoint(), Some(token.to_owned()), None).await
}

/// `GET /registro-evento/listar-registros-usuario` (end-user view).
pub async fn listar_registros_usuario(token: &str) -> Result<Vec<Inscripcion>, ApiError> {
    request_json("GET", listar_registros_usuario_endpoint(), Some(token.to_owned()), None).await
}

/// `POST /registro-evento/registrar-evento`.
pub async fn registrar_evento(token: &str, payload: &InscripcionPayload) -> Result<(), ApiError> {
    let body = json_body(payload)?;
    request_unit("POST", registrar_evento_endpoint(), Some(token.to_owned()), Some(body)).await
}

/// `DELETE /registro-evento/eliminar-registro/{id}`.
pub async fn eliminar_registro(token: &str, id: i64) -> Result<(), ApiError> {
    request_unit("DELETE", eliminar_registro_endpoint(id), Some(token.to_owned()), None).await
}
