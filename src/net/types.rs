//! Wire DTOs for the eventos REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's Spanish JSON contract so serde round-trips
//! stay lossless (`contraseña` is carried via a serde rename). Numeric ids go
//! through a tolerant deserializer because the JS backend emits numbers that
//! may arrive as floats.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role as returned by the auth endpoints.
///
/// The set is closed; menus, landing routes, and route guards all dispatch on
/// this enum exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Empresa,
    Usuario,
}

impl Role {
    /// The lowercase wire form, also shown in the navbar greeting.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Empresa => "empresa",
            Role::Usuario => "usuario",
        }
    }

    /// Human-facing label for tables and selectors.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Empresa => "Empresa",
            Role::Usuario => "Usuario",
        }
    }

    /// The backend's numeric role id used by registration payloads.
    pub fn role_id(self) -> i64 {
        match self {
            Role::Admin => 1,
            Role::Empresa => 2,
            Role::Usuario => 3,
        }
    }
}

/// Map the backend's numeric role id back to the enum.
pub fn role_from_id(id: i64) -> Option<Role> {
    match id {
        1 => Some(Role::Admin),
        2 => Some(Role::Empresa),
        3 => Some(Role::Usuario),
        _ => None,
    }
}

/// The authenticated account record carried in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    pub role: Role,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<String>,
    #[serde(default)]
    pub ciudad: Option<String>,
}

/// Successful `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// A row from `GET /users/listar-usuarios`.
///
/// List rows carry the role in numeric form (`rol`), unlike the session user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Usuario {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<String>,
    #[serde(default)]
    pub ciudad: Option<String>,
    #[serde(default = "default_rol", deserialize_with = "deserialize_i64_from_number")]
    pub rol: i64,
}

fn default_rol() -> i64 {
    Role::Usuario.role_id()
}

/// A row from `GET /empresas/listar-empresas`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Empresa {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub ciudad: Option<String>,
    #[serde(default)]
    pub tipo_empresa: Option<String>,
}

/// Lifecycle state of an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoEvento {
    #[default]
    Activo,
    Finalizado,
}

impl EstadoEvento {
    /// The lowercase wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            EstadoEvento::Activo => "activo",
            EstadoEvento::Finalizado => "finalizado",
        }
    }

    /// Human-facing label for tables and selectors.
    pub fn label(self) -> &'static str {
        match self {
            EstadoEvento::Activo => "Activo",
            EstadoEvento::Finalizado => "Finalizado",
        }
    }
}

/// A row from `GET /eventos/listar-eventos`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Evento {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub titulo: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub direccion: String,
    pub tipo_evento: String,
    /// ISO 8601 timestamp as emitted by the backend.
    pub fecha_inicio: String,
    #[serde(default = "default_duracion", deserialize_with = "deserialize_i64_from_number")]
    pub duracion_horas: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub capacidad_maxima: i64,
    #[serde(default)]
    pub estado: EstadoEvento,
}

fn default_duracion() -> i64 {
    1
}

/// A registration row as seen by the organizing company
/// (`GET /registro-evento/listar-registros`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegistroEvento {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id_registro_evento: i64,
    pub usuario: String,
    pub evento: String,
    pub empresa: String,
    pub fecha_registro: String,
}

/// A registration row as seen by the registered end user
/// (`GET /registro-evento/listar-registros-usuario`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Inscripcion {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id_registro: i64,
    pub evento: String,
    pub fecha: String,
    #[serde(default)]
    pub lugar: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub duracion: i64,
    pub empresa: String,
}

/// Payload for `POST /auth/register` and `PUT /users/actualizar-usuario/{id}`.
///
/// Profile updates leave `contrasena` and `role_id` unset so those keys stay
/// off the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UsuarioPayload {
    pub nombre: String,
    pub correo: String,
    #[serde(rename = "contraseña", skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
    pub telefono: String,
    pub fecha_nacimiento: String,
    pub ciudad: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
}

/// Payload for creating a company account via `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmpresaPayload {
    pub nombre: String,
    pub correo: String,
    #[serde(rename = "contraseña")]
    pub contrasena: String,
    pub telefono: String,
    pub direccion: String,
    pub ciudad: String,
    pub tipo_empresa: String,
    pub role_id: i64,
}

/// Payload for `PUT /empresas/actualizar-empresa/{id}`.
///
/// The backend only accepts these three fields on company updates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmpresaUpdatePayload {
    pub direccion: String,
    pub ciudad: String,
    pub tipo_empresa: String,
}

/// Payload for `POST /eventos/crear-evento` and
/// `PUT /eventos/actualizar-evento/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventoPayload {
    pub titulo: String,
    pub descripcion: String,
    pub direccion: String,
    pub tipo_evento: String,
    pub fecha_inicio: String,
    pub duracion_horas: i64,
    pub capacidad_maxima: i64,
    pub estado: EstadoEvento,
    /// Organizing company id, attached on create only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Payload for `POST /registro-evento/registrar-evento`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InscripcionPayload {
    pub user_id: i64,
    pub evento_id: i64,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
