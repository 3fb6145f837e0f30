use serde::{Deserialize, Deserializer, Serialize};
use super::Categoria;

/// Logo path the backend stores when a spreadsheet row has no logo.
pub const DEFAULT_LOGO: &str = "/static/images/default_logo.png";

pub const QUALIDADE_OPTIONS: [&str; 3] = ["Alta", "Média", "Baixa"];

pub const RECORRENCIA_OPTIONS: [&str; 4] = ["Sem fluxo definido", "Semanal", "Quinzenal", "Mensal"];

/// Client record as served by `GET /api/clientes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_envio: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categoria: String,
    #[serde(default, deserialize_with = "rounded_integer")]
    pub recuperacao: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub qualidade: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recorrencia: String,
}

// Spreadsheet imports leave `null` in empty cells
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Imported scores may be stored as floats (`50.0`)
fn rounded_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?
        .map(|v| v.round() as i64)
        .unwrap_or_default())
}

impl Cliente {
    /// Parsed stage, `None` when the stored value is not a known column id.
    pub fn stage(&self) -> Option<Categoria> {
        Categoria::from_id(&self.categoria)
    }

    /// Logo URL to display, or `None` when the card should show the placeholder.
    pub fn custom_logo(&self) -> Option<&str> {
        match self.logo.as_deref().map(str::trim) {
            None | Some("") | Some("default_logo.png") | Some(DEFAULT_LOGO) => None,
            Some(url) => Some(url),
        }
    }
}

/// Partial update sent with `PUT /api/clientes/{id}`. Unset fields are left out of the body.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ClientPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<Categoria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recuperacao: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorrencia: Option<String>,
}

impl ClientPatch {
    pub fn categoria(categoria: Categoria) -> Self {
        Self {
            categoria: Some(categoria),
            ..Self::default()
        }
    }

    pub fn details(recuperacao: i64, qualidade: String, recorrencia: String) -> Self {
        Self {
            recuperacao: Some(recuperacao),
            qualidade: Some(qualidade),
            recorrencia: Some(recorrencia),
            ..Self::default()
        }
    }
}

/// Spreadsheet picked in the upload input.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}
