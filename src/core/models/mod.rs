pub mod categoria;
pub mod cliente;

pub use categoria::Categoria;
pub use cliente::{ClientPatch, Cliente, UploadFile, DEFAULT_LOGO, QUALIDADE_OPTIONS, RECORRENCIA_OPTIONS};
