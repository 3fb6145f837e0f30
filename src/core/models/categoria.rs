use serde::{Deserialize, Serialize};

/// Pipeline stage a client sits in. The order of `all()` is the board order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Categoria {
    #[serde(rename = "Sem Definição")]
    SemDefinicao,
    #[serde(rename = "High Touch")]
    HighTouch,
    #[serde(rename = "Mid Touch")]
    MidTouch,
    #[serde(rename = "Tech Touch")]
    TechTouch,
}

impl Categoria {
    pub fn as_str(&self) -> &'static str {
        match self {
            Categoria::SemDefinicao => "Sem Definição",
            Categoria::HighTouch => "High Touch",
            Categoria::MidTouch => "Mid Touch",
            Categoria::TechTouch => "Tech Touch",
        }
    }

    pub fn title(&self) -> &'static str {
        self.as_str()
    }

    /// Style tag for the column border.
    pub fn column_class(&self) -> &'static str {
        match self {
            Categoria::SemDefinicao => "col-sem-definicao",
            Categoria::HighTouch => "col-high-touch",
            Categoria::MidTouch => "col-mid-touch",
            Categoria::TechTouch => "col-tech-touch",
        }
    }

    /// Text color of the "Categoria:" label on a card.
    pub fn label_class(&self) -> &'static str {
        match self {
            Categoria::SemDefinicao => "text-gray-500",
            Categoria::HighTouch => "text-red-500",
            Categoria::MidTouch => "text-blue-500",
            Categoria::TechTouch => "text-green-500",
        }
    }

    pub fn all() -> Vec<Categoria> {
        vec![
            Categoria::SemDefinicao,
            Categoria::HighTouch,
            Categoria::MidTouch,
            Categoria::TechTouch,
        ]
    }

    pub fn from_id(id: &str) -> Option<Categoria> {
        Categoria::all().into_iter().find(|c| c.as_str() == id)
    }
}
