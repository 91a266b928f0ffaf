use serde::{Deserialize, Serialize};

/// Категории товаров (закрытый набор)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "Cămăși")]
    Shirts,
    #[serde(rename = "Pantaloni")]
    Trousers,
    #[serde(rename = "Geci")]
    Jackets,
    #[serde(rename = "Accesorii")]
    Accessories,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Shirts => "Cămăși",
            ProductCategory::Trousers => "Pantaloni",
            ProductCategory::Jackets => "Geci",
            ProductCategory::Accessories => "Accesorii",
        }
    }

    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Shirts,
            ProductCategory::Trousers,
            ProductCategory::Jackets,
            ProductCategory::Accessories,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.as_str() == label)
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
