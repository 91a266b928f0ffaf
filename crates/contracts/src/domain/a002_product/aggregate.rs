use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::enums::ProductCategory;
use crate::shared::validation::{require_text, ValidationError};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар
///
/// Если установлен флаг `la_comanda` ("под заказ"), остаток не ведётся
/// и поле `stoc` не считается достоверным.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub nume: String,
    #[serde(default)]
    pub descriere: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub pret: Decimal,
    pub categorie: ProductCategory,
    #[serde(default)]
    pub stoc: i64,
    #[serde(rename = "laComanda", default)]
    pub la_comanda: bool,
    /// Ссылки на изображения (порядок сохраняется)
    #[serde(default)]
    pub imagini: Vec<String>,
}

impl Product {
    /// Создать товар из формы с уже сгенерированным ID
    ///
    /// Категория обязательна; остаток обязателен, если товар не "под заказ".
    pub fn new_for_insert(id: String, dto: ProductDto) -> Result<Self, ValidationError> {
        require_text("nume", &dto.nume)?;
        validate_price(dto.pret)?;
        let categorie = dto
            .categorie
            .ok_or(ValidationError::MissingField { field: "categorie" })?;
        let stoc = match (dto.la_comanda, dto.stoc) {
            (true, stoc) => stoc.unwrap_or(0),
            (false, Some(stoc)) => stoc,
            (false, None) => return Err(ValidationError::MissingField { field: "stoc" }),
        };

        let product = Self {
            id,
            nume: dto.nume,
            descriere: dto.descriere,
            pret: dto.pret,
            categorie,
            stoc,
            la_comanda: dto.la_comanda,
            imagini: dto.imagini,
        };
        product.validate()?;
        Ok(product)
    }

    /// Применить патч: присутствующие поля перезаписываются, остальные не меняются
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(v) = &patch.nume {
            self.nume = v.clone();
        }
        if let Some(v) = &patch.descriere {
            self.descriere = v.clone();
        }
        if let Some(v) = patch.pret {
            self.pret = v;
        }
        if let Some(v) = patch.categorie {
            self.categorie = v;
        }
        if let Some(v) = patch.stoc {
            self.stoc = v;
        }
        if let Some(v) = patch.la_comanda {
            self.la_comanda = v;
        }
        if let Some(v) = &patch.imagini {
            self.imagini = v.clone();
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("nume", &self.nume)?;
        validate_price(self.pret)?;
        if !self.la_comanda && self.stoc < 0 {
            return Err(ValidationError::InvalidValue {
                field: "stoc",
                reason: "stock must not be negative".into(),
            });
        }
        Ok(())
    }

    /// Товар доступен: либо под заказ, либо есть остаток
    pub fn is_available(&self) -> bool {
        self.la_comanda || self.stoc > 0
    }
}

fn validate_price(pret: Decimal) -> Result<(), ValidationError> {
    if pret <= Decimal::ZERO {
        return Err(ValidationError::InvalidValue {
            field: "pret",
            reason: "price must be greater than zero".into(),
        });
    }
    Ok(())
}

impl AggregateRoot for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.nume
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "produse"
    }

    fn id_prefix() -> &'static str {
        "p"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания товара
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub nume: String,
    #[serde(default)]
    pub descriere: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub pret: Decimal,
    #[serde(default)]
    pub categorie: Option<ProductCategory>,
    #[serde(default)]
    pub stoc: Option<i64>,
    #[serde(rename = "laComanda", default)]
    pub la_comanda: bool,
    #[serde(default)]
    pub imagini: Vec<String>,
}

/// Патч для обновления товара
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriere: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub pret: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categorie: Option<ProductCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stoc: Option<i64>,
    #[serde(rename = "laComanda", default, skip_serializing_if = "Option::is_none")]
    pub la_comanda: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagini: Option<Vec<String>>,
}
