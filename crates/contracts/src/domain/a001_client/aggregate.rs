use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::validation::{require_text, ValidationError};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Клиент (компания-покупатель)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub nume_companie: String,
    #[serde(default)]
    pub persoana_contact: String,
    pub email: String,
    pub telefon: String,
    #[serde(default)]
    pub adresa: String,

    /// Дата регистрации клиента; в старых фикстурах отсутствует
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_inregistrare: Option<NaiveDate>,
}

impl Client {
    /// Создать клиента из формы с уже сгенерированным ID
    pub fn new_for_insert(id: String, dto: ClientDto) -> Self {
        Self {
            id,
            nume_companie: dto.nume_companie,
            persoana_contact: dto.persoana_contact,
            email: dto.email,
            telefon: dto.telefon,
            adresa: dto.adresa,
            data_inregistrare: dto.data_inregistrare,
        }
    }

    /// Применить патч: присутствующие поля перезаписываются, остальные не меняются
    pub fn apply(&mut self, patch: &ClientPatch) {
        if let Some(v) = &patch.nume_companie {
            self.nume_companie = v.clone();
        }
        if let Some(v) = &patch.persoana_contact {
            self.persoana_contact = v.clone();
        }
        if let Some(v) = &patch.email {
            self.email = v.clone();
        }
        if let Some(v) = &patch.telefon {
            self.telefon = v.clone();
        }
        if let Some(v) = &patch.adresa {
            self.adresa = v.clone();
        }
        if let Some(v) = patch.data_inregistrare {
            self.data_inregistrare = Some(v);
        }
    }

    /// Валидация данных
    ///
    /// Обязательны название компании, email и телефон. Формат не проверяется.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("nume_companie", &self.nume_companie)?;
        require_text("email", &self.email)?;
        require_text("telefon", &self.telefon)?;
        Ok(())
    }
}

impl AggregateRoot for Client {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.nume_companie
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "clienti"
    }

    fn id_prefix() -> &'static str {
        "c"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания клиента
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub nume_companie: String,
    #[serde(default)]
    pub persoana_contact: String,
    pub email: String,
    pub telefon: String,
    #[serde(default)]
    pub adresa: String,
    #[serde(default)]
    pub data_inregistrare: Option<NaiveDate>,
}

/// Патч для обновления клиента (отсутствующие поля не трогаем)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nume_companie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persoana_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_inregistrare: Option<NaiveDate>,
}
