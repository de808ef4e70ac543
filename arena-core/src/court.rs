use serde::{Deserialize, Serialize};

pub const DEFAULT_COURT_NAME: &str = "Quadra Principal";
pub const DEFAULT_COURT_CATEGORY: &str = "Futebol Society";
pub const DEFAULT_HOURLY_PRICE: f64 = 70.00;

/// A rentable court, priced per hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub hourly_price: f64,
}

/// Public listing shape used by `/api/quadras`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourtListing {
    pub id: i64,
    pub nome: String,
    pub preco_por_hora: f64,
}

impl From<&Court> for CourtListing {
    fn from(court: &Court) -> Self {
        Self {
            id: court.id,
            nome: court.name.clone(),
            preco_por_hora: court.hourly_price,
        }
    }
}

/// Result of ensuring the default court exists.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Created(Court),
    AlreadyExists,
}

impl SeedOutcome {
    pub fn message(&self) -> String {
        match self {
            SeedOutcome::Created(court) => {
                format!("Quadra '{}' adicionada com sucesso!", court.name)
            }
            SeedOutcome::AlreadyExists => {
                "A quadra principal já existe no banco de dados!".to_string()
            }
        }
    }
}
