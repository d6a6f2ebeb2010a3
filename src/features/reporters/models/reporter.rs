use sqlx::FromRow;

/// Database model for the identity that files reports
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Reporter {
    pub reporter_id: String,
    pub name: String,
}
