use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{self, require_text};
use crate::user;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "social_media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub url: String,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(v: &str) -> Result<(), errors::ModelError> { require_text("name", v) }

pub fn validate_url(v: &str) -> Result<(), errors::ModelError> {
    require_text("url", v)?;
    let invalid = || errors::ModelError::Validation("url must have a valid format".into());
    let parsed = url::Url::parse(v.trim()).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation_basic() {
        assert!(validate_url("https://twitter.com/ana").is_ok());
        assert!(validate_url("http://linkedin.com/in/ana?x=1").is_ok());
        assert!(validate_url("").is_err());
        assert!(validate_url("twitter.com/ana").is_err());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("https://").is_err());
    }

    #[test]
    fn name_must_not_be_blank() {
        assert!(validate_name("Twitter").is_ok());
        assert!(validate_name("\t").is_err());
    }
}
