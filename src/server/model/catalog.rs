//! Code / name reference data attached to employees.

use uuid::Uuid;

use crate::model::employee::CatalogItemDto;

/// Organization, position, stack, chapter, role or seniority reduced to what
/// employee responses show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

impl CatalogItem {
    pub fn into_dto(self) -> CatalogItemDto {
        CatalogItemDto {
            id: self.id,
            code: self.code,
            name: self.name,
        }
    }
}

macro_rules! catalog_from_entity {
    ($($module:ident),* $(,)?) => {
        $(
            impl From<entity::$module::Model> for CatalogItem {
                fn from(model: entity::$module::Model) -> Self {
                    Self {
                        id: model.id,
                        code: model.code,
                        name: model.name,
                    }
                }
            }
        )*
    };
}

catalog_from_entity!(organization, position, stack, chapter, role, seniority);

/// Converts a list of catalog rows into DTOs.
pub fn into_dtos(items: Vec<CatalogItem>) -> Vec<CatalogItemDto> {
    items.into_iter().map(CatalogItem::into_dto).collect()
}
