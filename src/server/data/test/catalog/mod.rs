use crate::server::data::catalog::CatalogRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod replace_links;
mod set_leading_chapters;
