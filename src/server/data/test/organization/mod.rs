use crate::server::data::organization::OrganizationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod replace_for_employee;
