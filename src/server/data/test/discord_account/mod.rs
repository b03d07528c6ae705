use crate::server::data::discord_account::DiscordAccountRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
