use crate::server::{
    data::social_account::SocialAccountRepository,
    model::social_account::{SocialAccountChanges, SocialAccountInput, SocialAccountType},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod update;
