//! SeaORM entity models for the Fortress database schema.

pub mod prelude;

pub mod audit_action_item;
pub mod audit_score;
pub mod base_salary;
pub mod chapter;
pub mod city;
pub mod country;
pub mod discord_account;
pub mod employee;
pub mod employee_chapter;
pub mod employee_organization;
pub mod employee_position;
pub mod employee_role;
pub mod employee_stack;
pub mod engineering_health;
pub mod organization;
pub mod position;
pub mod project;
pub mod role;
pub mod seniority;
pub mod social_account;
pub mod stack;
pub mod work_survey;
