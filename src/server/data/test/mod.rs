mod base_salary;
mod catalog;
mod discord_account;
mod employee;
mod organization;
mod social_account;
