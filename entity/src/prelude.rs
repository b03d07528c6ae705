pub use super::audit_action_item::Entity as AuditActionItem;
pub use super::audit_score::Entity as AuditScore;
pub use super::base_salary::Entity as BaseSalary;
pub use super::chapter::Entity as Chapter;
pub use super::city::Entity as City;
pub use super::country::Entity as Country;
pub use super::discord_account::Entity as DiscordAccount;
pub use super::employee::Entity as Employee;
pub use super::employee_chapter::Entity as EmployeeChapter;
pub use super::employee_organization::Entity as EmployeeOrganization;
pub use super::employee_position::Entity as EmployeePosition;
pub use super::employee_role::Entity as EmployeeRole;
pub use super::employee_stack::Entity as EmployeeStack;
pub use super::engineering_health::Entity as EngineeringHealth;
pub use super::organization::Entity as Organization;
pub use super::position::Entity as Position;
pub use super::project::Entity as Project;
pub use super::role::Entity as Role;
pub use super::seniority::Entity as Seniority;
pub use super::social_account::Entity as SocialAccount;
pub use super::stack::Entity as Stack;
pub use super::work_survey::Entity as WorkSurvey;
