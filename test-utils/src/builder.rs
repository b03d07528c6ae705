use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Country, City};
///
/// let test = TestBuilder::new()
///     .with_table(Country)
///     .with_table(City)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the employee workflows touch.
    ///
    /// Tables are added in foreign key order: reference tables first, then the employee
    /// and its Discord account, then every table that links back to an employee.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_employee_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_employee_tables(self) -> Self {
        self.with_table(Organization)
            .with_table(Country)
            .with_table(City)
            .with_table(Seniority)
            .with_table(Position)
            .with_table(Stack)
            .with_table(Chapter)
            .with_table(Role)
            .with_table(DiscordAccount)
            .with_table(Employee)
            .with_table(SocialAccount)
            .with_table(EmployeeOrganization)
            .with_table(EmployeePosition)
            .with_table(EmployeeStack)
            .with_table(EmployeeChapter)
            .with_table(EmployeeRole)
            .with_table(BaseSalary)
    }

    /// Adds the project table and every dashboard snapshot table.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_dashboard_tables(self) -> Self {
        self.with_table(Project)
            .with_table(WorkSurvey)
            .with_table(AuditScore)
            .with_table(AuditActionItem)
            .with_table(EngineeringHealth)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
