//! Database migrations for the settings editor

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_configuration_settings::Migration)]
    }
}

mod m20250301_000001_create_configuration_settings {
    use super::*;
    use sea_orm_migration::sea_orm::DbBackend;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut value = ColumnDef::new(ConfigurationSettings::SettingValue);
            // SQLite has no fixed-point type; REAL keeps whole numbers from
            // being coerced to INTEGER storage
            match manager.get_database_backend() {
                DbBackend::Sqlite => value.double(),
                _ => value.decimal_len(10, 2),
            };

            manager
                .create_table(
                    Table::create()
                        .table(ConfigurationSettings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ConfigurationSettings::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ConfigurationSettings::SettingKey)
                                .string_len(50)
                                .not_null()
                                .unique_key(),
                        )
                        .col(value.not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ConfigurationSettings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ConfigurationSettings {
        Table,
        Id,
        SettingKey,
        SettingValue,
    }
}
