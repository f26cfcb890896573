use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create workplaces table
        manager
            .create_table(
                Table::create()
                    .table(Workplaces::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Workplaces::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Workplaces::InventoryNumber).string().not_null().unique_key())
                    .col(ColumnDef::new(Workplaces::IpAddress).string().not_null().default(""))
                    .col(ColumnDef::new(Workplaces::MacAddress).string().not_null().default(""))
                    .col(ColumnDef::new(Workplaces::AccessLevel).string().not_null().default(""))
                    .col(ColumnDef::new(Workplaces::Unit).string().not_null().default(""))
                    .col(ColumnDef::new(Workplaces::Person).string().not_null().default(""))
                    .col(ColumnDef::new(Workplaces::Contacts).string().not_null().default(""))
                    .col(ColumnDef::new(Workplaces::Notes).string().not_null().default(""))
                    .col(ColumnDef::new(Workplaces::Location).string().null())
                    .to_owned(),
            )
            .await?;

        // Software and maintenance reference workplaces by inventory number only,
        // without a foreign key; child rows outlive their workplace.
        manager
            .create_table(
                Table::create()
                    .table(Software::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Software::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Software::InventoryNumber).string().not_null())
                    .col(ColumnDef::new(Software::Date).date().not_null())
                    .col(ColumnDef::new(Software::SoftwareName).string().not_null())
                    .col(ColumnDef::new(Software::Version).string().not_null().default(""))
                    .col(ColumnDef::new(Software::LicenseKey).string().not_null().default(""))
                    .col(ColumnDef::new(Software::Comments).string().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_software_inventory_number")
                    .table(Software::Table)
                    .col(Software::InventoryNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Maintenance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Maintenance::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Maintenance::InventoryNumber).string().not_null())
                    .col(ColumnDef::new(Maintenance::Date).date().not_null())
                    .col(ColumnDef::new(Maintenance::MaintenanceType).string().not_null().default(""))
                    .col(ColumnDef::new(Maintenance::Performed).string().not_null().default(""))
                    .col(ColumnDef::new(Maintenance::PerformedBy).string().not_null().default(""))
                    .col(ColumnDef::new(Maintenance::Comments).string().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_maintenance_inventory_number")
                    .table(Maintenance::Table)
                    .col(Maintenance::InventoryNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Maintenance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Software::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Workplaces::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Workplaces {
    Table,
    Id,
    InventoryNumber,
    IpAddress,
    MacAddress,
    AccessLevel,
    Unit,
    Person,
    Contacts,
    Notes,
    Location,
}

#[derive(DeriveIden)]
enum Software {
    Table,
    Id,
    InventoryNumber,
    Date,
    SoftwareName,
    Version,
    LicenseKey,
    Comments,
}

#[derive(DeriveIden)]
enum Maintenance {
    Table,
    Id,
    InventoryNumber,
    Date,
    MaintenanceType,
    Performed,
    PerformedBy,
    Comments,
}
