use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shows::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Shows::Title).string_len(50).not_null())
                    .col(ColumnDef::new(Shows::Image).string_len(50).null())
                    .col(
                        ColumnDef::new(Shows::Year)
                            .unsigned()
                            .not_null()
                            .check(Expr::col(Shows::Year).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Shows::NumberOfSeasons)
                            .unsigned()
                            .null()
                            .check(Expr::col(Shows::NumberOfSeasons).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Shows::WorthAWatch)
                            .boolean()
                            .null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Shows::AlbumName).string_len(50).null())
                    .col(
                        ColumnDef::new(Shows::Duration)
                            .unsigned()
                            .null()
                            .check(Expr::col(Shows::Duration).gte(0)),
                    )
                    .col(ColumnDef::new(Shows::Artist).string_len(50).null())
                    .col(ColumnDef::new(Shows::Created).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shows::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Shows {
    Table,
    Id,
    Title,
    Image,
    Year,
    NumberOfSeasons,
    WorthAWatch,
    AlbumName,
    Duration,
    Artist,
    Created,
}
