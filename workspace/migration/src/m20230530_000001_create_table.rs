use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Email).unique_key())
                    .col(string(Users::PasswordHash))
                    .col(boolean(Users::IsActive).default(true))
                    .col(string(Users::Name))
                    .to_owned(),
            )
            .await?;

        // Create people table
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string(People::Name))
                    .col(string(People::Height))
                    .col(string(People::Mass))
                    .col(string(People::HairColor))
                    .to_owned(),
            )
            .await?;

        // Create planets table
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string(Planets::Name))
                    .col(integer(Planets::Diameter))
                    .col(string(Planets::Gravity))
                    .col(string(Planets::Terrain))
                    .col(string(Planets::OrbitalPeriod))
                    .to_owned(),
            )
            .await?;

        // Create vehicles table
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(string(Vehicles::Name).unique_key())
                    .col(string(Vehicles::Model))
                    .col(string(Vehicles::Manufacturer))
                    .col(integer(Vehicles::CostInCredits))
                    .col(integer(Vehicles::Length))
                    .to_owned(),
            )
            .await?;

        // Create favorite_people table (join table)
        manager
            .create_table(
                Table::create()
                    .table(FavoritePeople::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePeople::Id))
                    .col(integer(FavoritePeople::UserId))
                    .col(integer(FavoritePeople::PeopleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_people_user")
                            .from(FavoritePeople::Table, FavoritePeople::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_people_people")
                            .from(FavoritePeople::Table, FavoritePeople::PeopleId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create favorite_planets table (join table)
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePlanets::Id))
                    .col(integer(FavoritePlanets::UserId))
                    .col(integer(FavoritePlanets::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planets_user")
                            .from(FavoritePlanets::Table, FavoritePlanets::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planets_planet")
                            .from(FavoritePlanets::Table, FavoritePlanets::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create favorite_vehicles table (join table)
        manager
            .create_table(
                Table::create()
                    .table(FavoriteVehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteVehicles::Id))
                    .col(integer(FavoriteVehicles::UserId))
                    .col(integer(FavoriteVehicles::VehicleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_vehicles_user")
                            .from(FavoriteVehicles::Table, FavoriteVehicles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_vehicles_vehicle")
                            .from(FavoriteVehicles::Table, FavoriteVehicles::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(FavoriteVehicles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FavoritePeople::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Define identifiers for all tables

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    IsActive,
    Name,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
    Diameter,
    Gravity,
    Terrain,
    OrbitalPeriod,
}

#[derive(DeriveIden)]
enum Vehicles {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    CostInCredits,
    Length,
}

#[derive(DeriveIden)]
enum FavoritePeople {
    Table,
    Id,
    UserId,
    PeopleId,
}

#[derive(DeriveIden)]
enum FavoritePlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}

#[derive(DeriveIden)]
enum FavoriteVehicles {
    Table,
    Id,
    UserId,
    VehicleId,
}
