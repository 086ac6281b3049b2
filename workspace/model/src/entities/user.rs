use sea_orm::entity::prelude::*;

/// A registered user of the catalog.
/// The password is never stored; `password_hash` holds an Argon2id PHC string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_people::Entity")]
    FavoritePeople,
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
    #[sea_orm(has_many = "super::favorite_vehicle::Entity")]
    FavoriteVehicle,
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_people::Relation::People.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::favorite_people::Relation::User.def().rev())
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_planet::Relation::Planet.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::favorite_planet::Relation::User.def().rev())
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::favorite_vehicle::Relation::Vehicle.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::favorite_vehicle::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
