//! This file serves as the root for all SeaORM entity modules.
//! We define the data models for the Star Wars catalog application here:
//! registered users, the catalog entities themselves, the favorite join
//! tables linking the two, and the blocklist of revoked access tokens.

pub mod favorite_people;
pub mod favorite_planet;
pub mod favorite_vehicle;
pub mod people;
pub mod planet;
pub mod token_blocklist;
pub mod user;
pub mod vehicle;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::favorite_people::Entity as FavoritePeople;
    pub use super::favorite_planet::Entity as FavoritePlanet;
    pub use super::favorite_vehicle::Entity as FavoriteVehicle;
    pub use super::people::Entity as People;
    pub use super::planet::Entity as Planet;
    pub use super::token_blocklist::Entity as TokenBlocklist;
    pub use super::user::Entity as User;
    pub use super::vehicle::Entity as Vehicle;
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, QueryFilter, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        // Try to apply migrations first
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        // Setup database
        let db = setup_db().await?;

        // Create users
        let user1 = user::ActiveModel {
            email: Set("luke@rebellion.org".to_string()),
            password_hash: Set("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string()),
            is_active: Set(true),
            name: Set("Luke".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let user2 = user::ActiveModel {
            email: Set("leia@rebellion.org".to_string()),
            password_hash: Set("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string()),
            is_active: Set(true),
            name: Set("Leia".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Create catalog entities
        let chewbacca = people::ActiveModel {
            name: Set("Chewbacca".to_string()),
            height: Set("228".to_string()),
            mass: Set("112".to_string()),
            hair_color: Set("brown".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let tatooine = planet::ActiveModel {
            name: Set("Tatooine".to_string()),
            diameter: Set(10465),
            gravity: Set("1 standard".to_string()),
            terrain: Set("desert".to_string()),
            orbital_period: Set("304".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let speeder = vehicle::ActiveModel {
            name: Set("X-34 landspeeder".to_string()),
            model: Set("X-34".to_string()),
            manufacturer: Set("SoroSuub Corporation".to_string()),
            cost_in_credits: Set(10550),
            length: Set(3),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Link user1 to every kind of favorite
        let fav_person = favorite_people::ActiveModel {
            user_id: Set(user1.id),
            people_id: Set(chewbacca.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let fav_planet = favorite_planet::ActiveModel {
            user_id: Set(user1.id),
            planet_id: Set(tatooine.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let fav_vehicle = favorite_vehicle::ActiveModel {
            user_id: Set(user1.id),
            vehicle_id: Set(speeder.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // user2 favorites the same person
        favorite_people::ActiveModel {
            user_id: Set(user2.id),
            people_id: Set(chewbacca.id),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Record a revoked token
        let revoked = token_blocklist::ActiveModel {
            jti: Set("9f3c1c0a-2a4e-4f3e-a7a1-1f2d3c4b5a69".to_string()),
            email: Set(user1.email.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Read back and verify data

        // Verify users
        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.email == "luke@rebellion.org"));
        assert!(users.iter().any(|u| u.email == "leia@rebellion.org"));

        // Verify catalog entities
        let people_rows = People::find().all(&db).await?;
        assert_eq!(people_rows.len(), 1);
        assert_eq!(people_rows[0].name, "Chewbacca");

        let planets = Planet::find().all(&db).await?;
        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0].diameter, 10465);

        let vehicles = Vehicle::find().all(&db).await?;
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].manufacturer, "SoroSuub Corporation");

        // Verify favorite rows
        let favorite_person_rows = FavoritePeople::find().all(&db).await?;
        assert_eq!(favorite_person_rows.len(), 2);
        assert_eq!(favorite_person_rows[0].id, fav_person.id);
        assert_eq!(favorite_person_rows[0].people_id, chewbacca.id);

        let favorite_planet_rows = FavoritePlanet::find().all(&db).await?;
        assert_eq!(favorite_planet_rows.len(), 1);
        assert_eq!(favorite_planet_rows[0].id, fav_planet.id);
        assert_eq!(favorite_planet_rows[0].planet_id, tatooine.id);

        let favorite_vehicle_rows = FavoriteVehicle::find().all(&db).await?;
        assert_eq!(favorite_vehicle_rows.len(), 1);
        assert_eq!(favorite_vehicle_rows[0].id, fav_vehicle.id);
        assert_eq!(favorite_vehicle_rows[0].vehicle_id, speeder.id);

        // Verify the blocklist entry
        let blocked = TokenBlocklist::find().all(&db).await?;
        assert_eq!(blocked.len(), 1);
        assert_eq!(blocked[0].id, revoked.id);
        assert_eq!(blocked[0].email, "luke@rebellion.org");

        // Test relationships using the Related trait

        // Get the people user1 favorited through the join table
        let user1_people = user1.find_related(People).all(&db).await?;
        assert_eq!(user1_people.len(), 1);
        assert_eq!(user1_people[0].id, chewbacca.id);

        // Get the planets and vehicles the same way
        let user1_planets = user1.find_related(Planet).all(&db).await?;
        assert_eq!(user1_planets.len(), 1);
        assert_eq!(user1_planets[0].name, "Tatooine");

        let user1_vehicles = user1.find_related(Vehicle).all(&db).await?;
        assert_eq!(user1_vehicles.len(), 1);
        assert_eq!(user1_vehicles[0].name, "X-34 landspeeder");

        // Deleting a user cascades into its favorites but leaves other
        // users' rows alone
        User::delete_by_id(user1.id).exec(&db).await?;

        let remaining_people_favs = FavoritePeople::find().all(&db).await?;
        assert_eq!(remaining_people_favs.len(), 1);
        assert_eq!(remaining_people_favs[0].user_id, user2.id);

        let remaining_planet_favs = FavoritePlanet::find()
            .filter(favorite_planet::Column::UserId.eq(user1.id))
            .all(&db)
            .await?;
        assert!(remaining_planet_favs.is_empty());

        let remaining_vehicle_favs = FavoriteVehicle::find()
            .filter(favorite_vehicle::Column::UserId.eq(user1.id))
            .all(&db)
            .await?;
        assert!(remaining_vehicle_favs.is_empty());

        // The blocklist row survives the user deletion
        let blocked_after = TokenBlocklist::find().all(&db).await?;
        assert_eq!(blocked_after.len(), 1);

        Ok(())
    }
}
