//! Database seeding command.
//!
//! Inserts two demo users (`admin`, `user1`, both with password
//! `password`), two categories and a handful of sample products so a fresh
//! install has something to browse.

use bodega_core::Username;
use bodega_storefront::db::{CatalogRepository, UserRepository};
use bodega_storefront::models::product::NewProduct;
use bodega_storefront::services::auth::hash_password;

use super::CommandError;

/// Demo password shared by the seeded users.
const SEED_PASSWORD: &str = "password";

/// Seed the database with demo data.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or an insert
/// fails (e.g., the seed was already run and usernames conflict).
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    let users = UserRepository::new(&pool);
    let catalog = CatalogRepository::new(&pool);

    tracing::info!("Seeding users...");
    let password_hash = hash_password(SEED_PASSWORD)?;
    let admin = users.create(&Username::parse("admin")?, &password_hash).await?;
    users.set_admin(admin.id, true).await?;
    let seller = users.create(&Username::parse("user1")?, &password_hash).await?;

    tracing::info!("Seeding categories...");
    let groceries = catalog.create_category("Groceries").await?;
    let kitchen = catalog.create_category("Kitchen Items").await?;

    tracing::info!("Seeding products...");
    let samples = [
        NewProduct {
            category_id: groceries,
            name: "Basmati Rice 5kg".to_owned(),
            description: "Long grain rice for daily cooking".to_owned(),
            price: 14.99,
            image_url: String::new(),
            stock: 30,
        },
        NewProduct {
            category_id: groceries,
            name: "Toor Dal 1kg".to_owned(),
            description: "Protein-rich lentils".to_owned(),
            price: 3.49,
            image_url: String::new(),
            stock: 50,
        },
        NewProduct {
            category_id: kitchen,
            name: "Non-stick Frying Pan".to_owned(),
            description: "28cm pan for easy cooking".to_owned(),
            price: 12.99,
            image_url: String::new(),
            stock: 15,
        },
    ];

    for product in &samples {
        catalog.create(seller.id, product).await?;
    }

    tracing::info!("Seed complete!");
    Ok(())
}
