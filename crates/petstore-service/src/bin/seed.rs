//! # Seed Data Generator
//!
//! Populates the database with pet stores, employees and customers for
//! development.
//!
//! ## Usage
//! ```bash
//! # Generate 10 stores (default)
//! cargo run -p petstore-service --bin seed
//!
//! # Generate custom amount
//! cargo run -p petstore-service --bin seed -- --stores 25
//!
//! # Specify database path or config file
//! cargo run -p petstore-service --bin seed -- --db ./data/petstore.db
//! cargo run -p petstore-service --bin seed -- --config ./petstore.toml
//! ```
//!
//! Every store gets a handful of employees and customers. Every third
//! customer is also linked to the previous store, so some customers shop at
//! two stores.

use std::env;
use std::path::PathBuf;

use petstore_core::{PetStoreCustomer, PetStoreData, PetStoreEmployee};
use petstore_db::Database;
use petstore_service::{init_tracing, PetStoreService, ServiceConfig};

const CITIES: &[(&str, &str, &str)] = &[
    ("Portland", "OR", "97201"),
    ("Austin", "TX", "73301"),
    ("Denver", "CO", "80202"),
    ("Madison", "WI", "53703"),
    ("Raleigh", "NC", "27601"),
    ("Boise", "ID", "83702"),
    ("Tucson", "AZ", "85701"),
];

const STORE_NAMES: &[&str] = &[
    "Paws & Claws",
    "The Fish Bowl",
    "Happy Tails",
    "Feathered Friends",
    "Barks and Bubbles",
    "The Reptile Room",
    "Kitty Corner",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Ben", "Cleo", "Dev", "Eli", "Fay", "Gus", "Hana", "Ivan", "Jo", "Kai", "Lena",
];

const LAST_NAMES: &[&str] = &[
    "Alvarez", "Brooks", "Chen", "Dubois", "Evans", "Fischer", "Garcia", "Haddad", "Ito",
];

const JOB_TITLES: &[&str] = &["Manager", "Groomer", "Cashier", "Aquarist", "Stock Clerk"];

const EMPLOYEES_PER_STORE: usize = 4;
const CUSTOMERS_PER_STORE: usize = 6;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut stores: usize = 10;
    let mut db_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--stores" | "-s" => {
                if i + 1 < args.len() {
                    stores = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Pet Store Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --stores <N>     Number of pet stores to generate (default: 10)");
                println!("  -d, --db <PATH>      Database file path (overrides config)");
                println!("  -c, --config <FILE>  TOML config file");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let mut config = ServiceConfig::load(config_path)?;
    if let Some(path) = db_path {
        config.database.path = path;
    }
    init_tracing(&config.logging.level);

    println!("🌱 Pet Store Seed Data Generator");
    println!("================================");
    println!("Database: {}", config.database.path.display());
    println!("Stores:   {}", stores);
    println!();

    let db = Database::new(config.to_db_config()).await?;
    println!("✓ Connected to database");

    let existing = {
        let mut uow = db.begin().await?;
        let count = uow.pet_stores().count().await?;
        uow.commit().await?;
        count
    };
    if existing > 0 {
        println!("⚠ Database already has {} pet stores", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let service = PetStoreService::new(db.clone());
    let start = std::time::Instant::now();

    let mut employees = 0;
    let mut customers = 0;
    let mut shared = 0;
    let mut previous_store: Option<i64> = None;

    for n in 0..stores {
        let store = service.save_pet_store(store_data(n)).await?;
        let Some(store_id) = store.pet_store_id else {
            continue;
        };

        for e in 0..EMPLOYEES_PER_STORE {
            service
                .save_employee(store_id, employee_data(n * EMPLOYEES_PER_STORE + e))
                .await?;
            employees += 1;
        }

        for c in 0..CUSTOMERS_PER_STORE {
            let seed = n * CUSTOMERS_PER_STORE + c;
            let saved = service.save_customer(store_id, customer_data(seed)).await?;
            customers += 1;

            if let (Some(prev), Some(customer_id)) = (previous_store, saved.customer_id) {
                if seed % 3 == 0 {
                    let mut uow = db.begin().await?;
                    uow.customers().add_to_pet_store(customer_id, prev).await?;
                    uow.commit().await?;
                    shared += 1;
                }
            }
        }

        previous_store = Some(store_id);
    }

    let elapsed = start.elapsed();
    println!();
    println!(
        "✓ Generated {} stores, {} employees, {} customers in {:?}",
        stores, employees, customers, elapsed
    );
    println!("  {} customers linked to a second store", shared);

    let summaries = service.retrieve_all_pet_stores().await?;
    if let Some(first) = summaries.first().and_then(|s| s.pet_store_id) {
        let full = service.retrieve_pet_store_by_id(first).await?;
        println!(
            "  {}: {} employees, {} customers",
            full.pet_store_name,
            full.employees.len(),
            full.customers.len()
        );
    }

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

fn store_data(seed: usize) -> PetStoreData {
    let (city, state, zip) = CITIES[seed % CITIES.len()];
    let name = STORE_NAMES[seed % STORE_NAMES.len()];

    PetStoreData {
        pet_store_name: format!("{} #{}", name, seed + 1),
        pet_store_address: format!("{} Main St", 100 + seed * 7),
        pet_store_city: city.to_string(),
        pet_store_state: state.to_string(),
        pet_store_zip: zip.to_string(),
        pet_store_phone: phone(seed),
        ..PetStoreData::default()
    }
}

fn employee_data(seed: usize) -> PetStoreEmployee {
    PetStoreEmployee {
        employee_id: None,
        employee_first_name: FIRST_NAMES[seed % FIRST_NAMES.len()].to_string(),
        employee_last_name: LAST_NAMES[(seed * 5) % LAST_NAMES.len()].to_string(),
        employee_phone: phone(seed + 500),
        employee_job_title: JOB_TITLES[seed % JOB_TITLES.len()].to_string(),
    }
}

fn customer_data(seed: usize) -> PetStoreCustomer {
    let first = FIRST_NAMES[(seed * 7) % FIRST_NAMES.len()];
    let last = LAST_NAMES[seed % LAST_NAMES.len()];

    PetStoreCustomer {
        customer_id: None,
        customer_first_name: first.to_string(),
        customer_last_name: last.to_string(),
        customer_email: format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            seed
        ),
    }
}

fn phone(seed: usize) -> String {
    format!("555-{:04}", (seed * 37) % 10_000)
}
