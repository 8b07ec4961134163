//! # petstore-service: Pet Store Service Layer
//!
//! Saves and reads pet stores together with their employees and customers.
//! Every operation runs in one unit of work: it commits on success and rolls
//! back on any error.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Boundary layer (HTTP, CLI, ...)                                       │
//! │       │  PetStoreData / PetStoreEmployee / PetStoreCustomer            │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               petstore-service (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   PetStoreService ──► ServiceError ──► ErrorCode               │   │
//! │  │   ServiceConfig (TOML + env)    init_tracing()                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  petstore-db (Database, UnitOfWork, repositories)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use petstore_service::{PetStoreService, ServiceConfig};
//! use petstore_db::Database;
//!
//! let config = ServiceConfig::load(None)?;
//! let db = Database::new(config.to_db_config()).await?;
//! let service = PetStoreService::new(db);
//!
//! let store = service.save_pet_store(request).await?;
//! ```

pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;

pub use config::{ConfigError, ServiceConfig};
pub use error::{ErrorCode, ErrorResponse, ServiceError, ServiceResult};
pub use service::PetStoreService;
pub use telemetry::init_tracing;
