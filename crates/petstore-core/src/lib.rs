//! # petstore-core: Pure Domain Model for the Pet Store Service
//!
//! This crate holds the entity model, the boundary-facing transfer model and
//! the domain errors. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Pet Store Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Boundary layer (HTTP, not in this workspace)       │   │
//! │  │        PetStoreData / PetStoreEmployee / PetStoreCustomer       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 petstore-service (PetStoreService)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ petstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐     ┌────────────┐     ┌───────────┐           │   │
//! │  │   │   types   │     │  transfer  │     │   error   │           │   │
//! │  │   │ PetStore  │◄───►│PetStoreData│     │ NotFound  │           │   │
//! │  │   │ Employee  │     │ ...Employee│     │ Mismatch  │           │   │
//! │  │   │ Customer  │     │ ...Customer│     │           │           │   │
//! │  │   └───────────┘     └────────────┘     └───────────┘           │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  petstore-db (Database Layer)                   │   │
//! │  │         SQLite repositories, unit of work, migrations           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Persisted entities (PetStore, Employee, Customer)
//! - [`transfer`] - Boundary shapes and the field copy between them and entities
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use petstore_core::{PetStore, PetStoreData};
//!
//! let input = PetStoreData {
//!     pet_store_name: "Paws & Claws".to_string(),
//!     pet_store_city: "Denver".to_string(),
//!     ..PetStoreData::default()
//! };
//!
//! // Find-or-create: no id means a brand new entity
//! let mut store = PetStore::default();
//! input.copy_into(&mut store);
//!
//! assert_eq!(store.id, None);
//! assert_eq!(store.name, "Paws & Claws");
//! assert_eq!(PetStoreData::from(&store).pet_store_city, "Denver");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod transfer;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, EntityKind};
pub use transfer::{PetStoreCustomer, PetStoreData, PetStoreEmployee};
pub use types::{Customer, Employee, PetStore};
