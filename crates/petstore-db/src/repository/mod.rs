//! # Repository Module
//!
//! One repository per entity. Repositories borrow a connection, so they are
//! handed out by [`crate::UnitOfWork`] and every call joins its transaction.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PetStoreService                                                       │
//! │       │                                                                 │
//! │       │  uow.employees().list_by_pet_store(7)                          │
//! │       ▼                                                                 │
//! │  EmployeeRepository<'tx>                                               │
//! │  ├── find_by_id(&mut self, id)                                         │
//! │  ├── find_all(&mut self)                                               │
//! │  ├── save(&mut self, &Employee)      upsert by identity               │
//! │  └── delete(&mut self, id)                                             │
//! │       │                                                                 │
//! │       │  SQL over &mut SqliteConnection (the open transaction)          │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`pet_store::PetStoreRepository`] - Pet store CRUD
//! - [`employee::EmployeeRepository`] - Employee CRUD, listing by store
//! - [`customer::CustomerRepository`] - Customer CRUD and store links

pub mod customer;
pub mod employee;
pub mod pet_store;
