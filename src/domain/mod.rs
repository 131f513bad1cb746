//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define the persistence contract implemented by
//! [`crate::infrastructure`]; business rules live in
//! [`crate::application::services`].
//!
//! - [`entities`] - [`entities::Book`] and [`entities::Loan`]
//! - [`pagination`] - page requests and result pages
//! - [`repositories`] - data access trait definitions

pub mod entities;
pub mod pagination;
pub mod repositories;
