//! Typed access to each persisted collection
//!
//! Each repository loads its whole collection through the fail-soft
//! [`Store`](crate::store::Store) contract and writes it back after every
//! mutation. Repositories never reference one another.

pub mod financial;
mod history;
mod payments;
mod vehicles;

pub use history::HistoryRepository;
pub use payments::PaymentMethodRepository;
pub use vehicles::VehicleRepository;
