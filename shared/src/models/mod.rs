//! Wire models for all managed entities
//!
//! Field names serialize in camelCase; this is the format the existing
//! admin front end consumes.

pub mod booking;
pub mod customer;
pub mod invoice;
pub mod room;
pub mod service;
pub mod service_usage;
pub mod user;

pub use booking::{Booking, BookingCreate, BookingStatus, BookingUpdate};
pub use customer::{Customer, CustomerCreate, CustomerStatus, CustomerUpdate};
pub use invoice::{
    Invoice, InvoiceCreate, InvoiceItem, InvoiceItemInput, InvoiceStatus, InvoiceUpdate,
};
pub use room::{Room, RoomCreate, RoomStatus, RoomUpdate};
pub use service::{Service, ServiceCreate, ServiceStatus, ServiceUpdate};
pub use service_usage::{ServiceUsage, ServiceUsageCreate, ServiceUsageUpdate};
pub use user::{User, UserCreate, UserResponse, UserRole, UserStatus, UserUpdate};
