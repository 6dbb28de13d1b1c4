//! DTOs
//!
//! Formas canónicas de cada entidad que cruza el límite con la API de
//! gestión, más las respuestas genéricas del panel.

pub mod api_response;
pub mod auth_dto;
pub mod invoice_dto;
pub mod reference_dto;
pub mod reservation_dto;
pub mod user_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
pub use invoice_dto::InvoiceDto;
pub use reference_dto::{Category, TransmissionOption};
pub use reservation_dto::{ReservationDto, ReservationStatus};
pub use user_dto::{IdentificationType, Role, UserDto, UserSummary};
pub use vehicle_dto::{VehicleDto, VehicleStatus};
