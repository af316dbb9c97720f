//! Transport-neutral adapter: request/response models and the shared handle.

pub mod api;
pub mod shared;

pub use api::{
    AllocatedSlotResponse, ApiError, ClearRequest, ExpandRequest, FreedSlotResponse,
    InitializeRequest, ParkRequest, TotalSlotResponse,
};
pub use shared::SharedLot;
