//! Marketplace domain models shared by the client and the reports

pub mod page;
pub mod review;
pub mod user;
pub mod vehicle;

pub use page::{page_window, Page};
pub use review::{Review, ReviewRequest};
pub use user::{AuthResponse, ChangePasswordRequest, LoginRequest, ProfileUpdate, Role, SignupRequest, User};
pub use vehicle::{
    ImageAttachment, Vehicle, VehicleDraft, VehicleQuery, VehicleType, VehicleUpload,
};
