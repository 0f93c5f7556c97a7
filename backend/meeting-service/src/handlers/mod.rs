/// HTTP surfaces of the meeting service
pub mod events;
pub mod payments;
pub mod rtc;

pub use events::register_routes as register_events;
pub use payments::register_routes as register_payments;
pub use rtc::register_routes as register_rtc;
