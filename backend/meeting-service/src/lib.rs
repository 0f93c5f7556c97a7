pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use services::{
    FcmPushGateway, FirestoreUserDirectory, NotificationDispatcher, PaymentGateway, PushGateway,
    RazorpayClient, TokenLookup, UserDirectory,
};
