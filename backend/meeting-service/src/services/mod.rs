pub mod dispatcher;
pub mod push;
pub mod razorpay;
pub mod user_directory;

pub use dispatcher::NotificationDispatcher;
pub use push::{FcmPushGateway, PushGateway};
pub use razorpay::{OrderRequest, PaymentGateway, RazorpayClient, CURRENCY_INR};
pub use user_directory::{FirestoreUserDirectory, TokenLookup, UserDirectory};
