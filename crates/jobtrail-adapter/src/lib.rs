/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public jobtrail adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod currency;
pub mod gateway;
pub mod http;
pub mod session;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiClient,
    ApiError,
    ClientConfig,
    Result,
};

// Re-export the session layer
pub use session::{
    AuthSession,
    SessionStore,
};

// Re-export the gateway seam
pub use gateway::{
    CustomerInfo,
    MockPaymentGateway,
    PaymentGateway,
};

// Re-export all types
pub use types::*;

// Re-export display helpers
pub use currency::{format_currency, format_minor_units};
