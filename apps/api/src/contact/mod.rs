// Contact form: validates submissions and forwards them to the email relay.

pub mod handlers;
pub mod models;
pub mod relay;
pub mod validation;

pub use relay::{MessageRelay, Web3FormsRelay};
