//! A client for the Mockaroo synthetic data generation API.
//!
//! Given a record shape that declares its fields and generation hints,
//! [`MockarooClient::get_data`] asks the service for `count` records and
//! decodes the JSON response into a typed `Vec`.
//!
//! # Example
//!
//! ```no_run
//! use mockaroo_client::MockarooClient;
//! use mockaroo_schema::{FieldDescriptor, RecordSchema};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Person {
//!     first_name: String,
//!     age: u8,
//! }
//!
//! impl RecordSchema for Person {
//!     fn fields() -> Vec<FieldDescriptor> {
//!         vec![
//!             FieldDescriptor::new("first_name").data_type("First Name"),
//!             FieldDescriptor::new("age").data_type("Number").min(18).max(80),
//!         ]
//!     }
//! }
//!
//! # async fn run() -> Result<(), mockaroo_client::Error> {
//! let client = MockarooClient::new("your-api-key")?;
//! let people: Vec<Person> = client.get_data(10).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod transport;

// Re-export main types for convenience
pub use client::MockarooClient;
pub use error::Error;
pub use mockaroo_schema::{describe_fields, FieldDescriptor, HintValue, RecordSchema};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
