//! Read-only Firestore REST client
//!
//! The service only ever reads single documents by id (user records), so
//! this client covers exactly that: `GET documents/{collection}/{id}`
//! with the datastore OAuth scope. Writes, queries, and listeners are
//! deliberately absent.

pub mod client;
pub mod document;
pub mod errors;

pub use client::FirestoreClient;
pub use document::Document;
pub use errors::FirestoreError;
