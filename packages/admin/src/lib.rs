//! The admin surface: named actions over stored records and settings.
//!
//! Every request names an [`Action`] and carries the anti-forgery token for
//! the resource it touches. A [`Session`] issues one token per resource and
//! checks it, together with the operator's capability, before
//! [`AdminApi`] reads or writes anything. Results come back as a
//! `{"success": bool, "data": {...}}` [`Response`].
//!
//! # Example
//!
//! ```rust
//! use blockplus_admin::{AdminApi, Operator, Request, Resource, Session};
//! use blockplus_option_store::InMemoryOptionStore;
//! use blockplus_records::RecordKind;
//!
//! let session = Session::start(Operator::administrator("admin"));
//! let mut api = AdminApi::new(InMemoryOptionStore::new());
//!
//! let token = session.token(Resource::Record(RecordKind::Snippet));
//! let request = Request::new("save_snippet", token)
//!     .with("name", "Base styles")
//!     .with("code", "body { margin: 0; }");
//!
//! let response = api.handle(&session, &request);
//! assert!(response.success);
//! assert_eq!(response.data["snippet"]["name"], "Base styles");
//! ```

mod action;
mod api;
mod error;
mod session;

pub use action::{Action, Verb};
pub use api::{AdminApi, Request, Response};
pub use error::AdminError;
pub use session::{Operator, Resource, Session};
