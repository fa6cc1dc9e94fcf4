//! Form-side domain model: the draft post, its tag selection, the session
//! identity it is submitted under, and the routes the form can leave to.

pub mod draft;
pub mod error;
pub mod routes;
pub mod session;
pub mod tags;
