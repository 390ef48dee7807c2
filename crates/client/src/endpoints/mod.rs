//! REST API endpoint implementations.

mod request;
mod roles;

pub(crate) use request::send_paced;
pub use roles::{create_role, get_role_scopes, list_roles, update_role_scopes};
