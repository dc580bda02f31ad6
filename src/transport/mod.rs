//! Transport layer: URL shape and wire-format details (serialization/deserialization).

mod endpoint;
mod error;
mod fax;
mod form;
mod list;
mod price;

pub use endpoint::{DEFAULT_BASE_URL, Endpoint};
pub use error::decode_api_error_json_response;
pub use fax::{decode_fax_json_response, encode_cancel_fax_form, encode_send_fax_form};
pub use form::encode_form_body;
pub use list::{decode_fax_page_json_response, encode_list_faxes_query};
