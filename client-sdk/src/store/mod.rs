pub mod form_state;
pub mod transaction_store;
