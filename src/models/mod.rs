pub mod form;
pub mod validation;
pub mod prediction;
pub mod response;

pub use form::*;
pub use validation::*;
pub use prediction::*;
pub use response::*;
