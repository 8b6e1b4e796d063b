pub mod canonical;
pub mod complement;
pub mod error;
pub mod input;
pub mod intersection;
pub mod operator;
pub mod shape;
pub mod union;

pub use complement::complement;
pub use error::{Error, Result};
pub use intersection::intersection;
pub use operator::Operator;
pub use union::union;
