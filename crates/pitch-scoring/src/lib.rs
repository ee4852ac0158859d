pub mod extract;
pub mod model;
pub mod score;

pub use extract::extract;
pub use model::{Recommendation, ScoreResult, ScoreVector};
pub use score::score;
