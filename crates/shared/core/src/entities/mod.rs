mod hand;

pub use hand::{DEG_PER_HOUR, DEG_PER_MINUTE, DEG_PER_SECOND, Hand};
