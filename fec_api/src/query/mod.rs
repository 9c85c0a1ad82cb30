mod common;
pub use self::common::{Query, QueryCommon};

mod contribution;
pub use self::contribution::ContributionQuery;
