//! geogrant prelude: bring common types and functions into scope for demos.

pub use crate::authorizer::authorize;
pub use crate::error::{ErrorKind, GrantError, Result};
pub use crate::evaluator::{check, check_exclude, check_include, check_permission};
pub use crate::grant::add_grant;
pub use crate::location::{parse, Granularity, ParsedLocation};
pub use crate::permission::{Direction, Distributor, PermissionSet, Registry};
pub use crate::store::{CityRecord, DbStats, GeoStore};
pub use crate::text::{equals_folded, fold_key, normalize};
