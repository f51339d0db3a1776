// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const LOGIN_SUCCESS: &str = "auth.login.success";
pub const LOGIN_FAILURE: &str = "auth.login.failure";
pub const LOGIN_LOCKOUT: &str = "auth.login.lockout";
pub const USER_REGISTERED: &str = "auth.user.registered";
pub const CONSULTANT_REGISTERED: &str = "capability.consultant.registered";
pub const CONSULTANT_UNREGISTERED: &str = "capability.consultant.unregistered";
