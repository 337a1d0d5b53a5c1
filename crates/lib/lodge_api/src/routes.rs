//! Route paths.

pub const GET_ROOT: &str = "/";
pub const POST_AUTH_LOGIN: &str = "/auth/login";
pub const GET_AUTH_ME: &str = "/auth/me";
pub const GET_API_AVAILABILITY: &str = "/api/availability";
pub const GET_API_AVAILABILITY_RECORDS: &str = "/api/availability/records";
pub const POST_WEBHOOK_HOSTAWAY: &str = "/webhook/hostaway";
pub const POST_WEBHOOK_AVAILABILITY: &str = "/webhook/availability";
