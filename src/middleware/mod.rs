//! Dispatch middleware: media gate and interception hooks

pub mod interceptor;
pub mod media_restriction;

pub use interceptor::MessageInterceptor;
pub use media_restriction::check_media_restriction;
