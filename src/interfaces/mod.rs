pub mod subconverter;
pub mod subscription;

pub use subconverter::{convert_links, ConversionResult};
pub use subscription::{
    detect_format_from_user_agent, format_traffic, subscription_headers, SubscriptionSettings,
};
