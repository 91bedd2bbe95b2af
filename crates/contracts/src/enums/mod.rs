pub mod delivery_type;
pub mod payment_method;
pub mod report_type;
pub mod sales_channel;

pub use delivery_type::{delivery_display_name, DeliveryType};
pub use payment_method::{payment_display_name, PaymentMethod};
pub use report_type::ReportType;
pub use sales_channel::{known_channel, SALES_CHANNELS};
