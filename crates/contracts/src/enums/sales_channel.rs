/// Points of sale offered by the entry form. The server stores the channel
/// as free text, so stored sales may carry values outside this list.
pub const SALES_CHANNELS: &[&str] = &["Local", "WhatsApp", "Instagram", "Web"];

/// Keep a remembered channel only while it is still offered
pub fn known_channel(value: &str) -> Option<&'static str> {
    SALES_CHANNELS.iter().copied().find(|c| *c == value)
}
