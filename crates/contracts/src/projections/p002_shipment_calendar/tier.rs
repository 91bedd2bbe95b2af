/// Load tier of a calendar day, from its shipment count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTier {
    Low,
    Medium,
    High,
}

impl DayTier {
    pub fn from_count(count: u32) -> Self {
        match count {
            0..=9 => DayTier::Low,
            10..=13 => DayTier::Medium,
            _ => DayTier::High,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DayTier::Low => "day-green",
            DayTier::Medium => "day-yellow",
            DayTier::High => "day-red",
        }
    }
}
