use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum PartOfDay {
    #[strum(to_string = "Good Morning!")]
    Morning,
    #[strum(to_string = "Good Afternoon!")]
    Afternoon,
    #[strum(to_string = "Good Evening!")]
    Evening,
    #[strum(to_string = "Good Night!")]
    Night,
}

impl PartOfDay {
    pub const fn from_hour(hour: u8) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }
}

pub fn greeting(hour: u8, first_name: Option<&str>) -> String {
    let name = first_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Guest");
    format!("Hi {name}, {}", PartOfDay::from_hour(hour))
}
