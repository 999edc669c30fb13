// Schedule service
// Turns free-form venue schedule strings into structured recurrence rules

mod locale;
mod parser;

pub use locale::ScheduleLocale;
pub use parser::parse_schedule;
