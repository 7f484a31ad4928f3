/// Months covered by the datasets (lower-case answer vocabulary).
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const WEEKDAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];
