/// Which of the month/weekday filters the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Months,
    Weekdays,
    Both,
    None,
}

impl FilterMode {
    pub const ANSWERS: [&'static str; 4] = ["months", "weekdays", "both", "none"];

    pub fn fm_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "months" => Some(Self::Months),
            "weekdays" => Some(Self::Weekdays),
            "both" => Some(Self::Both),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Resolve a validated multi-token answer.
    /// `both` wins, then `months` + `weekdays` together, then either alone.
    pub fn from_answers<S: AsRef<str>>(answers: &[S]) -> Self {
        let modes: Vec<FilterMode> = answers
            .iter()
            .filter_map(|a| Self::fm_from_str(a.as_ref()))
            .collect();

        let has = |m: FilterMode| modes.contains(&m);
        if has(Self::Both) || (has(Self::Months) && has(Self::Weekdays)) {
            Self::Both
        } else if has(Self::Months) {
            Self::Months
        } else if has(Self::Weekdays) {
            Self::Weekdays
        } else {
            Self::None
        }
    }

    pub fn wants_months(&self) -> bool {
        matches!(self, Self::Months | Self::Both)
    }

    pub fn wants_weekdays(&self) -> bool {
        matches!(self, Self::Weekdays | Self::Both)
    }
}

/// The user's choices for one session iteration.
/// Empty `months` / `weekdays` mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub cities: Vec<String>,
    pub months: Vec<String>,
    pub weekdays: Vec<String>,
}

impl FilterSelection {
    /// Build a selection, lower-casing values and dropping repeats
    /// (first occurrence wins).
    pub fn new<S: AsRef<str>>(cities: &[S], months: &[S], weekdays: &[S]) -> Self {
        Self {
            cities: dedup(cities),
            months: dedup(months),
            weekdays: dedup(weekdays),
        }
    }

    pub fn keeps_month(&self, month: &str) -> bool {
        self.months.is_empty() || self.months.contains(&month.to_lowercase())
    }

    pub fn keeps_weekday(&self, weekday: &str) -> bool {
        self.weekdays.is_empty() || self.weekdays.contains(&weekday.to_lowercase())
    }
}

fn dedup<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        let v = v.as_ref().trim().to_lowercase();
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}
