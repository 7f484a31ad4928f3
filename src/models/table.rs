use super::trip::Trip;

/// Optional source columns seen while loading. A column counts as present
/// when at least one loaded file carries it in its header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub id: bool,
    pub trip_duration: bool,
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

impl Columns {
    pub fn merge(self, other: Columns) -> Columns {
        Columns {
            id: self.id || other.id,
            trip_duration: self.trip_duration || other.trip_duration,
            user_type: self.user_type || other.user_type,
            gender: self.gender || other.gender,
            birth_year: self.birth_year || other.birth_year,
        }
    }
}

/// The working table of one session iteration. Read-only once filtered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    pub trips: Vec<Trip>,
    pub columns: Columns,
}

impl TripTable {
    pub fn new(trips: Vec<Trip>, columns: Columns) -> Self {
        Self { trips, columns }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Rows `[offset, offset + len)`, clamped to the table size.
    pub fn page(&self, offset: usize, len: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(len).min(self.trips.len());
        &self.trips[start..end]
    }
}
