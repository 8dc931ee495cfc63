use crate::model::attendance::{AttendanceRecordDto, AttendanceStatus, DailyStatusMap};

/// Status counts for one class on one date.
///
/// Always derived from the data currently held, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceStats {
    pub present: usize,
    pub sick: usize,
    pub permission: usize,
    pub absent: usize,
}

impl AttendanceStats {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = AttendanceStatus>,
    {
        statuses
            .into_iter()
            .fold(Self::default(), |mut stats, status| {
                *stats.counter_mut(status) += 1;
                stats
            })
    }

    pub fn from_map(map: &DailyStatusMap) -> Self {
        Self::from_statuses(map.values().copied())
    }

    /// Counts records with a recognised status; unmapped values are skipped
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceRecordDto>,
    {
        Self::from_statuses(records.into_iter().filter_map(|r| r.status.known()))
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Sick => self.sick,
            AttendanceStatus::Permission => self.permission,
            AttendanceStatus::Absent => self.absent,
        }
    }

    pub fn total(&self) -> usize {
        self.present + self.sick + self.permission + self.absent
    }

    fn counter_mut(&mut self, status: AttendanceStatus) -> &mut usize {
        match status {
            AttendanceStatus::Present => &mut self.present,
            AttendanceStatus::Sick => &mut self.sick,
            AttendanceStatus::Permission => &mut self.permission,
            AttendanceStatus::Absent => &mut self.absent,
        }
    }
}
