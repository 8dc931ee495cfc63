#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn alert_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "alert-success",
            NoticeKind::Error => "alert-error",
        }
    }
}

/// Transient banner message; auto-dismissed by the view after a timeout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

// Generic per-operation messages; failures are never broken down further
pub const LOAD_CLASSES_FAILED: &str = "Gagal memuat data kelas";
pub const LOAD_STUDENTS_FAILED: &str = "Gagal memuat data siswa";
pub const LOAD_ATTENDANCE_FAILED: &str = "Gagal memuat data presensi";
pub const LOAD_RECORDS_FAILED: &str = "Gagal memuat riwayat presensi";
pub const SAVE_STATUS_FAILED: &str = "Gagal menyimpan presensi";
pub const SAVE_ALL_FAILED: &str = "Gagal menyimpan semua presensi";
pub const SAVE_ALL_SUCCEEDED: &str = "Presensi berhasil disimpan";
pub const EXPORT_FAILED: &str = "Gagal mengekspor data presensi";
pub const EXPORT_SUCCEEDED: &str = "Data presensi berhasil diekspor";
