//! # Attendance Service
//!
//! Per-driver, per-date presence log with the monthly present count derived
//! from it.
//!
//! ## Responsibilities
//! - Insert or overwrite the single record a driver has for a date
//! - Recompute the present count after every write
//! - Build the daily roster of active drivers
//!
//! The present count is the number of `Present` records dated in the calendar
//! month of the clock at write time, not the month of the record being
//! written. A count computed in one month goes stale after rollover until the
//! next write. `total_days` is never touched here.

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use log::{debug, info};
use shared::{AttendanceRecord, AttendanceRow, AttendanceStatus, Driver};
use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::commands::attendance::{
    AttendanceWrite, RecordAttendanceCommand, RecordAttendanceResult,
};
use crate::domain::listing;
use crate::storage::memory::MemoryConnection;
use crate::storage::traits::DriverStorage;
use crate::storage::DriverRepository;

/// Service for recording daily driver attendance
#[derive(Clone)]
pub struct AttendanceService {
    driver_repository: DriverRepository,
    clock: Arc<dyn Clock>,
}

impl AttendanceService {
    pub fn new(connection: Arc<MemoryConnection>, clock: Arc<dyn Clock>) -> Self {
        Self {
            driver_repository: DriverRepository::new(connection),
            clock,
        }
    }

    /// Record `status` for the driver on `date`, then refresh the driver's present count
    pub fn record_attendance(&self, command: RecordAttendanceCommand) -> Result<RecordAttendanceResult> {
        info!(
            "Recording attendance: driver={}, date={}, status={}",
            command.driver_id, command.date, command.status
        );

        let mut driver = self
            .driver_repository
            .get_driver(&command.driver_id)?
            .ok_or_else(|| anyhow!("Driver not found: {}", command.driver_id))?;

        let write = apply_attendance(&mut driver, command.date, command.status, self.clock.today());
        self.driver_repository
            .update_driver(&driver)
            .with_context(|| format!("Failed to save attendance for driver {}", driver.id))?;

        info!(
            "Attendance {:?} for driver {}; present this month: {}",
            write, driver.id, driver.attendance.present
        );
        Ok(RecordAttendanceResult { driver, write })
    }

    /// Active drivers with their status for `date`
    pub fn attendance_roster(&self, date: NaiveDate) -> Result<Vec<AttendanceRow>> {
        let drivers = self.driver_repository.list_drivers()?;
        let roster = listing::attendance_roster(&drivers, date);
        debug!("Attendance roster for {}: {} active drivers", date, roster.len());
        Ok(roster)
    }
}

/// Insert or overwrite the record for `date`, then recompute the present
/// count relative to `today`
pub fn apply_attendance(
    driver: &mut Driver,
    date: NaiveDate,
    status: AttendanceStatus,
    today: NaiveDate,
) -> AttendanceWrite {
    let write = match driver.attendance_log.iter_mut().find(|record| record.date == date) {
        Some(record) => {
            record.status = status;
            AttendanceWrite::Overwritten
        }
        None => {
            driver.attendance_log.push(AttendanceRecord { date, status });
            AttendanceWrite::Inserted
        }
    };

    driver.attendance.present = monthly_present_count(&driver.attendance_log, today);
    write
}

/// Present records dated in the same calendar month as `today`
pub fn monthly_present_count(log: &[AttendanceRecord], today: NaiveDate) -> u32 {
    log.iter()
        .filter(|record| record.status == AttendanceStatus::Present)
        .filter(|record| record.date.year() == today.year() && record.date.month() == today.month())
        .count() as u32
}

/// Move the selected roster date by whole days
pub fn shift_date(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
        .ok_or_else(|| anyhow!("Date out of range: {} shifted by {} days", date, days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::{test_today, TestHelper};
    use crate::storage::fixtures;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(driver_id: &str, date: NaiveDate, status: AttendanceStatus) -> RecordAttendanceCommand {
        RecordAttendanceCommand {
            driver_id: driver_id.to_string(),
            date,
            status,
        }
    }

    #[test]
    fn test_second_write_for_same_date_overwrites() {
        let helper = TestHelper::new();
        let service = &helper.backend.attendance_service;
        let date = ymd(2023, 11, 1);

        let first = service.record_attendance(record("D001", date, AttendanceStatus::Present)).unwrap();
        assert_eq!(first.write, AttendanceWrite::Inserted);
        assert_eq!(first.driver.attendance.present, 1);

        let second = service.record_attendance(record("D001", date, AttendanceStatus::Absent)).unwrap();
        assert_eq!(second.write, AttendanceWrite::Overwritten);

        let driver = helper.driver_repo.get_driver("D001").unwrap().unwrap();
        let entries: Vec<_> = driver.attendance_log.iter().filter(|r| r.date == date).collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, AttendanceStatus::Absent);
        assert_eq!(driver.attendance.present, 0);
        assert_eq!(driver.attendance.total_days, 24);
    }

    #[test]
    fn test_present_count_only_counts_current_month() {
        let helper = TestHelper::new();
        let service = &helper.backend.attendance_service;

        service.record_attendance(record("D002", ymd(2023, 10, 31), AttendanceStatus::Present)).unwrap();
        service.record_attendance(record("D002", ymd(2023, 11, 2), AttendanceStatus::Present)).unwrap();
        let result = service
            .record_attendance(record("D002", ymd(2022, 11, 2), AttendanceStatus::Present))
            .unwrap();

        assert_eq!(result.driver.attendance_log.len(), 3);
        assert_eq!(result.driver.attendance.present, 1);
    }

    #[test]
    fn test_count_uses_clock_month_not_record_month() {
        // Writing an October record while the clock says November counts November only
        let mut driver = fixtures::drivers().remove(0);
        apply_attendance(&mut driver, ymd(2023, 10, 5), AttendanceStatus::Present, ymd(2023, 10, 20));
        assert_eq!(driver.attendance.present, 1);

        apply_attendance(&mut driver, ymd(2023, 10, 6), AttendanceStatus::Present, ymd(2023, 11, 1));
        assert_eq!(driver.attendance.present, 0);
    }

    #[test]
    fn test_unknown_driver_is_an_error() {
        let helper = TestHelper::new();
        let result = helper
            .backend
            .attendance_service
            .record_attendance(record("D404", test_today(), AttendanceStatus::Present));
        assert!(result.is_err());
    }

    #[test]
    fn test_roster_reflects_recorded_status() {
        let helper = TestHelper::new();
        let service = &helper.backend.attendance_service;
        service.record_attendance(record("D003", test_today(), AttendanceStatus::Present)).unwrap();

        let roster = service.attendance_roster(test_today()).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[2].status, Some(AttendanceStatus::Present));
        assert_eq!(roster[0].status, None);

        let yesterday = service.attendance_roster(shift_date(test_today(), -1).unwrap()).unwrap();
        assert!(yesterday.iter().all(|row| row.status.is_none()));
    }

    #[test]
    fn test_shift_date_crosses_month_boundary() {
        assert_eq!(shift_date(ymd(2023, 11, 30), 1).unwrap(), ymd(2023, 12, 1));
        assert_eq!(shift_date(ymd(2023, 3, 1), -1).unwrap(), ymd(2023, 2, 28));
        assert!(shift_date(NaiveDate::MAX, 1).is_err());
    }
}
