//! SQLite persistence layer.
//!
//! RULE: only store.rs talks to the database. The assigner is pure —
//! callers fetch its inputs here and persist its output here, and a
//! week's slots are always replaced wholesale, never merged.

use crate::{
    assigner::Assignment,
    availability::AvailabilityMap,
    employee::{Employee, RoleTag},
    error::ScheduleResult,
    types::{WeekStart, Weekday},
};
use chrono::NaiveTime;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub struct ScheduleStore {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

impl ScheduleStore {
    pub fn open(path: &str) -> ScheduleResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(ScheduleStore {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> ScheduleResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(ScheduleStore { conn, path: None })
    }

    /// Reopen a new connection to the same database.
    /// For in-memory databases this returns a fresh, isolated database.
    pub fn reopen(&self) -> ScheduleResult<Self> {
        match &self.path {
            Some(p) => Self::open(p),
            None => Self::in_memory(),
        }
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> ScheduleResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_schema.sql"))?;
        Ok(())
    }

    // ── Employees ──────────────────────────────────────────────

    pub fn upsert_employee(&self, e: &Employee) -> ScheduleResult<()> {
        self.conn.execute(
            "INSERT INTO employees (id, name, role, global_worker, active)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
               name = excluded.name,
               role = excluded.role,
               global_worker = excluded.global_worker,
               active = excluded.active",
            params![
                e.id,
                e.name,
                e.role.code(),
                e.global_worker as i64,
                e.active as i64
            ],
        )?;
        Ok(())
    }

    pub fn set_active(&self, employee_id: &str, active: bool) -> ScheduleResult<()> {
        self.conn.execute(
            "UPDATE employees SET active = ?2 WHERE id = ?1",
            params![employee_id, active as i64],
        )?;
        Ok(())
    }

    /// Active employees in insertion order. The ordering matters: it
    /// feeds straight into the assigner's deterministic tie-break.
    pub fn active_employees(&self) -> ScheduleResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, role, global_worker, active
             FROM employees WHERE active = 1 ORDER BY rowid ASC",
        )?;
        let employees = stmt
            .query_map([], |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    role: RoleTag::from_code(&row.get::<_, String>(2)?),
                    global_worker: row.get::<_, i64>(3)? != 0,
                    active: row.get::<_, i64>(4)? != 0,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    // ── Availability ───────────────────────────────────────────

    pub fn set_availability(
        &self,
        week: WeekStart,
        employee_id: &str,
        day: Weekday,
        available: bool,
    ) -> ScheduleResult<()> {
        self.conn.execute(
            "INSERT INTO availability_days (week_start, employee_id, day, available)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(week_start, employee_id, day)
             DO UPDATE SET available = excluded.available",
            params![week.to_string(), employee_id, day.code(), available as i64],
        )?;
        Ok(())
    }

    /// Availability for one week. Days with no row stay absent from the
    /// map and therefore default to available.
    pub fn availability_for_week(&self, week: WeekStart) -> ScheduleResult<AvailabilityMap> {
        let mut stmt = self.conn.prepare(
            "SELECT employee_id, day, available
             FROM availability_days WHERE week_start = ?1",
        )?;
        let rows = stmt.query_map(params![week.to_string()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?;

        let mut map = AvailabilityMap::new();
        for row in rows {
            let (employee_id, day_code, available) = row?;
            let day = Weekday::from_code(&day_code)
                .ok_or_else(|| anyhow::anyhow!("unknown day code '{day_code}' in availability_days"))?;
            map.set(&employee_id, day, available != 0);
        }
        Ok(map)
    }

    // ── Schedules & slots ──────────────────────────────────────

    /// Find or create the week's schedule row (draft status).
    pub fn ensure_schedule(&self, week: WeekStart) -> ScheduleResult<String> {
        let existing: Option<String> = self
            .conn
            .query_row(
                "SELECT id FROM schedules WHERE week_start = ?1",
                params![week.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        if let Some(id) = existing {
            return Ok(id);
        }
        let id = Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO schedules (id, week_start, status) VALUES (?1, ?2, 'draft')",
            params![id, week.to_string()],
        )?;
        Ok(id)
    }

    pub fn set_schedule_status(&self, week: WeekStart, status: &str) -> ScheduleResult<()> {
        self.conn.execute(
            "UPDATE schedules SET status = ?2 WHERE week_start = ?1",
            params![week.to_string(), status],
        )?;
        Ok(())
    }

    /// Whole-week replace: delete the schedule's existing slots and
    /// insert the new set in one transaction.
    pub fn replace_week_slots(
        &self,
        schedule_id: &str,
        assignments: &[Assignment],
    ) -> ScheduleResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "DELETE FROM schedule_slots WHERE schedule_id = ?1",
            params![schedule_id],
        )?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO schedule_slots
                   (schedule_id, day, employee_id, start_time, end_time, hours)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for a in assignments {
                stmt.execute(params![
                    schedule_id,
                    a.day.code(),
                    a.employee_id,
                    a.start.format("%H:%M").to_string(),
                    a.end.format("%H:%M").to_string(),
                    a.hours
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// The week's slots in insertion order.
    pub fn slots_for_week(&self, week: WeekStart) -> ScheduleResult<Vec<Assignment>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.day, s.employee_id, s.start_time, s.end_time, s.hours
             FROM schedule_slots s
             JOIN schedules sc ON sc.id = s.schedule_id
             WHERE sc.week_start = ?1
             ORDER BY s.id ASC",
        )?;
        let rows = stmt.query_map(params![week.to_string()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, f64>(4)?,
            ))
        })?;

        let mut slots = Vec::new();
        for row in rows {
            let (day_code, employee_id, start, end, hours) = row?;
            let day = Weekday::from_code(&day_code)
                .ok_or_else(|| anyhow::anyhow!("unknown day code '{day_code}' in schedule_slots"))?;
            slots.push(Assignment {
                day,
                employee_id,
                start: parse_time(&start)?,
                end: parse_time(&end)?,
                hours,
            });
        }
        Ok(slots)
    }

    pub fn slot_count_for_week(&self, week: WeekStart) -> ScheduleResult<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM schedule_slots s
             JOIN schedules sc ON sc.id = s.schedule_id
             WHERE sc.week_start = ?1",
            params![week.to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    // ── Weekly forecasts ───────────────────────────────────────

    pub fn record_forecast(
        &self,
        week: WeekStart,
        target_productivity: f64,
        total_sales: Option<f64>,
        total_hours: Option<f64>,
    ) -> ScheduleResult<()> {
        self.conn.execute(
            "INSERT INTO weekly_forecasts
               (week_start, target_productivity, total_sales, total_hours)
             VALUES (?1, ?2, ?3, ?4)",
            params![week.to_string(), target_productivity, total_sales, total_hours],
        )?;
        Ok(())
    }

    pub fn recent_forecasts(&self, limit: usize) -> ScheduleResult<Vec<ForecastRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT week_start, target_productivity, total_sales, total_hours
             FROM weekly_forecasts ORDER BY week_start DESC, id DESC LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok(ForecastRow {
                    week_start: row.get(0)?,
                    target_productivity: row.get(1)?,
                    total_sales: row.get(2)?,
                    total_hours: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

/// One row of the weekly productivity history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRow {
    pub week_start: String,
    pub target_productivity: f64,
    pub total_sales: Option<f64>,
    pub total_hours: Option<f64>,
}

fn parse_time(value: &str) -> ScheduleResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| anyhow::anyhow!("bad time '{value}' in schedule_slots: {e}").into())
}
