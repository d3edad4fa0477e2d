//! Ledger service: every read and write over workers, job types and work
//! records goes through here.
//!
//! Each operation opens its own connection and drops it before returning.
//! Writes run in a single transaction together with their audit row.

use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Amount, JobType, ReportLine, ReportWindow, WorkRecord, Worker};
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::Transaction;

#[derive(Debug, Clone)]
pub struct Ledger {
    db_path: String,
}

impl Ledger {
    /// Open (or create) the store at `db_path` and bring its schema up to date.
    /// Applied migrations are only recorded in the log table.
    pub fn open(db_path: &str) -> AppResult<Self> {
        let pool = DbPool::new(db_path)?;
        init_db(&pool.conn)?;
        Ok(Self {
            db_path: db_path.to_string(),
        })
    }

    fn connect(&self) -> AppResult<DbPool> {
        DbPool::new(&self.db_path)
    }

    // ---------------------------
    // Workers
    // ---------------------------

    /// All workers sorted by name.
    pub fn list_workers(&self) -> AppResult<Vec<Worker>> {
        let pool = self.connect()?;
        queries::select_workers(&pool.conn)
    }

    /// Add a worker. Empty or already used names are rejected.
    pub fn add_worker(&self, name: &str) -> AppResult<Worker> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::ConstraintViolation(
                "worker name must not be empty".into(),
            ));
        }

        let mut pool = self.connect()?;
        pool.transaction(|tx| {
            let id = queries::insert_worker(tx, name)?;
            audit(tx, "worker_add", name, &format!("Added worker #{id}"))?;
            Ok(Worker {
                id,
                name: name.to_string(),
            })
        })
    }

    /// Resolve a worker given either its exact name or its numeric id.
    /// A name match wins over an id match.
    pub fn find_worker(&self, name_or_id: &str) -> AppResult<Worker> {
        let key = name_or_id.trim();
        let pool = self.connect()?;

        if let Some(w) = queries::select_worker_by_name(&pool.conn, key)? {
            return Ok(w);
        }

        if let Ok(id) = key.parse::<i64>()
            && let Some(w) = queries::select_worker_by_id(&pool.conn, id)?
        {
            return Ok(w);
        }

        Err(AppError::WorkerNotFound(key.to_string()))
    }

    // ---------------------------
    // Job types
    // ---------------------------

    /// All job types sorted by name.
    pub fn list_job_types(&self) -> AppResult<Vec<JobType>> {
        let pool = self.connect()?;
        queries::select_job_types(&pool.conn)
    }

    /// Create a job type or re-price an existing one.
    ///
    /// Records already entered keep the price they were entered with.
    pub fn upsert_job_type(&self, name: &str, unit_price: Amount) -> AppResult<JobType> {
        let mut pool = self.connect()?;
        set_job_price(&mut pool, name, unit_price)
    }

    /// Current price of a job type, read straight from the store.
    pub fn job_type_price(&self, name: &str) -> AppResult<Option<Amount>> {
        let pool = self.connect()?;
        queries::select_job_type_price(&pool.conn, name.trim())
    }

    // ---------------------------
    // Work records
    // ---------------------------

    /// Log work for a worker, dated today. Quantity and price are taken as
    /// given; callers parse and validate them first.
    pub fn add_work_record(
        &self,
        worker_id: i64,
        job_type: &str,
        quantity: i64,
        unit_price: Amount,
    ) -> AppResult<WorkRecord> {
        self.add_work_record_on(worker_id, job_type, quantity, unit_price, date::today())
    }

    /// Same as [`Ledger::add_work_record`] with an explicit record date.
    pub fn add_work_record_on(
        &self,
        worker_id: i64,
        job_type: &str,
        quantity: i64,
        unit_price: Amount,
        date: NaiveDate,
    ) -> AppResult<WorkRecord> {
        let mut pool = self.connect()?;
        pool.transaction(|tx| {
            let worker = queries::select_worker_by_id(tx, worker_id)?
                .ok_or_else(|| AppError::WorkerNotFound(format!("#{worker_id}")))?;
            insert_record(tx, &worker, job_type, quantity, unit_price, date)
        })
    }

    /// Record work the way the entry form does: an explicit price also
    /// becomes the job type's new price, a missing one falls back to the
    /// job type's current price.
    pub fn record_work(
        &self,
        worker_id: i64,
        job_type: &str,
        quantity: i64,
        unit_price: Option<Amount>,
    ) -> AppResult<WorkRecord> {
        let mut pool = self.connect()?;

        // the worker is resolved before the price so that an unknown worker
        // never re-prices a job type
        let worker = queries::select_worker_by_id(&pool.conn, worker_id)?
            .ok_or_else(|| AppError::WorkerNotFound(format!("#{worker_id}")))?;

        let price = match unit_price {
            Some(p) => set_job_price(&mut pool, job_type, p)?.unit_price,
            None => queries::select_job_type_price(&pool.conn, job_type.trim())?
                .ok_or_else(|| AppError::JobTypeNotFound(job_type.trim().to_string()))?,
        };

        pool.transaction(|tx| insert_record(tx, &worker, job_type, quantity, price, date::today()))
    }

    /// Every record of a worker, newest first.
    pub fn list_work_records(&self, worker_id: i64, unpaid_only: bool) -> AppResult<Vec<WorkRecord>> {
        let pool = self.connect()?;
        queries::select_work_records(&pool.conn, worker_id, unpaid_only)
    }

    // ---------------------------
    // Reports and settlement
    // ---------------------------

    /// Unpaid work of a worker within `window_days` of today, grouped by job
    /// type. `0` means today only.
    pub fn report(&self, worker_id: i64, window_days: u32) -> AppResult<Vec<ReportLine>> {
        self.report_as_of(worker_id, ReportWindow::days(window_days), date::today())
    }

    /// Window report evaluated as if `today` were the current date.
    pub fn report_as_of(
        &self,
        worker_id: i64,
        window: ReportWindow,
        today: NaiveDate,
    ) -> AppResult<Vec<ReportLine>> {
        let (from, to) = window.bounds(today)?;
        let pool = self.connect()?;
        queries::select_unpaid_summary(&pool.conn, worker_id, &from, &to)
    }

    /// Mark every unpaid record of the worker as paid.
    /// Returns how many records were settled; 0 when nothing was owed.
    pub fn settle_payment(&self, worker_id: i64) -> AppResult<usize> {
        let mut pool = self.connect()?;
        pool.transaction(|tx| {
            let n = queries::mark_paid(tx, worker_id)?;
            if n > 0 {
                let target = queries::select_worker_by_id(tx, worker_id)?
                    .map(|w| w.name)
                    .unwrap_or_else(|| format!("#{worker_id}"));
                audit(tx, "payment", &target, &format!("Settled {n} record(s)"))?;
            }
            Ok(n)
        })
    }
}

fn set_job_price(pool: &mut DbPool, name: &str, unit_price: Amount) -> AppResult<JobType> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::ConstraintViolation(
            "job type name must not be empty".into(),
        ));
    }
    if unit_price < Amount::ZERO {
        return Err(AppError::InvalidAmount(unit_price.to_string()));
    }

    pool.transaction(|tx| {
        queries::upsert_job_type(tx, name, unit_price)?;
        audit(tx, "job_set", name, &format!("Unit price set to {unit_price}"))?;
        Ok(JobType {
            name: name.to_string(),
            unit_price,
        })
    })
}

fn insert_record(
    tx: &Transaction<'_>,
    worker: &Worker,
    job_type: &str,
    quantity: i64,
    unit_price: Amount,
    date: NaiveDate,
) -> AppResult<WorkRecord> {
    let job_type = job_type.trim();
    let id = queries::insert_work_record(tx, worker.id, job_type, quantity, unit_price, &date)?;

    audit(
        tx,
        "record_add",
        &worker.name,
        &format!("{quantity} × {job_type} @ {unit_price}"),
    )?;

    Ok(WorkRecord {
        id,
        worker_id: worker.id,
        job_type: job_type.to_string(),
        quantity,
        unit_price,
        date,
        paid: false,
    })
}
