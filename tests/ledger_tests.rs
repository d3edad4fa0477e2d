use chrono::NaiveDate;
use pieceledger::errors::AppError;
use pieceledger::models::{Amount, ReportWindow, report_total};

mod common;
use common::fresh_ledger;

fn amt(s: &str) -> Amount {
    Amount::parse(s).expect("valid amount")
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_duplicate_worker_is_rejected() {
    let ledger = fresh_ledger("ledger_dup_worker");

    ledger.add_worker("Ayşe").unwrap();
    let err = ledger.add_worker("Ayşe").unwrap_err();
    assert!(
        matches!(err, AppError::ConstraintViolation(_)),
        "expected ConstraintViolation, got {err:?}"
    );

    let names: Vec<String> = ledger
        .list_workers()
        .unwrap()
        .into_iter()
        .map(|w| w.name)
        .collect();
    assert_eq!(names, vec!["Ayşe".to_string()]);
}

#[test]
fn test_empty_worker_name_is_rejected() {
    let ledger = fresh_ledger("ledger_empty_worker");

    let err = ledger.add_worker("   ").unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));
    assert!(ledger.list_workers().unwrap().is_empty());
}

#[test]
fn test_workers_and_job_types_are_sorted_by_name() {
    let ledger = fresh_ledger("ledger_sorted");

    for n in ["Zeynep", "Ali", "Mehmet"] {
        ledger.add_worker(n).unwrap();
    }
    for (n, p) in [("Poşet", "1.00"), ("Etiket", "0.20"), ("Kutu", "2.50")] {
        ledger.upsert_job_type(n, amt(p)).unwrap();
    }

    let workers: Vec<String> = ledger
        .list_workers()
        .unwrap()
        .into_iter()
        .map(|w| w.name)
        .collect();
    assert_eq!(workers, ["Ali", "Mehmet", "Zeynep"]);

    let jobs: Vec<String> = ledger
        .list_job_types()
        .unwrap()
        .into_iter()
        .map(|j| j.name)
        .collect();
    assert_eq!(jobs, ["Etiket", "Kutu", "Poşet"]);
}

#[test]
fn test_upsert_job_type_overwrites_price() {
    let ledger = fresh_ledger("ledger_upsert_job");

    ledger.upsert_job_type("Kutu", amt("2.50")).unwrap();
    ledger.upsert_job_type("Kutu", amt("3.00")).unwrap();

    let jobs = ledger.list_job_types().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].name, "Kutu");
    assert_eq!(jobs[0].unit_price, amt("3.00"));
    assert_eq!(ledger.job_type_price("Kutu").unwrap(), Some(amt("3.00")));
    assert_eq!(ledger.job_type_price("Bant").unwrap(), None);
}

#[test]
fn test_record_for_unknown_worker_is_rejected() {
    let ledger = fresh_ledger("ledger_unknown_worker");

    let err = ledger
        .add_work_record(42, "Kutu", 10, amt("2.50"))
        .unwrap_err();
    assert!(matches!(err, AppError::WorkerNotFound(_)));

    let stats_rows = ledger.list_work_records(42, false).unwrap();
    assert!(stats_rows.is_empty());
}

#[test]
fn test_today_report_only_holds_todays_records() {
    let ledger = fresh_ledger("ledger_today_window");
    let today = day(2025, 6, 15);

    let w = ledger.add_worker("Ali").unwrap();
    ledger
        .add_work_record_on(w.id, "Kutu", 4, amt("2.50"), today)
        .unwrap();
    ledger
        .add_work_record_on(w.id, "Kutu", 6, amt("2.50"), today)
        .unwrap();
    ledger
        .add_work_record_on(w.id, "Poşet", 3, amt("1.00"), day(2025, 6, 14))
        .unwrap();

    let lines = ledger.report_as_of(w.id, ReportWindow::TODAY, today).unwrap();
    let tuples: Vec<_> = lines.iter().map(|l| l.as_tuple()).collect();
    assert_eq!(tuples, vec![("Kutu", 10, amt("2.50"))]);
    assert_eq!(report_total(&lines).unwrap(), amt("25.00"));
}

#[test]
fn test_week_report_is_superset_of_today_and_bounds_are_inclusive() {
    let ledger = fresh_ledger("ledger_week_window");
    let today = day(2025, 6, 15);

    let w = ledger.add_worker("Ali").unwrap();
    ledger
        .add_work_record_on(w.id, "Kutu", 10, amt("2.50"), today)
        .unwrap();
    // exactly 7 days back: inside the window
    ledger
        .add_work_record_on(w.id, "Bant", 2, amt("0.50"), day(2025, 6, 8))
        .unwrap();
    // 8 days back: outside
    ledger
        .add_work_record_on(w.id, "Etiket", 100, amt("0.10"), day(2025, 6, 7))
        .unwrap();

    let today_lines = ledger.report_as_of(w.id, ReportWindow::TODAY, today).unwrap();
    let week_lines = ledger
        .report_as_of(w.id, ReportWindow::days(7), today)
        .unwrap();

    for l in &today_lines {
        assert!(week_lines.contains(l), "week report misses {l:?}");
    }

    let jobs: Vec<&str> = week_lines.iter().map(|l| l.job_type.as_str()).collect();
    assert_eq!(jobs, ["Bant", "Kutu"]);
    assert_eq!(report_total(&week_lines).unwrap(), amt("26.00"));
}

#[test]
fn test_report_is_per_worker() {
    let ledger = fresh_ledger("ledger_per_worker");
    let today = day(2025, 6, 15);

    let a = ledger.add_worker("Ali").unwrap();
    let b = ledger.add_worker("Veli").unwrap();
    ledger
        .add_work_record_on(a.id, "Kutu", 10, amt("2.50"), today)
        .unwrap();
    ledger
        .add_work_record_on(b.id, "Kutu", 1, amt("2.50"), today)
        .unwrap();

    let lines = ledger.report_as_of(b.id, ReportWindow::TODAY, today).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 1);
}

#[test]
fn test_settlement_clears_report_and_is_idempotent() {
    let ledger = fresh_ledger("ledger_settle");
    let today = day(2025, 6, 15);

    let a = ledger.add_worker("Ali").unwrap();
    let b = ledger.add_worker("Veli").unwrap();
    ledger
        .add_work_record_on(a.id, "Kutu", 10, amt("2.50"), today)
        .unwrap();
    ledger
        .add_work_record_on(a.id, "Bant", 5, amt("0.50"), day(2025, 5, 1))
        .unwrap();
    ledger
        .add_work_record_on(b.id, "Kutu", 3, amt("2.50"), today)
        .unwrap();

    assert_eq!(ledger.settle_payment(a.id).unwrap(), 2);
    let after_first = ledger.list_work_records(a.id, false).unwrap();

    assert!(
        ledger
            .report_as_of(a.id, ReportWindow::days(9999), today)
            .unwrap()
            .is_empty()
    );

    // second call changes nothing
    assert_eq!(ledger.settle_payment(a.id).unwrap(), 0);
    assert_eq!(ledger.list_work_records(a.id, false).unwrap(), after_first);
    assert!(after_first.iter().all(|r| r.paid));

    // other workers keep their balance
    let other = ledger.report_as_of(b.id, ReportWindow::TODAY, today).unwrap();
    assert_eq!(report_total(&other).unwrap(), amt("7.50"));
}

#[test]
fn test_new_work_after_settlement_is_owed_again() {
    let ledger = fresh_ledger("ledger_settle_then_add");
    let today = day(2025, 6, 15);

    let w = ledger.add_worker("Ali").unwrap();
    ledger
        .add_work_record_on(w.id, "Kutu", 10, amt("2.50"), today)
        .unwrap();
    ledger.settle_payment(w.id).unwrap();
    ledger
        .add_work_record_on(w.id, "Kutu", 2, amt("2.50"), today)
        .unwrap();

    let lines = ledger.report_as_of(w.id, ReportWindow::TODAY, today).unwrap();
    let tuples: Vec<_> = lines.iter().map(|l| l.as_tuple()).collect();
    assert_eq!(tuples, vec![("Kutu", 2, amt("2.50"))]);
}

#[test]
fn test_ayse_kutu_scenario() {
    let ledger = fresh_ledger("ledger_ayse_scenario");

    let ayse = ledger.add_worker("Ayşe").unwrap();
    ledger.upsert_job_type("Kutu", amt("2.50")).unwrap();
    ledger
        .add_work_record(ayse.id, "Kutu", 10, amt("2.50"))
        .unwrap();

    let lines = ledger.report(ayse.id, 0).unwrap();
    let tuples: Vec<_> = lines.iter().map(|l| l.as_tuple()).collect();
    assert_eq!(tuples, vec![("Kutu", 10, amt("2.50"))]);

    // re-pricing does not touch the recorded snapshot
    ledger.upsert_job_type("Kutu", amt("3.00")).unwrap();
    let lines = ledger.report(ayse.id, 0).unwrap();
    assert_eq!(lines[0].unit_price, amt("2.50"));
    assert_eq!(lines[0].amount, amt("25.00"));

    ledger.settle_payment(ayse.id).unwrap();
    assert!(ledger.report(ayse.id, 0).unwrap().is_empty());

    let history = ledger.list_work_records(ayse.id, false).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].unit_price, amt("2.50"));
    assert!(history[0].paid);
}

#[test]
fn test_price_change_inside_window_gives_separate_lines() {
    let ledger = fresh_ledger("ledger_mixed_prices");
    let today = day(2025, 6, 15);

    let w = ledger.add_worker("Ali").unwrap();
    ledger
        .add_work_record_on(w.id, "Kutu", 10, amt("2.50"), day(2025, 6, 13))
        .unwrap();
    ledger
        .add_work_record_on(w.id, "Kutu", 4, amt("3.00"), today)
        .unwrap();

    let lines = ledger
        .report_as_of(w.id, ReportWindow::days(7), today)
        .unwrap();
    let tuples: Vec<_> = lines.iter().map(|l| l.as_tuple()).collect();
    assert_eq!(
        tuples,
        vec![("Kutu", 10, amt("2.50")), ("Kutu", 4, amt("3.00"))]
    );
    assert_eq!(report_total(&lines).unwrap(), amt("37.00"));
}

#[test]
fn test_record_work_uses_or_updates_job_price() {
    let ledger = fresh_ledger("ledger_record_work");

    let w = ledger.add_worker("Ali").unwrap();

    let err = ledger.record_work(w.id, "Kutu", 5, None).unwrap_err();
    assert!(matches!(err, AppError::JobTypeNotFound(_)));

    let rec = ledger
        .record_work(w.id, "Kutu", 5, Some(amt("2.50")))
        .unwrap();
    assert_eq!(rec.unit_price, amt("2.50"));
    assert_eq!(ledger.job_type_price("Kutu").unwrap(), Some(amt("2.50")));

    let rec = ledger.record_work(w.id, "Kutu", 2, None).unwrap();
    assert_eq!(rec.unit_price, amt("2.50"));
    assert_eq!(rec.amount().unwrap(), amt("5.00"));

    // unknown worker: job type must stay untouched
    let err = ledger
        .record_work(w.id + 100, "Kutu", 1, Some(amt("9.99")))
        .unwrap_err();
    assert!(matches!(err, AppError::WorkerNotFound(_)));
    assert_eq!(ledger.job_type_price("Kutu").unwrap(), Some(amt("2.50")));
}

#[test]
fn test_find_worker_by_name_or_id() {
    let ledger = fresh_ledger("ledger_find_worker");

    let ali = ledger.add_worker("Ali").unwrap();
    let numeric = ledger.add_worker("7").unwrap();

    assert_eq!(ledger.find_worker("Ali").unwrap(), ali);
    assert_eq!(ledger.find_worker(&ali.id.to_string()).unwrap(), ali);
    // a name match wins over an id match
    assert_eq!(ledger.find_worker("7").unwrap(), numeric);

    let err = ledger.find_worker("Nobody").unwrap_err();
    assert!(matches!(err, AppError::WorkerNotFound(_)));
}

#[test]
fn test_out_of_range_line_value_is_an_error() {
    let ledger = fresh_ledger("ledger_line_overflow");
    let today = day(2025, 6, 15);

    let w = ledger.add_worker("Ali").unwrap();
    let rec = ledger
        .add_work_record_on(w.id, "Kutu", 100_000_000_000_000_000, amt("2.50"), today)
        .unwrap();
    assert!(matches!(rec.amount(), Err(AppError::InvalidAmount(_))));

    let err = ledger
        .report_as_of(w.id, ReportWindow::TODAY, today)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidAmount(_)));
}
