mod support;

use std::sync::Arc;

use fractic_household_finance::{
    entities::{ClientConfig, HealthBand, OriginKind, Period, Selection},
    util::{HouseholdFinanceUtil, ResponseBodies},
};
use support::{FakeTransport, FAMILIES_JSON};

const EXPENSES_JSON: &str = r#"[
    {"id": "e1", "description": "Mercado", "value": "150.00", "date": "2024-03-10",
     "personId": "p1", "category": {"id": "c1", "name": "Alimentação"}},
    {"id": "e2", "description": "Aluguel", "value": -1800, "date": "2024-03-01T00:00:00.000Z",
     "personId": "p2", "recurringId": "rec1", "type": "fixed"}
]"#;

const EXTRAS_JSON: &str = r#"{"data": [
    {"id": "x1", "description": "Venda bicicleta", "value": 700, "date": "2024-03-20"}
]}"#;

const INCOMES_JSON: &str = r#"[
    {"id": "r1", "description": "Salário", "value": 5000, "date": "2024-03-05",
     "personId": "p1", "sourceId": "s1", "type": "fixed"}
]"#;

const SALARIES_JSON: &str = r#"[
    {"id": 77, "personId": "p2", "value": 3100, "month": 3, "year": 2024}
]"#;

const SUMMARY_JSON: &str = r#"{
    "month": 3, "year": 2024, "familyId": "f1",
    "totals": {"incomes": 8000, "expenses": 2000, "balance": 6000,
               "fixedIncome": 5000, "variableIncome": 3000,
               "fixedExpenses": 0, "variableExpenses": 2000},
    "perPerson": [{"id": "p1", "name": "Ana", "income": 5000, "contributionPercent": 62.5}],
    "healthScore": 75,
    "forecast": {"estimatedNextMonthExpenses": 2100},
    "budgetAlerts": [
        {"category": "Lazer", "limit": 100, "spent": 120, "percent": 120, "alert": true},
        {"category": "Casa", "percent": 10, "alert": false}
    ],
    "aiReport": "Bom mês.",
    "details": {
        "salaries": [{"id": "s1", "personId": "p1", "value": 5000, "month": 3, "year": 2024}],
        "extras": [{"id": "x1", "description": "Venda", "value": 3000, "date": "2024-03-20"}],
        "incomes": [],
        "expenses": [
            {"id": "e1", "description": "A", "value": 100, "date": "2024-03-10"},
            {"id": "e2", "description": "B", "value": 200, "date": "2024-03-15"},
            {"id": "e3", "description": "C", "value": 300, "date": "2024-03-01"},
            {"id": "e4", "description": "D", "value": 400, "date": "2024-03-25"},
            {"id": "e5", "description": "E", "value": 500}
        ]
    }
}"#;

fn march() -> Period {
    Period::new(3, 2024)
}

fn transport() -> FakeTransport {
    FakeTransport::new()
        .with("/finance/families", FAMILIES_JSON)
        .with("/finance/expenses?month=3&year=2024&familyId=f1", EXPENSES_JSON)
        .with("/finance/extras?month=3&year=2024", EXTRAS_JSON)
        .with("/finance/incomes?month=3&year=2024&familyId=f1", INCOMES_JSON)
        .with("/finance/salaries?month=3&year=2024", SALARIES_JSON)
        .with("/finance/summary?month=3&year=2024", SUMMARY_JSON)
}

fn util(transport: FakeTransport, config: ClientConfig) -> HouseholdFinanceUtil<FakeTransport> {
    HouseholdFinanceUtil::new(transport, config).expect("valid config")
}

#[tokio::test]
async fn feed_defaults_to_first_family() {
    let util = util(transport(), ClientConfig::default());
    let selection = Selection::new(march());
    let feed = util.load_feed(&selection, None).await.unwrap();

    assert_eq!(feed.family_id.as_deref(), Some("f1"));
    assert_eq!(feed.families.len(), 2);
    let ids: Vec<_> = feed.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["x1", "e1", "r1", "e2"]);
    assert_eq!(feed.records[3].value, 1800.0);

    assert!(feed.is_for(&selection));
    assert!(!feed.is_for(&Selection::with_family(march(), "f1")));
    assert!(!feed.is_for(&Selection::new(Period::new(4, 2024))));
}

#[tokio::test]
async fn explicit_family_scopes_requests() {
    let transport = FakeTransport::new()
        .with("/finance/families", FAMILIES_JSON)
        .with("/finance/expenses?month=3&year=2024&familyId=f2", "[]")
        .with("/finance/extras?month=3&year=2024", "[]")
        .with("/finance/incomes?month=3&year=2024&familyId=f2", INCOMES_JSON);
    let util = util(transport, ClientConfig::default());
    let feed = util
        .load_feed(&Selection::with_family(march(), "f2"), None)
        .await
        .unwrap();
    assert_eq!(feed.family_id.as_deref(), Some("f2"));
    assert_eq!(feed.records.len(), 1);
}

#[tokio::test]
async fn no_family_skips_family_scoped_collections() {
    let transport = FakeTransport::new()
        .with("/finance/families", "[]")
        .with("/finance/extras?month=3&year=2024", EXTRAS_JSON);
    let transport = Arc::new(transport);
    let util =
        HouseholdFinanceUtil::with_shared_transport(transport.clone(), ClientConfig::default())
            .unwrap();
    let feed = util.load_feed(&Selection::new(march()), None).await.unwrap();

    assert_eq!(feed.family_id, None);
    assert_eq!(feed.records.len(), 1);
    assert_eq!(feed.records[0].origin_kind, OriginKind::OneOffIncome);
    assert_eq!(
        transport.seen(),
        vec!["/finance/families", "/finance/extras?month=3&year=2024"]
    );
}

#[tokio::test]
async fn legacy_salaries_are_fetched_only_when_enabled() {
    let util_off = util(transport(), ClientConfig::default());
    let feed = util_off.load_feed(&Selection::new(march()), None).await.unwrap();
    assert!(feed.records.iter().all(|r| r.origin_kind != OriginKind::Salary));

    let config = ClientConfig {
        legacy_salaries: true,
        ..Default::default()
    };
    let util_on = util(transport(), config);
    let feed = util_on.load_feed(&Selection::new(march()), None).await.unwrap();
    let salary = feed
        .records
        .iter()
        .find(|r| r.origin_kind == OriginKind::Salary)
        .expect("salary in feed");
    assert_eq!(salary.id, "77");
    assert_eq!(salary.date, "2024-03-05");
    assert_eq!(util_on.delete_route(salary), "/finance/salaries/77");
}

#[tokio::test]
async fn search_filters_loaded_feed() {
    let util = util(transport(), ClientConfig::default());
    let feed = util
        .load_feed(&Selection::new(march()), Some("ALUG"))
        .await
        .unwrap();
    let ids: Vec<_> = feed.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["e2"]);
}

#[tokio::test]
async fn transport_failure_fails_the_whole_load() {
    let transport = FakeTransport::new()
        .with("/finance/families", FAMILIES_JSON)
        .with("/finance/extras?month=3&year=2024", "[]");
    let util = util(transport, ClientConfig::default());
    assert!(util.load_feed(&Selection::new(march()), None).await.is_err());
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let transport = FakeTransport::new()
        .with("/finance/families", "[]")
        .with("/finance/extras?month=3&year=2024", "{not json");
    let util = util(transport, ClientConfig::default());
    assert!(util.load_feed(&Selection::new(march()), None).await.is_err());
}

#[tokio::test]
async fn custom_prefix_is_used_for_every_request() {
    let transport = FakeTransport::new()
        .with("/api/families", "[]")
        .with("/api/extras?month=3&year=2024", "[]");
    let config = ClientConfig {
        api_prefix: "/api/".into(),
        ..Default::default()
    };
    let util = HouseholdFinanceUtil::new(transport, config).unwrap();
    let feed = util.load_feed(&Selection::new(march()), None).await.unwrap();
    assert!(feed.records.is_empty());
}

#[tokio::test]
async fn dashboard_keeps_newest_records_and_presents_summary() {
    let util = util(transport(), ClientConfig::default());
    let dashboard = util.load_dashboard(march()).await.unwrap();

    assert_eq!(dashboard.summary.period, Some(march()));
    assert_eq!(dashboard.summary.estimated_next_month_expenses, 2100.0);
    let ids: Vec<_> = dashboard.recent.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["e4", "x1", "e2", "e1", "s1"]);

    let feed = util.load_feed(&Selection::new(march()), None).await.unwrap();
    let view = util.dashboard_view(&dashboard, &feed.families);
    assert_eq!(view.health_band, HealthBand::Good);
    assert_eq!(view.income_bars[0].percent, 62.5);
    assert_eq!(view.expense_bars[0].percent, 0.0);
    assert_eq!(view.contributions[0].label, "Ana");
    assert_eq!(view.alerts, vec!["Lazer: 120%".to_string()]);
    assert_eq!(view.report_lines, vec!["Bom mês.".to_string()]);
    assert_eq!(view.recent.len(), 5);
    assert_eq!(view.recent[4].person, "Ana");
}

#[tokio::test]
async fn export_and_edit_helpers_use_loaded_feed() {
    let util = util(transport(), ClientConfig::default());
    let feed = util.load_feed(&Selection::new(march()), None).await.unwrap();

    let csv = util.export_csv(&feed).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Descrição,Categoria,Data,Natureza,Tipo,Valor,Responsável")
    );
    assert_eq!(lines.count(), feed.records.len());

    let rows = util.rows(&feed);
    assert_eq!(rows[1].category, "Alimentação");
    assert_eq!(rows[3].category, "Geral");

    let e1 = &feed.records[1];
    let form = util.edit_defaults(&feed, e1);
    assert_eq!(form.family_id, "f1");
    let request = util.save_request(&form, Some(e1)).unwrap();
    assert_eq!(request.path(&util.config().api_prefix), "/finance/expenses/e1");
}

#[test]
fn bodies_fetched_by_the_host_build_the_same_feed() {
    let util = util(FakeTransport::new(), ClientConfig::default());
    let bodies = ResponseBodies {
        families: Some(FAMILIES_JSON),
        expenses: Some(EXPENSES_JSON),
        extras: Some(EXTRAS_JSON),
        incomes: Some(INCOMES_JSON),
        salaries: Some(SALARIES_JSON),
    };
    let feed = util
        .feed_from_strings(&Selection::new(march()), None, bodies)
        .unwrap();
    let ids: Vec<_> = feed.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["x1", "e1", "r1", "e2"]);

    let empty = util
        .feed_from_strings(&Selection::new(march()), None, ResponseBodies::default())
        .unwrap();
    assert!(empty.records.is_empty());
    assert_eq!(empty.family_id, None);
}
