mod support;

use fractic_household_finance::{
    entities::{
        Expense, OriginKind, RecordCategory, RegistrationForm, RegistrationType, SavePayload,
        SaveTarget,
    },
    records::{
        build_save_request, normalize, resolve_edit_defaults, validate_name,
        validate_registration,
    },
};
use support::record;

fn form(registration_type: RegistrationType) -> RegistrationForm {
    RegistrationForm {
        description: "Mercado".into(),
        value: "150.5".into(),
        date: "2024-03-10".into(),
        category_name: None,
        category_id: None,
        registration_type,
        person_id: "p1".into(),
        family_id: "f1".into(),
        is_recurring: false,
        duration_months: None,
    }
}

#[test]
fn complete_form_is_valid() {
    assert!(validate_registration(&form(RegistrationType::Expense)).is_ok());
}

#[test]
fn each_missing_field_is_rejected() {
    let cases: [fn(&mut RegistrationForm); 9] = [
        |f| f.description = "  ".into(),
        |f| f.value = "abc".into(),
        |f| f.value = "0".into(),
        |f| f.value = "-3".into(),
        |f| f.date = "10/03/2024".into(),
        |f| f.person_id = String::new(),
        |f| f.family_id = String::new(),
        |f| f.duration_months = Some("0".into()),
        |f| f.duration_months = Some("1.5".into()),
    ];
    for (i, mutate) in cases.iter().enumerate() {
        let mut f = form(RegistrationType::Expense);
        mutate(&mut f);
        assert!(validate_registration(&f).is_err(), "case {i} should fail");
    }
}

#[test]
fn names_must_not_be_blank() {
    assert!(validate_name("name", "Casa").is_ok());
    assert!(validate_name("name", " ").is_err());
}

#[test]
fn new_expense_posts_with_default_category() {
    let mut f = form(RegistrationType::Expense);
    f.duration_months = Some("12".into());
    let request = build_save_request(&f, None).unwrap();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.path("/finance"), "/finance/expenses");

    let json = serde_json::to_value(&request.payload).unwrap();
    assert_eq!(json["categoryName"], "outros");
    assert_eq!(json["value"], 150.5);
    assert_eq!(json["personId"], "p1");
    assert_eq!(json["durationMonths"], 12);
    assert!(json.get("categoryId").is_none());
}

#[test]
fn recurring_salary_is_a_fixed_income() {
    let mut f = form(RegistrationType::Salary);
    f.is_recurring = true;
    let request = build_save_request(&f, None).unwrap();
    assert_eq!(request.path("/finance"), "/finance/incomes");
    let json = serde_json::to_value(&request.payload).unwrap();
    assert_eq!(json["type"], "fixed");
    assert_eq!(json["isRecurring"], true);

    let one_off = build_save_request(&form(RegistrationType::Income), None).unwrap();
    let json = serde_json::to_value(&one_off.payload).unwrap();
    assert_eq!(json["type"], "flex");
}

#[test]
fn invalid_form_builds_no_request() {
    let mut f = form(RegistrationType::Income);
    f.value = String::new();
    assert!(build_save_request(&f, None).is_err());
}

#[test]
fn edit_puts_to_classified_route() {
    let mut extra = record(OriginKind::OneOffIncome, "x1", "Venda", "2024-03-12T10:00:00.000Z");
    extra.person_id = Some("p2".into());
    let defaults = resolve_edit_defaults(&extra, Some("f1"));
    assert_eq!(defaults.registration_type, RegistrationType::Income);
    assert_eq!(defaults.date, "2024-03-12");
    assert_eq!(defaults.value, "10");
    assert_eq!(defaults.family_id, "f1");

    let request = build_save_request(&defaults, Some(&extra)).unwrap();
    assert_eq!(request.method(), "PUT");
    assert_eq!(request.path("/finance"), "/finance/extras/x1");
    assert!(matches!(request.payload, SavePayload::Income(_)));
    match request.target {
        SaveTarget::Update(route) => assert_eq!(route.origin, OriginKind::OneOffIncome),
        other => panic!("unexpected target {other:?}"),
    }
}

#[test]
fn edit_defaults_for_expense_and_recurring_income() {
    let mut expense = record(OriginKind::Expense, "e1", "Luz", "2024-03-02");
    expense.category = Some(RecordCategory {
        id: "c1".into(),
        name: "Moradia".into(),
    });
    expense.markers.recurring_id = Some("rec1".into());
    let defaults = resolve_edit_defaults(&expense, None);
    assert_eq!(defaults.registration_type, RegistrationType::Expense);
    assert_eq!(defaults.category_name.as_deref(), Some("Moradia"));
    assert_eq!(defaults.category_id.as_deref(), Some("c1"));
    assert!(defaults.is_recurring);
    assert_eq!(defaults.family_id, "");

    let mut recurring = record(OriginKind::RecurringIncome, "r1", "Aluguel", "2024-03-05");
    recurring.markers.source_id = Some("src".into());
    let defaults = resolve_edit_defaults(&recurring, Some("f1"));
    assert_eq!(defaults.registration_type, RegistrationType::Salary);
    assert_eq!(defaults.category_name.as_deref(), Some("outros"));
    assert!(defaults.is_recurring);
}

#[test]
fn edit_cannot_switch_between_expense_and_income() {
    let mut expense = record(OriginKind::Expense, "e1", "Luz", "2024-03-02");
    expense.person_id = Some("p1".into());
    let mut f = resolve_edit_defaults(&expense, Some("f1"));
    assert!(build_save_request(&f, Some(&expense)).is_ok());
    f.registration_type = RegistrationType::Income;
    assert!(build_save_request(&f, Some(&expense)).is_err());
    f.registration_type = RegistrationType::Salary;
    assert!(build_save_request(&f, Some(&expense)).is_err());

    let mut salary = record(OriginKind::RecurringIncome, "r1", "Aluguel", "2024-03-05");
    salary.person_id = Some("p1".into());
    salary.markers.source_id = Some("s1".into());
    let mut f = resolve_edit_defaults(&salary, Some("f1"));
    f.registration_type = RegistrationType::Expense;
    assert!(build_save_request(&f, Some(&salary)).is_err());

    // Switching between income forms keeps the record's collection.
    f.registration_type = RegistrationType::Income;
    let request = build_save_request(&f, Some(&salary)).unwrap();
    assert_eq!(request.path("/finance"), "/finance/incomes/r1");
    assert!(matches!(request.payload, SavePayload::Income(_)));
}

#[test]
fn expense_category_id_survives_without_embedded_category() {
    let expenses = vec![Expense {
        id: Some("e7".into()),
        description: Some("Padaria".into()),
        value: Some(12.0),
        date: Some("2024-03-08".into()),
        person_id: Some("p1".into()),
        category_name: Some("alimentação".into()),
        category_id: Some("c9".into()),
        ..Default::default()
    }];
    let records = normalize(&expenses, &[], &[], &[]);
    assert_eq!(records[0].category, None);
    assert_eq!(records[0].category_id.as_deref(), Some("c9"));

    let defaults = resolve_edit_defaults(&records[0], Some("f1"));
    assert_eq!(defaults.category_id.as_deref(), Some("c9"));
    assert_eq!(defaults.category_name.as_deref(), Some("alimentação"));

    let request = build_save_request(&defaults, Some(&records[0])).unwrap();
    assert_eq!(request.path("/finance"), "/finance/expenses/e7");
    let json = serde_json::to_value(&request.payload).unwrap();
    assert_eq!(json["categoryId"], "c9");
}

#[test]
fn explicit_category_id_wins_over_embedded_category() {
    let mut expense = record(OriginKind::Expense, "e1", "Luz", "2024-03-02");
    expense.category = Some(RecordCategory {
        id: "c1".into(),
        name: "Moradia".into(),
    });
    expense.category_id = Some("c2".into());
    assert_eq!(
        resolve_edit_defaults(&expense, None).category_id.as_deref(),
        Some("c2")
    );

    expense.category_id = Some(String::new());
    assert_eq!(
        resolve_edit_defaults(&expense, None).category_id.as_deref(),
        Some("c1")
    );
}
