use fieldcheck::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

struct User {
    name: String,
    age: i64,
    email: String,
    password: String,
}

const NAME: ConstraintSet = ConstraintSet::new().required();
const AGE: ConstraintSet = ConstraintSet::new().required().min(18).max(99);
const EMAIL: ConstraintSet = ConstraintSet::new().required().email();
const PASSWORD: ConstraintSet = ConstraintSet::new().required().min_len(8).max_len(20);

impl Record for User {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        vec![
            FieldDescriptor::string("Name", &self.name, NAME),
            FieldDescriptor::integer("Age", self.age, AGE),
            FieldDescriptor::string("Email", &self.email, EMAIL),
            FieldDescriptor::string("Password", &self.password, PASSWORD),
        ]
    }
}

fn user(name: &str, age: i64, email: &str, password: &str) -> User {
    User {
        name: name.to_owned(),
        age,
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

fn entries(report: &Report) -> Vec<(&str, &str)> {
    let mut pairs: Vec<_> = report.iter().collect();
    pairs.sort_unstable();
    pairs
}

// ============================================================================
// END TO END
// ============================================================================

#[test]
fn valid_user_produces_empty_report() {
    let report = Validator::new().validate_record(&user("Handy", 24, "handy@gmail.com", "123456789"));
    assert!(report.is_empty());
    assert_eq!(report.to_string(), "Validation successful");
}

#[test]
fn missing_name_is_the_only_failure() {
    let report = Validator::new().validate_record(&user("", 24, "x@y.com", "123456789"));
    assert_eq!(entries(&report), vec![("Name", "Field is required")]);
}

#[test]
fn several_fields_fail_at_once() {
    let report = Validator::new().validate_record(&user("Handy", 5, "bad", "short"));
    assert_eq!(
        entries(&report),
        vec![
            ("Age", "Value should be greater than or equal to 18"),
            ("Email", "Invalid email format"),
            ("Password", "Length should be at least 8 characters"),
        ]
    );
}

#[test]
fn empty_record_reports_last_failing_check_per_field() {
    let report = Validator::new().validate_record(&user("", 0, "", ""));
    assert_eq!(
        entries(&report),
        vec![
            ("Age", "Value should be greater than or equal to 18"),
            ("Email", "Invalid email format"),
            ("Name", "Field is required"),
            ("Password", "Length should be at least 8 characters"),
        ]
    );
}

#[test]
fn validation_is_idempotent() {
    let record = user("Handy", 150, "user@domain", "x".repeat(21).as_str());
    let validator = Validator::new();
    assert_eq!(validator.validate_record(&record), validator.validate_record(&record));
}

// ============================================================================
// PER-CONSTRAINT TABLES
// ============================================================================

#[rstest]
#[case(5, Some("Value should be greater than or equal to 18"))]
#[case(17, Some("Value should be greater than or equal to 18"))]
#[case(18, None)]
#[case(99, None)]
#[case(100, Some("Value should be less than or equal to 99"))]
#[case(150, Some("Value should be less than or equal to 99"))]
fn age_range(#[case] age: i64, #[case] expected: Option<&str>) {
    let report = validate(&[FieldDescriptor::integer("Age", age, AGE)]);
    assert_eq!(report.get("Age"), expected);
}

#[rstest]
#[case(7, Some("Length should be at least 8 characters"))]
#[case(8, None)]
#[case(20, None)]
#[case(21, Some("Length should be at most 20 characters"))]
fn password_length(#[case] len: usize, #[case] expected: Option<&str>) {
    let password = "p".repeat(len);
    let report = validate(&[FieldDescriptor::string("Password", &password, PASSWORD)]);
    assert_eq!(report.get("Password"), expected);
}

#[rstest]
#[case("user@example.com", true)]
#[case("x@y.com", true)]
#[case("a.b-c_d%e+f@sub.domain-x.io", true)]
#[case("not-an-email", false)]
#[case("user@", false)]
#[case("user@domain", false)]
#[case("user@domain.c", false)]
#[case("us er@domain.com", false)]
fn email_format(#[case] email: &str, #[case] valid: bool) {
    let report = validate(&[FieldDescriptor::string("Email", email, EMAIL)]);
    let expected = (!valid).then_some("Invalid email format");
    assert_eq!(report.get("Email"), expected);
}

#[test]
fn non_ascii_length_counts_chars() {
    let rules = ConstraintSet::new().min_len(3).max_len(3);
    let report = validate(&[FieldDescriptor::string("Nick", "日本語", rules)]);
    assert!(report.is_empty());
}

#[test]
fn malformed_tag_bound_contributes_no_check() {
    let rules: ConstraintSet = "required,min=eighteen,max=99".parse().unwrap();
    let report = validate(&[FieldDescriptor::integer("Age", 5, rules)]);
    assert!(report.is_empty());
}

#[test]
fn negative_max_len_rejects_every_string() {
    let rules: ConstraintSet = "required,maxLen=-1".parse().unwrap();
    let report = validate(&[FieldDescriptor::string("Code", "abc", rules)]);
    assert_eq!(
        report.get("Code"),
        Some("Length should be at most -1 characters")
    );
}

#[test]
fn report_error_keeps_code_and_params() {
    let report = validate(&[FieldDescriptor::integer("Age", 5, AGE)]);
    let error = report.error("Age").unwrap();
    assert_eq!(error.code, "min");
    assert_eq!(error.param("min"), Some("18"));
    assert_eq!(error.param("actual"), Some("5"));
    assert_eq!(error.field.as_deref(), Some("Age"));
}
