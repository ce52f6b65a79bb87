//! The constraint-evaluation engine
//!
//! [`Validator::validate`] walks a record's field descriptors and runs, per
//! field, the checks its constraints ask for in a fixed order:
//!
//! 1. required
//! 2. range (`min`, then `max`), integers only
//! 3. length (`minLen`, then `maxLen`), strings only
//! 4. email, strings only
//!
//! Every failing check overwrites the field's entry, so the report keeps the
//! message of the **last** check that failed. A field that is both empty and
//! too short therefore reports the length message, not "Field is required".
//! Callers depend on this ordering; it must not become first-failure-wins.
//!
//! Constraints that do not apply to a field's kind are skipped silently.

use crate::field::{FieldDescriptor, FieldValue, Record};
use crate::foundation::{Validate, ValidationError};
use crate::report::Report;
use crate::validators::{email, max, max_length, min, min_length, required};

/// Stateless evaluator for field descriptors.
///
/// Holds no data, so it is free to copy and safe to share across threads.
///
/// # Examples
///
/// ```
/// use fieldcheck::{ConstraintSet, FieldDescriptor, Validator};
///
/// let fields = [
///     FieldDescriptor::string("Name", "", ConstraintSet::new().required()),
///     FieldDescriptor::integer("Age", 24, ConstraintSet::new().required().min(18).max(99)),
/// ];
///
/// let report = Validator::new().validate(&fields);
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.get("Name"), Some("Field is required"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates every descriptor and returns the fields that failed.
    #[must_use]
    pub fn validate(&self, fields: &[FieldDescriptor<'_>]) -> Report {
        tracing::debug!(fields = fields.len(), "validating record");

        let mut report = Report::new();
        for field in fields {
            if let Some(error) = self.check_field(field) {
                report.record(field.name(), error);
            }
        }

        tracing::debug!(failed = report.len(), "record validated");
        report
    }

    /// Evaluates a [`Record`]'s own descriptors.
    #[must_use]
    pub fn validate_record<R: Record + ?Sized>(&self, record: &R) -> Report {
        self.validate(&record.fields())
    }

    /// Runs every applicable check on one field, keeping the last failure.
    pub fn check_field(&self, field: &FieldDescriptor<'_>) -> Option<ValidationError> {
        let rules = field.constraints();
        let mut last = None;
        let mut keep = |result: Result<(), ValidationError>| {
            if let Err(error) = result {
                tracing::trace!(field = field.name(), code = %error.code, "check failed");
                last = Some(error);
            }
        };

        match field.value() {
            FieldValue::Integer(value) => {
                if rules.is_required() {
                    keep(required::<i64>().validate(&value));
                }
                if let Some(bound) = rules.min_bound() {
                    keep(min(bound).validate(&value));
                }
                if let Some(bound) = rules.max_bound() {
                    keep(max(bound).validate(&value));
                }
            }
            FieldValue::String(value) => {
                if rules.is_required() {
                    keep(required::<str>().validate(value));
                }
                if let Some(bound) = rules.min_len_bound() {
                    keep(min_length(bound).validate(value));
                }
                if let Some(bound) = rules.max_len_bound() {
                    keep(max_length(bound).validate(value));
                }
                if rules.is_email() {
                    keep(email().validate(value));
                }
            }
        }

        last
    }
}

/// Validates `fields` with a default [`Validator`].
#[must_use]
pub fn validate(fields: &[FieldDescriptor<'_>]) -> Report {
    Validator::new().validate(fields)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintSet;
    use pretty_assertions::assert_eq;

    const _: () = {
        const fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
        assert_send_sync::<Report>();
    };

    const AGE: ConstraintSet = ConstraintSet::new().required().min(18).max(99);
    const PASSWORD: ConstraintSet = ConstraintSet::new().required().min_len(8).max_len(20);

    fn message(field: &FieldDescriptor<'_>) -> Option<String> {
        Validator::new()
            .check_field(field)
            .map(|e| e.message.into_owned())
    }

    #[test]
    fn test_no_constraints_passes() {
        let field = FieldDescriptor::string("Bio", "", ConstraintSet::new());
        assert_eq!(message(&field), None);
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(message(&FieldDescriptor::integer("Age", 18, AGE)), None);
        assert_eq!(message(&FieldDescriptor::integer("Age", 99, AGE)), None);
        assert_eq!(
            message(&FieldDescriptor::integer("Age", 17, AGE)).as_deref(),
            Some("Value should be greater than or equal to 18")
        );
        assert_eq!(
            message(&FieldDescriptor::integer("Age", 100, AGE)).as_deref(),
            Some("Value should be less than or equal to 99")
        );
    }

    #[test]
    fn test_max_overwrites_min_when_both_fail() {
        // Inverted bounds make both checks fail for the same value.
        let rules = ConstraintSet::new().min(10).max(5);
        assert_eq!(
            message(&FieldDescriptor::integer("N", 7, rules)).as_deref(),
            Some("Value should be less than or equal to 5")
        );
    }

    #[test]
    fn test_max_len_overwrites_min_len_when_both_fail() {
        let rules = ConstraintSet::new().min_len(10).max_len(2);
        assert_eq!(
            message(&FieldDescriptor::string("S", "abcde", rules)).as_deref(),
            Some("Length should be at most 2 characters")
        );
    }

    #[test]
    fn test_negative_length_bounds() {
        let never_fits: ConstraintSet = "maxLen=-1".parse().unwrap();
        for value in ["", "abc"] {
            assert_eq!(
                message(&FieldDescriptor::string("S", value, never_fits)).as_deref(),
                Some("Length should be at most -1 characters")
            );
        }

        let always_long_enough = ConstraintSet::new().min_len(-1);
        assert_eq!(message(&FieldDescriptor::string("S", "", always_long_enough)), None);
    }

    #[test]
    fn test_later_check_overwrites_required() {
        let empty_password = FieldDescriptor::string("Password", "", PASSWORD);
        assert_eq!(
            message(&empty_password).as_deref(),
            Some("Length should be at least 8 characters")
        );

        let zero_age = FieldDescriptor::integer("Age", 0, AGE);
        assert_eq!(
            message(&zero_age).as_deref(),
            Some("Value should be greater than or equal to 18")
        );

        let empty_email =
            FieldDescriptor::string("Email", "", ConstraintSet::new().required().email());
        assert_eq!(message(&empty_email).as_deref(), Some("Invalid email format"));
    }

    #[test]
    fn test_required_alone_keeps_required_message() {
        let zero = FieldDescriptor::integer("Count", 0, ConstraintSet::new().required().max(5));
        assert_eq!(message(&zero).as_deref(), Some("Field is required"));
    }

    #[test]
    fn test_kind_mismatch_is_skipped() {
        let name = FieldDescriptor::string("Name", "x", ConstraintSet::new().min(18).max(1));
        assert_eq!(message(&name), None);

        let age = FieldDescriptor::integer("Age", 1, ConstraintSet::new().min_len(5).email());
        assert_eq!(message(&age), None);
    }

    #[test]
    fn test_email_runs_after_length() {
        let rules = ConstraintSet::new().max_len(3).email();
        assert_eq!(
            message(&FieldDescriptor::string("Email", "nope-nope", rules)).as_deref(),
            Some("Invalid email format")
        );
    }

    #[test]
    fn test_report_has_only_failing_fields() {
        let fields = [
            FieldDescriptor::string("Name", "Handy", ConstraintSet::new().required()),
            FieldDescriptor::integer("Age", 5, AGE),
            FieldDescriptor::string("Nick", "", ConstraintSet::new()),
        ];
        let report = validate(&fields);
        assert_eq!(report.fields().collect::<Vec<_>>(), vec!["Age"]);
        assert_eq!(report.error("Age").unwrap().code, "min");
    }

    #[test]
    fn test_shared_across_threads() {
        let validator = Validator::new();
        let reports: Vec<Report> = std::thread::scope(|scope| {
            let handles: Vec<_> = [5_i64, 24, 150]
                .into_iter()
                .map(|age| {
                    scope.spawn(move || {
                        validator.validate(&[FieldDescriptor::integer("Age", age, AGE)])
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(
            reports.iter().map(Report::len).collect::<Vec<_>>(),
            vec![1, 0, 1]
        );
    }
}
