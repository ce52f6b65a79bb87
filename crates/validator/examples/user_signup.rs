//! Validates a sign-up form and prints the report.
//!
//! Run with `RUST_LOG=fieldcheck=trace` to see every failing check.

use fieldcheck::{ConstraintSet, FieldDescriptor, Record, Validator};
use tracing_subscriber::EnvFilter;

struct User {
    name: String,
    age: i64,
    email: String,
    password: String,
}

impl Record for User {
    fn fields(&self) -> Vec<FieldDescriptor<'_>> {
        vec![
            FieldDescriptor::string("Name", &self.name, ConstraintSet::new().required()),
            FieldDescriptor::integer("Age", self.age, ConstraintSet::new().required().min(18).max(99)),
            FieldDescriptor::string("Email", &self.email, ConstraintSet::new().required().email()),
            FieldDescriptor::string(
                "Password",
                &self.password,
                ConstraintSet::new().required().min_len(8).max_len(20),
            ),
        ]
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let validator = Validator::new();
    for user in [
        User {
            name: "Handy".into(),
            age: 24,
            email: "handy@gmail.com".into(),
            password: "123456789".into(),
        },
        User {
            name: "Handy".into(),
            age: 5,
            email: "bad".into(),
            password: "short".into(),
        },
    ] {
        println!("{}\n", validator.validate_record(&user));
    }
}
