//! Facade-level tests: the `Validator` surface, override isolation, and
//! concurrent use of independently configured instances.

use rstest::rstest;
use serde_json::{json, Value};
use turnstile::engine::Rules;
use turnstile::foundation::{Rule, RuleContext, ValidationError};
use turnstile::Validator;

fn rules(pairs: &[(&str, &str)]) -> Rules {
    pairs
        .iter()
        .map(|(f, s)| ((*f).to_string(), (*s).to_string()))
        .collect()
}

#[rstest]
#[case::valid_data(
    json!({"email": "test@example.com", "age": 25}),
    &[("email", "email"), ("age", "numeric")],
    true
)]
#[case::invalid_email(
    json!({"email": "invalid-email", "age": 25}),
    &[("email", "email"), ("age", "numeric")],
    false
)]
#[case::non_numeric_age(
    json!({"email": "test@example.com", "age": "abc"}),
    &[("email", "email"), ("age", "numeric")],
    false
)]
#[case::empty_rules(json!({"name": "John"}), &[], true)]
#[case::conditional_admin_permissions(
    json!({
        "user_type": "admin",
        "permissions": "read_write_delete",
        "email": "admin@company.com",
        "phone": "+1234567890",
    }),
    &[
        ("user_type", "required|alpha"),
        ("permissions", "required_if:user_type,admin|alpha_dash"),
        ("email", "required|email"),
        ("phone", "required|min:10"),
    ],
    true
)]
#[case::short_password(
    json!({"password": "123"}),
    &[("password", "required|min:8")],
    false
)]
#[case::mixed_value_shapes(
    json!({
        "count": 42,
        "price": 19.99,
        "active": true,
        "tags": ["new", "featured"],
        "metadata": {"color": "red"},
    }),
    &[
        ("count", "required|numeric|min:1"),
        ("price", "required|numeric|min:0"),
        ("active", "required|boolean"),
        ("tags", "required"),
        ("metadata", "required"),
    ],
    true
)]
fn validate_cases(#[case] data: Value, #[case] pairs: &[(&str, &str)], #[case] want_valid: bool) {
    let validator = Validator::new();
    assert_eq!(validator.validate(&data, &rules(pairs)).is_ok(), want_valid);
}

#[test]
fn add_rule_registers_and_has_rule_sees_it() {
    struct NonNull;
    impl Rule for NonNull {
        fn name(&self) -> &str {
            "custom_test"
        }
        fn validate(&self, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
            if ctx.value().is_null() {
                return Err(ValidationError::failure(self.name()));
            }
            Ok(())
        }
        fn message(&self) -> &str {
            "The :attribute field failed custom test validation"
        }
    }

    let mut validator = Validator::new();
    validator
        .add_rule("custom_test", |_params: &[String]| {
            Ok(Box::new(NonNull) as Box<dyn Rule>)
        })
        .unwrap();
    assert!(validator.has_rule("custom_test"));
}

#[test]
fn registering_an_erroring_constructor_succeeds_until_used() {
    let mut validator = Validator::new();
    validator
        .add_rule("error_rule", |_params: &[String]| {
            Err::<Box<dyn Rule>, _>(ValidationError::construction(
                "error_rule",
                "rule creation failed",
            ))
        })
        .unwrap();
    assert!(validator.has_rule("error_rule"));

    // The error only shows up when a chain uses the rule.
    let report = validator.validate_with_report(&json!({"f": 1}), &rules(&[("f", "error_rule")]));
    assert_eq!(report.field_errors("f").unwrap().len(), 1);
}

#[test]
fn has_rule_for_builtins() {
    let validator = Validator::new();
    assert!(validator.has_rule("email"));
    assert!(!validator.has_rule("nonexistent_rule"));
}

#[test]
fn custom_message_and_attribute() {
    let mut validator = Validator::new();
    validator.set_custom_message("required", "This field is absolutely required!");
    validator.set_custom_attribute("email", "Email Address");

    let data = json!({"name": "", "email": ""});
    let report = validator.validate_with_report(
        &data,
        &rules(&[("name", "required"), ("email", "required|email")]),
    );

    assert!(!report.is_valid());
    assert_eq!(report.first("name"), Some("This field is absolutely required!"));
}

#[test]
fn field_specific_custom_messages() {
    let mut validator = Validator::new();
    validator.set_custom_message("required.name", "The name field cannot be empty");
    validator.set_custom_message("required.email", "Email is mandatory for registration");

    let data = json!({"name": "", "email": ""});
    let report = validator
        .validate_with_report(&data, &rules(&[("name", "required"), ("email", "required")]));

    assert_eq!(report.first("name"), Some("The name field cannot be empty"));
    assert_eq!(report.first("email"), Some("Email is mandatory for registration"));
}

#[test]
fn multiple_rules_with_custom_messages() {
    let mut validator = Validator::new();
    validator.set_custom_message("required", "This field is required");
    validator.set_custom_message("min", "This field must be at least :param0 characters");
    validator.set_custom_message("email", "Please enter a valid email address");
    validator.set_custom_attribute("password", "Password");

    let data = json!({"name": "", "email": "invalid-email", "password": "123"});
    let report = validator.validate_with_report(
        &data,
        &rules(&[
            ("name", "required"),
            ("email", "required|email"),
            ("password", "required|min:8"),
        ]),
    );

    assert!(!report.is_valid());
    assert!(report.field_errors("name").is_some());
    assert_eq!(
        report.first("email"),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        report.first("password"),
        Some("This field must be at least 8 characters")
    );
}

#[test]
fn message_overrides_are_isolated_between_instances() {
    let mut first = Validator::new();
    let mut second = Validator::new();
    first.set_custom_message("required", "Validator 1: Field is required");
    second.set_custom_message("required", "Validator 2: Field cannot be empty");

    let data = json!({"field": ""});
    let spec = rules(&[("field", "required")]);

    let report1 = first.validate_with_report(&data, &spec);
    let report2 = second.validate_with_report(&data, &spec);

    assert_eq!(report1.first("field"), Some("Validator 1: Field is required"));
    assert_eq!(report2.first("field"), Some("Validator 2: Field cannot be empty"));
}

#[test]
fn concurrent_instances_keep_their_own_messages() {
    let handles: Vec<_> = (1..=2)
        .map(|n| {
            std::thread::spawn(move || {
                let mut validator = Validator::new();
                let message = format!("Request {n}: field is required");
                validator.set_custom_message("required", message.clone());

                let data = json!({"field": ""});
                let spec = rules(&[("field", "required")]);

                // Hammer the instance a little so the threads overlap.
                for _ in 0..100 {
                    let report = validator.validate_with_report(&data, &spec);
                    assert!(!report.is_valid());
                    assert_eq!(report.first("field"), Some(message.as_str()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("validation thread panicked");
    }
}

#[test]
fn shared_instance_is_usable_from_many_threads() {
    let validator = std::sync::Arc::new(Validator::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || {
                let data = json!({"email": "test@example.com"});
                let spec = rules(&[("email", "required|email")]);
                for _ in 0..100 {
                    assert!(validator.validate(&data, &spec).is_ok());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("validation thread panicked");
    }
}
