//! # Validation
//!
//! A single schema abstraction for request validation: a [`Schema`] names
//! fields and the [`Rule`]s that apply to each, and reports every failing
//! field in one pass. Entity-specific rule sets live next to the handlers
//! that use them.

/// A field value under validation. `Missing` fields skip every rule except
/// [`Rule::Required`], which makes partial-update schemas trivial.
#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    Str(&'a str),
    Num(f64),
    Missing,
}

/// A single validation rule.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required,
    MinLen(usize),
    MaxLen(usize),
    Email,
    Positive,
    Range(f64, f64),
}

impl Rule {
    fn check(&self, field: &str, value: Value<'_>) -> Option<String> {
        match (self, value) {
            (Rule::Required, Value::Missing) => Some(format!("{} is required", field)),
            (Rule::Required, Value::Str(s)) if s.trim().is_empty() => {
                Some(format!("{} is required", field))
            }
            (_, Value::Missing) => None,
            (Rule::MinLen(min), Value::Str(s)) if s.trim().len() < *min => {
                Some(format!("{} must be at least {} characters", field, min))
            }
            (Rule::MaxLen(max), Value::Str(s)) if s.len() > *max => {
                Some(format!("{} must be at most {} characters", field, max))
            }
            (Rule::Email, Value::Str(s)) if !(s.contains('@') && s.contains('.')) => {
                Some(format!("{} must be a valid email address", field))
            }
            (Rule::Positive, Value::Num(n)) if n <= 0.0 => {
                Some(format!("{} must be greater than zero", field))
            }
            (Rule::Range(lo, hi), Value::Num(n)) if n < *lo || n > *hi => {
                Some(format!("{} must be between {} and {}", field, lo, hi))
            }
            _ => None,
        }
    }
}

struct Field {
    name: &'static str,
    rules: Vec<Rule>,
}

/// Named fields with their rules.
#[derive(Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, rules: &[Rule]) -> Self {
        self.fields.push(Field {
            name,
            rules: rules.to_vec(),
        });
        self
    }

    /// Validate every field against its rules, looking values up through
    /// `lookup`. All failures are collected before returning.
    pub fn validate<'v>(&self, lookup: &dyn Fn(&str) -> Value<'v>) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for field in &self.fields {
            let value = lookup(field.name);
            for rule in &field.rules {
                if let Some(error) = rule.check(field.name, value) {
                    errors.push(error);
                    // One message per field per pass reads better than a pile.
                    break;
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new()
            .field("title", &[Rule::Required, Rule::MinLen(3), Rule::MaxLen(10)])
            .field("email", &[Rule::Required, Rule::Email])
            .field("goal", &[Rule::Positive])
    }

    #[test]
    fn test_valid_input_passes() {
        let result = schema().validate(&|name| match name {
            "title" => Value::Str("Artbook"),
            "email" => Value::Str("alice@example.com"),
            "goal" => Value::Num(5000.0),
            _ => Value::Missing,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_collects_all_failing_fields() {
        let errors = schema()
            .validate(&|name| match name {
                "title" => Value::Str(""),
                "email" => Value::Str("not-an-email"),
                "goal" => Value::Num(-1.0),
                _ => Value::Missing,
            })
            .expect_err("three invalid fields should fail");

        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("title"));
        assert!(errors[1].contains("email"));
        assert!(errors[2].contains("goal"));
    }

    #[test]
    fn test_missing_skips_non_required_rules() {
        // A partial-update schema: no Required, so absent fields pass.
        let schema = Schema::new().field("title", &[Rule::MinLen(3)]);
        assert!(schema.validate(&|_| Value::Missing).is_ok());
    }

    #[test]
    fn test_one_message_per_field() {
        let schema = Schema::new().field("title", &[Rule::Required, Rule::MinLen(3)]);
        let errors = schema
            .validate(&|_| Value::Str(""))
            .expect_err("empty title should fail");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_range_rule() {
        let schema = Schema::new().field("per_page", &[Rule::Range(1.0, 100.0)]);
        assert!(schema.validate(&|_| Value::Num(250.0)).is_err());
        assert!(schema.validate(&|_| Value::Num(25.0)).is_ok());
    }
}
