use validator::Validate;

/// Submit enablement derived from a form's current values.
pub trait FormState: Validate {
    fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validation codes failing for `field`, e.g. `["email"]`.
    fn field_error_codes(&self, field: &str) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .field_errors()
                .get(field)
                .map(|errs| errs.iter().map(|e| e.code.to_string()).collect())
                .unwrap_or_default(),
        }
    }
}

impl<T: Validate> FormState for T {}
