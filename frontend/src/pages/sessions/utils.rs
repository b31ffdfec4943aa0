use validator::{Validate, ValidationError, ValidationErrors};

use crate::api::Session;
use crate::utils::time::{format_form_date, parse_form_date, start_of_day};

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SessionForm {
    #[validate(length(min = 1))]
    pub name: String,
    /// `YYYY-MM-DD`, as entered in a date input.
    #[validate(length(min = 1), custom(function = "validate_form_date"))]
    pub date: String,
    #[validate(required)]
    pub teacher_id: Option<u64>,
    #[validate(length(min = 1))]
    pub description: String,
}

fn validate_form_date(value: &str) -> Result<(), ValidationError> {
    parse_form_date(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("date"))
}

impl SessionForm {
    pub fn from_session(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            date: format_form_date(&session.date),
            teacher_id: Some(session.teacher_id),
            description: session.description.clone(),
        }
    }

    /// Builds the payload sent to the API. `base` carries the id and the
    /// participant list of the session being edited; creation passes `None`.
    pub fn to_session(&self, base: Option<&Session>) -> Result<Session, ValidationErrors> {
        self.validate()?;
        let (Ok(date), Some(teacher_id)) = (parse_form_date(&self.date), self.teacher_id) else {
            return Err(ValidationErrors::new());
        };
        Ok(Session {
            id: base.and_then(|session| session.id),
            name: self.name.clone(),
            description: self.description.clone(),
            date: start_of_day(date),
            teacher_id,
            users: base.map(|session| session.users.clone()).unwrap_or_default(),
            created_at: None,
            updated_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::forms::FormState;
    use crate::test_support::helpers::session_json;
    use crate::utils::time::format_timestamp;

    fn filled() -> SessionForm {
        SessionForm {
            name: "Morning Flow".into(),
            date: "2023-01-10".into(),
            teacher_id: Some(2),
            description: "Slow vinyasa".into(),
        }
    }

    #[test]
    fn all_fields_are_required() {
        assert!(filled().can_submit());

        let empty = SessionForm::default();
        assert!(!empty.can_submit());
        assert_eq!(empty.field_error_codes("teacher_id"), vec!["required".to_string()]);
        assert!(!empty.field_error_codes("name").is_empty());
        assert!(!empty.field_error_codes("description").is_empty());
        assert!(!empty.field_error_codes("date").is_empty());
    }

    #[test]
    fn date_must_be_a_calendar_day() {
        let form = SessionForm {
            date: "2023-02-30".into(),
            ..filled()
        };
        assert_eq!(form.field_error_codes("date"), vec!["date".to_string()]);
    }

    #[test]
    fn new_session_has_no_id_or_participants() {
        let session = filled().to_session(None).unwrap();
        assert_eq!(session.id, None);
        assert!(session.users.is_empty());
        assert_eq!(format_timestamp(&session.date), "2023-01-10T00:00:00.000Z");
        assert_eq!(session.teacher_id, 2);
    }

    #[test]
    fn edited_session_keeps_id_and_participants() {
        let existing: Session = serde_json::from_value(session_json(1, &[3, 4])).unwrap();
        let mut form = SessionForm::from_session(&existing);
        assert_eq!(form.date, "2023-01-01");
        assert_eq!(form.teacher_id, Some(2));

        form.name = "Updated Session".into();
        let session = form.to_session(Some(&existing)).unwrap();
        assert_eq!(session.id, Some(1));
        assert_eq!(session.users, vec![3, 4]);
        assert_eq!(session.name, "Updated Session");
    }
}
