//! Prompt construction for the two plan operations.
//!
//! Both operations share one fixed system instruction; the user message is a
//! pure function of the request fields. Absent (or empty) optional fields
//! render as documented placeholders — "TBD" for date and location, "Нет"
//! for free-text requests — everything else passes through verbatim.

use serde::{Deserialize, Serialize};

use crate::models::{EventRequest, PlanUpdateRequest};

/// Message role in the completion API wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single (role, text) turn sent to the completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}

/// Fixed system instruction shared by both operations.
const SYSTEM_PROMPT: &str = "Вы - полезный помощник, который составляет подробные и продуманные планы групповых мероприятий. На основе предоставленных сведений о мероприятии составьте творческий и практичный план, учитывающий тип мероприятия, количество участников, место проведения и любые особые пожелания. Включите соответствующие идеи по расписанию, мероприятиям, необходимым материалам, бронированию (если это необходимо) и способам улучшения впечатлений.";

/// Placeholder for an absent date or location.
const PLACEHOLDER_TBD: &str = "TBD";

/// Placeholder for absent free-text requests or comments.
const PLACEHOLDER_NONE: &str = "Нет";

/// Render an optional field, treating the empty string as absent.
fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}

/// Build the (system, user) message pair for plan generation.
pub fn build_generate_prompt(req: &EventRequest) -> Vec<Message> {
    let user_text = format!(
        "Пожалуйста, составь подробный и креативный план мероприятия на основе следующих данных:\n\n\
         - Название: {}\n\
         - Описание: {}\n\
         - Тип мероприятия: {}\n\
         - Количество участников: {}\n\
         - Дата: {}\n\
         - Локация: {}\n\
         - Особые пожелания: {}\n\n\
         В плане укажи:\n\
         - Предложенную структуру или расписание\n\
         - Идеи для активностей\n\
         - Советы с учетом количества участников\n\
         - При необходимости — предложения по еде, декору или развлечениям\n\
         - Полезные рекомендации, чтобы мероприятие прошло отлично",
        req.title,
        req.description,
        req.event_type,
        req.participants,
        or_placeholder(&req.event_date, PLACEHOLDER_TBD),
        or_placeholder(&req.location, PLACEHOLDER_TBD),
        or_placeholder(&req.user_prompt, PLACEHOLDER_NONE),
    );

    vec![Message::system(SYSTEM_PROMPT), Message::user(user_text)]
}

/// Build the (system, user) message pair for plan revision.
pub fn build_update_prompt(req: &PlanUpdateRequest) -> Vec<Message> {
    let user_text = format!(
        "Пожалуйста, обнови план мероприятия на основе следующих данных:\n\n\
         - Исходный план: {}\n\
         - Комментарий пользователя: {}\n\n\
         Внеси изменения в соответствии с комментариями.",
        req.original_plan,
        or_placeholder(&req.user_comment, PLACEHOLDER_NONE),
    );

    vec![Message::system(SYSTEM_PROMPT), Message::user(user_text)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsite_request() -> EventRequest {
        EventRequest {
            title: "Team Offsite".into(),
            description: "Quarterly sync".into(),
            location: None,
            event_date: None,
            event_type: "corporate".into(),
            participants: 20,
            user_prompt: None,
        }
    }

    #[test]
    fn test_generate_prompt_has_system_then_user() {
        let messages = build_generate_prompt(&offsite_request());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].text, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn test_generate_prompt_renders_placeholders_for_absent_fields() {
        let messages = build_generate_prompt(&offsite_request());
        let user = &messages[1].text;
        assert!(user.contains("- Дата: TBD"));
        assert!(user.contains("- Локация: TBD"));
        assert!(user.contains("- Особые пожелания: Нет"));
    }

    #[test]
    fn test_generate_prompt_preserves_field_values_verbatim() {
        let mut req = offsite_request();
        req.location = Some("Helsinki, Oodi library".into());
        req.event_date = Some("2026-09-12".into());
        req.user_prompt = Some("vegetarian catering only".into());
        let user = &build_generate_prompt(&req)[1].text;
        assert!(user.contains("- Название: Team Offsite"));
        assert!(user.contains("- Описание: Quarterly sync"));
        assert!(user.contains("- Тип мероприятия: corporate"));
        assert!(user.contains("- Количество участников: 20"));
        assert!(user.contains("- Дата: 2026-09-12"));
        assert!(user.contains("- Локация: Helsinki, Oodi library"));
        assert!(user.contains("- Особые пожелания: vegetarian catering only"));
    }

    #[test]
    fn test_empty_string_treated_as_absent() {
        let mut req = offsite_request();
        req.location = Some(String::new());
        let user = &build_generate_prompt(&req)[1].text;
        assert!(user.contains("- Локация: TBD"));
    }

    #[test]
    fn test_update_prompt_interpolates_plan_and_comment() {
        let req = PlanUpdateRequest {
            original_plan: "10:00 welcome coffee".into(),
            user_comment: Some("start an hour later".into()),
        };
        let messages = build_update_prompt(&req);
        assert_eq!(messages[0].text, SYSTEM_PROMPT);
        let user = &messages[1].text;
        assert!(user.contains("- Исходный план: 10:00 welcome coffee"));
        assert!(user.contains("- Комментарий пользователя: start an hour later"));
    }

    #[test]
    fn test_update_prompt_placeholder_for_empty_comment() {
        let req = PlanUpdateRequest {
            original_plan: "10:00 welcome coffee".into(),
            user_comment: Some(String::new()),
        };
        let user = &build_update_prompt(&req)[1].text;
        assert!(user.contains("- Комментарий пользователя: Нет"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = Message::system("hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["text"], "hi");
    }
}
