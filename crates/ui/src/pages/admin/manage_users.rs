//! Manage users screen
//!
//! Creating a member is a chain of dependent mutations: create the user,
//! attach the chosen membership plan, then optionally send the welcome
//! email. The chain runs through [`Workflow`] so a failure reports
//! exactly how far it got; completed steps are not rolled back.

use dioxus::prelude::*;
use esp_api::models::UserCategory;
use esp_api::{ApiClient, deserialize_list, endpoints, unwrap_nested, unwrap_values};
use esp_core::MembershipPlan;
use esp_forms::{
    FieldDescriptor, InputKind, SelectChoice, ValidationRule, ValueKind, adding_fields,
};
use serde_json::{Map, Value, json};

use crate::components::{DataTable, MetaForm};
use crate::pages::{QueryErrorBanner, table_state};
use crate::state::{invalidate_query, toast_error, toast_success, use_backend_query};
use crate::workflow::Workflow;

const QUERY: &str = "users";

fn user_fields(
    plans: &[SelectChoice],
    plans_loading: bool,
    categories: &[SelectChoice],
    categories_loading: bool,
) -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::readonly("userId", "ID"),
        FieldDescriptor::new("firstname", "First Name", InputKind::text())
            .with_rule(ValidationRule::required("First Name is required"))
            .editable(),
        FieldDescriptor::new("lastName", "Last Name", InputKind::text()).editable(),
        FieldDescriptor::new("email", "Email", InputKind::TypedText("email"))
            .with_rule(ValidationRule::required_email("Email"))
            .editable(),
        FieldDescriptor::new("mobile", "Mobile", InputKind::text())
            .with_rule(ValidationRule::phone("Enter a valid mobile number"))
            .editable(),
        FieldDescriptor::new("membershipPlanId", "Membership Plan", InputKind::Select)
            .with_rule(ValidationRule::required("Membership Plan is required"))
            .with_value_kind(ValueKind::Number)
            .with_options(plans.to_vec())
            .loading(plans_loading),
        FieldDescriptor::new("categoryId", "Category", InputKind::Select)
            .with_value_kind(ValueKind::Number)
            .with_options(categories.to_vec())
            .loading(categories_loading),
        FieldDescriptor::new("password", "Password", InputKind::TypedText("password"))
            .with_rule(ValidationRule::all([
                ValidationRule::required("Password is required"),
                ValidationRule::min_len(8, "Password must be at least 8 characters"),
            ])),
        FieldDescriptor::new(
            "confirmPassword",
            "Confirm Password",
            InputKind::TypedText("password"),
        )
        .with_rule(ValidationRule::required("Please confirm the password")),
        FieldDescriptor::new("sendMessageToggle", "Send welcome email", InputKind::Checkbox)
            .with_value_kind(ValueKind::Bool),
    ]
}

/// What the create-user workflow needs, split out of the form payload.
#[derive(Debug, PartialEq)]
struct NewUserRequest {
    user: Map<String, Value>,
    plan_id: Option<i64>,
    send_welcome: bool,
    email: String,
}

/// Pull the workflow inputs out of the validated form payload. The user
/// body keeps only what the create endpoint accepts.
fn prepare_user_request(mut payload: Map<String, Value>) -> Result<NewUserRequest, String> {
    let password = payload.get("password").and_then(Value::as_str).unwrap_or("");
    let confirm = payload
        .get("confirmPassword")
        .and_then(Value::as_str)
        .unwrap_or("");
    if password != confirm {
        return Err("Passwords must match".to_string());
    }

    let plan_id = payload.remove("membershipPlanId").and_then(|v| v.as_i64());
    let send_welcome = payload
        .remove("sendMessageToggle")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    payload.remove("confirmPassword");
    let email = payload
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    Ok(NewUserRequest {
        user: payload,
        plan_id,
        send_welcome,
        email,
    })
}

/// The created user's id, wherever the create response put it.
fn created_user_id(response: &Value) -> Option<i64> {
    response
        .get("userId")
        .or_else(|| response.get("user").and_then(|u| u.get("userId")))
        .and_then(Value::as_i64)
}

#[component]
pub fn AdminManageUsers() -> Element {
    let plans = use_backend_query("membership-plans", || async {
        let response = ApiClient::public()
            .get(endpoints::membership::GET_ALL_PLANS)
            .await?;
        let flattened = unwrap_nested(response);
        Ok(match flattened {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| serde_json::from_value::<MembershipPlan>(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    });
    let categories = use_backend_query("user-categories", || async {
        let response = ApiClient::public().get(endpoints::users::CATEGORY).await?;
        deserialize_list::<UserCategory>(response)
    });

    let (plans_loading, plan_options) = match &*plans.read() {
        Some(Ok(plans)) => (
            false,
            plans
                .iter()
                .map(|p| SelectChoice::new(p.plan_id.to_string(), p.plan_name.clone()))
                .collect::<Vec<_>>(),
        ),
        Some(Err(_)) => (false, Vec::new()),
        None => (true, Vec::new()),
    };
    let (categories_loading, category_options) = match &*categories.read() {
        Some(Ok(categories)) => (
            false,
            categories
                .iter()
                .map(|c| SelectChoice::new(c.user_category_id.to_string(), c.category_name.clone()))
                .collect::<Vec<_>>(),
        ),
        Some(Err(_)) => (false, Vec::new()),
        None => (true, Vec::new()),
    };

    let rows = use_backend_query(QUERY, || async {
        let response = ApiClient::public().get(endpoints::users::USERS).await?;
        Ok(unwrap_values(response))
    });
    let (loading, data, error) = table_state(&rows);

    let mut creating = use_signal(|| false);
    let mut reset_epoch = use_signal(|| 0u32);
    let create = move |payload: Map<String, Value>| {
        let request = match prepare_user_request(payload) {
            Ok(request) => request,
            Err(message) => {
                toast_error(message);
                return;
            }
        };

        let mut creating = creating;
        let mut reset_epoch = reset_epoch;
        creating.set(true);
        spawn(async move {
            let mut workflow = Workflow::new().step("Create user", {
                let user = request.user.clone();
                move |_| async move {
                    ApiClient::public()
                        .post(endpoints::users::USERS, Value::Object(user))
                        .await
                }
            });
            if let Some(plan_id) = request.plan_id {
                workflow = workflow.step("Attach membership plan", move |previous| async move {
                    let user_id = created_user_id(&previous)
                        .ok_or_else(|| esp_core::AppError::internal("created user has no id"))?;
                    ApiClient::public()
                        .post(
                            endpoints::membership::USER_DETAIL,
                            json!({ "userId": user_id, "membershipPlanId": plan_id }),
                        )
                        .await
                });
            }
            if request.send_welcome {
                let email = request.email.clone();
                workflow = workflow.step("Send welcome email", move |_| async move {
                    ApiClient::public()
                        .post(
                            endpoints::message::SEND_WELCOME_EMAIL,
                            json!({ "email": email }),
                        )
                        .await
                });
            }

            let outcome = workflow.run().await;
            creating.set(false);
            if outcome.is_success() {
                toast_success("User created");
                let epoch = *reset_epoch.read();
                reset_epoch.set(epoch + 1);
                invalidate_query(QUERY);
            } else {
                toast_error(outcome.summary());
                // A partial run may still have created the user.
                if !outcome.completed.is_empty() {
                    invalidate_query(QUERY);
                }
            }
        });
    };

    let fields = user_fields(
        &plan_options,
        plans_loading,
        &category_options,
        categories_loading,
    );
    // Credentials and the create-time selects are form-only; the table
    // shows the account columns.
    let table_fields: Vec<FieldDescriptor> = fields
        .iter()
        .filter(|f| {
            !matches!(
                f.key.as_str(),
                "password" | "confirmPassword" | "sendMessageToggle" | "membershipPlanId"
                    | "categoryId"
            )
        })
        .cloned()
        .collect();

    rsx! {
        section { class: "space-y-6",
            MetaForm {
                fields: adding_fields(&fields),
                title: "Add user".to_string(),
                description: "The plan is attached right after the account is created.".to_string(),
                pending: *creating.read(),
                reset_epoch: *reset_epoch.read(),
                submit_label: "Create user".to_string(),
                on_submit: create,
            }
            QueryErrorBanner { message: error }
            DataTable {
                title: "Users".to_string(),
                fields: table_fields,
                rows: data,
                loading: loading,
                id_key: "userId".to_string(),
                update_url: endpoints::users::USERS.to_string(),
                delete_url: endpoints::users::USERS.to_string(),
                query_key: QUERY,
                filter_keys: vec!["firstname".to_string(), "email".to_string()],
                clipboard_key: Some("email".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn payload() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("firstname".into(), json!("Mira"));
        map.insert("email".into(), json!("mira@example.com"));
        map.insert("password".into(), json!("hunter2hunter2"));
        map.insert("confirmPassword".into(), json!("hunter2hunter2"));
        map.insert("membershipPlanId".into(), json!(3));
        map.insert("sendMessageToggle".into(), json!(true));
        map
    }

    #[test]
    fn test_prepare_splits_workflow_inputs_from_user_body() {
        let request = prepare_user_request(payload()).unwrap();
        assert_eq!(request.plan_id, Some(3));
        assert!(request.send_welcome);
        assert_eq!(request.email, "mira@example.com");
        assert!(!request.user.contains_key("membershipPlanId"));
        assert!(!request.user.contains_key("confirmPassword"));
        assert!(!request.user.contains_key("sendMessageToggle"));
        assert_eq!(request.user["password"], json!("hunter2hunter2"));
    }

    #[test]
    fn test_prepare_rejects_mismatched_passwords() {
        let mut map = payload();
        map.insert("confirmPassword".into(), json!("different"));
        assert_eq!(
            prepare_user_request(map),
            Err("Passwords must match".to_string())
        );
    }

    #[test]
    fn test_created_user_id_tolerates_both_response_shapes() {
        assert_eq!(created_user_id(&json!({ "userId": 9 })), Some(9));
        assert_eq!(
            created_user_id(&json!({ "user": { "userId": 12 } })),
            Some(12)
        );
        assert_eq!(created_user_id(&json!({ "message": "ok" })), None);
    }
}
