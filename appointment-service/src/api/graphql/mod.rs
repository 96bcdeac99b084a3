pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema};

use crate::{api::state::AppointmentAppState, error::AppointmentServiceError};
use mutation::Mutation;
use query::Query;

pub type AppointmentSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builds the schema with the app state attached as schema data.
pub fn build_schema(state: Arc<AppointmentAppState>) -> AppointmentSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(state)
        .finish()
}

fn app_state<'ctx>(
    ctx: &Context<'ctx>,
) -> async_graphql::Result<&'ctx Arc<AppointmentAppState>> {
    ctx.data::<Arc<AppointmentAppState>>()
        .map_err(|e| AppointmentServiceError::Internal(e.message).extend())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::appointment::InMemoryAppointmentRepository;
    use serde_json::{Value, json};

    fn make_schema() -> AppointmentSchema {
        build_schema(Arc::new(AppointmentAppState {
            appointment_repo: Arc::new(InMemoryAppointmentRepository::new()),
        }))
    }

    async fn run(
        schema: &AppointmentSchema,
        query: &str,
    ) -> (Value, Vec<async_graphql::ServerError>) {
        let response = schema.execute(query).await;
        (response.data.into_json().unwrap(), response.errors)
    }

    fn render_type(ty: &Value) -> String {
        match ty["kind"].as_str().unwrap() {
            "NON_NULL" => format!("{}!", render_type(&ty["ofType"])),
            "LIST" => format!("[{}]", render_type(&ty["ofType"])),
            _ => ty["name"].as_str().unwrap().to_string(),
        }
    }

    async fn field_signatures(schema: &AppointmentSchema, type_name: &str) -> Vec<String> {
        let query = format!(
            r#"{{ __type(name: "{type_name}") {{ fields {{
                name
                type {{ kind name ofType {{ kind name ofType {{ kind name }} }} }}
                args {{ name type {{ kind name ofType {{ kind name }} }} }}
            }} }} }}"#
        );
        let (data, errors) = run(schema, &query).await;
        assert!(errors.is_empty(), "{errors:?}");

        data["__type"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|field| {
                let args: Vec<String> = field["args"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|a| {
                        format!("{}: {}", a["name"].as_str().unwrap(), render_type(&a["type"]))
                    })
                    .collect();
                let args = if args.is_empty() {
                    String::new()
                } else {
                    format!("({})", args.join(", "))
                };
                format!(
                    "{}{}: {}",
                    field["name"].as_str().unwrap(),
                    args,
                    render_type(&field["type"])
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn query_fields_match_published_schema() {
        let schema = make_schema();
        assert_eq!(
            field_signatures(&schema, "Query").await,
            ["obtenerCitas: [Cita]", "obtenerCita(id: ID!): Cita"]
        );
    }

    #[tokio::test]
    async fn mutation_fields_match_published_schema() {
        let schema = make_schema();
        assert_eq!(
            field_signatures(&schema, "Mutation").await,
            [
                "agregarCita(nombreCliente: String!, fecha: String!, hora: String!): Cita",
                "modificarCita(id: ID!, nombreCliente: String, fecha: String, hora: String): Cita",
                "eliminarCita(id: ID!): String",
            ]
        );
    }

    #[tokio::test]
    async fn cita_fields_match_published_schema() {
        let schema = make_schema();
        assert_eq!(
            field_signatures(&schema, "Cita").await,
            [
                "id: ID!",
                "nombreCliente: String!",
                "fecha: String!",
                "hora: String!"
            ]
        );
    }

    #[tokio::test]
    async fn add_then_fetch_returns_same_values() {
        let schema = make_schema();

        let (data, errors) = run(
            &schema,
            r#"mutation { agregarCita(nombreCliente: "Ana", fecha: "2024-01-01", hora: "10:00") { id } }"#,
        )
        .await;
        assert!(errors.is_empty(), "{errors:?}");
        let id = data["agregarCita"]["id"].as_str().unwrap().to_string();
        assert_eq!(id, "1");

        let (data, errors) = run(
            &schema,
            &format!(r#"{{ obtenerCita(id: "{id}") {{ id nombreCliente fecha hora }} }}"#),
        )
        .await;
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            data["obtenerCita"],
            json!({ "id": "1", "nombreCliente": "Ana", "fecha": "2024-01-01", "hora": "10:00" })
        );
    }

    #[tokio::test]
    async fn unknown_id_resolves_to_null() {
        let schema = make_schema();

        let (data, errors) = run(&schema, r#"{ obtenerCita(id: "5") { id } }"#).await;
        assert!(errors.is_empty());
        assert_eq!(data["obtenerCita"], Value::Null);
    }

    #[tokio::test]
    async fn modify_unknown_id_reports_not_found() {
        let schema = make_schema();

        let (data, errors) = run(
            &schema,
            r#"mutation { modificarCita(id: "9", hora: "12:00") { id } }"#,
        )
        .await;

        assert_eq!(data["modificarCita"], Value::Null);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Cita no encontrada");
        let extensions = errors[0].extensions.as_ref().unwrap();
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("NOT_FOUND"))
        );
    }

    #[tokio::test]
    async fn missing_required_argument_is_rejected() {
        let schema = make_schema();

        let response = schema
            .execute(r#"mutation { agregarCita(nombreCliente: "Ana", fecha: "2024-01-01") { id } }"#)
            .await;
        assert!(response.is_err());

        let (data, _) = run(&schema, "{ obtenerCitas { id } }").await;
        assert_eq!(data["obtenerCitas"], json!([]));
    }
}
