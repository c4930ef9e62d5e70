#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use crate::{
    domain::{slot_time::SlotTime, status::RequestStatus},
    utils::{storage::MemoryTokenStore, time},
};
use chrono::Duration;
use serde_json::json;
use std::rc::Rc;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
        .with_token_store(Rc::new(MemoryTokenStore::default()))
}

fn signed_in_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
        .with_token_store(Rc::new(MemoryTokenStore::with_token("token-abc")))
}

fn user_json() -> serde_json::Value {
    json!({
        "id": 7,
        "nombre": "Ana",
        "apellido": "Prueba",
        "email": "ana@example.org",
        "rol_id": 3
    })
}

#[tokio::test]
async fn login_stores_token_and_later_calls_send_it() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200).json_body(json!({
            "success": true,
            "data": { "token": "token-xyz", "user": user_json() }
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(200)
            .json_body(json!({ "success": true, "data": { "usuario": user_json() } }));
    });
    let api = client(&server);
    let login = api
        .login(&LoginRequest {
            email: "ana@example.org".into(),
            password: "secreto123".into(),
        })
        .await
        .unwrap();
    assert_eq!(login.user.role_id, 3);
    assert!(api.has_token());

    let me = api.me().await.unwrap();
    assert_eq!(me.display_name(), "Ana Prueba");
    let probe = server
        .received()
        .into_iter()
        .find(|request| request.path == "/api/auth/me")
        .unwrap();
    assert_eq!(probe.authorization.as_deref(), Some("Bearer token-xyz"));
}

#[tokio::test]
async fn me_without_token_never_calls_the_api() {
    let server = MockServer::start_async().await;
    let err = client(&server).me().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn rejected_token_is_cleared() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/requests");
        then.status(401).json_body(json!({ "message": "Token expirado" }));
    });
    let api = signed_in_client(&server);
    let err = api.list_requests(&RequestFilter::default()).await.unwrap_err();
    assert_eq!(err.error, "Token expirado");
    assert!(!api.has_token());
}

#[tokio::test]
async fn error_statuses_map_to_codes() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/escenarios/404");
        then.status(404).json_body(json!({}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/escenarios");
        then.status(422).json_body(json!({
            "message": "Datos inválidos",
            "errors": { "nombre": ["El nombre ya existe"] }
        }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/escenarios/5");
        then.status(500).json_body(json!({ "error": "Fallo interno" }));
    });
    let api = client(&server);

    let err = api.get_venue(404).await.unwrap_err();
    assert!(err.is_not_found());

    let payload = VenuePayload {
        name: "Coliseo Central".into(),
        description: String::new(),
        address: String::new(),
        capacity: 0,
        dimensions: String::new(),
        state: VenueState::Available,
        locality_id: None,
        primary_sport_id: None,
        images: Vec::new(),
    };
    let err = api.create_venue(&payload).await.unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
    assert_eq!(err.error, "Datos inválidos");
    assert_eq!(err.details, Some(json!({ "nombre": ["El nombre ya existe"] })));

    let err = api.delete_venue(5).await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert_eq!(err.error, "Fallo interno");
}

#[tokio::test]
async fn non_json_body_is_a_connection_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/purposes");
        then.status(502).body("<html>Bad gateway</html>");
    });
    let err = client(&server).purposes().await.unwrap_err();
    assert!(err.is_connection_failure());
    assert_eq!(err.error, CONNECTION_ERROR_MESSAGE);
}

#[tokio::test(start_paused = true)]
async fn slow_responses_time_out() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/request-states");
        then.status(200)
            .json_body(json!({ "data": [] }))
            .delay(std::time::Duration::from_secs(60));
    });
    let err = client(&server).request_states().await.unwrap_err();
    assert_eq!(err.code, "TIMEOUT");
}

#[tokio::test]
async fn create_request_sends_wire_payload_once() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/requests");
        then.status(201)
            .json_body(json!({ "success": true, "message": "Solicitud creada" }));
    });
    let api = signed_in_client(&server);
    let date = time::today() + Duration::days(3);
    let payload = CreateReservationRequest {
        venue_id: 5,
        date,
        start_time: SlotTime::parse("09:00").unwrap(),
        end_time: SlotTime::parse("11:00").unwrap(),
        purpose_id: 1,
        participants: 10,
        notes: None,
    };
    api.create_request(&payload).await.unwrap();

    assert_eq!(server.hits(POST, "/api/requests"), 1);
    let body = server.last_body("/api/requests").unwrap();
    assert_eq!(
        body,
        json!({
            "escenario_id": 5,
            "fecha": time::format_iso(date),
            "hora_inicio": "09:00",
            "hora_fin": "11:00",
            "proposito_id": 1,
            "num_participantes": 10
        })
    );
}

#[tokio::test]
async fn business_failure_in_a_success_status_is_an_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/requests");
        then.status(200).json_body(json!({
            "success": false,
            "message": "El horario ya fue reservado"
        }));
    });
    let payload = CreateReservationRequest {
        venue_id: 5,
        date: time::today() + Duration::days(1),
        start_time: SlotTime::parse("10:00").unwrap(),
        end_time: SlotTime::parse("12:00").unwrap(),
        purpose_id: 1,
        participants: 4,
        notes: Some("Torneo barrial".into()),
    };
    let err = signed_in_client(&server)
        .create_request(&payload)
        .await
        .unwrap_err();
    assert_eq!(err.error, "El horario ya fue reservado");
}

#[tokio::test]
async fn request_list_filters_and_paginates() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/requests")
            .query_param("page", "2")
            .query_param("estado", RequestStatus::Pending.wire_name());
        then.status(200).json_body(json!({
            "success": true,
            "data": {
                "data": [{
                    "id": 31,
                    "escenario": { "id": 5, "nombre": "Coliseo Central" },
                    "fecha": "2025-06-15",
                    "hora_inicio": "14:00",
                    "hora_fin": "16:00",
                    "num_participantes": 22,
                    "estado": "pendiente"
                }],
                "current_page": 2,
                "last_page": 3,
                "per_page": 1,
                "total": 3
            }
        }));
    });
    let filter = RequestFilter {
        page: Some(2),
        status: Some(RequestStatus::Pending),
        search: Some("  ".into()),
    };
    let page = signed_in_client(&server).list_requests(&filter).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].venue_label(), "Coliseo Central");
    assert_eq!(page.pagination.page, 2);
    assert!(page.pagination.has_previous());
    assert!(page.pagination.has_next());
    let sent = server.received().pop().unwrap();
    assert!(!sent.query.iter().any(|(key, _)| key == "search"));
}

#[tokio::test]
async fn open_days_query_the_clamped_range() {
    let server = MockServer::start_async().await;
    let today = time::today();
    let tomorrow = today + Duration::days(1);
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/escenarios/5/disponibilidad")
            .query_param("fecha_inicio", &time::format_iso(today));
        then.status(200).json_body(json!({
            "success": true,
            "data": { "dias": [time::format_iso(tomorrow), { "fecha": time::format_iso(today - Duration::days(2)) }] }
        }));
    });
    let api = client(&server);
    let days = api
        .get_open_days(5, today - Duration::days(10), today + Duration::days(29))
        .await
        .unwrap();
    assert_eq!(days.into_iter().collect::<Vec<_>>(), vec![tomorrow]);

    let none = api
        .get_open_days(5, today - Duration::days(10), today - Duration::days(1))
        .await
        .unwrap();
    assert!(none.is_empty());
    assert_eq!(server.hits(GET, "/api/escenarios/5/disponibilidad"), 1);
}

#[tokio::test]
async fn past_dates_have_no_times_without_a_call() {
    let server = MockServer::start_async().await;
    let times = client(&server)
        .get_open_times(5, time::today() - Duration::days(1))
        .await
        .unwrap();
    assert!(times.is_empty());
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn register_and_user_admin_round_trip() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/usuarios");
        then.status(201)
            .json_body(json!({ "success": true, "data": user_json() }));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/usuarios/7");
        then.status(204).body("");
    });
    let api = signed_in_client(&server);
    let created = api
        .create_user(&UserPayload {
            first_name: "Ana".into(),
            last_name: "Prueba".into(),
            email: "ana@example.org".into(),
            phone: Some("3001234567".into()),
            role_id: 3,
            password: Some("secreto123".into()),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 7);
    let body = server.last_body("/api/usuarios").unwrap();
    assert_eq!(body["telefono"], "3001234567");
    assert_eq!(body["rol_id"], 3);

    api.delete_user(7).await.unwrap();
    assert_eq!(server.hits(DELETE, "/api/usuarios/7"), 1);
}

#[tokio::test]
async fn upload_is_multipart_and_returns_url() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/archivos/upload");
        then.status(200).json_body(json!({
            "success": true,
            "data": { "ruta": "/uploads/cancha.jpg", "nombre": "cancha.jpg" }
        }));
    });
    let api = signed_in_client(&server);
    let file = api
        .upload_file("cancha.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF])
        .await
        .unwrap();
    assert_eq!(file.url, "/uploads/cancha.jpg");
    assert_eq!(file.name.as_deref(), Some("cancha.jpg"));
    let sent = server.received().pop().unwrap();
    assert!(sent.body.is_none());
    assert_eq!(sent.authorization.as_deref(), Some("Bearer token-abc"));
}
